// src/core/tasks/lobby_watcher.rs

//! The lobby/ready-check polling loop.
//!
//! One logical thread of control per watcher instance: each tick fetches the
//! lobby, diffs it structurally against the previous tick's snapshot, and
//! publishes [`ClientEvent::LobbyChanged`] exactly once per observed
//! transition. Ready-check state is polled and diffed on the same tick, after
//! the lobby, but no `ReadyCheckChanged` event is published; consumers that
//! act on ready checks (such as the auto-accept binary) read the state
//! directly through [`LcuReader::get_ready_check`] on their own cadence.
//!
//! [`LcuReader::get_ready_check`]: crate::core::lcu::LcuReader::get_ready_check

use crate::config::DEFAULT_POLL_INTERVAL;
use crate::core::LeagueDeskError;
use crate::core::events::{ClientEvent, EVENT_BUS_CAPACITY};
use crate::core::lcu::LcuReader;
use crate::core::models::lobby::Lobby;
use crate::core::models::ready_check::ReadyCheck;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, info};

/// Polls the LCU for lobby and ready-check state and broadcasts lobby
/// transitions.
///
/// Each watcher owns its `(previous lobby, previous ready check)` pair
/// exclusively; multiple watchers can run concurrently without
/// coordination because the readers underneath are stateless.
pub struct LobbyWatcher {
    reader: LcuReader,
    events: broadcast::Sender<ClientEvent>,
    interval: Duration,
}

impl LobbyWatcher {
    /// Creates a watcher with the default 500 ms polling cadence.
    pub fn new(reader: LcuReader) -> Self {
        Self::with_interval(reader, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_interval(reader: LcuReader, interval: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUS_CAPACITY);
        Self {
            reader,
            events,
            interval,
        }
    }

    /// Provides a new receiver for watcher events. Subscribe before spawning
    /// [`run`](Self::run) to observe the very first transition.
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    /// The subscription as a `Stream`, for `StreamExt`-style consumers.
    pub fn event_stream(&self) -> BroadcastStream<ClientEvent> {
        BroadcastStream::new(self.events.subscribe())
    }

    /// Runs the polling loop until the shutdown signal fires.
    ///
    /// There is no natural terminal state: the loop only ends through
    /// cancellation, and then returns [`LeagueDeskError::Cancelled`] so the
    /// caller can join its termination deterministically. Cancellation is
    /// honored during the inter-tick sleep; a tick already fetching is
    /// allowed to finish (the transport's own timeout bounds it).
    pub async fn run(
        self,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), LeagueDeskError> {
        info!("lobby watcher started");
        let mut ticker = tokio::time::interval(self.interval);

        let mut previous_lobby: Option<Lobby> = None;
        let mut previous_ready_check: Option<ReadyCheck> = None;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Lobby is always polled and diffed before ready-check
                    // within a tick.
                    previous_lobby = self.check_lobby(previous_lobby).await;
                    previous_ready_check = self.check_ready_check(previous_ready_check).await;
                }
                _ = shutdown_rx.recv() => {
                    info!("lobby watcher shutting down");
                    return Err(LeagueDeskError::Cancelled);
                }
            }
        }
    }

    /// Fetches the current lobby and publishes a `LobbyChanged` event when it
    /// differs structurally from the previous snapshot, including
    /// absent-vs-present transitions. The current snapshot becomes the new
    /// "previous" whether or not an event fired.
    async fn check_lobby(&self, previous: Option<Lobby>) -> Option<Lobby> {
        let current = self.reader.get_lobby().await;

        if current != previous {
            // It's okay if there are no subscribers yet.
            if self
                .events
                .send(ClientEvent::LobbyChanged(current.clone()))
                .is_err()
            {
                debug!("lobby changed with no active subscribers");
            }
        }

        current
    }

    /// Fetches the current ready check. Transitions are detected and logged
    /// but not published; see the module docs for the consumption pattern.
    async fn check_ready_check(&self, previous: Option<ReadyCheck>) -> Option<ReadyCheck> {
        let current = self.reader.get_ready_check().await;

        if current != previous {
            debug!(
                state = ?current.as_ref().and_then(|check| check.state.as_deref()),
                "ready check state moved"
            );
        }

        current
    }
}
