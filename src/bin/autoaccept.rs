// src/bin/autoaccept.rs

//! Auto-accept monitor: watches the lobby through a `LobbyWatcher` and
//! accepts matchmaking ready checks as they appear.

use anyhow::{Context, Result};
use leaguedesk::config::ClientOptions;
use leaguedesk::core::LeagueDeskError;
use leaguedesk::core::events::ClientEvent;
use leaguedesk::core::lcu::LcuReader;
use leaguedesk::core::models::ready_check::ReadyCheck;
use leaguedesk::core::session::DesktopSession;
use leaguedesk::core::tasks::lobby_watcher::LobbyWatcher;
use std::env;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};
use tracing_subscriber::filter::EnvFilter;

/// Grace period before accepting, so a deliberate manual decline still wins.
const ACCEPT_DELAY: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .compact()
        .with_ansi(true)
        .init();

    // An optional first argument names a TOML options file.
    let options = match env::args().nth(1) {
        Some(path) => ClientOptions::from_file(&path)
            .with_context(|| format!("failed to load options from \"{path}\""))?,
        None => ClientOptions::default(),
    };

    let session = DesktopSession::connect(&options)?;
    let lcu = session
        .lcu()
        .cloned()
        .context("League client is not running; start it and try again")?;

    let watcher = LobbyWatcher::with_interval(lcu.clone(), options.poll_interval);
    let mut events = watcher.subscribe();

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let watcher_handle = tokio::spawn(watcher.run(shutdown_rx));

    info!("monitoring lobby; press Ctrl-C to stop");

    let mut accept_count: u32 = 0;
    let mut ready_poll = tokio::time::interval(options.poll_interval);

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(ClientEvent::LobbyChanged(Some(lobby))) => {
                    info!(
                        members = lobby.members.len(),
                        can_start = lobby.can_start_activity,
                        "lobby updated"
                    );
                }
                Ok(ClientEvent::LobbyChanged(None)) => info!("lobby closed"),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!("dropped {skipped} lobby events");
                }
                Err(RecvError::Closed) => break,
            },
            _ = ready_poll.tick() => {
                accept_count += try_accept(&lcu).await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down after {accept_count} accepted ready checks");
                let _ = shutdown_tx.send(());
                break;
            }
        }
    }

    match watcher_handle.await {
        Ok(Err(LeagueDeskError::Cancelled)) => info!("lobby watcher stopped"),
        Ok(Err(e)) => warn!("lobby watcher failed: {e}"),
        Ok(Ok(())) => {}
        Err(e) => warn!("lobby watcher task panicked: {e}"),
    }

    Ok(())
}

/// Accepts an in-progress ready check after a short grace period, re-checking
/// that it is still pending first. Returns the number of accepts performed.
async fn try_accept(lcu: &LcuReader) -> u32 {
    let Some(check) = lcu.get_ready_check().await else {
        return 0;
    };
    if !check.is_in_progress() {
        return 0;
    }

    info!("match found, accepting shortly");
    tokio::time::sleep(ACCEPT_DELAY).await;

    let still_pending = lcu
        .get_ready_check()
        .await
        .as_ref()
        .is_some_and(ReadyCheck::is_in_progress);
    if !still_pending {
        return 0;
    }

    if lcu.accept_ready_check().await {
        info!("ready check accepted");
        1
    } else {
        warn!("accept request failed");
        0
    }
}
