// src/core/events.rs

//! Change notifications published by the lobby watcher.

use crate::core::models::lobby::Lobby;
use crate::core::models::ready_check::ReadyCheck;

/// The capacity of the broadcast channel carrying watcher events. Lobby
/// transitions are rare (human-paced), so a small buffer is plenty even for
/// slow subscribers.
pub const EVENT_BUS_CAPACITY: usize = 64;

/// A state transition observed by the lobby watcher.
///
/// `None` payloads are meaningful: a lobby that disappears (player left, queue
/// started) is a transition and is delivered as `LobbyChanged(None)`.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    /// The lobby snapshot differs structurally from the previous poll.
    LobbyChanged(Option<Lobby>),
    /// Reserved: the watcher currently polls ready-check state without
    /// publishing this variant; see [`LobbyWatcher`] for the consumption
    /// pattern.
    ///
    /// [`LobbyWatcher`]: crate::core::tasks::lobby_watcher::LobbyWatcher
    ReadyCheckChanged(Option<ReadyCheck>),
}
