// src/core/models/mod.rs

//! Typed projections of the polled JSON responses.
//!
//! These are plain data contracts: read-only, deserialized with unknown
//! fields either captured in an `extra` map (where the upstream payloads are
//! known to grow fields) or ignored. Every model derives `PartialEq`:
//! snapshot diffing in the lobby watcher is structural, field by field, so a
//! freshly allocated but identical snapshot never counts as a change.

pub mod champ_select;
pub mod client;
pub mod live;
pub mod lobby;
pub mod ready_check;

pub use champ_select::ChampSelectSession;
pub use lobby::Lobby;
pub use ready_check::ReadyCheck;
