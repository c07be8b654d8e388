// src/core/tasks/mod.rs

//! Long-running background tasks. Currently a single one: the lobby watcher
//! polling loop.

pub mod lobby_watcher;
