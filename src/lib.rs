// src/lib.rs

pub mod config;
pub mod connection;
pub mod core;

// Re-export
pub use crate::config::ClientOptions;
pub use crate::connection::ConnectionInfo;
pub use crate::core::LeagueDeskError;
pub use crate::core::events::ClientEvent;
pub use crate::core::session::DesktopSession;
pub use crate::core::tasks::lobby_watcher::LobbyWatcher;
