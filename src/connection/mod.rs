// src/connection/mod.rs

//! Discovery of the running League client: lockfile location, parsing, and
//! the resulting connection credentials for the LCU API.

pub mod info;
pub mod lockfile;

pub use info::ConnectionInfo;
pub use lockfile::Lockfile;
