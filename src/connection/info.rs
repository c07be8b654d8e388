// src/connection/info.rs

//! `ConnectionInfo`: the immutable credentials needed to reach the LCU API.

use super::lockfile::{self, Lockfile};
use std::path::{Path, PathBuf};

/// Connection credentials for the LCU API of a running client, produced once
/// per session by lockfile discovery.
///
/// A `ConnectionInfo` is usable only when [`is_valid`](Self::is_valid) holds;
/// an invalid one must never be turned into an authenticated accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// The lockfile this info was read from.
    pub lockfile_path: PathBuf,
    /// Host of the LCU API. Always loopback; the client binds locally only.
    pub host: String,
    /// Dynamically assigned LCU port.
    pub port: u16,
    /// Bearer token from the lockfile.
    pub token: String,
    /// `https` in practice; carried through from the lockfile.
    pub protocol: String,
}

impl ConnectionInfo {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";

    /// Builds connection info from a parsed lockfile.
    pub fn from_lockfile(path: PathBuf, lockfile: &Lockfile) -> Self {
        Self {
            lockfile_path: path,
            host: Self::DEFAULT_HOST.to_string(),
            port: lockfile.port,
            token: lockfile.password.clone(),
            protocol: lockfile.protocol.clone(),
        }
    }

    /// A connection is usable only with a real port and a non-empty token.
    pub fn is_valid(&self) -> bool {
        self.port != 0 && !self.token.is_empty()
    }

    /// The base URL of the LCU API, e.g. `https://127.0.0.1:54321`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }

    /// Discovers the running client via the default lockfile location.
    ///
    /// Idempotent and side-effect-free; safe to call on every reconnect
    /// attempt. `None` means the client is not running (or its lockfile is
    /// unreadable), never an error.
    pub fn discover() -> Option<Self> {
        Self::discover_with(None)
    }

    /// Discovery with an explicit lockfile path override.
    pub fn discover_with(override_path: Option<&Path>) -> Option<Self> {
        let path = lockfile::resolve_lockfile_path(override_path)?;
        let lockfile = Lockfile::read(&path)?;
        Some(Self::from_lockfile(path, &lockfile))
    }
}
