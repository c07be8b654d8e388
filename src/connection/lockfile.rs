// src/connection/lockfile.rs

//! Reading and parsing the client lockfile.
//!
//! The running client writes a single-line text file with colon-separated
//! fields: `process name:process id:port:password:protocol`. The password is
//! the bearer token for the LCU API; the port is assigned dynamically at
//! client startup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the lockfile location.
pub const LOCKFILE_PATH_ENV: &str = "LEAGUE_LOCKFILE";

const WINDOWS_DEFAULT_PATH: &str = r"C:\Riot Games\League of Legends\lockfile";
const MACOS_DEFAULT_PATH: &str = "/Applications/League of Legends.app/Contents/LoL/lockfile";

/// The parsed contents of a client lockfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockfile {
    pub process_name: String,
    pub process_id: u32,
    pub port: u16,
    pub password: String,
    pub protocol: String,
}

impl Lockfile {
    /// Parses the five colon-separated lockfile fields. Returns `None` on any
    /// structural problem: missing fields, a non-numeric process id or port,
    /// or an empty password/protocol.
    pub fn parse(contents: &str) -> Option<Self> {
        let mut fields = contents.trim().splitn(5, ':');

        let process_name = fields.next()?.to_string();
        let process_id = fields.next()?.parse().ok()?;
        let port = fields.next()?.parse().ok()?;
        let password = fields.next()?.to_string();
        let protocol = fields.next()?.trim().to_string();

        if password.is_empty() || protocol.is_empty() {
            return None;
        }

        Some(Self {
            process_name,
            process_id,
            port,
            password,
            protocol,
        })
    }

    /// Reads and parses the lockfile at `path`. Any failure, including the
    /// file simply not existing because the client is not running, yields
    /// `None`; discovery is retried by callers on their own schedule.
    pub fn read(path: &Path) -> Option<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %path.display(), "lockfile not readable: {e}");
                return None;
            }
        };

        let parsed = Self::parse(&contents);
        if parsed.is_none() {
            debug!(path = %path.display(), "lockfile contents are malformed");
        }
        parsed
    }
}

/// Resolves the lockfile path: an explicit override wins, then the
/// `LEAGUE_LOCKFILE` environment variable, then the per-OS default install
/// location. Returns `None` on platforms with no default install path.
pub fn resolve_lockfile_path(override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = env::var(LOCKFILE_PATH_ENV) {
        return Some(PathBuf::from(path));
    }

    if cfg!(target_os = "windows") {
        Some(PathBuf::from(WINDOWS_DEFAULT_PATH))
    } else if cfg!(target_os = "macos") {
        Some(PathBuf::from(MACOS_DEFAULT_PATH))
    } else {
        None
    }
}
