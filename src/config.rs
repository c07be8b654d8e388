// src/config.rs

//! Client configuration: base URLs, timeouts, and polling cadence.

use crate::core::LeagueDeskError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// The fixed loopback address of the Live Client Data API.
pub const DEFAULT_LIVE_BASE_URL: &str = "https://127.0.0.1:2999";

/// How often the lobby watcher polls the LCU between diffs.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Options for constructing the accessors and the lobby watcher.
///
/// All fields have working defaults; a default-constructed value targets the
/// standard local install. Overrides are mainly useful for tests and for
/// non-standard client installations.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientOptions {
    /// Explicit path to the client lockfile. When absent, discovery falls
    /// back to the `LEAGUE_LOCKFILE` environment variable and then to the
    /// per-OS default install location.
    pub lockfile_path: Option<PathBuf>,
    /// Base URL override for the Live Client Data API.
    pub live_base_url: Option<Url>,
    /// Per-request timeout against the Live Client Data API.
    #[serde(with = "humantime_serde", default = "default_live_timeout")]
    pub live_timeout: Duration,
    /// Per-request timeout against the LCU API.
    #[serde(with = "humantime_serde", default = "default_lcu_timeout")]
    pub lcu_timeout: Duration,
    /// Polling cadence of the lobby watcher.
    #[serde(with = "humantime_serde", default = "default_poll_interval")]
    pub poll_interval: Duration,
}

fn default_live_timeout() -> Duration {
    Duration::from_secs(5)
}
fn default_lcu_timeout() -> Duration {
    Duration::from_secs(10)
}
fn default_poll_interval() -> Duration {
    DEFAULT_POLL_INTERVAL
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            lockfile_path: None,
            live_base_url: None,
            live_timeout: default_live_timeout(),
            lcu_timeout: default_lcu_timeout(),
            poll_interval: default_poll_interval(),
        }
    }
}

impl ClientOptions {
    /// Loads options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LeagueDeskError> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| LeagueDeskError::InvalidConfig(format!("failed to parse options: {e}")))
    }
}
