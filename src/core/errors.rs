// src/core/errors.rs

//! Defines the primary error type for the library.
//!
//! Availability failures never surface here: an unreachable API, a non-2xx
//! status, or a malformed payload all collapse to "no data" at the accessor
//! and reader boundaries. What remains are configuration-class failures
//! raised from constructors, plus the distinct cancellation signal returned
//! by the lobby watcher.

use thiserror::Error;

/// The main error enum, representing all failures the library raises.
#[derive(Error, Debug)]
pub enum LeagueDeskError {
    /// No running client could be discovered and none was supplied. Raised
    /// only when an authenticated accessor is mandatorily required.
    #[error("League client is not running or no usable lockfile was found")]
    ClientNotRunning,

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    /// The polling loop was shut down by its cancellation signal.
    #[error("polling loop was cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for LeagueDeskError {
    fn from(e: reqwest::Error) -> Self {
        LeagueDeskError::HttpClient(e.to_string())
    }
}
