// src/core/json.rs

//! Shared decode policy for the object readers.

use serde::de::DeserializeOwned;
use tracing::debug;

/// Decodes an optional JSON payload into a typed snapshot.
///
/// `None`, empty, and whitespace-only payloads are "no data" and are not
/// handed to the parser at all. A payload that fails to parse also degrades
/// to `None`; the failure is logged for diagnostics but never propagated.
pub(crate) fn decode<T: DeserializeOwned>(payload: Option<String>, endpoint: &str) -> Option<T> {
    let payload = payload?;
    if payload.trim().is_empty() {
        return None;
    }

    match serde_json::from_str(&payload) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(endpoint, "failed to decode payload: {e}");
            None
        }
    }
}
