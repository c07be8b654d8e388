// src/core/models/ready_check.rs

//! Ready-check model from `GET /lol-matchmaking/v1/ready-check`.

use serde::Deserialize;
use serde_json::{Map, Value};

/// The matchmaking ready-check phase: every found-match participant must
/// confirm readiness within a time window.
///
/// `state` is an enum-like string on the wire (`"InProgress"`,
/// `"EveryoneReady"`, `"Declined"`, ...); it is kept as a string so unknown
/// states survive deserialization instead of failing it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyCheck {
    pub state: Option<String>,
    pub player_response: Option<String>,
    pub dodge_warning: Option<String>,
    #[serde(default)]
    pub timer: f32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReadyCheck {
    /// Whether the accept button is currently actionable.
    pub fn is_in_progress(&self) -> bool {
        self.state.as_deref() == Some("InProgress")
    }
}
