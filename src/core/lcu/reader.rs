// src/core/lcu/reader.rs

//! Typed reader over the LCU gateway.

use super::api::{LcuApi, LcuGateway};
use crate::config::ClientOptions;
use crate::connection::ConnectionInfo;
use crate::core::LeagueDeskError;
use crate::core::json::decode;
use crate::core::models::champ_select::ChampSelectSession;
use crate::core::models::client::{GameflowSession, SearchState, Summoner};
use crate::core::models::lobby::Lobby;
use crate::core::models::ready_check::ReadyCheck;
use std::sync::Arc;

/// Deserializing reader for the LCU API.
///
/// Stateless pass-through: safe to share and call concurrently. Absent,
/// blank, or malformed payloads all read as `None`.
#[derive(Clone)]
pub struct LcuReader {
    gateway: Arc<dyn LcuGateway>,
}

impl LcuReader {
    pub fn new(gateway: Arc<dyn LcuGateway>) -> Self {
        Self { gateway }
    }

    /// Builds a reader over a real authenticated accessor; fails with
    /// [`LeagueDeskError::ClientNotRunning`] when no connection is available.
    pub fn connect(
        info: Option<ConnectionInfo>,
        options: &ClientOptions,
    ) -> Result<Self, LeagueDeskError> {
        Ok(Self::new(Arc::new(LcuApi::new(info, options)?)))
    }

    pub async fn get_lobby(&self) -> Option<Lobby> {
        decode(self.gateway.lobby_json().await, "lobby")
    }

    pub async fn get_champ_select_session(&self) -> Option<ChampSelectSession> {
        decode(
            self.gateway.champ_select_session_json().await,
            "champ-select session",
        )
    }

    pub async fn get_ready_check(&self) -> Option<ReadyCheck> {
        decode(self.gateway.ready_check_json().await, "ready-check")
    }

    pub async fn get_current_summoner(&self) -> Option<Summoner> {
        decode(self.gateway.current_summoner_json().await, "current-summoner")
    }

    pub async fn get_gameflow_session(&self) -> Option<GameflowSession> {
        decode(self.gateway.gameflow_session_json().await, "gameflow session")
    }

    pub async fn get_search_state(&self) -> Option<SearchState> {
        decode(self.gateway.search_state_json().await, "search-state")
    }

    /// Accepts the pending ready check. `false` covers both "the request
    /// failed" and "there was nothing to accept".
    pub async fn accept_ready_check(&self) -> bool {
        self.gateway.accept_ready_check().await
    }

    /// Declines the pending ready check.
    pub async fn decline_ready_check(&self) -> bool {
        self.gateway.decline_ready_check().await
    }
}
