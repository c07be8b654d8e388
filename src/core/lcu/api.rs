// src/core/lcu/api.rs

//! Raw HTTP accessor for the LCU API.

use crate::config::ClientOptions;
use crate::connection::ConnectionInfo;
use crate::core::LeagueDeskError;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Fixed username of the LCU basic credential; the password is the lockfile
/// token.
const LCU_USERNAME: &str = "riot";

/// Seam between the typed reader and the HTTP transport.
///
/// GET methods return the raw JSON body or `None` under the same
/// failure-to-absence policy as the live gateway. The two ready-check
/// mutations return a plain success flag instead.
#[async_trait]
pub trait LcuGateway: Send + Sync {
    async fn lobby_json(&self) -> Option<String>;
    async fn champ_select_session_json(&self) -> Option<String>;
    async fn ready_check_json(&self) -> Option<String>;
    async fn current_summoner_json(&self) -> Option<String>;
    async fn gameflow_session_json(&self) -> Option<String>;
    async fn search_state_json(&self) -> Option<String>;
    async fn accept_ready_check(&self) -> bool;
    async fn decline_ready_check(&self) -> bool;
}

/// Authenticated HTTP client for the LCU API of a running client.
#[derive(Debug, Clone)]
pub struct LcuApi {
    client: reqwest::Client,
    base: Url,
    token: String,
}

impl LcuApi {
    /// Builds the accessor from explicit connection info, falling back to
    /// lockfile discovery.
    ///
    /// This is the one place absence is an error: a caller constructing an
    /// authenticated accessor states that the client must be reachable, so a
    /// missing or invalid connection raises
    /// [`LeagueDeskError::ClientNotRunning`] instead of degrading silently.
    pub fn new(
        info: Option<ConnectionInfo>,
        options: &ClientOptions,
    ) -> Result<Self, LeagueDeskError> {
        let info = match info {
            Some(info) => info,
            None => ConnectionInfo::discover_with(options.lockfile_path.as_deref())
                .ok_or(LeagueDeskError::ClientNotRunning)?,
        };

        if !info.is_valid() {
            return Err(LeagueDeskError::ClientNotRunning);
        }

        let base = Url::parse(&info.base_url())
            .map_err(|e| LeagueDeskError::InvalidConfig(format!("LCU base URL: {e}")))?;

        // Self-signed certificate on loopback, as with the live API.
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(options.lcu_timeout)
            .build()?;

        Ok(Self {
            client,
            base,
            token: info.token,
        })
    }

    async fn get_json(&self, path: &str) -> Option<String> {
        let url = match self.base.join(path) {
            Ok(url) => url,
            Err(e) => {
                debug!("invalid request path {path}: {e}");
                return None;
            }
        };

        let response = match self
            .client
            .get(url)
            .basic_auth(LCU_USERNAME, Some(&self.token))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!("LCU API unavailable: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(status = %response.status(), "LCU API returned non-success for {path}");
            return None;
        }

        match response.text().await {
            Ok(body) if !body.trim().is_empty() => Some(body),
            Ok(_) => None,
            Err(e) => {
                debug!("failed to read LCU response body: {e}");
                None
            }
        }
    }

    async fn post_flag(&self, path: &str) -> bool {
        let url = match self.base.join(path) {
            Ok(url) => url,
            Err(e) => {
                debug!("invalid request path {path}: {e}");
                return false;
            }
        };

        match self
            .client
            .post(url)
            .basic_auth(LCU_USERNAME, Some(&self.token))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("LCU POST {path} failed: {e}");
                false
            }
        }
    }
}

#[async_trait]
impl LcuGateway for LcuApi {
    async fn lobby_json(&self) -> Option<String> {
        self.get_json("/lol-lobby/v2/lobby").await
    }

    async fn champ_select_session_json(&self) -> Option<String> {
        self.get_json("/lol-champ-select/v1/session").await
    }

    async fn ready_check_json(&self) -> Option<String> {
        self.get_json("/lol-matchmaking/v1/ready-check").await
    }

    async fn current_summoner_json(&self) -> Option<String> {
        self.get_json("/lol-summoner/v1/current-summoner").await
    }

    async fn gameflow_session_json(&self) -> Option<String> {
        self.get_json("/lol-gameflow/v1/session").await
    }

    async fn search_state_json(&self) -> Option<String> {
        self.get_json("/lol-lobby/v2/lobby/matchmaking/search-state")
            .await
    }

    async fn accept_ready_check(&self) -> bool {
        self.post_flag("/lol-matchmaking/v1/ready-check/accept").await
    }

    async fn decline_ready_check(&self) -> bool {
        self.post_flag("/lol-matchmaking/v1/ready-check/decline").await
    }
}
