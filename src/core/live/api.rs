// src/core/live/api.rs

//! Raw HTTP accessor for the Live Client Data API.

use crate::config::{ClientOptions, DEFAULT_LIVE_BASE_URL};
use crate::core::LeagueDeskError;
use async_trait::async_trait;
use tracing::debug;
use url::Url;
use urlencoding::encode;

/// Seam between the typed readers and the HTTP transport, so the reader and
/// watcher layers can be driven by scripted fakes in tests.
///
/// Every method returns the raw JSON body, or `None` when the API is
/// unreachable, answers non-2xx, times out, or returns a blank body. "No
/// match is running" is the steady state of this API and is deliberately
/// indistinguishable from a transient failure; the caller's next poll retries
/// either way.
#[async_trait]
pub trait LiveDataGateway: Send + Sync {
    async fn all_game_data_json(&self) -> Option<String>;
    async fn active_player_json(&self) -> Option<String>;
    async fn active_player_name_json(&self) -> Option<String>;
    async fn active_player_abilities_json(&self) -> Option<String>;
    async fn active_player_runes_json(&self) -> Option<String>;
    async fn player_list_json(&self) -> Option<String>;
    async fn player_scores_json(&self, summoner_name: &str) -> Option<String>;
    async fn player_summoner_spells_json(&self, summoner_name: &str) -> Option<String>;
    async fn player_main_runes_json(&self, summoner_name: &str) -> Option<String>;
    async fn player_items_json(&self, summoner_name: &str) -> Option<String>;
    async fn event_data_json(&self) -> Option<String>;
    async fn game_stats_json(&self) -> Option<String>;
}

/// HTTP client for the Live Client Data API on `https://127.0.0.1:2999`.
#[derive(Debug, Clone)]
pub struct LiveClientApi {
    client: reqwest::Client,
    base: Url,
}

impl LiveClientApi {
    /// Builds the accessor. The only failure mode is constructing the
    /// underlying HTTP client, a configuration-class error.
    pub fn new(options: &ClientOptions) -> Result<Self, LeagueDeskError> {
        // The game serves a self-signed certificate on loopback; certificate
        // verification is meaningless for this traffic.
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(options.live_timeout)
            .build()?;

        let base = match &options.live_base_url {
            Some(url) => url.clone(),
            None => Url::parse(DEFAULT_LIVE_BASE_URL)
                .map_err(|e| LeagueDeskError::InvalidConfig(format!("live base URL: {e}")))?,
        };

        Ok(Self { client, base })
    }

    async fn get_json(&self, path_and_query: &str) -> Option<String> {
        let url = match self.base.join(path_and_query) {
            Ok(url) => url,
            Err(e) => {
                debug!("invalid request path {path_and_query}: {e}");
                return None;
            }
        };

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                // Game not running, or a transient transport failure.
                debug!("live client data API unavailable: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(status = %response.status(), "live client data API returned non-success");
            return None;
        }

        match response.text().await {
            Ok(body) if !body.trim().is_empty() => Some(body),
            Ok(_) => None,
            Err(e) => {
                debug!("failed to read live client data response body: {e}");
                None
            }
        }
    }

    fn player_query(endpoint: &str, summoner_name: &str) -> String {
        format!("/liveclientdata/{endpoint}?summonerName={}", encode(summoner_name))
    }
}

#[async_trait]
impl LiveDataGateway for LiveClientApi {
    async fn all_game_data_json(&self) -> Option<String> {
        self.get_json("/liveclientdata/allgamedata").await
    }

    async fn active_player_json(&self) -> Option<String> {
        self.get_json("/liveclientdata/activeplayer").await
    }

    async fn active_player_name_json(&self) -> Option<String> {
        self.get_json("/liveclientdata/activeplayername").await
    }

    async fn active_player_abilities_json(&self) -> Option<String> {
        self.get_json("/liveclientdata/activeplayerabilities").await
    }

    async fn active_player_runes_json(&self) -> Option<String> {
        self.get_json("/liveclientdata/activeplayerrunes").await
    }

    async fn player_list_json(&self) -> Option<String> {
        self.get_json("/liveclientdata/playerlist").await
    }

    async fn player_scores_json(&self, summoner_name: &str) -> Option<String> {
        self.get_json(&Self::player_query("playerscores", summoner_name))
            .await
    }

    async fn player_summoner_spells_json(&self, summoner_name: &str) -> Option<String> {
        self.get_json(&Self::player_query("playersummonerspells", summoner_name))
            .await
    }

    async fn player_main_runes_json(&self, summoner_name: &str) -> Option<String> {
        self.get_json(&Self::player_query("playermainrunes", summoner_name))
            .await
    }

    async fn player_items_json(&self, summoner_name: &str) -> Option<String> {
        self.get_json(&Self::player_query("playeritems", summoner_name))
            .await
    }

    async fn event_data_json(&self) -> Option<String> {
        self.get_json("/liveclientdata/eventdata").await
    }

    async fn game_stats_json(&self) -> Option<String> {
        self.get_json("/liveclientdata/gamestats").await
    }
}
