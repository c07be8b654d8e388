// src/core/live/reader.rs

//! Typed reader over the Live Client Data gateway.

use super::api::{LiveClientApi, LiveDataGateway};
use crate::config::ClientOptions;
use crate::core::LeagueDeskError;
use crate::core::json::decode;
use crate::core::models::live::{
    Abilities, ActivePlayer, AllGameData, EventData, FullRunes, GameStats, Item, Player,
    PlayerRunes, Scores, SummonerSpells,
};
use std::sync::Arc;

/// Deserializing reader for the Live Client Data API.
///
/// Stateless pass-through: safe to share and call concurrently. Absent,
/// blank, or malformed payloads all read as `None`.
#[derive(Clone)]
pub struct LiveClientReader {
    gateway: Arc<dyn LiveDataGateway>,
}

impl LiveClientReader {
    pub fn new(gateway: Arc<dyn LiveDataGateway>) -> Self {
        Self { gateway }
    }

    /// Builds a reader over a real HTTP accessor.
    pub fn connect(options: &ClientOptions) -> Result<Self, LeagueDeskError> {
        Ok(Self::new(Arc::new(LiveClientApi::new(options)?)))
    }

    pub async fn get_all_game_data(&self) -> Option<AllGameData> {
        decode(self.gateway.all_game_data_json().await, "allgamedata")
    }

    pub async fn get_active_player(&self) -> Option<ActivePlayer> {
        decode(self.gateway.active_player_json().await, "activeplayer")
    }

    /// The active player name endpoint returns plain text, not an object; it
    /// is passed through untouched.
    pub async fn get_active_player_name(&self) -> Option<String> {
        self.gateway.active_player_name_json().await
    }

    pub async fn get_active_player_abilities(&self) -> Option<Abilities> {
        decode(
            self.gateway.active_player_abilities_json().await,
            "activeplayerabilities",
        )
    }

    pub async fn get_active_player_runes(&self) -> Option<FullRunes> {
        decode(
            self.gateway.active_player_runes_json().await,
            "activeplayerrunes",
        )
    }

    pub async fn get_player_list(&self) -> Option<Vec<Player>> {
        decode(self.gateway.player_list_json().await, "playerlist")
    }

    pub async fn get_player_scores(&self, summoner_name: &str) -> Option<Scores> {
        decode(
            self.gateway.player_scores_json(summoner_name).await,
            "playerscores",
        )
    }

    pub async fn get_player_summoner_spells(&self, summoner_name: &str) -> Option<SummonerSpells> {
        decode(
            self.gateway.player_summoner_spells_json(summoner_name).await,
            "playersummonerspells",
        )
    }

    pub async fn get_player_main_runes(&self, summoner_name: &str) -> Option<PlayerRunes> {
        decode(
            self.gateway.player_main_runes_json(summoner_name).await,
            "playermainrunes",
        )
    }

    pub async fn get_player_items(&self, summoner_name: &str) -> Option<Vec<Item>> {
        decode(
            self.gateway.player_items_json(summoner_name).await,
            "playeritems",
        )
    }

    pub async fn get_event_data(&self) -> Option<EventData> {
        decode(self.gateway.event_data_json().await, "eventdata")
    }

    pub async fn get_game_stats(&self) -> Option<GameStats> {
        decode(self.gateway.game_stats_json().await, "gamestats")
    }
}
