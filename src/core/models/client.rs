// src/core/models/client.rs

//! Additional LCU models: the signed-in summoner, the gameflow session, and
//! the matchmaking search state.

use super::ready_check::ReadyCheck;
use serde::Deserialize;
use serde_json::{Map, Value};

/// The signed-in summoner, from `GET /lol-summoner/v1/current-summoner`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    #[serde(default)]
    pub account_id: i64,
    pub display_name: Option<String>,
    pub internal_name: Option<String>,
    #[serde(default)]
    pub name_change_flag: bool,
    #[serde(default)]
    pub percent_complete_for_next_level: i32,
    #[serde(default)]
    pub profile_icon_id: i32,
    pub puuid: Option<String>,
    pub reroll_points: Option<RerollPoints>,
    #[serde(default)]
    pub summoner_id: i64,
    #[serde(default)]
    pub summoner_level: i32,
    #[serde(default)]
    pub unnamed: bool,
    #[serde(default)]
    pub xp_since_last_level: i32,
    #[serde(default)]
    pub xp_until_next_level: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// ARAM reroll currency.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RerollPoints {
    #[serde(default)]
    pub current_points: i32,
    #[serde(default)]
    pub max_rolls: i32,
    #[serde(default)]
    pub number_of_rolls: i32,
    #[serde(default)]
    pub points_cost_to_roll: i32,
    #[serde(default)]
    pub points_to_reroll: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The client's high-level phase, from `GET /lol-gameflow/v1/session`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameflowSession {
    /// `"None"`, `"Lobby"`, `"Matchmaking"`, `"ChampSelect"`, `"InProgress"`, ...
    pub phase: Option<String>,
    pub game_data: Option<GameflowGameData>,
    pub map: Option<GameflowMap>,
    pub game_client: Option<GameflowClient>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameflowGameData {
    #[serde(default)]
    pub game_id: i64,
    pub game_name: Option<String>,
    #[serde(default)]
    pub is_custom_game: bool,
    pub password: Option<String>,
    pub player_champion_selections: Option<Vec<PlayerChampionSelection>>,
    pub queue: Option<QueueInfo>,
    #[serde(default)]
    pub spectators_allowed: bool,
    pub team_one: Option<Vec<TeamMemberInfo>>,
    pub team_two: Option<Vec<TeamMemberInfo>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerChampionSelection {
    #[serde(default)]
    pub champion_id: i32,
    #[serde(default)]
    pub selected_skin_index: i32,
    #[serde(default)]
    pub spell1_id: i64,
    #[serde(default)]
    pub spell2_id: i64,
    pub summoner_internal_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueInfo {
    #[serde(default)]
    pub id: i32,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub game_mode: Option<String>,
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberInfo {
    #[serde(default)]
    pub summoner_id: i64,
    pub summoner_internal_name: Option<String>,
    pub summoner_name: Option<String>,
    #[serde(default)]
    pub team_id: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameflowMap {
    #[serde(default)]
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub game_mode: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameflowClient {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub visible: bool,
    pub observer_server_ip: Option<String>,
    #[serde(default)]
    pub observer_server_port: i32,
    pub server_ip: Option<String>,
    #[serde(default)]
    pub server_port: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Matchmaking queue progress, from
/// `GET /lol-lobby/v2/lobby/matchmaking/search-state`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    #[serde(rename = "searchState")]
    pub state: Option<String>,
    #[serde(default)]
    pub time_in_queue: f32,
    #[serde(default)]
    pub estimated_queue_time: f32,
    pub ready_check: Option<ReadyCheck>,
    pub errors: Option<Vec<SearchError>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchError {
    pub error_type: Option<String>,
    #[serde(default)]
    pub id: i32,
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
