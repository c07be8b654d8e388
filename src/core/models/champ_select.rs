// src/core/models/champ_select.rs

//! Champion-select models from `GET /lol-champ-select/v1/session`.

use serde::Deserialize;

/// The pre-match phase where participants pick and ban champions.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampSelectSession {
    pub timer: Option<ChampSelectTimer>,
    #[serde(default)]
    pub local_player_cell_id: i32,
    /// Pick/ban actions grouped into phases; each inner list is one phase.
    #[serde(default)]
    pub actions: Vec<Vec<ChampSelectAction>>,
    #[serde(default)]
    pub my_team: Vec<ChampSelectMember>,
    pub my_selection_champion_id: Option<i32>,
    pub my_locked_champion_id: Option<i32>,
    pub my_team_intent_champion_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampSelectTimer {
    pub phase: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampSelectAction {
    #[serde(default)]
    pub actor_cell_id: i32,
    #[serde(default)]
    pub is_in_progress: bool,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub champion_id: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampSelectMember {
    #[serde(default)]
    pub cell_id: i32,
    #[serde(default)]
    pub champion_id: i32,
    pub champion_pick_intent: Option<i32>,
    pub spell1_id: Option<i64>,
    pub spell2_id: Option<i64>,
}
