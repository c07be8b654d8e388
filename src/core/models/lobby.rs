// src/core/models/lobby.rs

//! Lobby models from `GET /lol-lobby/v2/lobby`.

use serde::Deserialize;
use serde_json::Value;

/// A point-in-time snapshot of the current lobby.
///
/// An empty JSON object is a valid (if degenerate) lobby: no members, no
/// game config, and `can_start_activity == false`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lobby {
    #[serde(default)]
    pub can_start_activity: bool,
    pub game_config: Option<GameConfig>,
    pub invitations: Option<Vec<LobbyInvitation>>,
    pub local_member: Option<LobbyMember>,
    #[serde(default)]
    pub members: Vec<LobbyMember>,
    pub muc_jwt_dto: Option<MucJwt>,
    pub multi_user_chat_id: Option<String>,
    pub multi_user_chat_password: Option<String>,
    pub party_id: Option<String>,
    pub party_type: Option<String>,
    pub popular_champions: Option<Vec<Value>>,
    pub restrictions: Option<Vec<Value>>,
    pub scarce_positions: Option<Vec<String>>,
    pub warnings: Option<Vec<Value>>,
}

/// A single lobby participant, local or remote.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyMember {
    #[serde(default)]
    pub allowed_change_activity: bool,
    #[serde(default)]
    pub allowed_invite_others: bool,
    #[serde(default)]
    pub allowed_kick_others: bool,
    #[serde(default)]
    pub allowed_start_activity: bool,
    #[serde(default)]
    pub allowed_toggle_invite: bool,
    #[serde(default)]
    pub auto_fill_eligible: bool,
    #[serde(default)]
    pub auto_fill_protected_for_promos: bool,
    #[serde(default)]
    pub auto_fill_protected_for_remedy: bool,
    #[serde(default)]
    pub auto_fill_protected_for_soloing: bool,
    #[serde(default)]
    pub auto_fill_protected_for_streaking: bool,
    #[serde(default)]
    pub bot_champion_id: i32,
    pub bot_difficulty: Option<String>,
    pub bot_id: Option<String>,
    pub bot_position: Option<String>,
    pub bot_uuid: Option<String>,
    pub first_position_preference: Option<String>,
    pub intra_subteam_position: Option<i32>,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub is_leader: bool,
    #[serde(default)]
    pub is_spectator: bool,
    pub member_data: Option<Value>,
    pub player_slots: Option<Vec<Value>>,
    pub puuid: Option<String>,
    #[serde(default)]
    pub ready: bool,
    pub second_position_preference: Option<String>,
    #[serde(default)]
    pub show_ghosted_banner: bool,
    pub strawberry_map_id: Option<i32>,
    pub subteam_index: Option<i32>,
    #[serde(default)]
    pub summoner_icon_id: i32,
    #[serde(default)]
    pub summoner_id: i64,
    pub summoner_internal_name: Option<String>,
    #[serde(default)]
    pub summoner_level: i32,
    pub summoner_name: Option<String>,
    #[serde(default)]
    pub team_id: i32,
}

/// The queue/map configuration of the lobby.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub allowable_premade_sizes: Option<Vec<i32>>,
    pub custom_lobby_name: Option<String>,
    pub custom_mutator_name: Option<String>,
    pub custom_rewards_disabled_reasons: Option<Vec<String>>,
    pub custom_spectator_policy: Option<String>,
    pub custom_spectators: Option<Vec<Value>>,
    pub custom_team100: Option<Vec<LobbyMember>>,
    pub custom_team200: Option<Vec<LobbyMember>>,
    pub game_mode: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub is_lobby_full: bool,
    #[serde(default)]
    pub is_team_builder_managed: bool,
    #[serde(default)]
    pub map_id: i32,
    #[serde(default)]
    pub max_human_players: i32,
    #[serde(default)]
    pub max_lobby_size: i32,
    #[serde(default)]
    pub max_lobby_spectator_count: i32,
    #[serde(default)]
    pub max_team_size: i32,
    #[serde(default)]
    pub num_players_per_team: i32,
    #[serde(default)]
    pub number_of_teams_in_lobby: i32,
    pub pick_type: Option<String>,
    #[serde(default)]
    pub premade_size_allowed: bool,
    pub queue_id: Option<i32>,
    #[serde(default)]
    pub should_force_scarce_position_selection: bool,
    #[serde(default)]
    pub show_position_selector: bool,
    #[serde(default)]
    pub show_quick_play_slot_selection: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyInvitation {
    pub invitation_id: Option<String>,
    pub invitation_type: Option<String>,
    pub state: Option<String>,
    pub timestamp: Option<String>,
    #[serde(default)]
    pub to_summoner_id: i64,
    pub to_summoner_name: Option<String>,
}

/// Multi-user-chat credentials attached to the lobby.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MucJwt {
    pub channel_claim: Option<String>,
    pub domain: Option<String>,
    pub jwt: Option<String>,
    pub target_region: Option<String>,
}
