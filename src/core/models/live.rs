// src/core/models/live.rs

//! Live Client Data models (`/liveclientdata/*`), available only while a
//! match is running.
//!
//! The game mixes naming conventions on the wire: most objects are
//! camelCase, ability slots are single capital letters, and the event feed
//! is PascalCase. The renames below follow the payloads, not a convention.

use serde::Deserialize;
use serde_json::{Map, Value};

/// The full game state, from `GET /liveclientdata/allgamedata`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllGameData {
    pub active_player: Option<ActivePlayer>,
    pub all_players: Option<Vec<Player>>,
    pub events: Option<EventData>,
    pub game_data: Option<GameStats>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The player at this machine.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePlayer {
    pub abilities: Option<Abilities>,
    pub champion_stats: Option<ChampionStats>,
    #[serde(default)]
    pub current_gold: f32,
    pub full_runes: Option<FullRunes>,
    #[serde(default)]
    pub level: i32,
    pub summoner_name: Option<String>,
    #[serde(default)]
    pub team_relative_colors: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ability loadout (passive plus the four slots).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Abilities {
    #[serde(rename = "Passive")]
    pub passive: Option<Ability>,
    #[serde(rename = "Q")]
    pub q: Option<Ability>,
    #[serde(rename = "W")]
    pub w: Option<Ability>,
    #[serde(rename = "E")]
    pub e: Option<Ability>,
    #[serde(rename = "R")]
    pub r: Option<Ability>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    #[serde(default)]
    pub ability_level: i32,
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub raw_description: Option<String>,
    pub raw_display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Current champion stat sheet of the active player.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionStats {
    #[serde(default)]
    pub ability_haste: f32,
    #[serde(default)]
    pub ability_power: f32,
    #[serde(default)]
    pub armor: f32,
    #[serde(default)]
    pub armor_penetration_flat: f32,
    #[serde(default)]
    pub armor_penetration_percent: f32,
    #[serde(default)]
    pub attack_damage: f32,
    #[serde(default)]
    pub attack_range: f32,
    #[serde(default)]
    pub attack_speed: f32,
    #[serde(default)]
    pub bonus_armor_penetration_percent: f32,
    #[serde(default)]
    pub bonus_magic_penetration_percent: f32,
    #[serde(default)]
    pub crit_chance: f32,
    #[serde(default)]
    pub crit_damage: f32,
    #[serde(default)]
    pub current_health: f32,
    #[serde(default)]
    pub heal_shield_power: f32,
    #[serde(default)]
    pub health_regen_rate: f32,
    #[serde(default)]
    pub life_steal: f32,
    #[serde(default)]
    pub magic_lethality: f32,
    #[serde(default)]
    pub magic_penetration_flat: f32,
    #[serde(default)]
    pub magic_penetration_percent: f32,
    #[serde(default)]
    pub magic_resist: f32,
    #[serde(default)]
    pub max_health: f32,
    #[serde(default)]
    pub move_speed: f32,
    #[serde(default)]
    pub omnivamp: f32,
    #[serde(default)]
    pub physical_lethality: f32,
    #[serde(default)]
    pub physical_vamp: f32,
    #[serde(default)]
    pub resource_max: f32,
    #[serde(default)]
    pub resource_regen_rate: f32,
    pub resource_type: Option<String>,
    #[serde(default)]
    pub resource_value: f32,
    #[serde(default)]
    pub spell_vamp: f32,
    #[serde(default)]
    pub tenacity: f32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The active player's complete rune page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullRunes {
    pub general_runes: Option<Vec<Rune>>,
    pub keystone: Option<Rune>,
    pub primary_rune_tree: Option<RuneTree>,
    pub secondary_rune_tree: Option<RuneTree>,
    pub stat_runes: Option<Vec<StatRune>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rune {
    pub display_name: Option<String>,
    #[serde(default)]
    pub id: i32,
    pub raw_description: Option<String>,
    pub raw_display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuneTree {
    pub display_name: Option<String>,
    #[serde(default)]
    pub id: i32,
    pub raw_description: Option<String>,
    pub raw_display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRune {
    #[serde(default)]
    pub id: i32,
    pub raw_description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Any participant of the running match, from `GET /liveclientdata/playerlist`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub champion_name: Option<String>,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub is_dead: bool,
    pub items: Option<Vec<Item>>,
    #[serde(default)]
    pub level: i32,
    pub position: Option<String>,
    pub raw_champion_name: Option<String>,
    pub raw_skin_name: Option<String>,
    #[serde(default)]
    pub respawn_timer: f32,
    pub runes: Option<PlayerRunes>,
    pub scores: Option<Scores>,
    #[serde(rename = "skinID", default)]
    pub skin_id: i32,
    pub skin_name: Option<String>,
    pub summoner_name: Option<String>,
    pub summoner_spells: Option<SummonerSpells>,
    pub team: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub can_use: bool,
    #[serde(default)]
    pub consumable: bool,
    #[serde(default)]
    pub count: i32,
    pub display_name: Option<String>,
    #[serde(rename = "itemID", default)]
    pub item_id: i32,
    #[serde(default)]
    pub price: i32,
    pub raw_description: Option<String>,
    pub raw_display_name: Option<String>,
    #[serde(default)]
    pub slot: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The reduced rune view exposed for non-active players.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRunes {
    pub keystone: Option<Rune>,
    pub primary_rune_tree: Option<RuneTree>,
    pub secondary_rune_tree: Option<RuneTree>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub creep_score: i32,
    #[serde(default)]
    pub deaths: i32,
    #[serde(default)]
    pub kills: i32,
    #[serde(default)]
    pub ward_score: f32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerSpells {
    pub summoner_spell_one: Option<SummonerSpell>,
    pub summoner_spell_two: Option<SummonerSpell>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerSpell {
    pub display_name: Option<String>,
    pub raw_description: Option<String>,
    pub raw_display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The event feed wrapper, from `GET /liveclientdata/eventdata`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EventData {
    #[serde(rename = "Events", default)]
    pub events: Vec<GameEvent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the event feed: kills, objectives, structures, aces.
///
/// Which optional fields are present depends on `event_name`; everything the
/// feed adds beyond the known set lands in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GameEvent {
    #[serde(rename = "EventID", default)]
    pub event_id: i32,
    #[serde(rename = "EventName")]
    pub event_name: Option<String>,
    #[serde(rename = "EventTime", default)]
    pub event_time: f32,
    #[serde(rename = "KillerName")]
    pub killer_name: Option<String>,
    #[serde(rename = "VictimName")]
    pub victim_name: Option<String>,
    #[serde(rename = "Assisters")]
    pub assisters: Option<Vec<String>>,
    #[serde(rename = "DragonType")]
    pub dragon_type: Option<String>,
    /// `"True"`/`"False"` as a string on the wire.
    #[serde(rename = "Stolen")]
    pub stolen: Option<String>,
    #[serde(rename = "TurretKilled")]
    pub turret_killed: Option<String>,
    #[serde(rename = "InhibKilled")]
    pub inhib_killed: Option<String>,
    #[serde(rename = "InhibRespawned")]
    pub inhib_respawned: Option<String>,
    #[serde(rename = "Acer")]
    pub acer: Option<String>,
    #[serde(rename = "AcingTeam")]
    pub acing_team: Option<String>,
    #[serde(rename = "KillStreak")]
    pub kill_streak: Option<i32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Match-level stats, from `GET /liveclientdata/gamestats`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub game_mode: Option<String>,
    #[serde(default)]
    pub game_time: f32,
    pub map_name: Option<String>,
    #[serde(default)]
    pub map_number: i32,
    pub map_terrain: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
