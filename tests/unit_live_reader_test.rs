use async_trait::async_trait;
use leaguedesk::core::live::{LiveClientReader, LiveDataGateway};
use std::sync::{Arc, Mutex};

/// A gateway that replays fixed payloads and records the summoner names it
/// was queried with.
#[derive(Default)]
struct StaticGateway {
    all_game_data: Option<String>,
    active_player: Option<String>,
    active_player_name: Option<String>,
    abilities: Option<String>,
    runes: Option<String>,
    player_list: Option<String>,
    scores: Option<String>,
    summoner_spells: Option<String>,
    main_runes: Option<String>,
    items: Option<String>,
    event_data: Option<String>,
    game_stats: Option<String>,
    queried_names: Mutex<Vec<String>>,
}

impl StaticGateway {
    fn record(&self, summoner_name: &str) {
        self.queried_names
            .lock()
            .unwrap()
            .push(summoner_name.to_string());
    }
}

#[async_trait]
impl LiveDataGateway for StaticGateway {
    async fn all_game_data_json(&self) -> Option<String> {
        self.all_game_data.clone()
    }

    async fn active_player_json(&self) -> Option<String> {
        self.active_player.clone()
    }

    async fn active_player_name_json(&self) -> Option<String> {
        self.active_player_name.clone()
    }

    async fn active_player_abilities_json(&self) -> Option<String> {
        self.abilities.clone()
    }

    async fn active_player_runes_json(&self) -> Option<String> {
        self.runes.clone()
    }

    async fn player_list_json(&self) -> Option<String> {
        self.player_list.clone()
    }

    async fn player_scores_json(&self, summoner_name: &str) -> Option<String> {
        self.record(summoner_name);
        self.scores.clone()
    }

    async fn player_summoner_spells_json(&self, summoner_name: &str) -> Option<String> {
        self.record(summoner_name);
        self.summoner_spells.clone()
    }

    async fn player_main_runes_json(&self, summoner_name: &str) -> Option<String> {
        self.record(summoner_name);
        self.main_runes.clone()
    }

    async fn player_items_json(&self, summoner_name: &str) -> Option<String> {
        self.record(summoner_name);
        self.items.clone()
    }

    async fn event_data_json(&self) -> Option<String> {
        self.event_data.clone()
    }

    async fn game_stats_json(&self) -> Option<String> {
        self.game_stats.clone()
    }
}

fn reader_with(gateway: StaticGateway) -> LiveClientReader {
    LiveClientReader::new(Arc::new(gateway))
}

#[tokio::test]
async fn test_get_player_list() {
    let json = r#"
    [
        {
            "championName": "Ahri",
            "isBot": false,
            "isDead": false,
            "level": 7,
            "position": "MIDDLE",
            "skinID": 14,
            "summonerName": "Player1",
            "team": "ORDER"
        },
        {
            "championName": "Garen",
            "isBot": true,
            "level": 6,
            "team": "CHAOS"
        }
    ]
    "#;
    let reader = reader_with(StaticGateway {
        player_list: Some(json.to_string()),
        ..Default::default()
    });

    let players = reader.get_player_list().await.unwrap();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].champion_name.as_deref(), Some("Ahri"));
    assert_eq!(players[0].skin_id, 14);
    assert!(players[1].is_bot);
}

#[tokio::test]
async fn test_active_player_name_is_raw_passthrough() {
    let reader = reader_with(StaticGateway {
        active_player_name: Some("\"Player1\"".to_string()),
        ..Default::default()
    });

    // The name endpoint returns plain text; the reader does not decode it.
    assert_eq!(
        reader.get_active_player_name().await.as_deref(),
        Some("\"Player1\"")
    );
}

#[tokio::test]
async fn test_get_all_game_data() {
    let json = r#"
    {
        "activePlayer": {
            "currentGold": 1234.5,
            "level": 9,
            "summonerName": "Player1"
        },
        "allPlayers": [
            { "championName": "Ahri", "summonerName": "Player1" }
        ],
        "gameData": {
            "gameMode": "CLASSIC",
            "gameTime": 612.25,
            "mapName": "Map11",
            "mapNumber": 11
        }
    }
    "#;
    let reader = reader_with(StaticGateway {
        all_game_data: Some(json.to_string()),
        ..Default::default()
    });

    let data = reader.get_all_game_data().await.unwrap();

    assert_eq!(data.active_player.unwrap().current_gold, 1234.5);
    assert_eq!(data.all_players.unwrap().len(), 1);
    assert_eq!(data.game_data.unwrap().map_number, 11);
}

#[tokio::test]
async fn test_get_active_player_abilities() {
    let json = r#"
    {
        "Passive": { "displayName": "Essence Theft" },
        "Q": { "abilityLevel": 5, "displayName": "Orb of Deception" },
        "R": { "abilityLevel": 2, "displayName": "Spirit Rush" }
    }
    "#;
    let reader = reader_with(StaticGateway {
        abilities: Some(json.to_string()),
        ..Default::default()
    });

    let abilities = reader.get_active_player_abilities().await.unwrap();

    assert_eq!(
        abilities.passive.unwrap().display_name.as_deref(),
        Some("Essence Theft")
    );
    assert_eq!(abilities.q.unwrap().ability_level, 5);
    assert_eq!(abilities.r.unwrap().ability_level, 2);
    assert!(abilities.w.is_none());
}

#[tokio::test]
async fn test_get_player_items_passes_summoner_name_through() {
    let gateway = Arc::new(StaticGateway {
        items: Some(r#"[{ "itemID": 3089, "displayName": "Rabadon's Deathcap", "slot": 2 }]"#.to_string()),
        ..Default::default()
    });
    let reader = LiveClientReader::new(gateway.clone());

    let items = reader.get_player_items("Player One#EUW").await.unwrap();

    assert_eq!(items[0].item_id, 3089);
    assert_eq!(items[0].slot, 2);
    // The reader hands the name to the gateway untouched; percent-encoding
    // is the HTTP accessor's concern.
    assert_eq!(
        gateway.queried_names.lock().unwrap().as_slice(),
        ["Player One#EUW"]
    );
}

#[tokio::test]
async fn test_get_player_scores() {
    let reader = reader_with(StaticGateway {
        scores: Some(r#"{ "kills": 5, "deaths": 2, "assists": 9, "creepScore": 142, "wardScore": 13.5 }"#.to_string()),
        ..Default::default()
    });

    let scores = reader.get_player_scores("Player1").await.unwrap();

    assert_eq!(scores.kills, 5);
    assert_eq!(scores.creep_score, 142);
    assert_eq!(scores.ward_score, 13.5);
}

#[tokio::test]
async fn test_get_event_data() {
    let json = r#"
    {
        "Events": [
            { "EventID": 0, "EventName": "GameStart", "EventTime": 0.05 },
            {
                "EventID": 7,
                "EventName": "DragonKill",
                "EventTime": 840.2,
                "DragonType": "Fire",
                "Stolen": "False",
                "KillerName": "Player1",
                "Assisters": ["Player2"]
            }
        ]
    }
    "#;
    let reader = reader_with(StaticGateway {
        event_data: Some(json.to_string()),
        ..Default::default()
    });

    let data = reader.get_event_data().await.unwrap();

    assert_eq!(data.events.len(), 2);
    assert_eq!(data.events[0].event_name.as_deref(), Some("GameStart"));
    assert_eq!(data.events[1].dragon_type.as_deref(), Some("Fire"));
    assert_eq!(data.events[1].stolen.as_deref(), Some("False"));
    assert_eq!(
        data.events[1].assisters.as_deref(),
        Some(["Player2".to_string()].as_slice())
    );
}

#[tokio::test]
async fn test_get_game_stats() {
    let reader = reader_with(StaticGateway {
        game_stats: Some(r#"{ "gameMode": "ARAM", "gameTime": 300.5, "mapName": "Map12" }"#.to_string()),
        ..Default::default()
    });

    let stats = reader.get_game_stats().await.unwrap();

    assert_eq!(stats.game_mode.as_deref(), Some("ARAM"));
    assert_eq!(stats.map_name.as_deref(), Some("Map12"));
}

#[tokio::test]
async fn test_absent_payload_reads_as_none() {
    let reader = reader_with(StaticGateway::default());

    assert!(reader.get_all_game_data().await.is_none());
    assert!(reader.get_active_player().await.is_none());
    assert!(reader.get_player_list().await.is_none());
    assert!(reader.get_event_data().await.is_none());
}

#[tokio::test]
async fn test_malformed_payload_reads_as_none() {
    let bad = Some("not valid json".to_string());
    let reader = reader_with(StaticGateway {
        all_game_data: bad.clone(),
        player_list: bad.clone(),
        game_stats: bad,
        ..Default::default()
    });

    assert!(reader.get_all_game_data().await.is_none());
    assert!(reader.get_player_list().await.is_none());
    assert!(reader.get_game_stats().await.is_none());
}

#[tokio::test]
async fn test_blank_payload_reads_as_none() {
    let reader = reader_with(StaticGateway {
        all_game_data: Some(String::new()),
        player_list: Some("  \n ".to_string()),
        ..Default::default()
    });

    assert!(reader.get_all_game_data().await.is_none());
    assert!(reader.get_player_list().await.is_none());
}
