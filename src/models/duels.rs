//! Game-server shapes: duel state and round replays.

use serde::{Deserialize, Serialize};

/// Duel state (`GET /api/duels/{gameId}` on the game server).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Duel {
    #[serde(rename = "gameId")]
    pub game_id: String,
    pub status: String,
    #[serde(rename = "currentRoundNumber")]
    pub current_round_number: u32,
    #[serde(rename = "initialHealth")]
    pub initial_health: i32,
    pub options: DuelOptions,
    pub teams: Vec<DuelTeam>,
    pub rounds: Vec<DuelRound>,
    #[serde(default)]
    pub result: Option<DuelResult>,
}

impl Duel {
    pub fn is_finished(&self) -> bool {
        self.status == "Finished"
    }

    /// The winning team, once the duel has a result.
    pub fn winner(&self) -> Option<&DuelTeam> {
        let result = self.result.as_ref()?;
        self.teams.iter().find(|t| t.id == result.winning_team_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelOptions {
    #[serde(rename = "competitiveGameMode", default)]
    pub competitive_game_mode: Option<String>,
    pub map: DuelMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelMap {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelTeam {
    pub id: String,
    pub name: String,
    pub health: i32,
    #[serde(rename = "currentMultiplier")]
    pub current_multiplier: f64,
    pub players: Vec<DuelPlayer>,
    #[serde(rename = "roundResults", default)]
    pub round_results: Vec<TeamRoundResult>,
}

impl DuelTeam {
    pub fn total_damage(&self) -> i64 {
        self.round_results.iter().map(|r| r.damage_dealt as i64).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelPlayer {
    #[serde(rename = "playerId")]
    pub player_id: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(rename = "countryCode", default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub guesses: Vec<DuelGuess>,
    #[serde(rename = "progressChange", default)]
    pub progress_change: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelGuess {
    #[serde(rename = "roundNumber", default)]
    pub round_number: Option<u32>,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRoundResult {
    #[serde(rename = "roundNumber")]
    pub round_number: u32,
    pub score: i32,
    #[serde(rename = "damageDealt")]
    pub damage_dealt: i32,
    #[serde(default)]
    pub multiplier: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelRound {
    #[serde(rename = "roundNumber")]
    pub round_number: u32,
    #[serde(default)]
    pub multiplier: Option<f64>,
    #[serde(rename = "hasProcessedRoundTimeout", default)]
    pub has_processed_round_timeout: bool,
    #[serde(default)]
    pub panorama: Option<Panorama>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panorama {
    #[serde(rename = "countryCode", default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelResult {
    #[serde(rename = "winningTeamId")]
    pub winning_team_id: String,
    #[serde(rename = "winnerStyle", default)]
    pub winner_style: Option<String>,
}

/// One recorded player action in a round replay. `time` is in milliseconds
/// and only meaningful relative to other events of the same replay.
/// `payload` depends on `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub time: i64,
    pub payload: serde_json::Value,
}

/// Seconds between the first and the last event of a replay.
pub fn replay_duration_seconds(events: &[ReplayEvent]) -> Option<f64> {
    let first = events.first()?;
    let last = events.last()?;
    Some((last.time - first.time) as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUEL: &str = r#"{
        "gameId": "6963ff12ec85cd5824375992",
        "status": "Finished",
        "currentRoundNumber": 4,
        "initialHealth": 6000,
        "options": {"competitiveGameMode": "StandardDuels", "map": {"name": "A Competitive World"}},
        "teams": [
            {"id": "t-red", "name": "red", "health": 0, "currentMultiplier": 1.5,
             "players": [{"playerId": "p1", "rating": 1100, "countryCode": "fi",
                          "guesses": [{"roundNumber": 1, "score": 4000, "distance": 120.5}]}],
             "roundResults": [{"roundNumber": 1, "score": 4000, "damageDealt": 0}]},
            {"id": "t-blue", "name": "blue", "health": 2500, "currentMultiplier": 1.5,
             "players": [{"playerId": "p2", "guesses": []}],
             "roundResults": [{"roundNumber": 1, "score": 4500, "damageDealt": 500},
                              {"roundNumber": 2, "score": 4900, "damageDealt": 3000}]}
        ],
        "rounds": [{"roundNumber": 1, "multiplier": 1, "hasProcessedRoundTimeout": true,
                    "panorama": {"countryCode": "se"}}],
        "result": {"winningTeamId": "t-blue", "winnerStyle": "Normal"}
    }"#;

    #[test]
    fn test_duel_deserialization_and_winner() {
        let duel: Duel = serde_json::from_str(DUEL).unwrap();
        assert!(duel.is_finished());
        assert_eq!(duel.winner().map(|t| t.name.as_str()), Some("blue"));
        assert_eq!(duel.teams[1].total_damage(), 3500);
        assert_eq!(
            duel.options.competitive_game_mode.as_deref(),
            Some("StandardDuels")
        );
        assert_eq!(duel.teams[1].players[0].rating, None);
    }

    #[test]
    fn test_duel_requires_teams() {
        let json = r#"{"gameId":"g","status":"Ongoing","currentRoundNumber":1,
            "initialHealth":6000,"options":{"map":{"name":"World"}}}"#;
        assert!(serde_json::from_str::<Duel>(json).is_err());
    }

    #[test]
    fn test_duel_requires_rounds() {
        let mut duel: serde_json::Value = serde_json::from_str(DUEL).unwrap();
        duel.as_object_mut().unwrap().remove("rounds");
        assert!(serde_json::from_value::<Duel>(duel).is_err());
    }

    #[test]
    fn test_replay_event_requires_payload() {
        let json = r#"[{"type": "MapDisplay", "time": 1700000000000}]"#;
        assert!(serde_json::from_str::<Vec<ReplayEvent>>(json).is_err());
    }

    #[test]
    fn test_replay_events() {
        let json = r#"[
            {"type": "MapDisplay", "time": 1700000000000, "payload": {"isActive": true}},
            {"type": "PinPosition", "time": 1700000004500, "payload": {"lat": 1.0, "lng": 2.0}},
            {"type": "GuessWithLatLng", "time": 1700000012250, "payload": {"lat": 1.5, "lng": 2.5}}
        ]"#;
        let events: Vec<ReplayEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events[2].kind, "GuessWithLatLng");
        assert_eq!(events[0].payload["isActive"], true);
        assert_eq!(replay_duration_seconds(&events), Some(12.25));
        assert_eq!(replay_duration_seconds(&[]), None);
    }
}
