use serde::{Deserialize, Serialize};

use super::common::Amount;

/// Game state (`GET /api/v3/games/{token}?client=web`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub token: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub state: String,
    #[serde(rename = "mapName")]
    pub map_name: String,
    #[serde(rename = "roundCount")]
    pub round_count: u32,
    /// Number of the current round, starting at 1.
    pub round: u32,
    #[serde(rename = "timeLimit")]
    pub time_limit: u32,
    #[serde(rename = "forbidMoving")]
    pub forbid_moving: bool,
    #[serde(rename = "forbidRotating")]
    pub forbid_rotating: bool,
    #[serde(rename = "forbidZooming")]
    pub forbid_zooming: bool,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub player: Option<GamePlayer>,
}

impl Game {
    pub fn is_streak(&self) -> bool {
        self.mode == "streak"
    }

    /// Rounds the player has already guessed.
    pub fn guessed_rounds(&self) -> usize {
        self.player.as_ref().map_or(0, |p| p.guesses.len())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "streakLocationCode", default)]
    pub streak_location_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePlayer {
    #[serde(rename = "totalScore")]
    pub total_score: Amount,
    #[serde(rename = "totalDistanceInMeters")]
    pub total_distance_in_meters: f64,
    #[serde(rename = "totalTime")]
    pub total_time: u32,
    #[serde(rename = "totalStreak", default)]
    pub total_streak: Option<u32>,
    #[serde(default)]
    pub guesses: Vec<Guess>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guess {
    #[serde(rename = "roundScore")]
    pub round_score: Amount,
    pub distance: GuessDistance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessDistance {
    pub meters: Amount,
}

/// Response of `POST /api/v3/games/streak`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakGame {
    pub token: String,
    #[serde(rename = "streakType")]
    pub streak_type: String,
    #[serde(rename = "timeLimit")]
    pub time_limit: u32,
    #[serde(rename = "forbidMoving")]
    pub forbid_moving: bool,
    #[serde(rename = "forbidRotating")]
    pub forbid_rotating: bool,
    #[serde(rename = "forbidZooming")]
    pub forbid_zooming: bool,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl StreakGame {
    pub fn game_url(&self, base_url: &str) -> String {
        format!("{}/game/{}", base_url.trim_end_matches('/'), self.token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StreakType {
    #[default]
    CountryStreak,
}

/// Request body of `POST /api/v3/games/streak`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakGameSettings {
    pub forbid_moving: bool,
    pub forbid_rotating: bool,
    pub forbid_zooming: bool,
    pub streak_type: StreakType,
    pub time_limit: u32,
}

impl Default for StreakGameSettings {
    fn default() -> Self {
        StreakPreset::Easy.settings()
    }
}

/// Named difficulty settings for streak games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StreakPreset {
    /// Moving, panning and zooming allowed, no time limit
    #[default]
    Easy,
    /// Everything allowed, 60 seconds per round
    Medium,
    /// No moving or zooming, 30 seconds per round
    Hard,
    /// No moving, panning or zooming, no time limit
    Nmpz,
}

impl StreakPreset {
    pub const fn settings(self) -> StreakGameSettings {
        let (forbid_moving, forbid_rotating, forbid_zooming, time_limit) = match self {
            StreakPreset::Easy => (false, false, false, 0),
            StreakPreset::Medium => (false, false, false, 60),
            StreakPreset::Hard => (true, false, true, 30),
            StreakPreset::Nmpz => (true, true, true, 0),
        };
        StreakGameSettings {
            forbid_moving,
            forbid_rotating,
            forbid_zooming,
            streak_type: StreakType::CountryStreak,
            time_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME: &str = r#"{
        "token": "XB9wycuZvDrhl7cB",
        "type": "standard",
        "mode": "standard",
        "state": "finished",
        "mapName": "A Diverse World",
        "roundCount": 5,
        "round": 5,
        "timeLimit": 0,
        "forbidMoving": false,
        "forbidRotating": false,
        "forbidZooming": false,
        "rounds": [{"lat": 60.1699, "lng": 24.9384}, {"lat": -33.86, "lng": 151.2}],
        "player": {
            "totalScore": {"amount": "9870", "unit": "points"},
            "totalDistanceInMeters": 1523.4,
            "totalTime": 210,
            "guesses": [
                {"roundScore": {"amount": "4990"}, "distance": {"meters": {"amount": "12.5"}}},
                {"roundScore": {"amount": "4880"}, "distance": {"meters": {"amount": "1510.9"}}}
            ]
        }
    }"#;

    #[test]
    fn test_game_deserialization() {
        let game: Game = serde_json::from_str(GAME).unwrap();
        assert_eq!(game.kind, "standard");
        assert!(!game.is_streak());
        assert_eq!(game.rounds.len(), 2);
        assert_eq!(game.guessed_rounds(), 2);

        let player = game.player.unwrap();
        assert_eq!(player.total_score.value(), Some(9870.0));
        assert_eq!(player.guesses[1].distance.meters.value(), Some(1510.9));
        assert_eq!(player.total_streak, None);
    }

    #[test]
    fn test_game_without_player_or_rounds() {
        let json = r#"{"token":"t","type":"challenge","mode":"streak","state":"started",
            "mapName":"World","roundCount":0,"round":1,"timeLimit":30,
            "forbidMoving":true,"forbidRotating":true,"forbidZooming":true}"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert!(game.is_streak());
        assert!(game.rounds.is_empty());
        assert_eq!(game.guessed_rounds(), 0);
    }

    #[test]
    fn test_game_wrong_type_fails() {
        let json = GAME.replace(r#""roundCount": 5"#, r#""roundCount": "five""#);
        assert!(serde_json::from_str::<Game>(&json).is_err());
    }

    #[test]
    fn test_streak_presets() {
        let nmpz = StreakPreset::Nmpz.settings();
        assert!(nmpz.forbid_moving && nmpz.forbid_rotating && nmpz.forbid_zooming);
        assert_eq!(nmpz.time_limit, 0);

        let hard = StreakPreset::Hard.settings();
        assert!(hard.forbid_moving && !hard.forbid_rotating && hard.forbid_zooming);
        assert_eq!(hard.time_limit, 30);

        assert_eq!(StreakPreset::Medium.settings().time_limit, 60);
        assert_eq!(StreakGameSettings::default(), StreakPreset::Easy.settings());
    }

    #[test]
    fn test_streak_settings_wire_format() {
        let json = serde_json::to_value(StreakPreset::Medium.settings()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "forbidMoving": false,
                "forbidRotating": false,
                "forbidZooming": false,
                "streakType": "CountryStreak",
                "timeLimit": 60
            })
        );
    }

    #[test]
    fn test_streak_game_response() {
        let json = r#"{"token":"abc","streakType":"CountryStreak","timeLimit":0,
            "forbidMoving":false,"forbidRotating":false,"forbidZooming":false,
            "rounds":[{"lat":48.85,"lng":2.35,"streakLocationCode":"fr"}]}"#;
        let game: StreakGame = serde_json::from_str(json).unwrap();
        assert_eq!(game.rounds[0].streak_location_code.as_deref(), Some("fr"));
        assert_eq!(
            game.game_url("https://www.geoguessr.com/"),
            "https://www.geoguessr.com/game/abc"
        );
    }
}
