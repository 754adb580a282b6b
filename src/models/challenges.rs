use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Amount, Label};

/// Settings and map of a challenge (`GET /api/v3/challenges/{token}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub map: ChallengeMap,
    pub creator: ChallengeCreator,
    pub created: DateTime<Utc>,
    #[serde(rename = "roundCount")]
    pub round_count: u32,
    /// Seconds per round; 0 means unlimited.
    #[serde(rename = "timeLimit")]
    pub time_limit: u32,
    #[serde(rename = "forbidMoving")]
    pub forbid_moving: bool,
    #[serde(rename = "forbidRotating")]
    pub forbid_rotating: bool,
    #[serde(rename = "forbidZooming")]
    pub forbid_zooming: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeMap {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "coordinateCount", default)]
    pub coordinate_count: Option<Label>,
    #[serde(default)]
    pub bounds: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeCreator {
    pub nick: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
}

/// Leaderboard of a challenge (`GET /api/v3/results/highscores/{token}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highscores {
    pub items: Vec<HighscoreItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighscoreItem {
    pub game: HighscoreGame,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighscoreGame {
    #[serde(default)]
    pub token: Option<String>,
    pub created: DateTime<Utc>,
    pub player: HighscorePlayer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighscorePlayer {
    pub nick: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "isProUser")]
    pub is_pro_user: bool,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    #[serde(rename = "totalScore")]
    pub total_score: Amount,
}

impl Highscores {
    /// Players in leaderboard order with their parsed scores.
    pub fn ranking(&self) -> Vec<(&HighscorePlayer, Option<f64>)> {
        self.items
            .iter()
            .map(|item| (&item.game.player, item.game.player.total_score.value()))
            .collect()
    }
}
