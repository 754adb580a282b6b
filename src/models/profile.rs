use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Label, MedalCounts};

/// Response of `GET /api/v3/profiles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user: User,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub nick: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    pub created: DateTime<Utc>,
    #[serde(rename = "isProUser")]
    pub is_pro_user: bool,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    pub progress: Progress,
    #[serde(default)]
    pub competitive: Option<Competitive>,
    #[serde(rename = "streakProgress", default)]
    pub streak_progress: Option<MedalCounts>,
    #[serde(rename = "explorerProgress", default)]
    pub explorer_progress: Option<MedalCounts>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub level: u32,
    pub xp: u64,
    #[serde(rename = "nextLevel", default)]
    pub next_level: Option<u32>,
    #[serde(rename = "nextLevelXp", default)]
    pub next_level_xp: Option<u64>,
    #[serde(rename = "competitionMedals", default)]
    pub competition_medals: Option<MedalCounts>,
}

impl Progress {
    /// XP still missing for the next level, when the API reported it.
    pub fn xp_to_next_level(&self) -> Option<u64> {
        self.next_level_xp.map(|next| next.saturating_sub(self.xp))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitive {
    pub rating: i32,
    #[serde(default)]
    pub elo: Option<i32>,
    #[serde(rename = "lastRatingChange", default)]
    pub last_rating_change: Option<i32>,
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(rename = "onLeaderboard", default)]
    pub on_leaderboard: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    #[serde(rename = "type", default)]
    pub kind: Option<Label>,
    #[serde(rename = "startRating", default)]
    pub start_rating: Option<i32>,
    #[serde(rename = "endRating", default)]
    pub end_rating: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::fixtures;

    #[test]
    fn test_profile_deserialization() {
        let profile: Profile = serde_json::from_str(fixtures::PROFILE).unwrap();
        assert_eq!(profile.user.nick, "Plonker");
        assert_eq!(profile.user.country_code, "fi");
        assert!(profile.user.is_pro_user);
        assert_eq!(profile.user.progress.level, 104);
        assert_eq!(profile.user.progress.xp_to_next_level(), Some(49600));
        assert_eq!(profile.email.as_deref(), Some("plonker@example.com"));

        let competitive = profile.user.competitive.unwrap();
        assert_eq!(competitive.rating, 1102);
        assert!(!competitive.on_leaderboard);
        let division = competitive.division.unwrap();
        assert_eq!(division.kind.unwrap().as_str(), "30");
        assert!(profile.user.streak_progress.is_none());
    }

    #[test]
    fn test_profile_missing_required_field_fails() {
        let json = r#"{"user":{"id":"1","nick":"x","countryCode":"se","isProUser":false,
            "isVerified":false,"progress":{"level":1,"xp":0}}}"#;
        let err = serde_json::from_str::<Profile>(json).unwrap_err();
        assert!(err.to_string().contains("created"));
    }

    #[test]
    fn test_profile_serializes_with_api_field_names() {
        let profile: Profile = serde_json::from_str(fixtures::PROFILE).unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["user"]["countryCode"], "fi");
        assert_eq!(json["user"]["progress"]["nextLevelXp"], 1300000);
    }
}
