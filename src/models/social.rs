use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::Paginated;

use super::profile::Progress;

/// Entry of `GET /api/v3/social/friends`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub nick: String,
    #[serde(rename = "countryCode", default)]
    pub country_code: Option<String>,
    #[serde(rename = "isProUser")]
    pub is_pro_user: bool,
    #[serde(rename = "isOnline")]
    pub is_online: bool,
    #[serde(default)]
    pub progress: Option<Progress>,
}

/// One page of `GET /api/v4/feed/friends`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage {
    pub entries: Vec<FeedEntry>,
    #[serde(rename = "paginationToken", default)]
    pub pagination_token: Option<String>,
}

impl Paginated for FeedPage {
    fn next_cursor(&self) -> Option<&str> {
        self.pagination_token.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    #[serde(rename = "type")]
    pub kind: u32,
    pub time: DateTime<Utc>,
    pub user: FeedUser,
    /// Activity details, as a JSON document embedded in a string.
    pub payload: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedUser {
    #[serde(default)]
    pub id: Option<String>,
    pub nick: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    StandardGame,
    CompetitiveStarted,
    Batch,
    PartyGame,
    CompetitiveResult,
    Other(u32),
}

impl From<u32> for ActivityKind {
    fn from(kind: u32) -> Self {
        match kind {
            2 => ActivityKind::StandardGame,
            6 => ActivityKind::CompetitiveStarted,
            7 => ActivityKind::Batch,
            9 => ActivityKind::PartyGame,
            11 => ActivityKind::CompetitiveResult,
            other => ActivityKind::Other(other),
        }
    }
}

impl FeedEntry {
    pub fn activity_kind(&self) -> ActivityKind {
        ActivityKind::from(self.kind)
    }

    /// Decodes the embedded payload into `T`.
    pub fn decode_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.payload)
    }
}
