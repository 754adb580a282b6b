use serde::{Deserialize, Serialize};

use super::profile::Progress;

/// One hit of `GET /api/v3/search/user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSearchResult {
    pub id: String,
    pub nick: String,
    #[serde(rename = "countryCode", default)]
    pub country_code: Option<String>,
    #[serde(rename = "isProUser")]
    pub is_pro_user: bool,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    #[serde(default)]
    pub progress: Option<Progress>,
}

impl UserSearchResult {
    /// Public profile page on the site served at `base_url`.
    pub fn profile_url(&self, base_url: &str) -> String {
        format!("{}/user/{}", base_url.trim_end_matches('/'), self.id)
    }
}
