use serde::{Deserialize, Serialize};
use std::fmt;

use super::profile::Progress;

/// Body of `POST /api/v3/accounts/signin`.
#[derive(Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        SignInRequest {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account returned by a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedInUser {
    pub nick: String,
    #[serde(rename = "isProUser")]
    pub is_pro_user: bool,
    pub progress: Progress,
}
