//! OAuth2 client-credentials token handling

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Tokens are refreshed this long before the server-side expiry
pub const EXPIRY_SKEW_SECS: i64 = 60;

/// Upper bound applied to a server-reported lifetime
const MAX_LIFETIME_SECS: i64 = 86_400;

/// Token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Lifetime in seconds
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: Option<String>,
}

fn default_expires_in() -> i64 {
    900
}

/// Cached bearer token
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    pub fn from_response(response: TokenResponse, issued_at: DateTime<Utc>) -> Self {
        Self::new(
            response.access_token,
            issued_at + Duration::seconds(response.expires_in.clamp(0, MAX_LIFETIME_SECS)),
        )
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// True while `now` is more than [`EXPIRY_SKEW_SECS`] before expiry
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_SKEW_SECS) < self.expires_at
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"***")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
