//! Environment variable management
//!
//! Handles loading of `.env` and building the API client configuration from
//! the process environment.

use std::env;
use std::fmt;
use std::time::Duration;

pub const CLIENT_ID_VAR: &str = "MODEL_SECURITY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "MODEL_SECURITY_CLIENT_SECRET";
pub const TSG_ID_VAR: &str = "TSG_ID";
pub const API_ENDPOINT_VAR: &str = "MODEL_SECURITY_API_ENDPOINT";
pub const TOKEN_ENDPOINT_VAR: &str = "MODEL_SECURITY_TOKEN_ENDPOINT";
pub const TIMEOUT_VAR: &str = "MODEL_SECURITY_TIMEOUT_SECS";

pub const DEFAULT_API_ENDPOINT: &str = "https://api.sase.paloaltonetworks.com/aims";
pub const DEFAULT_TOKEN_ENDPOINT: &str =
    "https://auth.apps.paloaltonetworks.com/oauth2/access_token";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set. Please set it in .env or your environment.")]
    Missing(&'static str),
    #[error("{0} environment variable is empty")]
    Empty(&'static str),
    #[error("MODEL_SECURITY_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
}

/// Connection settings for the model security API
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub tsg_id: String,
    pub timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("tsg_id", &self.tsg_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Build configuration from the process environment
    ///
    /// # Errors
    /// Returns error if a credential variable is unset or blank, or if the
    /// timeout override is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            let value = lookup(key).ok_or(ConfigError::Missing(key))?;
            let value = value.trim().to_string();
            if value.is_empty() {
                return Err(ConfigError::Empty(key));
            }
            Ok(value)
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let client_id = required(CLIENT_ID_VAR)?;
        let client_secret = required(CLIENT_SECRET_VAR)?;
        let tsg_id = required(TSG_ID_VAR)?;

        let timeout = match lookup(TIMEOUT_VAR).map(|v| v.trim().to_string()) {
            Some(raw) if !raw.is_empty() => parse_timeout(&raw)?,
            _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url: optional(API_ENDPOINT_VAR, DEFAULT_API_ENDPOINT),
            token_url: optional(TOKEN_ENDPOINT_VAR, DEFAULT_TOKEN_ENDPOINT),
            client_id,
            client_secret,
            tsg_id,
            timeout,
        })
    }

    /// OAuth scope bound to the tenant service group
    pub fn scope(&self) -> String {
        format!("tsg_id:{}", self.tsg_id)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

/// Load environment variables from .env file
///
/// Does not fail if .env file doesn't exist (optional configuration).
pub fn load_env() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    Ok(())
}

/// Remediation hint printed when the tools fail at the top level
pub fn credential_hint() -> String {
    format!(
        "Make sure you have:\n  \
         1. Set {CLIENT_ID_VAR} environment variable\n  \
         2. Set {CLIENT_SECRET_VAR} environment variable\n  \
         3. Set {TSG_ID_VAR} environment variable\n\n\
         Run './setup.sh' if you haven't already"
    )
}
