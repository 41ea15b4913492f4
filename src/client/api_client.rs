//! HTTP client for the model security API
//!
//! Authenticates with OAuth2 client credentials scoped to a tenant service
//! group, then calls the management and data plane endpoints.
//!
//! Endpoints:
//! - GET  {base}/mgmt/v1/security-groups
//! - GET  {base}/mgmt/v1/security-groups/{uuid}
//! - POST {base}/data/v1/scans

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::auth::{AccessToken, TokenResponse};
use super::{ApiError, ModelSecurityApi};
use crate::models::{ScanResult, SecurityGroupDetail, SecurityGroupList};
use crate::utils::env::ClientConfig;

const SECURITY_GROUPS_PATH: &str = "mgmt/v1/security-groups";
const SCANS_PATH: &str = "data/v1/scans";

/// Request body for starting a scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanRequest<'a> {
    pub security_group_uuid: Uuid,
    pub model_uri: &'a str,
}

/// Model security API client
/// Handles token acquisition and the group/scan calls
pub struct ModelSecurityClient {
    config: ClientConfig,
    /// HTTP client (reused across requests)
    http_client: Client,
    token: Mutex<Option<AccessToken>>,
}

impl ModelSecurityClient {
    /// Create a client from explicit configuration
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http_client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            http_client,
            token: Mutex::new(None),
        })
    }

    /// Create a client from the process environment
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Join a relative API path onto the configured base URL
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    /// Return a cached token, or fetch a new one when absent or near expiry
    async fn bearer_token(&self) -> Result<String, ApiError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Utc::now()) {
                return Ok(token.value().to_string());
            }
        }

        let token = self.fetch_token().await?;
        let value = token.value().to_string();
        *cached = Some(token);
        Ok(value)
    }

    async fn fetch_token(&self) -> Result<AccessToken, ApiError> {
        tracing::info!(token_url = %self.config.token_url, "requesting access token");

        let scope = self.config.scope();
        let form = [("grant_type", "client_credentials"), ("scope", scope.as_str())];

        let issued_at = Utc::now();
        let response = self
            .http_client
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&form[..])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Auth { status, body });
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(AccessToken::from_response(token, issued_at))
    }

    /// Send an authenticated request and decode a JSON response
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let token = self.bearer_token().await?;

        let response = request
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(%status, bytes = body.len(), "API response");

        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ModelSecurityApi for ModelSecurityClient {
    async fn list_security_groups(&self) -> Result<SecurityGroupList, ApiError> {
        let url = self.endpoint(SECURITY_GROUPS_PATH);
        tracing::debug!(%url, "listing security groups");

        self.send_json(self.http_client.get(url)).await
    }

    async fn get_security_group(&self, uuid: Uuid) -> Result<SecurityGroupDetail, ApiError> {
        let url = self.endpoint(&format!("{}/{}", SECURITY_GROUPS_PATH, uuid));
        tracing::debug!(%url, "fetching security group");

        self.send_json(self.http_client.get(url)).await
    }

    async fn scan(&self, security_group_uuid: Uuid, model_uri: &str) -> Result<ScanResult, ApiError> {
        let url = self.endpoint(SCANS_PATH);
        tracing::debug!(%url, %security_group_uuid, model_uri, "starting scan");

        let body = ScanRequest {
            security_group_uuid,
            model_uri,
        };

        self.send_json(self.http_client.post(url).json(&body)).await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
