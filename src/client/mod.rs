//! Model security API client
//!
//! `ModelSecurityApi` is the seam the commands are written against;
//! `ModelSecurityClient` is the HTTP implementation.

pub mod api_client;
pub mod auth;
pub mod error;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{ScanResult, SecurityGroupDetail, SecurityGroupList};

pub use api_client::{ModelSecurityClient, ScanRequest};
pub use auth::AccessToken;
pub use error::ApiError;

/// Operations the example tools need from the remote service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelSecurityApi: Send + Sync {
    /// Fetch every configured security group
    async fn list_security_groups(&self) -> Result<SecurityGroupList, ApiError>;

    /// Fetch one group including its rules
    async fn get_security_group(&self, uuid: Uuid) -> Result<SecurityGroupDetail, ApiError>;

    /// Scan a model artifact against a security group
    async fn scan(&self, security_group_uuid: Uuid, model_uri: &str) -> Result<ScanResult, ApiError>;
}
