// Model security examples - list security groups and scan models
// Module re-exports

pub mod client;
pub mod commands;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use client::{ApiError, ModelSecurityApi, ModelSecurityClient};
pub use models::{
    Rule, ScanResult, SecurityGroup, SecurityGroupDetail, SecurityGroupList, SourceType, Violation,
};
pub use utils::env::ClientConfig;
