// Model security API response models

pub mod scan_result;
pub mod security_group;

// Re-exports for convenience
pub use scan_result::{AggregateEvalSummary, Remediation, ScanResult, Violation};
pub use security_group::{Rule, SecurityGroup, SecurityGroupDetail, SecurityGroupList, SourceType};
