use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Where a model artifact originates.
///
/// Unrecognized tags decode to `Other` so a newer server never breaks listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    Local,
    HuggingFace,
    S3,
    Azure,
    Gcs,
    Other(String),
}

impl SourceType {
    /// The five source types the service creates default groups for, in display order
    pub const ALL: [SourceType; 5] = [
        SourceType::Local,
        SourceType::HuggingFace,
        SourceType::S3,
        SourceType::Azure,
        SourceType::Gcs,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SourceType::Local => "LOCAL",
            SourceType::HuggingFace => "HUGGING_FACE",
            SourceType::S3 => "S3",
            SourceType::Azure => "AZURE",
            SourceType::Gcs => "GCS",
            SourceType::Other(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "LOCAL" => SourceType::Local,
            "HUGGING_FACE" => SourceType::HuggingFace,
            "S3" => SourceType::S3,
            "AZURE" => SourceType::Azure,
            "GCS" => SourceType::Gcs,
            other => SourceType::Other(other.to_string()),
        }
    }

    /// Human-readable name of the backing storage
    pub fn storage_description(&self) -> &str {
        match self {
            SourceType::Local => "local storage",
            SourceType::HuggingFace => "HuggingFace models",
            SourceType::S3 => "Amazon S3",
            SourceType::Azure => "Azure Blob Storage",
            SourceType::Gcs => "Google Cloud Storage",
            SourceType::Other(_) => "unknown storage",
        }
    }
}

impl From<String> for SourceType {
    fn from(s: String) -> Self {
        SourceType::from_str(&s)
    }
}

impl From<SourceType> for String {
    fn from(source_type: SourceType) -> Self {
        source_type.as_str().to_string()
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy container scoping which scan rules apply to a model source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecurityGroup {
    pub uuid: Uuid,
    pub name: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub description: Option<String>,
}

impl SecurityGroup {
    /// Substring match against the stringified source type tag
    pub fn matches_source(&self, tag: &str) -> bool {
        self.source_type.to_string().contains(tag)
    }

    /// Description for display, `None` when absent or empty
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Response of the list-groups call
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SecurityGroupList {
    #[serde(default)]
    pub security_groups: Vec<SecurityGroup>,
}

/// A single rule attached to a security group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    /// Blocking rules fail the scan; non-blocking rules only warn
    #[serde(default)]
    pub blocking: bool,
}

impl Rule {
    pub fn status_label(&self) -> &'static str {
        if self.enabled {
            "✓ Enabled"
        } else {
            "✗ Disabled"
        }
    }

    pub fn blocking_label(&self) -> &'static str {
        if self.blocking {
            "[BLOCKING]"
        } else {
            "[NON-BLOCKING]"
        }
    }
}

/// Response of the group-detail call
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SecurityGroupDetail {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rules: Option<Vec<Rule>>,
}

impl SecurityGroupDetail {
    pub fn rules(&self) -> &[Rule] {
        self.rules.as_deref().unwrap_or_default()
    }

    pub fn active_rule_count(&self) -> usize {
        self.rules().iter().filter(|r| r.enabled).count()
    }
}
