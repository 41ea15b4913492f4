use serde::{Deserialize, Serialize};

/// Per-severity violation counts for a whole scan
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregateEvalSummary {
    #[serde(default)]
    pub critical_count: u32,
    #[serde(default)]
    pub high_count: u32,
    #[serde(default)]
    pub medium_count: u32,
    #[serde(default)]
    pub low_count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Remediation {
    #[serde(default)]
    pub steps: Vec<String>,
}

/// A single issue detected in a scanned model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    #[serde(default)]
    pub threat: String,
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub remediation: Option<Remediation>,
}

impl Violation {
    pub fn remediation_steps(&self) -> &[String] {
        self.remediation
            .as_ref()
            .map(|r| r.steps.as_slice())
            .unwrap_or_default()
    }
}

/// Outcome of scanning one model against a security group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanResult {
    pub eval_outcome: String,
    #[serde(default)]
    pub aggregate_eval_summary: Option<AggregateEvalSummary>,
    #[serde(default)]
    pub violations: Option<Vec<Violation>>,
}

impl ScanResult {
    pub fn violations(&self) -> &[Violation] {
        self.violations.as_deref().unwrap_or_default()
    }

    pub fn is_clean(&self) -> bool {
        self.violations().is_empty()
    }
}
