//! Common test helpers for integration tests
//!
//! Provides an in-memory `ModelSecurityApi` that serves canned responses
//! and records every call it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use model_security::models::{
    AggregateEvalSummary, Remediation, Rule, ScanResult, SecurityGroup, SecurityGroupDetail,
    SecurityGroupList, SourceType, Violation,
};
use model_security::{ApiError, ModelSecurityApi};
use reqwest::StatusCode;
use uuid::Uuid;

/// A call received by [`FakeApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Detail(Uuid),
    Scan(Uuid, String),
}

/// Canned response source for the commands under test
#[derive(Default)]
pub struct FakeApi {
    groups: Vec<SecurityGroup>,
    details: HashMap<Uuid, SecurityGroupDetail>,
    failing_details: HashMap<Uuid, String>,
    scans: HashMap<String, ScanResult>,
    failing_scans: HashMap<String, String>,
    list_error: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: SecurityGroup, detail: SecurityGroupDetail) -> Self {
        self.details.insert(group.uuid, detail);
        self.groups.push(group);
        self
    }

    pub fn with_failing_group(mut self, group: SecurityGroup, message: &str) -> Self {
        self.failing_details.insert(group.uuid, message.to_string());
        self.groups.push(group);
        self
    }

    pub fn with_list_error(mut self, message: &str) -> Self {
        self.list_error = Some(message.to_string());
        self
    }

    pub fn with_scan(mut self, model_uri: &str, result: ScanResult) -> Self {
        self.scans.insert(model_uri.to_string(), result);
        self
    }

    pub fn with_failing_scan(mut self, model_uri: &str, message: &str) -> Self {
        self.failing_scans
            .insert(model_uri.to_string(), message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn scan_calls(&self) -> Vec<(Uuid, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Scan(uuid, uri) => Some((uuid, uri)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn unavailable(message: &str) -> ApiError {
    ApiError::Status {
        status: StatusCode::SERVICE_UNAVAILABLE,
        body: message.to_string(),
    }
}

#[async_trait]
impl ModelSecurityApi for FakeApi {
    async fn list_security_groups(&self) -> Result<SecurityGroupList, ApiError> {
        self.record(Call::List);
        if let Some(message) = &self.list_error {
            return Err(unavailable(message));
        }
        Ok(SecurityGroupList {
            security_groups: self.groups.clone(),
        })
    }

    async fn get_security_group(&self, uuid: Uuid) -> Result<SecurityGroupDetail, ApiError> {
        self.record(Call::Detail(uuid));
        if let Some(message) = self.failing_details.get(&uuid) {
            return Err(unavailable(message));
        }
        Ok(self.details.get(&uuid).cloned().unwrap_or_default())
    }

    async fn scan(&self, security_group_uuid: Uuid, model_uri: &str) -> Result<ScanResult, ApiError> {
        self.record(Call::Scan(security_group_uuid, model_uri.to_string()));
        if let Some(message) = self.failing_scans.get(model_uri) {
            return Err(unavailable(message));
        }
        self.scans
            .get(model_uri)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: StatusCode::NOT_FOUND,
                body: format!("no canned result for {}", model_uri),
            })
    }
}

pub fn group(n: u128, source_type: SourceType) -> SecurityGroup {
    SecurityGroup {
        uuid: Uuid::from_u128(n),
        name: format!("Default {}", source_type),
        source_type,
        description: None,
    }
}

pub fn detail_with_rules(rules: &[(&str, bool, bool)]) -> SecurityGroupDetail {
    SecurityGroupDetail {
        rules: Some(
            rules
                .iter()
                .map(|(name, enabled, blocking)| Rule {
                    name: name.to_string(),
                    enabled: *enabled,
                    blocking: *blocking,
                })
                .collect(),
        ),
        ..Default::default()
    }
}

pub fn clean_scan() -> ScanResult {
    ScanResult {
        eval_outcome: "ALLOWED".to_string(),
        aggregate_eval_summary: Some(AggregateEvalSummary::default()),
        violations: Some(vec![]),
    }
}

pub fn blocked_scan() -> ScanResult {
    ScanResult {
        eval_outcome: "BLOCKED".to_string(),
        aggregate_eval_summary: Some(AggregateEvalSummary {
            critical_count: 1,
            high_count: 0,
            medium_count: 0,
            low_count: 0,
        }),
        violations: Some(vec![Violation {
            threat: "PAIT-GGUF-101".to_string(),
            issue: "GGUF chat template allows arbitrary code execution".to_string(),
            file: "totally-harmless-model.gguf".to_string(),
            remediation: Some(Remediation {
                steps: vec![
                    "Do not load this model".to_string(),
                    "Report the repository to the model hub".to_string(),
                ],
            }),
        }]),
    }
}
