//! HuggingFace model scanning
//!
//! Scans a known safe model (baseline) and a known unsafe model
//! (vulnerability detection) against the HuggingFace security group.

use anyhow::{Context, Result};
use std::io::Write;

use super::report::{heavy_rule, section_rule, write_scan_result};
use crate::client::ModelSecurityApi;

/// Source type tag the scanner selects its group by
pub const HUGGING_FACE_TAG: &str = "HUGGING_FACE";

/// One fixed scan performed by the example
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCase {
    pub title: &'static str,
    pub model_uri: &'static str,
    pub expectation: &'static str,
}

pub const SCAN_CASES: [ScanCase; 2] = [
    ScanCase {
        title: "Scanning Known Safe Model (Baseline)",
        model_uri: "https://huggingface.co/microsoft/DialoGPT-medium",
        expectation: "PASS (clean model from verified organization)",
    },
    ScanCase {
        title: "Scanning Known Unsafe Model (Vulnerability Detection)",
        model_uri: "https://huggingface.co/ykilcher/totally-harmless-model",
        expectation: "FAIL (contains GGUF template injection - PAIT-GGUF-101)",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No group with a HuggingFace source type exists
    MissingGroup,
    Completed { scans_run: usize, scans_failed: usize },
}

impl ScanOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ScanOutcome::Completed { .. })
    }
}

/// Find the HuggingFace group and run both scan cases against it
///
/// # Errors
/// Returns error if the group list cannot be fetched or output cannot be written.
/// A failed scan call is printed and the next case still runs.
pub async fn run<A, W>(api: &A, out: &mut W) -> Result<ScanOutcome>
where
    A: ModelSecurityApi + ?Sized,
    W: Write,
{
    let groups = api
        .list_security_groups()
        .await
        .context("Failed to list security groups")?
        .security_groups;

    let Some(group) = groups.iter().find(|g| g.matches_source(HUGGING_FACE_TAG)) else {
        writeln!(out, "ERROR: No HuggingFace security group found")?;
        writeln!(out, "Default groups should be created automatically")?;
        return Ok(ScanOutcome::MissingGroup);
    };

    writeln!(out, "Using security group: {} ({})", group.name, group.uuid)?;

    let mut scans_failed = 0;
    for (i, case) in SCAN_CASES.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}", section_rule())?;
        writeln!(out, "TEST {}: {}", i + 1, case.title)?;
        writeln!(out, "{}", section_rule())?;
        writeln!(out, "Model: {}", case.model_uri)?;
        writeln!(out, "Expected: {}", case.expectation)?;
        writeln!(out)?;

        match api.scan(group.uuid, case.model_uri).await {
            Ok(result) => write_scan_result(out, case.model_uri, &result)?,
            Err(e) => {
                scans_failed += 1;
                tracing::warn!(model_uri = case.model_uri, error = %e, "scan failed");
                writeln!(out, "ERROR during scan: {}", e)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "SCAN COMPLETE")?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out)?;
    writeln!(out, "For more details, view scan results in Strata Cloud Manager:")?;
    writeln!(out, "  Insights > Prisma AIRS > Model Security > Scans")?;
    writeln!(out)?;

    Ok(ScanOutcome::Completed {
        scans_run: SCAN_CASES.len(),
        scans_failed,
    })
}
