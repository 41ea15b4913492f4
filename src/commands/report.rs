//! Plain-text formatting shared by the example tools

use std::io::{self, Write};

use crate::models::{Rule, ScanResult};
use crate::utils::env::credential_hint;

pub const WIDTH: usize = 80;

/// `=` separator line
pub fn heavy_rule() -> String {
    "=".repeat(WIDTH)
}

/// `━` separator line used between test sections
pub fn section_rule() -> String {
    "━".repeat(WIDTH)
}

/// Write a single rule as `• <name> <status> <blocking>`
pub fn write_rule_line<W: Write>(out: &mut W, rule: &Rule) -> io::Result<()> {
    writeln!(
        out,
        "     • {:<40} {} {}",
        rule.name,
        rule.status_label(),
        rule.blocking_label()
    )
}

/// Pretty print scan results
pub fn write_scan_result<W: Write>(out: &mut W, model_uri: &str, result: &ScanResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "SCAN RESULTS: {}", model_uri)?;
    writeln!(out, "{}", heavy_rule())?;

    writeln!(out)?;
    writeln!(out, "Overall Verdict: {}", result.eval_outcome)?;

    if let Some(summary) = &result.aggregate_eval_summary {
        writeln!(out)?;
        writeln!(out, "Severity Summary:")?;
        writeln!(out, "  Critical: {}", summary.critical_count)?;
        writeln!(out, "  High:     {}", summary.high_count)?;
        writeln!(out, "  Medium:   {}", summary.medium_count)?;
        writeln!(out, "  Low:      {}", summary.low_count)?;
    }

    let violations = result.violations();
    if result.is_clean() {
        writeln!(out)?;
        writeln!(out, "✓ No violations found - model passed all security checks")?;
    } else {
        writeln!(out)?;
        writeln!(out, "⚠ Found {} violation(s):", violations.len())?;
        for (i, violation) in violations.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "{}. {}", i + 1, violation.threat)?;
            writeln!(out, "   Issue: {}", violation.issue)?;
            writeln!(out, "   File: {}", violation.file)?;

            let steps = violation.remediation_steps();
            if !steps.is_empty() {
                writeln!(out, "   Remediation:")?;
                for step in steps {
                    writeln!(out, "     • {}", step)?;
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", heavy_rule())
}

/// Write a top-level failure followed by the credential hint
///
/// Returns the write error instead of panicking so callers can still exit
/// with their own status when stdout is gone.
pub fn write_failure<W: Write>(out: &mut W, headline: &str) -> io::Result<()> {
    writeln!(out, "{}", headline)?;
    writeln!(out)?;
    writeln!(out, "{}", credential_hint())?;
    out.flush()
}
