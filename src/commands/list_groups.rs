//! Security group listing
//!
//! Prints every configured group with its rules. A failed detail fetch is
//! reported inside that group's block and listing continues.

use anyhow::{Context, Result};
use std::io::Write;

use super::report::{heavy_rule, write_rule_line};
use crate::client::ModelSecurityApi;
use crate::models::{SecurityGroup, SourceType};

/// Model URI used in the sample scan invocation
pub const SAMPLE_MODEL_URI: &str = "https://huggingface.co/microsoft/DialoGPT-medium";

/// List all security groups and their rules
///
/// # Errors
/// Returns error if the group list cannot be fetched or output cannot be written.
/// Per-group detail failures are printed, not returned.
pub async fn run<A, W>(api: &A, out: &mut W) -> Result<()>
where
    A: ModelSecurityApi + ?Sized,
    W: Write,
{
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "MODEL SECURITY GROUPS")?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out)?;

    let groups = api
        .list_security_groups()
        .await
        .context("Failed to list security groups")?
        .security_groups;

    if groups.is_empty() {
        write_default_group_guidance(out)?;
        return Ok(());
    }

    writeln!(out, "Found {} security group(s):\n", groups.len())?;

    for (i, group) in groups.iter().enumerate() {
        write_group(api, out, i + 1, group).await?;
    }

    writeln!(out, "{}", heavy_rule())?;
    writeln!(out)?;
    write_sample_command(out, &groups[0])?;

    Ok(())
}

async fn write_group<A, W>(api: &A, out: &mut W, number: usize, group: &SecurityGroup) -> Result<()>
where
    A: ModelSecurityApi + ?Sized,
    W: Write,
{
    writeln!(out, "{}. {}", number, group.name)?;
    writeln!(out, "   UUID: {}", group.uuid)?;
    writeln!(out, "   Source Type: {}", group.source_type)?;
    writeln!(out, "   Description: {}", group.description().unwrap_or("N/A"))?;

    match api.get_security_group(group.uuid).await {
        Ok(detail) => {
            let rules = detail.rules();
            if !rules.is_empty() {
                writeln!(out, "   Active Rules: {}", detail.active_rule_count())?;
                writeln!(out)?;
                writeln!(out, "   Rules:")?;
                for rule in rules {
                    write_rule_line(out, rule)?;
                }
            }
        }
        Err(e) => {
            tracing::warn!(group = %group.uuid, error = %e, "failed to fetch security group detail");
            writeln!(out, "   Rules: Unable to fetch ({})", e)?;
        }
    }

    writeln!(out)?;
    Ok(())
}

fn write_default_group_guidance<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "⚠ No security groups found")?;
    writeln!(out)?;
    writeln!(out, "Security groups are created automatically for each source type.")?;
    writeln!(out, "Expected default groups:")?;
    for source_type in SourceType::ALL.iter() {
        writeln!(
            out,
            "  - Default {} (for {})",
            source_type,
            source_type.storage_description()
        )?;
    }
    Ok(())
}

fn write_sample_command<W: Write>(out: &mut W, group: &SecurityGroup) -> Result<()> {
    writeln!(out, "To scan a model:")?;
    writeln!(out, "  model-security scan \\")?;
    writeln!(out, "    --security-group-uuid \"{}\" \\", group.uuid)?;
    writeln!(out, "    --model-uri \"{}\"", SAMPLE_MODEL_URI)?;
    writeln!(out)?;
    Ok(())
}
