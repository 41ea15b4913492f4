//! Integration tests for the security group listing report

mod common;

use common::{detail_with_rules, group, Call, FakeApi};
use model_security::commands::list_groups;
use model_security::SourceType;
use uuid::Uuid;

async fn render(api: &FakeApi) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    list_groups::run(api, &mut buf).await?;
    Ok(String::from_utf8(buf)?)
}

#[tokio::test]
async fn test_empty_list_only_lists_defaults() {
    let api = FakeApi::new();

    let output = render(&api).await.unwrap();

    assert_eq!(api.calls(), vec![Call::List]);
    assert!(output.starts_with(&format!("{}\nMODEL SECURITY GROUPS\n", "=".repeat(80))));
    assert_eq!(output.matches("  - Default ").count(), 5);
    assert!(!output.contains("To scan a model"));
    assert!(!output.contains("Found"));
}

#[tokio::test]
async fn test_every_group_gets_a_detail_fetch_in_order() {
    let api = FakeApi::new()
        .with_group(
            group(10, SourceType::HuggingFace),
            detail_with_rules(&[
                ("Known Framework Operators Check", true, true),
                ("Load Time Code Execution Check", true, true),
                ("Suspicious Model Components", false, true),
            ]),
        )
        .with_group(group(11, SourceType::Local), detail_with_rules(&[]))
        .with_group(
            group(12, SourceType::Gcs),
            detail_with_rules(&[("License Exists", true, false)]),
        );

    let output = render(&api).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![
            Call::List,
            Call::Detail(Uuid::from_u128(10)),
            Call::Detail(Uuid::from_u128(11)),
            Call::Detail(Uuid::from_u128(12)),
        ]
    );

    let positions: Vec<usize> = ["1. Default HUGGING_FACE", "2. Default LOCAL", "3. Default GCS"]
        .iter()
        .map(|needle| output.find(needle).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(output.contains("   Active Rules: 2"));
    assert!(output.contains("   Active Rules: 1"));
    assert_eq!(output.matches("   Description: N/A").count(), 3);
    assert!(output.contains(&format!(
        "--security-group-uuid \"{}\"",
        Uuid::from_u128(10)
    )));
}

#[tokio::test]
async fn test_failed_detail_does_not_abort_listing() {
    let api = FakeApi::new()
        .with_failing_group(group(1, SourceType::S3), "connection reset by peer")
        .with_group(
            group(2, SourceType::Azure),
            detail_with_rules(&[("Stored In Approved Format", true, true)]),
        );

    let output = render(&api).await.unwrap();

    assert!(output.contains("   Rules: Unable to fetch (API error (503 Service Unavailable): connection reset by peer)"));
    let failure = output.find("Unable to fetch").unwrap();
    let next_group = output.find("2. Default AZURE").unwrap();
    assert!(failure < next_group);
    assert!(output.contains("   Active Rules: 1"));
    assert!(output.contains("To scan a model:"));
}

#[tokio::test]
async fn test_list_error_is_returned() {
    let api = FakeApi::new().with_list_error("maintenance window");

    let err = render(&api).await.unwrap_err();

    assert!(format!("{:#}", err).contains("maintenance window"));
    assert_eq!(api.calls(), vec![Call::List]);
}
