//! Commands run by the example binaries
//!
//! Each command is generic over [`crate::client::ModelSecurityApi`] and
//! writes its report to any `io::Write` sink.

pub mod list_groups;
pub mod report;
pub mod scan_model;

pub use scan_model::{ScanCase, ScanOutcome, SCAN_CASES};
