use std::io::{self, Write};
use std::process;

use model_security::commands::{report, scan_model, ScanOutcome};
use model_security::utils::{env, interrupt, logging};
use model_security::ModelSecurityClient;

// Scans a known safe and a known unsafe HuggingFace model and prints both results.
// Usage: cargo run --bin scan_huggingface_model
// Exits 1 when no HuggingFace security group exists.
#[tokio::main]
async fn main() {
    env::load_env().ok();
    logging::init_tracing();

    match interrupt::run_until_ctrl_c(run()).await {
        Some(Ok(outcome)) if outcome.is_success() => {}
        Some(Ok(_)) => process::exit(1),
        Some(Err(e)) => {
            // stdout may be the thing that failed; exit 1 regardless
            let _ = report::write_failure(&mut io::stdout(), &format!("\nFATAL ERROR: {:#}", e));
            process::exit(1);
        }
        None => {
            let _ = writeln!(io::stdout(), "\n\nScan interrupted by user");
            process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<ScanOutcome> {
    let client = ModelSecurityClient::from_env()?;
    tracing::debug!(base_url = client.base_url(), "client configured");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = scan_model::run(&client, &mut out).await?;

    if let ScanOutcome::Completed { scans_run, scans_failed } = outcome {
        tracing::info!(scans_run, scans_failed, "scan run finished");
    }
    Ok(outcome)
}
