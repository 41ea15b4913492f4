use std::io::{self, Write};
use std::process;

use model_security::commands::{list_groups, report};
use model_security::utils::{env, interrupt, logging};
use model_security::ModelSecurityClient;

// Lists every model security group with its rules.
// Usage: cargo run --bin list_security_groups
// Credentials come from MODEL_SECURITY_CLIENT_ID, MODEL_SECURITY_CLIENT_SECRET and TSG_ID (or .env).
#[tokio::main]
async fn main() {
    env::load_env().ok();
    logging::init_tracing();

    match interrupt::run_until_ctrl_c(run()).await {
        Some(Ok(())) => {}
        Some(Err(e)) => {
            // stdout may be the thing that failed; exit 1 regardless
            let _ = report::write_failure(&mut io::stdout(), &format!("ERROR: {:#}", e));
            process::exit(1);
        }
        None => {
            let _ = writeln!(io::stdout(), "\n\nInterrupted by user");
            process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let client = ModelSecurityClient::from_env()?;
    tracing::debug!(base_url = client.base_url(), "client configured");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    list_groups::run(&client, &mut out).await
}
