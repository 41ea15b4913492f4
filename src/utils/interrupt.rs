//! Ctrl-C handling for the binaries

use std::future::Future;
use std::io;

/// Drive `work` to completion unless `interrupt` resolves first
///
/// Returns `None` when interrupted. An `Err` from `interrupt` (signal handler
/// could not be registered) disables interruption instead of ending the run.
pub async fn run_until_interrupted<F, S>(work: F, interrupt: S) -> Option<F::Output>
where
    F: Future,
    S: Future<Output = io::Result<()>>,
{
    tokio::select! {
        output = work => Some(output),
        Ok(()) = interrupt => None,
    }
}

/// [`run_until_interrupted`] against the process Ctrl-C signal
pub async fn run_until_ctrl_c<F: Future>(work: F) -> Option<F::Output> {
    run_until_interrupted(work, tokio::signal::ctrl_c()).await
}
