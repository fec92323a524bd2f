//! loopback-demo - runs the three fixed pool topologies to stability
//!
//! Report lines go to stdout, diagnostics to stderr.

#![allow(missing_docs)]

use loopback_deadlock::utils::logging::init_tracing;
use loopback_deadlock::{Experiment, ExperimentConfig, Result, StdoutReporter};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(kind = e.kind(), error = ?e, "Experiment failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = ExperimentConfig::builtin()?;
    let experiment = Experiment::new(config, Arc::new(StdoutReporter::new()));
    experiment.run().await?;
    Ok(())
}
