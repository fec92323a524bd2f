//! # loopback-deadlock
//!
//! A controlled experiment showing how a service that makes *loopback* calls
//! through a bounded worker pool deadlocks under load.
//!
//! Each external task submits an internal task and waits for it with a
//! deadline. When both share one pool with a deep queue, internal tasks wait
//! behind queued callers until the deadline passes, so callers fail while the
//! pool stays busy. A shallow queue fails fast instead, and a separate pool
//! for internal calls avoids the problem entirely.
//!
//! ## Features
//!
//! - **Bounded pools**: fixed workers, bounded FIFO queue, non-blocking admission
//! - **Chained tasks**: nested call with a deadline and no retries
//! - **Closed-loop load**: rate ramps every window until throughput settles
//! - **Exact windows**: counters are swapped atomically, never double counted
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use loopback_deadlock::{Experiment, ExperimentConfig, StdoutReporter};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExperimentConfig::builtin()?;
//!     let experiment = Experiment::new(config, Arc::new(StdoutReporter::new()));
//!     experiment.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod harness;
pub mod utils;

// Re-export main types
pub use config::{ExperimentConfig, ScenarioConfig, TopologyConfig};
pub use core::{
    CounterSnapshot, Interrupt, MemoryReporter, Reporter, StabilityReport, StdoutReporter,
    TaskScheduler, WorkerPool, interrupt_channel,
};
pub use harness::{Harness, ScenarioReport};
pub use utils::error::{LoopbackError, Result};

use std::sync::Arc;
use tracing::info;

/// The configured scenario table plus the harness that runs it
pub struct Experiment {
    config: ExperimentConfig,
    harness: Harness,
}

impl Experiment {
    pub fn new(config: ExperimentConfig, reporter: Arc<dyn Reporter>) -> Self {
        let harness = Harness::from_experiment(&config, reporter);
        Self { config, harness }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Run every scenario, interrupting the current one on Ctrl+C or SIGTERM
    pub async fn run(&self) -> Result<Vec<ScenarioReport>> {
        let (handle, mut interrupt) = interrupt_channel();
        let listener = harness::spawn_signal_listener(handle);

        let result = self.run_with_interrupt(&mut interrupt).await;
        listener.abort();
        result
    }

    /// Run every scenario under an externally owned interrupt
    pub async fn run_with_interrupt(
        &self,
        interrupt: &mut Interrupt,
    ) -> Result<Vec<ScenarioReport>> {
        info!(
            version = VERSION,
            scenarios = self.config.scenarios.len(),
            "Starting loopback deadlock experiment"
        );
        self.harness.run_all(&self.config.scenarios, interrupt).await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
