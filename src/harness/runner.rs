//! Scenario runner

use super::topology::PoolTopology;
use crate::config::{ControllerConfig, ExperimentConfig, ScenarioConfig, TaskConfig};
use crate::core::load_generator::LoadGenerator;
use crate::core::pool::PoolStats;
use crate::core::report::{Reporter, StabilityReport};
use crate::core::stability::{Interrupt, StabilityController};
use crate::utils::error::Result;
use crate::utils::format_duration;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Measurement of one scenario
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub label: String,
    pub stability: StabilityReport,
    /// Pool stats taken after shutdown
    pub pools: Vec<PoolStats>,
}

/// Runs scenarios one after another, each on freshly built pools
pub struct Harness {
    task: TaskConfig,
    controller: ControllerConfig,
    reporter: Arc<dyn Reporter>,
}

impl Harness {
    pub fn new(task: TaskConfig, controller: ControllerConfig, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            task,
            controller,
            reporter,
        }
    }

    pub fn from_experiment(experiment: &ExperimentConfig, reporter: Arc<dyn Reporter>) -> Self {
        Self::new(experiment.task, experiment.controller, reporter)
    }

    /// Run every scenario in order, stopping at the first failure
    pub async fn run_all(
        &self,
        scenarios: &[ScenarioConfig],
        interrupt: &mut Interrupt,
    ) -> Result<Vec<ScenarioReport>> {
        let mut reports = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            reports.push(self.run_scenario(scenario, interrupt).await?);
        }
        Ok(reports)
    }

    /// Build the topology, drive it to stability and shut it down.
    ///
    /// The pools are shut down on every exit path, including errors from the
    /// control loop.
    pub async fn run_scenario(
        &self,
        scenario: &ScenarioConfig,
        interrupt: &mut Interrupt,
    ) -> Result<ScenarioReport> {
        let started = Instant::now();
        info!(
            scenario = %scenario.label,
            window_capacity = scenario.window_capacity,
            "Starting scenario"
        );
        self.reporter.label(&scenario.label);

        let topology = PoolTopology::build(&scenario.topology)?;
        let scheduler = topology.scheduler(self.task);
        let mut controller = StabilityController::new(
            LoadGenerator::new(Arc::new(scheduler)),
            self.controller,
            scenario.window_capacity,
            self.reporter.clone(),
        );

        let outcome = controller.run(interrupt).await;
        let pools = topology.close().await;

        let stability = match outcome {
            Ok(stability) => stability,
            Err(e) => {
                warn!(scenario = %scenario.label, error = %e, "Scenario aborted");
                return Err(e);
            }
        };
        let pools = pools?;
        self.reporter.finished();

        info!(
            scenario = %scenario.label,
            throughput = stability.stable_throughput,
            elapsed = %format_duration(started.elapsed()),
            "Scenario finished"
        );
        Ok(ScenarioReport {
            label: scenario.label.clone(),
            stability,
            pools,
        })
    }
}
