//! Scenario table configuration

use super::*;
use serde::{Deserialize, Serialize};

/// One measurement run: a labelled topology driven until throughput settles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Printed before the run starts
    pub label: String,
    pub topology: TopologyConfig,
    /// Number of window samples the stability check looks back over
    #[serde(default = "default_window_capacity")]
    pub window_capacity: usize,
}

/// Full experiment: shared timings plus the ordered scenario table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default)]
    pub task: TaskConfig,
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}
