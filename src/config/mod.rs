//! Configuration management for the experiment
//!
//! The scenario table is compiled into the binary; there are no flags,
//! environment variables or runtime files.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::Result;
use tracing::debug;

/// Scenario table shipped with the binary
const BUILTIN_EXPERIMENT: &str = include_str!("../../config/experiment.yaml");

impl ExperimentConfig {
    /// The three fixed scenarios: shared pool with a large queue, shared pool
    /// with a small queue, and isolated pools.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_EXPERIMENT)
    }

    /// Parse and validate an experiment from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: ExperimentConfig = serde_yaml::from_str(content)?;
        config.validate()?;

        debug!(
            scenarios = config.scenarios.len(),
            "Experiment configuration loaded"
        );
        Ok(config)
    }
}
