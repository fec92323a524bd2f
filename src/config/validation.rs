//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use crate::utils::error::{LoopbackError, Result};
use std::collections::HashSet;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for ExperimentConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating experiment configuration");

        self.task.validate()?;
        self.controller.validate()?;

        if self.scenarios.is_empty() {
            return Err(LoopbackError::config(
                "At least one scenario must be configured",
            ));
        }

        for scenario in &self.scenarios {
            scenario.validate()?;
        }

        Ok(())
    }
}

impl Validate for TaskConfig {
    fn validate(&self) -> Result<()> {
        if self.processing_time_ms == 0 {
            return Err(LoopbackError::config(
                "Task processing time must be greater than 0",
            ));
        }

        if self.internal_timeout_ms == 0 {
            return Err(LoopbackError::config(
                "Internal call timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Validate for ControllerConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_rate == 0 {
            return Err(LoopbackError::config(
                "Initial rate must be at least 1 request per second",
            ));
        }

        if self.rate_increment == 0 {
            return Err(LoopbackError::config(
                "Rate increment must be greater than 0",
            ));
        }

        if self.report_interval_ms == 0 {
            return Err(LoopbackError::config(
                "Report interval must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(LoopbackError::config("Scenario label cannot be empty"));
        }

        if self.window_capacity == 0 {
            return Err(LoopbackError::config(format!(
                "Scenario '{}' window capacity must be greater than 0",
                self.label
            )));
        }

        self.topology.validate()
    }
}

impl Validate for TopologyConfig {
    fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for pool in self.pools() {
            pool.validate()?;
            if !names.insert(pool.name.as_str()) {
                return Err(LoopbackError::config(format!(
                    "Duplicate pool name '{}' in isolated topology",
                    pool.name
                )));
            }
        }
        Ok(())
    }
}

impl Validate for PoolConfig {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LoopbackError::config("Pool name cannot be empty"));
        }

        if self.workers == 0 {
            return Err(LoopbackError::config(format!(
                "Pool '{}' must have at least one worker",
                self.name
            )));
        }

        if self.queue_capacity == 0 {
            return Err(LoopbackError::config(format!(
                "Pool '{}' queue capacity must be greater than 0",
                self.name
            )));
        }

        Ok(())
    }
}
