//! Stability controller

use super::interrupt::Interrupt;
use super::pacing::pacing_delay;
use super::types::{ControllerState, RateState};
use super::window::StabilityWindow;
use crate::config::ControllerConfig;
use crate::core::load_generator::LoadGenerator;
use crate::core::report::{Reporter, StabilityReport, WindowReport};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Drives a [`LoadGenerator`] at a ramping rate until throughput settles
pub struct StabilityController {
    generator: LoadGenerator,
    config: ControllerConfig,
    window: StabilityWindow,
    rate: RateState,
    state: ControllerState,
    reporter: Arc<dyn Reporter>,
    windows: Vec<WindowReport>,
    ticks_at_window_start: u64,
}

impl StabilityController {
    pub fn new(
        generator: LoadGenerator,
        config: ControllerConfig,
        window_capacity: usize,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            generator,
            config,
            window: StabilityWindow::new(window_capacity),
            rate: RateState::new(config.initial_rate),
            state: ControllerState::Running,
            reporter,
            windows: Vec::new(),
            ticks_at_window_start: 0,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn generator(&self) -> &LoadGenerator {
        &self.generator
    }

    /// Run the control loop until stable.
    ///
    /// The loop never waits on task completion, only on its own pacing
    /// sleep. An interrupt during that sleep aborts the run with
    /// `Interrupted`.
    pub async fn run(&mut self, interrupt: &mut Interrupt) -> Result<StabilityReport> {
        self.rate.last_increase = Instant::now();
        self.ticks_at_window_start = self.generator.ticks();

        while self.state == ControllerState::Running {
            let tick_start = Instant::now();
            self.generator.tick();

            if self.rate.last_increase.elapsed() >= self.config.report_interval() {
                self.close_window();
                if self.state == ControllerState::Stable {
                    break;
                }
            }

            let delay = pacing_delay(tick_start, Instant::now(), self.rate.current_rate);
            interrupt.sleep(delay).await?;
        }

        let stats = self.window.stats();
        let report = StabilityReport {
            stable_throughput: stats.mean,
            std_dev: stats.std_dev,
            final_rate: self.rate.current_rate,
            windows: std::mem::take(&mut self.windows),
        };

        info!(
            throughput = stats.mean,
            std_dev = stats.std_dev,
            windows = report.windows.len(),
            "Throughput stable"
        );
        self.reporter.stable(&report);
        Ok(report)
    }

    /// Snapshot the counters, report, raise the rate and re-check stability
    fn close_window(&mut self) {
        self.rate.last_increase = Instant::now();

        let snapshot = self.generator.workload().take_counters();
        let ticks = self.generator.ticks();
        let report = WindowReport {
            rate: self.rate.current_rate,
            success: snapshot.success_count,
            errors: snapshot.error_count,
            ticks: ticks - self.ticks_at_window_start,
        };
        self.ticks_at_window_start = ticks;

        self.reporter.window(&report);
        self.windows.push(report);
        self.rate.current_rate += self.config.rate_increment;

        self.window.push(snapshot.success_count);
        let stats = self.window.stats();
        debug!(
            mean = stats.mean,
            std_dev = stats.std_dev,
            samples = self.window.len(),
            capacity = self.window.capacity(),
            next_rate = self.rate.current_rate,
            rejected_total = self.generator.rejected(),
            "Window closed"
        );

        if self.window.is_stable(self.config.rate_increment as f64) {
            self.state = ControllerState::Stable;
        }
    }
}
