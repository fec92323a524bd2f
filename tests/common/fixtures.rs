//! Test fixtures and polling helpers

use loopback_deadlock::TaskScheduler;
use loopback_deadlock::config::{
    ControllerConfig, PoolConfig, ScenarioConfig, TaskConfig, TopologyConfig,
};
use loopback_deadlock::core::CounterSnapshot;
use std::time::{Duration, Instant};

/// Task timings with the given processing time and internal deadline
pub fn fast_task(processing_time_ms: u64, internal_timeout_ms: u64) -> TaskConfig {
    TaskConfig {
        processing_time_ms,
        internal_timeout_ms,
    }
}

/// Controller that closes a window every `report_interval_ms`
pub fn fast_controller(report_interval_ms: u64) -> ControllerConfig {
    ControllerConfig {
        initial_rate: 30,
        rate_increment: 10,
        report_interval_ms,
    }
}

pub fn shared_scenario(label: &str, workers: usize, queue_capacity: usize) -> ScenarioConfig {
    ScenarioConfig {
        label: label.to_string(),
        topology: TopologyConfig::Shared {
            pool: PoolConfig::new("shared", workers, queue_capacity),
        },
        window_capacity: 3,
    }
}

pub fn isolated_scenario(label: &str, workers: usize, queue_capacity: usize) -> ScenarioConfig {
    ScenarioConfig {
        label: label.to_string(),
        topology: TopologyConfig::Isolated {
            external: PoolConfig::new("external", workers, queue_capacity),
            internal: PoolConfig::new("internal", workers, queue_capacity),
        },
        window_capacity: 3,
    }
}

/// Poll the scheduler's live counters until `expected` outcomes are
/// recorded, giving up after ten seconds
pub fn wait_for_outcomes(scheduler: &TaskScheduler, expected: u64) -> CounterSnapshot {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let snapshot = scheduler.counters().peek();
        if snapshot.total() >= expected || Instant::now() >= deadline {
            return snapshot;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}
