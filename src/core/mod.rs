//! Core of the experiment
//!
//! Leaf first: counters, worker pools, the chained task scheduler, the load
//! generator, reports and the stability controller that ties them together.

pub mod counters;
pub mod load_generator;
pub mod pool;
pub mod report;
pub mod scheduler;
pub mod stability;

// Re-export commonly used types
pub use counters::{CounterCell, CounterSnapshot, Counters, TaskOutcome};
pub use load_generator::{LoadGenerator, Workload};
pub use pool::{Awaited, PoolStats, WorkerContext, WorkerPool};
pub use report::{MemoryReporter, Reporter, StabilityReport, StdoutReporter, WindowReport};
pub use scheduler::TaskScheduler;
pub use stability::{
    ControllerState, Interrupt, InterruptHandle, StabilityController, StabilityWindow,
    WindowStats, interrupt_channel,
};
