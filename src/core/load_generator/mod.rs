//! Open-loop load generation
//!
//! Submission is fire-and-forget: outcomes are only observed through the
//! workload's counters.

mod generator;
mod workload;


pub use generator::LoadGenerator;
pub use workload::Workload;

#[cfg(test)]
pub use workload::MockWorkload;
