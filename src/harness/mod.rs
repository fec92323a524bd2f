//! Scenario harness
//!
//! Builds each configured pool topology, drives it to stability and tears
//! the pools down again whatever the outcome.

mod runner;
mod signal;
mod topology;


pub use runner::{Harness, ScenarioReport};
pub use signal::{StopSignal, spawn_signal_listener, stop_signal};
pub use topology::PoolTopology;
