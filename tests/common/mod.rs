//! Common test utilities for loopback-deadlock
//!
//! Timings here are shrunk versions of the built-in ones so the deadlock
//! shows up in milliseconds rather than seconds.

pub mod fixtures;

pub use fixtures::{
    fast_controller, fast_task, isolated_scenario, shared_scenario, wait_for_outcomes,
};
