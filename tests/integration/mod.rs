//! Integration tests for loopback-deadlock
//!
//! These run real worker threads against real queues; nothing is mocked.

pub mod config_tests;
pub mod deadlock_tests;
pub mod harness_tests;
