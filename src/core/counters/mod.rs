//! Success/error tallies with an atomic snapshot-and-reset
//!
//! Completing tasks increment the live [`Counters`]; once per reporting
//! window the controller swaps in a zeroed instance and keeps the old one.

mod cell;
mod types;


pub use cell::CounterCell;
pub use types::{CounterSnapshot, Counters, TaskOutcome};
