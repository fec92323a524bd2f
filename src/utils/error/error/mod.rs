//! Error handling for the experiment
//!
//! This module defines all error types used throughout the crate.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{LoopbackError, PoolRejection, Result};
