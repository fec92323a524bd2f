//! Chained external/internal task scheduling
//!
//! An external task runs on the external pool, submits an internal task to
//! the internal pool, waits for it with a deadline and then does its own
//! processing. When both roles share one pool, queued callers can starve the
//! workers their own nested calls need.

mod scheduler;
mod task;


pub use scheduler::TaskScheduler;
