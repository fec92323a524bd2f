//! Closed-loop stability detection
//!
//! The controller paces submissions at the current offered rate, raises the
//! rate after every reporting window and stops once the recent per-window
//! success counts stop moving by more than one rate step.

mod controller;
mod interrupt;
mod pacing;
mod types;
mod window;


pub use controller::StabilityController;
pub use interrupt::{Interrupt, InterruptHandle, interrupt_channel};
pub use pacing::pacing_delay;
pub use types::{ControllerState, RateState};
pub use window::{StabilityWindow, WindowStats};
