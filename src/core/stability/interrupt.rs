//! Cooperative cancellation of the control loop
//!
//! Pacing waits run on the blocking pool against an absolute deadline:
//! tokio's timer wheel rounds every sleep up to the next millisecond, which
//! at one or two milliseconds per tick would cap the offered rate well below
//! the nominal one.

use crate::utils::error::{LoopbackError, Result};
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Create a linked trigger/listener pair
pub fn interrupt_channel() -> (InterruptHandle, Interrupt) {
    let (flag_tx, flag_rx) = watch::channel(false);
    let (wake_tx, wake_rx) = channel::bounded(1);
    (
        InterruptHandle {
            flag: flag_tx,
            wake: wake_tx.clone(),
        },
        Interrupt {
            flag: flag_rx,
            _wake_tx: wake_tx,
            wake_rx,
        },
    )
}

/// Trigger side
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    flag: watch::Sender<bool>,
    wake: Sender<()>,
}

impl InterruptHandle {
    pub fn trigger(&self) {
        self.flag.send_replace(true);
        // Full means a wake-up is already pending.
        let _ = self.wake.try_send(());
    }
}

/// Listener side; sleeps through it end early once triggered
#[derive(Debug, Clone)]
pub struct Interrupt {
    flag: watch::Receiver<bool>,
    /// Keeps the wake channel connected after every handle is gone
    _wake_tx: Sender<()>,
    wake_rx: Receiver<()>,
}

impl Interrupt {
    /// A listener whose trigger is already gone
    pub fn never() -> Self {
        interrupt_channel().1
    }

    pub fn is_triggered(&self) -> bool {
        *self.flag.borrow()
    }

    /// Sleep for `duration` unless interrupted first.
    ///
    /// A zero duration does not sleep at all; it only yields to the runtime.
    pub async fn sleep(&mut self, duration: Duration) -> Result<()> {
        if self.is_triggered() {
            return Err(interrupted());
        }

        if duration.is_zero() {
            tokio::task::yield_now().await;
            return Ok(());
        }

        let deadline = Instant::now() + duration;
        let wake = self.wake_rx.clone();
        let woken = tokio::task::spawn_blocking(move || wait_until(&wake, deadline))
            .await
            .map_err(|e| LoopbackError::internal(format!("pacing wait failed: {}", e)))?;

        if woken || self.is_triggered() {
            Err(interrupted())
        } else {
            Ok(())
        }
    }
}

/// Park until `deadline` or a wake-up. Returns whether it was woken.
fn wait_until(wake: &Receiver<()>, deadline: Instant) -> bool {
    !matches!(wake.recv_deadline(deadline), Err(RecvTimeoutError::Timeout))
}

fn interrupted() -> LoopbackError {
    LoopbackError::interrupted("control loop interrupted during pacing sleep")
}
