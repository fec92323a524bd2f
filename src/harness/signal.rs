//! Stop signals for a running experiment

use crate::core::stability::InterruptHandle;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Signal that asked the experiment to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSignal {
    /// Ctrl+C
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl StopSignal {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Wait for the first stop signal.
///
/// A signal whose handler cannot be installed is logged and never fires.
pub async fn stop_signal() -> StopSignal {
    tokio::select! {
        _ = interrupt() => StopSignal::Interrupt,
        _ = terminate() => StopSignal::Terminate,
    }
}

/// Trigger `handle` on the first stop signal
pub fn spawn_signal_listener(handle: InterruptHandle) -> JoinHandle<()> {
    tokio::spawn(async move {
        let signal = stop_signal().await;
        info!(signal = signal.name(), "Stopping the current scenario");
        handle.trigger();
    })
}

async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(signal = StopSignal::Interrupt.name(), error = %e, "Signal handler unavailable");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    let stream = signal(SignalKind::terminate());
    let received = match stream {
        Ok(mut stream) => stream.recv().await.is_some(),
        Err(e) => {
            warn!(signal = StopSignal::Terminate.name(), error = %e, "Signal handler unavailable");
            false
        }
    };
    if !received {
        std::future::pending::<()>().await;
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
