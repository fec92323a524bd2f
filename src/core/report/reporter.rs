//! Report sinks

use super::types::{StabilityReport, WindowReport};
use parking_lot::Mutex;
use std::io::Write;
use tracing::warn;

/// Receives the human-readable progress of each scenario
pub trait Reporter: Send + Sync {
    /// Scenario label, printed before the run
    fn label(&self, label: &str);

    /// One line per closed window
    fn window(&self, report: &WindowReport);

    /// Terminal line once throughput settles
    fn stable(&self, report: &StabilityReport);

    /// Separator after a scenario
    fn finished(&self);
}

/// Writes report lines to stdout
#[derive(Debug, Default)]
pub struct StdoutReporter;

impl StdoutReporter {
    pub fn new() -> Self {
        Self
    }

    fn write_line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
            warn!(error = %e, "Failed to write report line");
        }
    }
}

impl Reporter for StdoutReporter {
    fn label(&self, label: &str) {
        self.write_line(label);
    }

    fn window(&self, report: &WindowReport) {
        self.write_line(&report.to_string());
    }

    fn stable(&self, report: &StabilityReport) {
        self.write_line(&stable_line(report));
    }

    fn finished(&self) {
        self.write_line("");
    }
}

/// Keeps report lines in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    fn push(&self, line: String) {
        self.lines.lock().push(line);
    }
}

impl Reporter for MemoryReporter {
    fn label(&self, label: &str) {
        self.push(label.to_string());
    }

    fn window(&self, report: &WindowReport) {
        self.push(report.to_string());
    }

    fn stable(&self, report: &StabilityReport) {
        self.push(stable_line(report));
    }

    fn finished(&self) {
        self.push(String::new());
    }
}

fn stable_line(report: &StabilityReport) -> String {
    format!(
        "Throughput stable at {} rps; quitting",
        report.rounded_throughput()
    )
}
