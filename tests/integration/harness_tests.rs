//! Harness integration tests
//!
//! Drives full scenarios through the closed-loop controller with shrunk
//! timings and checks the report stream.

#[cfg(test)]
mod tests {
    use crate::common::{fast_controller, fast_task, isolated_scenario, shared_scenario};
    use loopback_deadlock::{
        Experiment, ExperimentConfig, Harness, Interrupt, LoopbackError, MemoryReporter,
        interrupt_channel,
    };
    use std::sync::Arc;
    use std::time::Duration;

    fn is_rate_line(line: &str) -> bool {
        line.starts_with("rate: ") && line.contains(", success: ") && line.contains(", errors: ")
    }

    /// Test that the report stream has the label, rate lines, verdict and separator
    #[tokio::test]
    async fn test_scenario_report_stream() {
        let reporter = Arc::new(MemoryReporter::new());
        let harness = Harness::new(fast_task(2, 500), fast_controller(100), reporter.clone());

        let report = harness
            .run_scenario(&isolated_scenario("isolated", 4, 64), &mut Interrupt::never())
            .await
            .unwrap();

        let lines = reporter.lines();
        assert_eq!(lines[0], "isolated");
        let rate_lines = &lines[1..lines.len() - 2];
        assert_eq!(rate_lines.len(), report.stability.windows.len());
        assert!(rate_lines.iter().all(|l| is_rate_line(l)));
        assert_eq!(rate_lines[0].split(',').next().unwrap(), "rate: 30");
        assert_eq!(
            lines[lines.len() - 2],
            format!(
                "Throughput stable at {} rps; quitting",
                report.stability.rounded_throughput()
            )
        );
        assert_eq!(lines[lines.len() - 1], "");
    }

    /// Test that rates ramp by the increment once per window
    #[tokio::test]
    async fn test_rate_ramps_per_window() {
        let reporter = Arc::new(MemoryReporter::new());
        let harness = Harness::new(fast_task(2, 500), fast_controller(100), reporter);

        let report = harness
            .run_scenario(&isolated_scenario("ramp", 4, 64), &mut Interrupt::never())
            .await
            .unwrap();

        let rates: Vec<u64> = report.stability.windows.iter().map(|w| w.rate).collect();
        let expected: Vec<u64> = (0..rates.len() as u64).map(|i| 30 + 10 * i).collect();
        assert_eq!(rates, expected);
        assert_eq!(report.stability.final_rate, 30 + 10 * rates.len() as u64);
        assert!(report.stability.std_dev <= 10.0);
    }

    /// Test that a shared pool reaches a verdict and releases its threads
    #[tokio::test]
    async fn test_shared_scenario_terminates() {
        let reporter = Arc::new(MemoryReporter::new());
        let harness = Harness::new(fast_task(5, 50), fast_controller(100), reporter);

        let report = harness
            .run_scenario(&shared_scenario("shared", 2, 2), &mut Interrupt::never())
            .await
            .unwrap();

        assert!(report.stability.windows.len() >= 3);
        assert_eq!(report.pools.len(), 1);
        assert!(report.pools[0].shut_down);
    }

    /// Test that an interrupt mid-run stops the experiment with an error
    #[tokio::test]
    async fn test_experiment_interrupted() {
        let mut config = ExperimentConfig::builtin().unwrap();
        config.task = fast_task(2, 100);
        config.controller = fast_controller(50);

        let reporter = Arc::new(MemoryReporter::new());
        let experiment = Experiment::new(config, reporter.clone());

        let (handle, mut interrupt) = interrupt_channel();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(120)).await;
            handle.trigger();
        });

        let err = experiment
            .run_with_interrupt(&mut interrupt)
            .await
            .unwrap_err();
        assert!(matches!(err, LoopbackError::Interrupted(_)));

        let lines = reporter.lines();
        assert_eq!(
            lines[0],
            "Testing with a single thread pool and a large queue"
        );
        assert!(!lines.iter().any(|l| l.starts_with("Throughput stable")));
    }
}
