//! Configuration integration tests
//!
//! Checks the built-in scenario table and YAML loading through the public
//! API only.

#[cfg(test)]
mod tests {
    use loopback_deadlock::config::{PoolConfig, TopologyConfig, Validate};
    use loopback_deadlock::{ExperimentConfig, LoopbackError};

    const CUSTOM: &str = r#"
task:
  processing_time_ms: 20
  internal_timeout_ms: 100
controller:
  initial_rate: 5
  rate_increment: 5
  report_interval_ms: 200
scenarios:
  - label: "tiny shared"
    window_capacity: 4
    topology:
      kind: shared
      pool: { name: tiny, workers: 1, queue_capacity: 8 }
"#;

    /// Test that the shipped table runs the three scenarios in order
    #[test]
    fn test_builtin_scenarios_in_order() {
        let config = ExperimentConfig::builtin().unwrap();
        let labels: Vec<&str> = config.scenarios.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Testing with a single thread pool and a large queue",
                "Testing with a single thread pool and a small queue",
                "Testing with two thread pools and a large queue",
            ]
        );
        assert!(config.validate().is_ok());
    }

    /// Test the shipped timings
    #[test]
    fn test_builtin_timings() {
        let config = ExperimentConfig::builtin().unwrap();
        assert_eq!(config.task.processing_time_ms, 150);
        assert_eq!(config.task.internal_timeout_ms, 1000);
        assert_eq!(config.controller.initial_rate, 30);
        assert_eq!(config.controller.rate_increment, 10);
        assert_eq!(config.controller.report_interval_ms, 1000);
    }

    /// Test that only the isolated scenario has two pools
    #[test]
    fn test_builtin_topologies() {
        let config = ExperimentConfig::builtin().unwrap();
        let shared: Vec<bool> = config
            .scenarios
            .iter()
            .map(|s| s.topology.is_shared())
            .collect();
        assert_eq!(shared, vec![true, true, false]);

        let pool_counts: Vec<usize> = config
            .scenarios
            .iter()
            .map(|s| s.topology.pools().len())
            .collect();
        assert_eq!(pool_counts, vec![1, 1, 2]);
    }

    /// Test loading a custom table
    #[test]
    fn test_custom_yaml() {
        let config = ExperimentConfig::from_yaml_str(CUSTOM).unwrap();
        assert_eq!(config.task.processing_time_ms, 20);
        assert_eq!(config.controller.initial_rate, 5);
        assert_eq!(config.scenarios.len(), 1);
        assert_eq!(config.scenarios[0].window_capacity, 4);
        assert_eq!(
            config.scenarios[0].topology,
            TopologyConfig::Shared {
                pool: PoolConfig::new("tiny", 1, 8)
            }
        );
    }

    /// Test that invalid values are rejected at load time
    #[test]
    fn test_invalid_yaml_values_rejected() {
        let zero_workers = CUSTOM.replace("workers: 1", "workers: 0");
        let result = ExperimentConfig::from_yaml_str(&zero_workers);
        assert!(matches!(result, Err(LoopbackError::Config(_))));

        let zero_rate = CUSTOM.replace("initial_rate: 5", "initial_rate: 0");
        let result = ExperimentConfig::from_yaml_str(&zero_rate);
        assert!(matches!(result, Err(LoopbackError::Config(_))));
    }

    /// Test that malformed YAML surfaces as a parse error
    #[test]
    fn test_malformed_yaml_rejected() {
        let result = ExperimentConfig::from_yaml_str("scenarios: [unterminated");
        assert!(matches!(result, Err(LoopbackError::Yaml(_))));

        let unknown_kind = CUSTOM.replace("kind: shared", "kind: pooled");
        let result = ExperimentConfig::from_yaml_str(&unknown_kind);
        assert!(matches!(result, Err(LoopbackError::Yaml(_))));
    }
}
