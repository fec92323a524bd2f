//! Loopback deadlock integration tests
//!
//! The same kind of burst is pushed through each pool layout. A shared pool
//! with a deep queue starves its own internal calls; a shallow queue sheds
//! load at admission; separate pools complete everything.

#[cfg(test)]
mod tests {
    use crate::common::{fast_task, wait_for_outcomes};
    use loopback_deadlock::LoopbackError;
    use loopback_deadlock::config::{PoolConfig, TopologyConfig};
    use loopback_deadlock::core::{CounterSnapshot, LoadGenerator};
    use loopback_deadlock::harness::PoolTopology;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    struct Burst {
        outcomes: CounterSnapshot,
        admission_rejected: u64,
    }

    /// Submit `count` tasks back to back and wait until all are counted
    fn submit_burst(
        topology: &PoolTopology,
        count: u64,
        processing_time_ms: u64,
        internal_timeout_ms: u64,
    ) -> Burst {
        let scheduler = topology.scheduler(fast_task(processing_time_ms, internal_timeout_ms));
        let mut admission_rejected = 0;
        for _ in 0..count {
            match scheduler.submit() {
                Ok(()) => {}
                Err(LoopbackError::AdmissionRejected { .. }) => admission_rejected += 1,
                Err(e) => panic!("unexpected submit error: {}", e),
            }
        }

        let outcomes = wait_for_outcomes(&scheduler, count);
        Burst {
            outcomes,
            admission_rejected,
        }
    }

    // ==================== Shared pool, deep queue ====================

    /// Internal calls queue behind their own callers and miss the deadline
    #[test]
    fn test_shared_pool_large_queue_deadlocks() {
        let topology = PoolTopology::build(&TopologyConfig::Shared {
            pool: PoolConfig::new("shared-large", 2, 64),
        })
        .unwrap();

        let burst = submit_burst(&topology, 40, 10, 50);

        assert_eq!(burst.admission_rejected, 0, "the deep queue admits the burst");
        assert_eq!(burst.outcomes.total(), 40);
        assert!(
            burst.outcomes.error_count > burst.outcomes.success_count,
            "outcomes: {:?}",
            burst.outcomes
        );
        assert!(burst.outcomes.error_count >= 20, "outcomes: {:?}", burst.outcomes);

        // Internal tasks whose callers gave up still run to completion.
        let deadline = Instant::now() + Duration::from_secs(10);
        while topology.stats()[0].completed < 80 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        topology.shutdown();

        let stats = topology.stats();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].completed, 80, "stats: {:?}", stats[0]);
        assert_eq!(stats[0].abandoned, 0);
    }

    // ==================== Shared pool, shallow queue ====================

    /// A queue no deeper than the worker count rejects most of the burst
    #[test]
    fn test_shared_pool_small_queue_fails_fast() {
        let topology = PoolTopology::build(&TopologyConfig::Shared {
            pool: PoolConfig::new("shared-small", 2, 2),
        })
        .unwrap();

        let burst = submit_burst(&topology, 10, 10, 200);
        topology.shutdown();

        assert!(burst.admission_rejected > 0);
        assert_eq!(burst.outcomes.total(), 10);
        assert!(burst.outcomes.error_count >= 5, "outcomes: {:?}", burst.outcomes);
        assert!(burst.outcomes.error_count > burst.outcomes.success_count);
        assert!(topology.stats()[0].rejected >= burst.admission_rejected);
    }

    /// Under sustained overload a shallow queue sheds load at admission while
    /// the admitted tasks keep completing
    #[test]
    fn test_shared_pool_small_queue_keeps_serving() {
        let topology = PoolTopology::build(&TopologyConfig::Shared {
            pool: PoolConfig::new("shared-small", 4, 4),
        })
        .unwrap();
        let scheduler = topology.scheduler(fast_task(10, 200));
        let mut generator = LoadGenerator::new(Arc::new(scheduler.clone()));

        // Five 100ms windows at roughly one submission per millisecond.
        let mut outcomes = CounterSnapshot::default();
        for _ in 0..5 {
            let window_start = Instant::now();
            while window_start.elapsed() < Duration::from_millis(100) {
                generator.tick();
                std::thread::sleep(Duration::from_millis(1));
            }
            let window = scheduler.snapshot_and_reset();
            outcomes.success_count += window.success_count;
            outcomes.error_count += window.error_count;
        }

        let rest = wait_for_outcomes(&scheduler, generator.ticks() - outcomes.total());
        topology.shutdown();
        outcomes.success_count += rest.success_count;
        outcomes.error_count += rest.error_count;

        let admission_rejected = generator.rejected();
        let other_failures = outcomes.error_count - admission_rejected;
        assert_eq!(outcomes.total(), generator.ticks());
        assert!(outcomes.success_count > 0, "outcomes: {:?}", outcomes);
        assert!(
            admission_rejected > other_failures,
            "admission rejections {} vs other failures {}",
            admission_rejected,
            other_failures
        );
    }

    // ==================== Isolated pools ====================

    /// With a dedicated internal pool every chained task completes
    #[test]
    fn test_isolated_pools_do_not_deadlock() {
        let topology = PoolTopology::build(&TopologyConfig::Isolated {
            external: PoolConfig::new("external", 2, 64),
            internal: PoolConfig::new("internal", 2, 64),
        })
        .unwrap();

        let burst = submit_burst(&topology, 10, 10, 1000);
        topology.shutdown();

        assert_eq!(burst.admission_rejected, 0);
        assert_eq!(burst.outcomes, CounterSnapshot::new(10, 0));

        let stats = topology.stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].completed, 10);
        assert_eq!(stats[1].completed, 10);
        assert!(stats.iter().all(|s| s.shut_down));
    }
}
