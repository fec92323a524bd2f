//! Tick pacing

use std::time::{Duration, Instant};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Time left until the next tick is due at `rate` ticks per second.
///
/// Truncated to whole milliseconds and measured from this tick's start only,
/// so sub-millisecond remainders and drift across ticks are not made up; at
/// high rates the achieved rate overshoots `rate`.
pub fn pacing_delay(tick_start: Instant, now: Instant, rate: u64) -> Duration {
    let interval = Duration::from_nanos(NANOS_PER_SEC / rate.max(1));
    let remaining = (tick_start + interval).saturating_duration_since(now);
    Duration::from_millis(remaining.as_millis() as u64)
}
