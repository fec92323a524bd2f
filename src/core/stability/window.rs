//! Rolling window of per-window success counts

use std::collections::VecDeque;

/// Helper trait for bounded VecDeque operations
trait BoundedPush<T> {
    fn push_bounded(&mut self, value: T, max_size: usize);
}

impl<T> BoundedPush<T> for VecDeque<T> {
    /// Push a value while maintaining a maximum size (O(1) amortized)
    #[inline]
    fn push_bounded(&mut self, value: T, max_size: usize) {
        if self.len() >= max_size {
            self.pop_front();
        }
        self.push_back(value);
    }
}

/// Rolling mean and population standard deviation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowStats {
    pub mean: f64,
    pub std_dev: f64,
}

/// Fixed-capacity FIFO of throughput samples
#[derive(Debug, Clone)]
pub struct StabilityWindow {
    samples: VecDeque<u64>,
    capacity: usize,
}

impl StabilityWindow {
    /// `capacity` is clamped to at least one sample
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest when full
    pub fn push(&mut self, sample: u64) {
        self.samples.push_bounded(sample, self.capacity);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    /// Oldest first
    pub fn samples(&self) -> impl Iterator<Item = u64> + '_ {
        self.samples.iter().copied()
    }

    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(|&v| v as f64).sum::<f64>() / self.samples.len() as f64
    }

    pub fn std_dev(&self) -> f64 {
        self.stats().std_dev
    }

    pub fn stats(&self) -> WindowStats {
        if self.samples.is_empty() {
            return WindowStats::default();
        }

        let mean = self.mean();
        let variance = self
            .samples
            .iter()
            .map(|&v| {
                let delta = mean - v as f64;
                delta * delta
            })
            .sum::<f64>()
            / self.samples.len() as f64;

        WindowStats {
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// Full, and the spread is within `threshold`
    pub fn is_stable(&self, threshold: f64) -> bool {
        self.is_full() && self.std_dev() <= threshold
    }
}
