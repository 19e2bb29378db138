//! Per-evaluation performance metrics for the Ackermann evaluator.
//!
//! `MetricsRecorder` is the owned accumulator threaded through one
//! evaluation. It is reset before every top-level call and never shared
//! between evaluations, so two evaluators (or two threads) cannot see each
//! other's counts.

use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

/// Metrics captured by one completed top-level evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Number of recursive invocations, including the top-level one.
    pub total_calls: u64,
    /// Deepest recursion reached (the top-level call is depth 1).
    pub max_depth: u64,
    /// Elapsed time of each invocation, in exit order.
    #[serde(serialize_with = "serialize_millis")]
    pub step_times: Vec<Duration>,
}

impl PerformanceMetrics {
    /// Sum of all recorded step times.
    ///
    /// Nested steps overlap their parents, so this exceeds wall-clock time
    /// for any evaluation deeper than one call.
    #[must_use]
    pub fn total_step_time(&self) -> Duration {
        self.step_times.iter().sum()
    }

    /// Mean step time, or `None` if nothing was recorded.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn mean_step_time(&self) -> Option<Duration> {
        let count = self.step_times.len();
        if count == 0 {
            return None;
        }
        let nanos = self.total_step_time().as_nanos() / count as u128;
        Some(Duration::from_nanos(nanos as u64))
    }

    /// Longest single step.
    #[must_use]
    pub fn slowest_step(&self) -> Option<Duration> {
        self.step_times.iter().copied().max()
    }

    /// Shortest single step.
    #[must_use]
    pub fn fastest_step(&self) -> Option<Duration> {
        self.step_times.iter().copied().min()
    }

    /// Check the structural invariants of a completed evaluation.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.max_depth <= self.total_calls && self.step_times.len() as u64 == self.total_calls
    }
}

#[allow(clippy::ptr_arg)]
fn serialize_millis<S: Serializer>(times: &Vec<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(times.iter().map(|d| d.as_secs_f64() * 1000.0))
}

/// Accumulator driven by the evaluator's entry and exit points.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    metrics: PerformanceMetrics,
    current_depth: u64,
}

impl MetricsRecorder {
    /// Create a zeroed recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all counters, samples, and the current depth.
    pub fn reset(&mut self) {
        self.metrics.total_calls = 0;
        self.metrics.max_depth = 0;
        self.metrics.step_times.clear();
        self.current_depth = 0;
    }

    /// Record entry into one invocation and return its start timestamp.
    pub fn enter(&mut self) -> Instant {
        self.metrics.total_calls += 1;
        self.current_depth += 1;
        self.metrics.max_depth = self.metrics.max_depth.max(self.current_depth);
        Instant::now()
    }

    /// Record exit from the invocation that started at `started`.
    pub fn exit(&mut self, started: Instant) {
        self.metrics.step_times.push(started.elapsed());
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    /// Depth of the invocation currently in flight (0 when idle).
    #[must_use]
    pub fn current_depth(&self) -> u64 {
        self.current_depth
    }

    /// Metrics accumulated so far.
    #[must_use]
    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    /// Move the accumulated metrics out, leaving the recorder zeroed.
    pub fn take(&mut self) -> PerformanceMetrics {
        self.current_depth = 0;
        std::mem::take(&mut self.metrics)
    }
}
