//! Instrumented Ackermann evaluator.
//!
//! Canonical two-argument recurrence, evaluated recursively with no
//! memoization:
//!
//! ```text
//! A(0, n) = n + 1
//! A(m, 0) = A(m - 1, 1)
//! A(m, n) = A(m - 1, A(m, n - 1))
//! ```
//!
//! Every invocation reports entry and exit to a [`MetricsRecorder`]. The
//! evaluator has no depth or time limit: A(4, n) for n > 1 runs effectively
//! forever or exhausts the stack. Callers bound the operands.

use tracing::debug;

use crate::backend::CalcError;
use crate::metrics::{MetricsRecorder, PerformanceMetrics};

/// Value and metrics of one completed top-level evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// A(m, n).
    pub value: u64,
    /// Instrumentation collected while computing `value`.
    pub metrics: PerformanceMetrics,
}

/// Evaluator owning one metrics accumulator.
///
/// The accumulator is reset at the start of every [`evaluate`](Self::evaluate)
/// call, so metrics always describe the most recent evaluation only.
#[derive(Debug, Default)]
pub struct AckermannEvaluator {
    recorder: MetricsRecorder,
}

impl AckermannEvaluator {
    /// Create an evaluator with a zeroed accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute A(m, n), replacing any previously collected metrics.
    pub fn evaluate(&mut self, m: u64, n: u64) -> Result<u64, CalcError> {
        self.recorder.reset();
        let value = step(&mut self.recorder, m, n);

        let metrics = self.recorder.metrics();
        debug!(
            m,
            n,
            total_calls = metrics.total_calls,
            max_depth = metrics.max_depth,
            ok = value.is_ok(),
            "Ackermann evaluation finished"
        );
        value
    }

    /// Metrics of the most recent evaluation.
    #[must_use]
    pub fn metrics(&self) -> &PerformanceMetrics {
        self.recorder.metrics()
    }

    /// Move the metrics of the most recent evaluation out of the evaluator.
    pub fn take_metrics(&mut self) -> PerformanceMetrics {
        self.recorder.take()
    }
}

/// Evaluate A(m, n) with a fresh evaluator and return value plus metrics.
pub fn evaluate(m: u64, n: u64) -> Result<Evaluation, CalcError> {
    let mut evaluator = AckermannEvaluator::new();
    let value = evaluator.evaluate(m, n)?;
    Ok(Evaluation {
        value,
        metrics: evaluator.take_metrics(),
    })
}

fn step(recorder: &mut MetricsRecorder, m: u64, n: u64) -> Result<u64, CalcError> {
    let started = recorder.enter();

    let result = if m == 0 {
        n.checked_add(1).ok_or(CalcError::Overflow)
    } else if n == 0 {
        step(recorder, m - 1, 1)
    } else {
        step(recorder, m, n - 1).and_then(|inner| step(recorder, m - 1, inner))
    };

    // Exit is recorded on the error path too, keeping depth balanced.
    recorder.exit(started);
    result
}
