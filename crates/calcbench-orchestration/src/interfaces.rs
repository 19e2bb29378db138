//! Orchestration interfaces.

use std::time::Duration;

use calcbench_core::backend::{CalcError, CalcValue};
use calcbench_core::metrics::PerformanceMetrics;
use calcbench_core::operation::Operation;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one backend's result.
    fn present_result(&self, operation: Operation, result: &CalculationResult);

    /// Present the side-by-side comparison of all backends.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// An operation and its two operands, still as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRequest {
    /// Selected operation.
    pub operation: Operation,
    /// First operand (m for Ackermann).
    pub a: String,
    /// Second operand (n for Ackermann).
    pub b: String,
}

impl CalculationRequest {
    /// Create a new request.
    pub fn new(operation: Operation, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            operation,
            a: a.into(),
            b: b.into(),
        }
    }
}

/// Result of one backend on one request.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Backend name.
    pub backend: String,
    /// The computed value, or why there is no result.
    pub outcome: Result<CalcValue, CalcError>,
    /// Wall-clock time spent inside the backend.
    pub duration: Duration,
    /// Instrumentation, present only for a completed Ackermann evaluation.
    pub metrics: Option<PerformanceMetrics>,
}

impl CalculationResult {
    /// A result for a backend that was never invoked.
    #[must_use]
    pub fn rejected(backend: &str, error: CalcError) -> Self {
        Self {
            backend: backend.to_string(),
            outcome: Err(error),
            duration: Duration::ZERO,
            metrics: None,
        }
    }

    /// The value, if any.
    #[must_use]
    pub fn value(&self) -> Option<CalcValue> {
        self.outcome.as_ref().ok().copied()
    }

    /// Elapsed time in fractional milliseconds.
    #[must_use]
    pub fn execution_time_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}
