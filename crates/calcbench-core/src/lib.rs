//! # calcbench-core
//!
//! Core library for calcbench. Implements the arithmetic operation set, the
//! instrumented Ackermann evaluator, and the interchangeable backends that
//! expose both.

pub mod ackermann;
pub mod arithmetic;
pub mod backend;
pub mod constants;
pub mod metrics;
pub mod operand;
pub mod operation;
pub mod options;
pub mod registry;

// Re-exports
pub use ackermann::{AckermannEvaluator, Evaluation};
pub use backend::{AcceleratedBackend, Backend, CalcError, CalcValue, Computation, ScriptedBackend};
pub use constants::{exit_codes, DEFAULT_MAX_M, DEFAULT_MAX_N};
pub use metrics::{MetricsRecorder, PerformanceMetrics};
pub use operation::Operation;
pub use options::Options;
pub use registry::{BackendFactory, DefaultFactory};

/// Evaluate A(m, n) with a fresh metrics accumulator.
///
/// This is a convenience function for simple use cases. To reuse one
/// accumulator across evaluations, use [`AckermannEvaluator`] directly.
///
/// # Example
/// ```
/// let eval = calcbench_core::ackermann(2, 3).unwrap();
/// assert_eq!(eval.value, 9);
/// assert_eq!(eval.metrics.step_times.len() as u64, eval.metrics.total_calls);
/// ```
pub fn ackermann(m: u64, n: u64) -> Result<Evaluation, CalcError> {
    ackermann::evaluate(m, n)
}
