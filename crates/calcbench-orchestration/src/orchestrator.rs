//! Core orchestration: backend execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use calcbench_core::backend::{Backend, CalcError};
use calcbench_core::operand::{check_ackermann_bounds, parse_operands, to_natural};
use calcbench_core::operation::Operation;
use calcbench_core::options::Options;

use crate::interfaces::{CalculationRequest, CalculationResult};

/// Execute a request on every given backend.
///
/// Operands are parsed and validated once, before any backend runs. If
/// validation fails, every backend reports the same error with a zero
/// duration. Results are returned in backend order.
pub fn execute_request(
    backends: &[Arc<dyn Backend>],
    request: &CalculationRequest,
    opts: &Options,
) -> Vec<CalculationResult> {
    let (a, b) = match prepare_operands(request, opts) {
        Ok(operands) => operands,
        Err(e) => {
            warn!(operation = %request.operation, error = %e, "request rejected");
            return backends
                .iter()
                .map(|backend| CalculationResult::rejected(backend.name(), e.clone()))
                .collect();
        }
    };

    info!(
        operation = %request.operation,
        a,
        b,
        backends = backends.len(),
        parallel = opts.parallel,
        "executing request"
    );

    if opts.parallel && backends.len() > 1 {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

        backends
            .par_iter()
            .map(|backend| run_backend(backend.as_ref(), request.operation, a, b))
            .collect()
    } else {
        backends
            .iter()
            .map(|backend| run_backend(backend.as_ref(), request.operation, a, b))
            .collect()
    }
}

/// Parse both operands and apply the caller-side Ackermann bounds.
fn prepare_operands(request: &CalculationRequest, opts: &Options) -> Result<(f64, f64), CalcError> {
    let (a, b) = parse_operands(&request.a, &request.b)?;
    if request.operation.is_recursive() {
        check_ackermann_bounds(to_natural(a)?, to_natural(b)?, opts)?;
    }
    Ok((a, b))
}

fn run_backend(backend: &dyn Backend, operation: Operation, a: f64, b: f64) -> CalculationResult {
    let start = Instant::now();
    let outcome = backend.apply(operation, a, b);
    let duration = start.elapsed();

    debug!(
        backend = backend.name(),
        %operation,
        ok = outcome.is_ok(),
        elapsed_ms = duration.as_secs_f64() * 1000.0,
        "backend finished"
    );

    match outcome {
        Ok(computation) => CalculationResult {
            backend: backend.name().to_string(),
            outcome: Ok(computation.value),
            duration,
            metrics: computation.metrics,
        },
        Err(e) => CalculationResult {
            backend: backend.name().to_string(),
            outcome: Err(e),
            duration,
            metrics: None,
        },
    }
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), CalcError> {
    let mut values = results.iter().filter_map(|r| r.value().map(|v| (r, v)));

    let Some((_, first_value)) = values.next() else {
        return Err(CalcError::Calculation("no valid results".into()));
    };

    // Compare all results to the first valid one
    for (result, value) in values {
        if value != first_value {
            warn!(
                backend = %result.backend,
                expected = %first_value,
                actual = %value,
                "backend result mismatch"
            );
            return Err(CalcError::Mismatch);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use calcbench_core::backend::{AcceleratedBackend, CalcValue, ScriptedBackend};

    fn both() -> Vec<Arc<dyn Backend>> {
        vec![
            Arc::new(AcceleratedBackend::default()),
            Arc::new(ScriptedBackend::new()),
        ]
    }

    fn ok(backend: &str, value: CalcValue) -> CalculationResult {
        CalculationResult {
            backend: backend.into(),
            outcome: Ok(value),
            duration: Duration::from_millis(1),
            metrics: None,
        }
    }

    #[test]
    fn execute_single_backend() {
        let backends: Vec<Arc<dyn Backend>> = vec![Arc::new(ScriptedBackend::new())];
        let request = CalculationRequest::new(Operation::Add, "2", "3");
        let results = execute_request(&backends, &request, &Options::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].value(), Some(CalcValue::Real(5.0)));
        assert!(results[0].metrics.is_none());
    }

    #[test]
    fn execute_both_backends_in_order() {
        let request = CalculationRequest::new(Operation::Subtract, "2", "3");
        let results = execute_request(&both(), &request, &Options::default());
        let names: Vec<_> = results.iter().map(|r| r.backend.as_str()).collect();
        assert_eq!(names, vec!["Accelerated", "Scripted"]);
        for r in &results {
            assert_eq!(r.value(), Some(CalcValue::Real(-1.0)));
        }
    }

    #[test]
    fn divide_by_zero_gives_no_result_everywhere() {
        let request = CalculationRequest::new(Operation::Divide, "6", "0");
        let results = execute_request(&both(), &request, &Options::default());
        assert_eq!(results.len(), 2);
        for r in &results {
            assert_eq!(r.outcome, Err(CalcError::DivisionByZero));
        }
    }

    #[test]
    fn invalid_operand_skips_backends() {
        let request = CalculationRequest::new(Operation::Add, "abc", "1");
        let results = execute_request(&both(), &request, &Options::default());
        for r in &results {
            assert!(matches!(r.outcome, Err(CalcError::InvalidOperand(_))));
            assert_eq!(r.duration, Duration::ZERO);
        }
    }

    #[test]
    fn ackermann_three_three() {
        let request = CalculationRequest::new(Operation::Ackermann, "3", "3");
        let results = execute_request(&both(), &request, &Options::default());
        for r in &results {
            assert_eq!(r.value(), Some(CalcValue::Natural(61)));
            let metrics = r.metrics.as_ref().unwrap();
            assert_eq!(metrics.total_calls, 2432);
            assert_eq!(metrics.max_depth, 63);
            assert_eq!(metrics.step_times.len(), 2432);
        }
    }

    #[test]
    fn ackermann_bounds_rejected_before_running() {
        let opts = Options {
            max_m: 2,
            ..Options::default()
        };
        let request = CalculationRequest::new(Operation::Ackermann, "3", "1");
        let results = execute_request(&both(), &request, &opts);
        for r in &results {
            assert!(matches!(r.outcome, Err(CalcError::OutOfRange { operand: "m", .. })));
            assert!(r.metrics.is_none());
        }
    }

    #[test]
    fn overflowing_arithmetic_has_no_result() {
        let request = CalculationRequest::new(Operation::Add, "1e308", "1e308");
        let results = execute_request(&both(), &request, &Options::default());
        assert_eq!(results.len(), 2);
        for r in &results {
            assert_eq!(r.outcome, Err(CalcError::Overflow));
            assert!(r.value().is_none());
        }
    }

    #[test]
    fn ackermann_rejects_negative_operand() {
        let request = CalculationRequest::new(Operation::Ackermann, "-1", "2");
        let results = execute_request(&both(), &request, &Options::default());
        assert!(matches!(results[0].outcome, Err(CalcError::InvalidOperand(_))));
    }

    #[test]
    fn execute_parallel_matches_sequential() {
        let request = CalculationRequest::new(Operation::Ackermann, "2", "3");
        let sequential = execute_request(&both(), &request, &Options::default());
        let parallel = execute_request(
            &both(),
            &request,
            &Options {
                parallel: true,
                ..Options::default()
            },
        );
        assert_eq!(sequential.len(), parallel.len());
        for (s, p) in sequential.iter().zip(&parallel) {
            assert_eq!(s.backend, p.backend);
            assert_eq!(s.value(), p.value());
            assert_eq!(
                s.metrics.as_ref().map(|m| m.total_calls),
                p.metrics.as_ref().map(|m| m.total_calls)
            );
        }
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![ok("A", CalcValue::Real(5.0)), ok("B", CalcValue::Real(5.0))];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![ok("A", CalcValue::Natural(61)), ok("B", CalcValue::Natural(62))];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(CalcError::Mismatch)
        ));
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![
            CalculationResult::rejected("A", CalcError::DivisionByZero),
            CalculationResult::rejected("B", CalcError::DivisionByZero),
        ];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(CalcError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_empty_results() {
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(CalcError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_results_ignores_error_entries() {
        let results = vec![
            ok("A", CalcValue::Real(1.5)),
            CalculationResult::rejected("B", CalcError::Overflow),
            ok("C", CalcValue::Real(1.5)),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn metrics_attached_only_to_ackermann() {
        let request = CalculationRequest::new(Operation::Multiply, "3", "3");
        let results = execute_request(&both(), &request, &Options::default());
        assert!(results.iter().all(|r| r.metrics.is_none()));
    }
}
