//! Error handling and exit codes.

use calcbench_core::backend::CalcError;
use calcbench_core::constants::exit_codes;
use calcbench_orchestration::interfaces::CalculationResult;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &CalcError) -> i32 {
    match err {
        CalcError::InvalidOperand(_) | CalcError::DivisionByZero | CalcError::OutOfRange { .. } => {
            exit_codes::ERROR_INVALID_INPUT
        }
        CalcError::Overflow | CalcError::Calculation(_) => exit_codes::ERROR_GENERIC,
        CalcError::Config(_) => exit_codes::ERROR_CONFIG,
        CalcError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for an error escaping `app::run`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CalcError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

/// Exit code for a finished comparison.
///
/// Succeeds when at least one backend produced a value; otherwise reports
/// the first backend's error.
pub fn outcome_exit_code(results: &[CalculationResult]) -> i32 {
    if results.iter().any(|r| r.outcome.is_ok()) {
        return exit_codes::SUCCESS;
    }
    results
        .iter()
        .find_map(|r| r.outcome.as_ref().err())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
