//! Constants for operand limits and process exit codes.

/// Default upper bound for the Ackermann `m` operand.
///
/// A(4, n) does not terminate in reasonable time for any n > 1, so the
/// default stops at 3.
pub const DEFAULT_MAX_M: u64 = 3;

/// Default upper bound for the Ackermann `n` operand.
///
/// A(3, 6) already takes 172,233 recursive calls; every step also records
/// a timing sample, so memory grows with the call count.
pub const DEFAULT_MAX_N: u64 = 6;

/// Number of decimal places used when printing execution times in ms.
pub const TIME_PRECISION: usize = 4;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Operand text was rejected, or a divisor was zero.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// Backend results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_stay_below_four() {
        assert!(DEFAULT_MAX_M < 4);
        assert!(DEFAULT_MAX_N > 0);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_INVALID_INPUT,
            exit_codes::ERROR_MISMATCH,
            exit_codes::ERROR_CONFIG,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
