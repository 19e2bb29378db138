//! Operand parsing and coercion.
//!
//! Operands arrive as decimal text. They must parse to a finite `f64`;
//! the Ackermann operation further requires non-negative integers within
//! the configured bounds.

use crate::backend::CalcError;
use crate::options::Options;

/// 2^64, the first `f64` that does not fit in a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Parse operand text into a finite number.
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::InvalidOperand(format!("{trimmed:?} is not a number")))?;
    if !value.is_finite() {
        return Err(CalcError::InvalidOperand(format!("{trimmed:?} is not finite")));
    }
    Ok(value)
}

/// Parse both operands. The first failure wins.
pub fn parse_operands(a: &str, b: &str) -> Result<(f64, f64), CalcError> {
    Ok((parse_operand(a)?, parse_operand(b)?))
}

/// Coerce a finite number to a non-negative integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_natural(value: f64) -> Result<u64, CalcError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidOperand(format!(
            "{value} is not a non-negative integer"
        )));
    }
    if value.fract() != 0.0 {
        return Err(CalcError::InvalidOperand(format!("{value} is not an integer")));
    }
    if value >= U64_LIMIT {
        return Err(CalcError::InvalidOperand(format!("{value} is too large")));
    }
    Ok(value as u64)
}

/// Reject Ackermann operands above the configured bounds.
pub fn check_ackermann_bounds(m: u64, n: u64, opts: &Options) -> Result<(), CalcError> {
    if m > opts.max_m {
        return Err(CalcError::OutOfRange {
            operand: "m",
            value: m,
            max: opts.max_m,
        });
    }
    if n > opts.max_n {
        return Err(CalcError::OutOfRange {
            operand: "n",
            value: n,
            max: opts.max_n,
        });
    }
    Ok(())
}
