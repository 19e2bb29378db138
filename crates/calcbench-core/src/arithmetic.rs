//! Arithmetic operation set over finite `f64` operands.
//!
//! All functions are pure. `divide` is the only partial one: a zero divisor
//! is reported as [`CalcError::DivisionByZero`] instead of producing an
//! infinity or NaN.

use crate::backend::CalcError;

/// a + b
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// a - b
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// a * b
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// a / b, failing on a zero divisor (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
