//! Backend trait, the two interchangeable backends, and the error type.
//!
//! `Backend` is the capability interface consumed by orchestration.
//! `ScriptedBackend` is the plain implementation. `AcceleratedBackend` is a
//! decorator standing in for a native implementation: it delegates every
//! call to an inner backend and only reports a different name.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::ackermann::{self, Evaluation};
use crate::arithmetic;
use crate::metrics::PerformanceMetrics;
use crate::operand::to_natural;
use crate::operation::Operation;

/// Error type for calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// Operand text did not parse to a usable number.
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An Ackermann operand exceeded the configured bound.
    #[error("operand {operand} = {value} exceeds the limit of {max}")]
    OutOfRange {
        operand: &'static str,
        value: u64,
        max: u64,
    },

    /// The result does not fit the value type: past `u64::MAX` for
    /// Ackermann, or not finite for arithmetic.
    #[error("result is out of range")]
    Overflow,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Results from different backends don't match.
    #[error("result mismatch between backends")]
    Mismatch,
}

impl CalcError {
    /// Whether this error stems from the operands rather than the backend.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidOperand(_) | Self::DivisionByZero | Self::OutOfRange { .. }
        )
    }
}

/// Numeric result of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalcValue {
    /// Result of an arithmetic operation.
    Real(f64),
    /// Result of the Ackermann function.
    Natural(u64),
}

impl fmt::Display for CalcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(v) => write!(f, "{v}"),
            Self::Natural(v) => write!(f, "{v}"),
        }
    }
}

/// A value together with the metrics collected while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    /// The computed value.
    pub value: CalcValue,
    /// Present only for the Ackermann operation.
    pub metrics: Option<PerformanceMetrics>,
}

impl Computation {
    /// Arithmetic result; an infinite or NaN value is `Overflow`.
    fn real(value: f64) -> Result<Self, CalcError> {
        if !value.is_finite() {
            return Err(CalcError::Overflow);
        }
        Ok(Self {
            value: CalcValue::Real(value),
            metrics: None,
        })
    }
}

impl From<Evaluation> for Computation {
    fn from(eval: Evaluation) -> Self {
        Self {
            value: CalcValue::Natural(eval.value),
            metrics: Some(eval.metrics),
        }
    }
}

/// Capability interface shared by every backend.
pub trait Backend: Send + Sync {
    /// Name shown next to this backend's results.
    fn name(&self) -> &str;

    /// a + b
    fn add(&self, a: f64, b: f64) -> f64;

    /// a - b
    fn subtract(&self, a: f64, b: f64) -> f64;

    /// a * b
    fn multiply(&self, a: f64, b: f64) -> f64;

    /// a / b, or `DivisionByZero`.
    fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError>;

    /// A(m, n) with metrics from a fresh accumulator.
    fn ackermann(&self, m: u64, n: u64) -> Result<Evaluation, CalcError>;

    /// Dispatch `operation` on already-parsed operands.
    ///
    /// Ackermann operands are coerced to non-negative integers first.
    fn apply(&self, operation: Operation, a: f64, b: f64) -> Result<Computation, CalcError> {
        match operation {
            Operation::Add => Computation::real(self.add(a, b)),
            Operation::Subtract => Computation::real(self.subtract(a, b)),
            Operation::Multiply => Computation::real(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b).and_then(Computation::real),
            Operation::Ackermann => {
                let (m, n) = (to_natural(a)?, to_natural(b)?);
                self.ackermann(m, n).map(Computation::from)
            }
        }
    }
}

/// The plain implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptedBackend;

impl ScriptedBackend {
    /// Create a new scripted backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Backend for ScriptedBackend {
    fn name(&self) -> &str {
        "Scripted"
    }

    fn add(&self, a: f64, b: f64) -> f64 {
        arithmetic::add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        arithmetic::subtract(a, b)
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        arithmetic::multiply(a, b)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        arithmetic::divide(a, b)
    }

    fn ackermann(&self, m: u64, n: u64) -> Result<Evaluation, CalcError> {
        ackermann::evaluate(m, n)
    }
}

/// Placeholder for a native backend. Delegates to `inner`.
pub struct AcceleratedBackend {
    inner: Arc<dyn Backend>,
}

impl AcceleratedBackend {
    /// Wrap the given backend.
    #[must_use]
    pub fn new(inner: Arc<dyn Backend>) -> Self {
        Self { inner }
    }
}

impl Default for AcceleratedBackend {
    fn default() -> Self {
        Self::new(Arc::new(ScriptedBackend::new()))
    }
}

impl Backend for AcceleratedBackend {
    fn name(&self) -> &str {
        "Accelerated"
    }

    fn add(&self, a: f64, b: f64) -> f64 {
        self.inner.add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        self.inner.subtract(a, b)
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        self.inner.multiply(a, b)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.inner.divide(a, b)
    }

    fn ackermann(&self, m: u64, n: u64) -> Result<Evaluation, CalcError> {
        self.inner.ackermann(m, n)
    }
}
