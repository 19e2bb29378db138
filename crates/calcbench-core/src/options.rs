//! Calculation options and configuration.

use crate::constants::{DEFAULT_MAX_M, DEFAULT_MAX_N};

/// Options for a comparison run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Largest accepted Ackermann `m` (0 = default).
    pub max_m: u64,
    /// Largest accepted Ackermann `n` (0 = default).
    pub max_n: u64,
    /// Run backends concurrently instead of one after the other.
    pub parallel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_m: DEFAULT_MAX_M,
            max_n: DEFAULT_MAX_N,
            parallel: false,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where bounds are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_m == 0 {
            self.max_m = DEFAULT_MAX_M;
        }
        if self.max_n == 0 {
            self.max_n = DEFAULT_MAX_N;
        }
        self
    }
}
