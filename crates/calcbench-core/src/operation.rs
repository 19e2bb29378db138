//! Operation selector.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::backend::CalcError;

/// The operation applied to the two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// a + b
    #[default]
    Add,
    /// a - b
    Subtract,
    /// a * b
    Multiply,
    /// a / b
    Divide,
    /// A(m, n)
    Ackermann,
}

impl Operation {
    /// Every operation, in display order.
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Ackermann,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Ackermann => "ackermann",
        }
    }

    /// Infix symbol, or the function name for Ackermann.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Ackermann => "A",
        }
    }

    /// Whether this operation runs the instrumented recursive evaluator.
    #[must_use]
    pub fn is_recursive(self) -> bool {
        matches!(self, Self::Ackermann)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Self::Add),
            "subtract" | "sub" | "-" => Ok(Self::Subtract),
            "multiply" | "mul" | "*" | "x" | "×" => Ok(Self::Multiply),
            "divide" | "div" | "/" | "÷" => Ok(Self::Divide),
            "ackermann" | "ack" => Ok(Self::Ackermann),
            other => Err(CalcError::Config(format!("unknown operation: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("SUB".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("*".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("÷".parse::<Operation>().unwrap(), Operation::Divide);
        assert_eq!(" ack ".parse::<Operation>().unwrap(), Operation::Ackermann);
    }

    #[test]
    fn parse_unknown() {
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn only_ackermann_is_recursive() {
        let recursive: Vec<_> = Operation::ALL.iter().filter(|op| op.is_recursive()).collect();
        assert_eq!(recursive, vec![&Operation::Ackermann]);
    }

    #[test]
    fn default_is_add() {
        assert_eq!(Operation::default(), Operation::Add);
    }
}
