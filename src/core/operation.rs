//! The four binary operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A binary arithmetic operation waiting for its right-hand operand.
///
/// Serializes as its display symbol (`+`, `-`, `×`, `÷`).
///
/// # Example
///
/// ```rust
/// use tally::core::Operation;
///
/// let op: Operation = "×".parse().unwrap();
/// assert_eq!(op, Operation::Multiply);
/// assert_eq!(op.apply(6.0, 7.0), 42.0);
/// assert_eq!(op.symbol(), "×");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

/// Error returned when a string is not an operator symbol.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown operator symbol '{symbol}'")]
pub struct ParseOperationError {
    pub symbol: String,
}

impl Operation {
    /// All operations in button-panel order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Canonical display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation to two floating-point operands.
    ///
    /// Division by zero follows IEEE 754 and yields an infinite or NaN
    /// result; it is never an error.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Accepts the canonical symbols plus the ASCII aliases `*` and `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "×" | "*" | "x" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(ParseOperationError {
                symbol: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_back_to_the_same_operation() {
        for op in Operation::ALL {
            assert_eq!(op.symbol().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn ascii_aliases_are_accepted() {
        assert_eq!("*".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("/".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!(" + ".parse::<Operation>(), Ok(Operation::Add));
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = "%".parse::<Operation>().unwrap_err();
        assert_eq!(err.symbol, "%");
        assert_eq!(err.to_string(), "Unknown operator symbol '%'");
    }

    #[test]
    fn apply_covers_all_four_operations() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(5.0, 8.0), -3.0);
        assert_eq!(Operation::Multiply.apply(6.0, 7.0), 42.0);
        assert_eq!(Operation::Divide.apply(10.0, 4.0), 2.5);
    }

    #[test]
    fn division_by_zero_is_not_finite() {
        assert!(Operation::Divide.apply(5.0, 0.0).is_infinite());
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn operation_serializes_as_symbol() {
        let json = serde_json::to_string(&Operation::Divide).unwrap();
        assert_eq!(json, "\"÷\"");
        let back: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Operation::Divide);
    }
}
