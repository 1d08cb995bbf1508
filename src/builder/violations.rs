//! Invariant violations reported by the state builder.

use std::fmt;
use thiserror::Error;

/// Which operand field a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    Current,
    Previous,
}

impl fmt::Display for ValueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("current value"),
            Self::Previous => f.write_str("previous value"),
        }
    }
}

/// A single broken invariant of a calculator state
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateViolation {
    #[error("The {field} is empty")]
    EmptyValue { field: ValueField },

    #[error("The {field} '{value}' contains a grouping separator")]
    GroupingSeparator { field: ValueField, value: String },

    #[error("The {field} '{value}' has more than one decimal point")]
    MultipleDecimalPoints { field: ValueField, value: String },

    #[error("The {field} '{value}' is not a decimal literal")]
    MalformedValue { field: ValueField, value: String },

    #[error("The current value '{value}' is signed or non-finite but is not a computed result")]
    SignedEntry { value: String },

    #[error("Operation '{operation}' is pending without a previous value")]
    OperationWithoutOperand { operation: String },

    #[error("Previous value '{value}' is stored without a pending operation")]
    OperandWithoutOperation { value: String },
}
