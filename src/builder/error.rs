//! Build errors for the state builder.

use crate::builder::violations::StateViolation;
use thiserror::Error;

/// Errors that can occur when building a calculator state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Invalid calculator state: {} violation(s): {}", .violations.len(), list(.violations))]
    Invalid { violations: Vec<StateViolation> },
}

fn list(violations: &[StateViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
