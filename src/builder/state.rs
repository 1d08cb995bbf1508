//! Builder for constructing validated calculator states.

use crate::builder::error::BuildError;
use crate::builder::rules::validate;
use crate::core::{CalculatorState, Operation};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Unvalidated fields of a calculator state.
///
/// This is also the serialized form of [`CalculatorState`]; deserializing a
/// state runs it through the same invariant checks as [`StateBuilder`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateParts {
    pub current_value: String,
    pub previous_value: Option<String>,
    pub operation: Option<Operation>,
    pub overwrite: bool,
}

impl Default for StateParts {
    fn default() -> Self {
        CalculatorState::default().into()
    }
}

impl From<CalculatorState> for StateParts {
    fn from(state: CalculatorState) -> Self {
        Self {
            current_value: state.current_value,
            previous_value: state.previous_value,
            operation: state.operation,
            overwrite: state.overwrite,
        }
    }
}

impl TryFrom<StateParts> for CalculatorState {
    type Error = BuildError;

    fn try_from(parts: StateParts) -> Result<Self, Self::Error> {
        match validate(&parts) {
            Validation::Success(_) => Ok(CalculatorState {
                current_value: parts.current_value,
                previous_value: parts.previous_value,
                operation: parts.operation,
                overwrite: parts.overwrite,
            }),
            Validation::Failure(errors) => Err(BuildError::Invalid {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}

/// Fluent builder for a [`CalculatorState`].
///
/// Unset fields take their initial values. `build` reports every broken
/// invariant at once rather than stopping at the first.
///
/// # Example
///
/// ```rust
/// use tally::builder::{BuildError, StateBuilder};
/// use tally::core::Operation;
///
/// let state = StateBuilder::new()
///     .previous_value("12")
///     .operation(Operation::Add)
///     .current_value("3.5")
///     .build()
///     .unwrap();
/// assert_eq!(state.previous_value(), Some("12"));
///
/// let err = StateBuilder::new()
///     .current_value("1,000.0.0")
///     .operation(Operation::Add)
///     .build()
///     .unwrap_err();
/// let BuildError::Invalid { violations } = err;
/// assert_eq!(violations.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateBuilder {
    parts: StateParts,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value being entered or displayed.
    pub fn current_value(mut self, value: impl Into<String>) -> Self {
        self.parts.current_value = value.into();
        self
    }

    /// Set the left-hand operand of the pending operation.
    pub fn previous_value(mut self, value: impl Into<String>) -> Self {
        self.parts.previous_value = Some(value.into());
        self
    }

    /// Set the pending operation.
    pub fn operation(mut self, op: Operation) -> Self {
        self.parts.operation = Some(op);
        self
    }

    /// Mark the current value as a computed result.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.parts.overwrite = overwrite;
        self
    }

    /// Validate and build the state.
    pub fn build(self) -> Result<CalculatorState, BuildError> {
        CalculatorState::try_from(self.parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateViolation;

    #[test]
    fn empty_builder_yields_initial_state() {
        let state = StateBuilder::new().build().unwrap();
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn builder_sets_every_field() {
        let state = StateBuilder::new()
            .current_value("42")
            .overwrite(true)
            .build()
            .unwrap();

        assert_eq!(state.current_value(), "42");
        assert!(state.overwrite());
        assert_eq!(state.operation(), None);
    }

    #[test]
    fn builder_validates_required_pairing() {
        let err = StateBuilder::new().previous_value("3").build().unwrap_err();

        assert_eq!(
            err,
            BuildError::Invalid {
                violations: vec![StateViolation::OperandWithoutOperation {
                    value: "3".to_string()
                }]
            }
        );
    }

    #[test]
    fn state_serializes_with_camel_case_fields() {
        let state = StateBuilder::new()
            .previous_value("2")
            .operation(Operation::Multiply)
            .current_value("3")
            .build()
            .unwrap();

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"currentValue":"3","previousValue":"2","operation":"×","overwrite":false}"#
        );

        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn deserialization_rejects_broken_invariants() {
        let json = r#"{"currentValue":"","previousValue":null,"operation":"+","overwrite":false}"#;
        let err = serde_json::from_str::<CalculatorState>(json).unwrap_err();
        assert!(err.to_string().contains("2 violation"));
    }
}
