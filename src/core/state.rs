//! The calculator state value.
//!
//! A `CalculatorState` is an immutable value: the reducer consumes one and
//! returns the next. Operands are kept as decimal-literal strings exactly as
//! the user typed them; they only become `f64` inside evaluation.

use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// Value shown on a fresh or cleared calculator.
pub const INITIAL_VALUE: &str = "0";

/// Complete state of the calculator.
///
/// Construct the initial state with [`CalculatorState::default`], or build an
/// arbitrary one through [`crate::builder::StateBuilder`], which checks every
/// invariant. Deserialization goes through the same checks.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::default();
/// assert_eq!(state.current_value(), "0");
/// assert_eq!(state.previous_value(), None);
/// assert_eq!(state.operation(), None);
/// assert!(!state.overwrite());
/// assert_eq!(state.phase(), Phase::Idle);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "crate::builder::StateParts",
    into = "crate::builder::StateParts"
)]
pub struct CalculatorState {
    pub(crate) current_value: String,
    pub(crate) previous_value: Option<String>,
    pub(crate) operation: Option<Operation>,
    pub(crate) overwrite: bool,
}

/// Coarse classification of a state, used for logging and diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing entered since start or the last clear
    Idle,
    /// Building an operand with no operation pending
    Entering,
    /// An operation is waiting for its right-hand operand
    Pending,
    /// Showing a result; the next digit starts a new number
    Evaluated,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Entering => "Entering",
            Self::Pending => "Pending",
            Self::Evaluated => "Evaluated",
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_value: INITIAL_VALUE.to_string(),
            previous_value: None,
            operation: None,
            overwrite: false,
        }
    }
}

impl CalculatorState {
    /// The number currently being entered or displayed.
    pub fn current_value(&self) -> &str {
        &self.current_value
    }

    /// Left-hand operand of the pending operation, if any.
    pub fn previous_value(&self) -> Option<&str> {
        self.previous_value.as_deref()
    }

    /// The pending operation, if any.
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Whether the next digit replaces the current value.
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// True for the start-of-session / cleared state.
    pub fn is_initial(&self) -> bool {
        self.current_value == INITIAL_VALUE
            && self.previous_value.is_none()
            && self.operation.is_none()
            && !self.overwrite
    }

    /// True when the current value is a non-finite result such as `Infinity`
    /// or `NaN` (for example after dividing by zero).
    pub fn is_error(&self) -> bool {
        self.current_value
            .parse::<f64>()
            .is_ok_and(|value| !value.is_finite())
    }

    pub fn phase(&self) -> Phase {
        if self.overwrite {
            Phase::Evaluated
        } else if self.operation.is_some() {
            Phase::Pending
        } else if self.is_initial() {
            Phase::Idle
        } else {
            Phase::Entering
        }
    }
}
