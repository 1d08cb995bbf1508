//! Transition guards.
//!
//! Each guard is a pure predicate over the current state that decides
//! whether an action changes anything. The reducer consults them before
//! transitioning; a presentation layer can use the same predicates to
//! enable or disable keys.

use super::digit::Digit;
use super::state::{CalculatorState, INITIAL_VALUE};

/// Whether pressing `digit` changes the state.
///
/// Rejects a leading zero on an empty entry and a second decimal point.
/// Always accepts when the overwrite flag is set.
///
/// # Example
///
/// ```rust
/// use tally::core::{accepts_digit, CalculatorState, Digit};
///
/// let initial = CalculatorState::default();
/// assert!(!accepts_digit(&initial, Digit::ZERO));
/// assert!(accepts_digit(&initial, Digit::POINT));
/// ```
pub fn accepts_digit(state: &CalculatorState, digit: Digit) -> bool {
    if state.overwrite {
        return true;
    }
    if digit.is_zero() && state.current_value == INITIAL_VALUE {
        return false;
    }
    !(digit.is_point() && state.current_value.contains('.'))
}

/// Whether choosing an operation changes the state.
///
/// There is nothing to operate on until either a first operand has been
/// entered or one is already pending.
pub fn can_choose_operation(state: &CalculatorState) -> bool {
    state.previous_value.is_some() || state.current_value != INITIAL_VALUE
}

/// Whether `=` has a pending operation to apply.
pub fn can_evaluate(state: &CalculatorState) -> bool {
    state.operation.is_some() && state.previous_value.is_some()
}
