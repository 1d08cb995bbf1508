//! The transition function.
//!
//! `reduce` is total: every (state, action) pair maps to a valid next state,
//! including division by zero and operand strings that fail to parse.

use super::action::Action;
use super::digit::Digit;
use super::guard::{accepts_digit, can_choose_operation, can_evaluate};
use super::operation::Operation;
use super::state::{CalculatorState, INITIAL_VALUE};

/// Apply one action to a state, returning the next state.
///
/// Operations chain strictly left to right with no precedence: choosing a
/// new operation while one is pending evaluates the pending one first.
///
/// # Example
///
/// ```rust
/// use tally::core::{reduce, Action, CalculatorState, Digit, Operation};
///
/// let actions = [
///     Action::AddDigit(Digit::new('2').unwrap()),
///     Action::ChooseOperation(Operation::Add),
///     Action::AddDigit(Digit::new('3').unwrap()),
///     Action::ChooseOperation(Operation::Multiply),
///     Action::AddDigit(Digit::new('4').unwrap()),
///     Action::Evaluate,
/// ];
///
/// let state = actions
///     .into_iter()
///     .fold(CalculatorState::default(), reduce);
///
/// assert_eq!(state.current_value(), "20");
/// assert!(state.overwrite());
/// ```
pub fn reduce(state: CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(op) => choose_operation(state, op),
        Action::Clear => CalculatorState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_value: digit.to_string(),
            overwrite: false,
            ..state
        };
    }
    if !accepts_digit(&state, digit) {
        return state;
    }

    let mut current_value = if state.current_value == INITIAL_VALUE {
        String::new()
    } else {
        state.current_value
    };
    current_value.push(digit.as_char());

    CalculatorState {
        current_value,
        ..state
    }
}

fn choose_operation(state: CalculatorState, op: Operation) -> CalculatorState {
    if !can_choose_operation(&state) {
        return state;
    }

    let previous_value = if state.previous_value.is_some() {
        evaluate(&state)
    } else {
        state.current_value.clone()
    };

    CalculatorState {
        current_value: INITIAL_VALUE.to_string(),
        previous_value: Some(previous_value),
        operation: Some(op),
        ..state
    }
}

fn delete_digit(state: CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_value: INITIAL_VALUE.to_string(),
            overwrite: false,
            ..state
        };
    }

    let mut current_value = state.current_value;
    if current_value.chars().count() <= 1 {
        current_value = INITIAL_VALUE.to_string();
    } else {
        current_value.pop();
    }

    CalculatorState {
        current_value,
        ..state
    }
}

fn evaluate_pending(state: CalculatorState) -> CalculatorState {
    if !can_evaluate(&state) {
        return state;
    }

    CalculatorState {
        current_value: evaluate(&state),
        previous_value: None,
        operation: None,
        overwrite: true,
    }
}

/// Compute the pending operation and return the result in canonical form.
///
/// A missing left operand counts as `"0"`. If an operand does not parse, the
/// other operand is returned unchanged; with no operation pending the
/// current value is returned unchanged.
///
/// ```rust
/// use tally::builder::StateBuilder;
/// use tally::core::{evaluate, Operation};
///
/// let state = StateBuilder::new()
///     .previous_value("10")
///     .operation(Operation::Divide)
///     .current_value("4")
///     .build()
///     .unwrap();
///
/// assert_eq!(evaluate(&state), "2.5");
/// ```
pub fn evaluate(state: &CalculatorState) -> String {
    let previous = state.previous_value.as_deref().unwrap_or(INITIAL_VALUE);

    let Ok(lhs) = previous.parse::<f64>() else {
        return state.current_value.clone();
    };
    let Ok(rhs) = state.current_value.parse::<f64>() else {
        return previous.to_string();
    };

    match state.operation {
        Some(op) => canonical(op.apply(lhs, rhs)),
        None => state.current_value.clone(),
    }
}

/// Render a number as a decimal literal without exponent notation.
///
/// Uses the shortest digits that round-trip. Negative zero is rendered as
/// `"0"`; non-finite values are spelled `Infinity`, `-Infinity` and `NaN`,
/// all of which parse back as `f64`.
///
/// ```rust
/// use tally::core::canonical;
///
/// assert_eq!(canonical(42.0), "42");
/// assert_eq!(canonical(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(canonical(-0.0), "0");
/// assert_eq!(canonical(f64::INFINITY), "Infinity");
/// ```
pub fn canonical(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        INITIAL_VALUE.to_string()
    } else {
        value.to_string()
    }
}
