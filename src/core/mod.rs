//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The `CalculatorState` value and its `Phase` classification
//! - The closed set of user `Action`s and their payload types
//! - Guard predicates that decide whether an action changes anything
//! - The `reduce` transition function and the `evaluate` helper
//!
//! Nothing in this module performs I/O or logging.

mod action;
mod digit;
mod guard;
mod operation;
mod reduce;
mod state;

pub use action::{Action, ParseActionError};
pub use digit::{Digit, InvalidDigit};
pub use guard::{accepts_digit, can_choose_operation, can_evaluate};
pub use operation::{Operation, ParseOperationError};
pub use reduce::{canonical, evaluate, reduce};
pub use state::{CalculatorState, Phase, INITIAL_VALUE};
