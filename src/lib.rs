//! Tally: a pure functional four-function calculator engine
//!
//! Tally follows the "pure core, imperative shell" philosophy. The calculator
//! is a single state value and a total transition function: every button
//! press is an [`Action`](core::Action), and [`reduce`](core::reduce) maps the
//! current state and an action to the next state without side effects.
//!
//! # Core Concepts
//!
//! - **State**: operands are kept as decimal-literal strings exactly as typed
//! - **Reducer**: one exhaustive `match` over five actions; never fails
//! - **Eager chaining**: operations apply strictly left to right, with no
//!   precedence, so `2 + 3 × 4 = 20`
//! - **Shell**: [`Calculator`] owns the state, logs transitions and renders the
//!   display; formatting never touches the stored values
//!
//! # Example
//!
//! ```rust
//! use tally::core::{reduce, Action, CalculatorState, Digit, Operation};
//!
//! let state = CalculatorState::default();
//! let state = reduce(state, Action::AddDigit(Digit::new('6').unwrap()));
//! let state = reduce(state, Action::ChooseOperation(Operation::Multiply));
//! let state = reduce(state, Action::AddDigit(Digit::new('7').unwrap()));
//! let state = reduce(state, Action::Evaluate);
//!
//! assert_eq!(state.current_value(), "42");
//! ```

pub mod builder;
pub mod core;
pub mod display;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{reduce, Action, CalculatorState, Digit, Operation};
pub use display::{DisplayFormat, Screen};
pub use shell::Calculator;
