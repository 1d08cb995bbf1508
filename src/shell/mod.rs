//! The imperative shell around the pure core.
//!
//! A `Calculator` holds the current state, turns button labels into actions,
//! runs them through `reduce`, and logs each transition with `tracing`. It is
//! the only place in the crate with side effects.

mod calculator;

pub use calculator::Calculator;
