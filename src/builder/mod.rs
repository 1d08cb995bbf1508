//! Validated construction of calculator states.
//!
//! The reducer only ever produces valid states, but hosts and tests need to
//! start from arbitrary ones. `StateBuilder` checks every data-model
//! invariant using Stillwater's `Validation` type, so ALL violations are
//! reported in a single pass instead of one at a time.
//!
//! # Example
//!
//! ```rust
//! use tally::builder::StateBuilder;
//! use tally::core::{reduce, Action, Digit};
//!
//! let state = StateBuilder::new().current_value("3.5").build().unwrap();
//! let next = reduce(state.clone(), Action::AddDigit(Digit::POINT));
//! assert_eq!(next, state);
//! ```

pub mod error;
pub mod rules;
pub mod state;
pub mod violations;

pub use error::BuildError;
pub use rules::validate;
pub use state::{StateBuilder, StateParts};
pub use violations::{StateViolation, ValueField};
