//! Presentation helpers.
//!
//! Everything here reads a `CalculatorState` and produces text; nothing
//! writes back. The core stays testable without any display or locale
//! concerns.

mod format;
mod screen;

pub use format::DisplayFormat;
pub use screen::Screen;
