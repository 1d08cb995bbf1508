//! The two display lines rendered from a state.

use super::format::DisplayFormat;
use crate::core::CalculatorState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-only projection of a state onto the calculator display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Left operand and operator, e.g. `1,250 ×`; absent when nothing is pending
    pub pending: Option<String>,
    /// The entry or result line
    pub current: String,
}

impl Screen {
    /// Render both display lines.
    ///
    /// ```rust
    /// use tally::builder::StateBuilder;
    /// use tally::core::Operation;
    /// use tally::display::{DisplayFormat, Screen};
    ///
    /// let state = StateBuilder::new()
    ///     .previous_value("1250")
    ///     .operation(Operation::Multiply)
    ///     .current_value("3.")
    ///     .build()
    ///     .unwrap();
    ///
    /// let screen = Screen::render(&state, &DisplayFormat::default());
    /// assert_eq!(screen.pending.as_deref(), Some("1,250 ×"));
    /// assert_eq!(screen.current, "3.");
    /// ```
    pub fn render(state: &CalculatorState, format: &DisplayFormat) -> Self {
        let pending = match (state.previous_value(), state.operation()) {
            (Some(previous), Some(op)) => {
                Some(format!("{} {}", format.format_operand(previous), op))
            }
            _ => None,
        };

        Self {
            pending,
            current: format.format_operand(state.current_value()),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.pending.as_deref().unwrap_or(""))?;
        write!(f, "{}", self.current)
    }
}
