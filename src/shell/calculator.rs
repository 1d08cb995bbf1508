//! Calculator session that dispatches actions through the pure reducer.

use crate::core::{reduce, Action, CalculatorState, ParseActionError};
use crate::display::{DisplayFormat, Screen};
use tracing::{debug, warn};

/// One calculator session.
///
/// Owns the single state value and replaces it on every dispatched action.
/// All arithmetic happens in [`reduce`]; this type only maps input, logs, and
/// renders.
///
/// # Example
///
/// ```rust
/// use tally::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.press_all(["1", "2", "×", "3", "="]).unwrap();
/// assert_eq!(calc.state().current_value(), "36");
/// assert_eq!(calc.screen().current, "36");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    format: DisplayFormat,
}

impl Calculator {
    /// Create a session in the initial state with en-US formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that renders with the given format.
    pub fn with_format(format: DisplayFormat) -> Self {
        Self {
            state: CalculatorState::default(),
            format,
        }
    }

    /// Resume from an existing state.
    pub fn from_state(state: CalculatorState) -> Self {
        Self {
            state,
            format: DisplayFormat::default(),
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn format(&self) -> &DisplayFormat {
        &self.format
    }

    /// Apply one action and return the new state.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let previous = std::mem::take(&mut self.state);
        let before = previous.phase();
        let next = reduce(previous, action);

        debug!(
            action = action.name(),
            payload = %action,
            from = before.name(),
            to = next.phase().name(),
            current = next.current_value(),
            "dispatched calculator action"
        );
        if next.is_error() {
            warn!(result = next.current_value(), "calculation produced a non-finite result");
        }

        self.state = next;
        &self.state
    }

    /// Map a button label to its action and dispatch it.
    ///
    /// Unknown labels leave the state untouched.
    pub fn press(&mut self, label: &str) -> Result<&CalculatorState, ParseActionError> {
        let action = label.parse::<Action>().map_err(|err| {
            warn!(label = %label, "ignoring unknown button label");
            err
        })?;
        Ok(self.dispatch(action))
    }

    /// Press a sequence of buttons, stopping at the first unknown label.
    pub fn press_all<'a, I>(&mut self, labels: I) -> Result<&CalculatorState, ParseActionError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for label in labels {
            self.press(label)?;
        }
        Ok(&self.state)
    }

    /// Render the display lines for the current state.
    pub fn screen(&self) -> Screen {
        Screen::render(&self.state, &self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operation, Phase};

    #[test]
    fn new_session_starts_initial() {
        let calc = Calculator::new();
        assert!(calc.state().is_initial());
        assert_eq!(calc.screen().current, "0");
    }

    #[test]
    fn dispatch_replaces_state() {
        let mut calc = Calculator::new();

        calc.dispatch(Action::AddDigit(Digit::new('8').unwrap()));
        assert_eq!(calc.state().phase(), Phase::Entering);

        calc.dispatch(Action::ChooseOperation(Operation::Subtract));
        assert_eq!(calc.state().phase(), Phase::Pending);

        calc.dispatch(Action::AddDigit(Digit::new('9').unwrap()));
        let state = calc.dispatch(Action::Evaluate);
        assert_eq!(state.current_value(), "-1");
        assert_eq!(state.phase(), Phase::Evaluated);
    }

    #[test]
    fn press_maps_labels() {
        let mut calc = Calculator::new();
        calc.press_all(["1", "0", "÷", "4", "="]).unwrap();
        assert_eq!(calc.state().current_value(), "2.5");
    }

    #[test]
    fn unknown_label_is_rejected_without_side_effects() {
        let mut calc = Calculator::new();
        calc.press("7").unwrap();

        let err = calc.press("sin").unwrap_err();
        assert_eq!(err.label, "sin");
        assert_eq!(calc.state().current_value(), "7");
    }

    #[test]
    fn press_all_stops_at_first_unknown_label() {
        let mut calc = Calculator::new();
        let result = calc.press_all(["4", "?", "5"]);
        assert!(result.is_err());
        assert_eq!(calc.state().current_value(), "4");
    }

    #[test]
    fn screen_shows_pending_operation() {
        let mut calc = Calculator::new();
        calc.press_all(["1", "2", "3", "4", "+"]).unwrap();

        let screen = calc.screen();
        assert_eq!(screen.pending.as_deref(), Some("1,234 +"));
        assert_eq!(screen.current, "0");
    }

    #[test]
    fn custom_format_is_used_for_rendering() {
        let format = DisplayFormat::new().grouping_separator(' ').decimal_point(',');
        let mut calc = Calculator::with_format(format);
        calc.press_all(["1", "2", "3", "4", ".", "5"]).unwrap();

        assert_eq!(calc.screen().current, "1 234,5");
        assert_eq!(calc.state().current_value(), "1234.5");
    }

    #[test]
    fn division_by_zero_shows_infinity() {
        let mut calc = Calculator::new();
        calc.press_all(["5", "÷", "0", "="]).unwrap();

        assert!(calc.state().is_error());
        assert_eq!(calc.screen().current, "Infinity");
    }

    #[test]
    fn clear_after_error_recovers() {
        let mut calc = Calculator::new();
        calc.press_all(["5", "÷", "0", "=", "C"]).unwrap();
        assert!(calc.state().is_initial());
    }

    #[test]
    fn session_resumes_from_state() {
        let mut calc = Calculator::new();
        calc.press_all(["9", "×"]).unwrap();

        let mut resumed = Calculator::from_state(calc.state().clone());
        resumed.press_all(["9", "="]).unwrap();
        assert_eq!(resumed.state().current_value(), "81");
    }
}
