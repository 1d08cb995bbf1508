//! User actions fed into the reducer.

use super::digit::Digit;
use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One discrete user interaction.
///
/// Each variant carries only the literal payload of the key that was pressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Append a digit or decimal point to the current entry
    AddDigit(Digit),
    /// Pick the next operation, evaluating any pending one first
    ChooseOperation(Operation),
    /// Reset to the initial state
    Clear,
    /// Remove the last character of the current entry
    DeleteDigit,
    /// Apply the pending operation
    Evaluate,
}

/// Error returned when a button label does not map to any action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("No calculator action for button label '{label}'")]
pub struct ParseActionError {
    pub label: String,
}

impl Action {
    /// Short, stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddDigit(_) => "AddDigit",
            Self::ChooseOperation(_) => "ChooseOperation",
            Self::Clear => "Clear",
            Self::DeleteDigit => "DeleteDigit",
            Self::Evaluate => "Evaluate",
        }
    }
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Self::AddDigit(digit)
    }
}

impl From<Operation> for Action {
    fn from(op: Operation) -> Self {
        Self::ChooseOperation(op)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddDigit(d) => write!(f, "{d}"),
            Self::ChooseOperation(op) => write!(f, "{op}"),
            Self::Clear => f.write_str("C"),
            Self::DeleteDigit => f.write_str("DEL"),
            Self::Evaluate => f.write_str("="),
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Map a button label to its action.
    ///
    /// ```rust
    /// use tally::core::{Action, Digit, Operation};
    ///
    /// assert_eq!("7".parse::<Action>(), Ok(Action::AddDigit(Digit::new('7').unwrap())));
    /// assert_eq!("÷".parse::<Action>(), Ok(Action::ChooseOperation(Operation::Divide)));
    /// assert_eq!("=".parse::<Action>(), Ok(Action::Evaluate));
    /// assert_eq!("clear".parse::<Action>(), Ok(Action::Clear));
    /// assert!("sqrt".parse::<Action>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();

        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(digit) = Digit::new(c) {
                return Ok(Self::AddDigit(digit));
            }
        }

        if let Ok(op) = label.parse::<Operation>() {
            return Ok(Self::ChooseOperation(op));
        }

        match label.to_ascii_uppercase().as_str() {
            "=" | "ENTER" => Ok(Self::Evaluate),
            "C" | "AC" | "CLEAR" => Ok(Self::Clear),
            "DEL" | "DELETE" | "⌫" => Ok(Self::DeleteDigit),
            _ => Err(ParseActionError {
                label: label.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_labels_map_to_add_digit() {
        for c in "0123456789.".chars() {
            let action: Action = c.to_string().parse().unwrap();
            assert_eq!(action, Action::AddDigit(Digit::new(c).unwrap()));
        }
    }

    #[test]
    fn operator_labels_map_to_choose_operation() {
        assert_eq!(
            "*".parse::<Action>(),
            Ok(Action::ChooseOperation(Operation::Multiply))
        );
        assert_eq!(
            "-".parse::<Action>(),
            Ok(Action::ChooseOperation(Operation::Subtract))
        );
    }

    #[test]
    fn word_labels_are_case_insensitive() {
        assert_eq!("Del".parse::<Action>(), Ok(Action::DeleteDigit));
        assert_eq!("ac".parse::<Action>(), Ok(Action::Clear));
        assert_eq!("⌫".parse::<Action>(), Ok(Action::DeleteDigit));
    }

    #[test]
    fn unknown_label_reports_itself() {
        let err = " 12 ".parse::<Action>().unwrap_err();
        assert_eq!(err.label, "12");
    }

    #[test]
    fn display_round_trips_through_parse() {
        let actions = [
            Action::AddDigit(Digit::POINT),
            Action::ChooseOperation(Operation::Divide),
            Action::Clear,
            Action::DeleteDigit,
            Action::Evaluate,
        ];
        for action in actions {
            assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn action_serializes_with_type_tag() {
        let json = serde_json::to_string(&Action::ChooseOperation(Operation::Add)).unwrap();
        assert_eq!(json, r#"{"type":"CHOOSE_OPERATION","payload":"+"}"#);

        let clear = serde_json::to_string(&Action::Clear).unwrap();
        assert_eq!(clear, r#"{"type":"CLEAR"}"#);
    }
}
