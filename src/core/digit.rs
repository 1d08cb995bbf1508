//! Digit-key payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single digit-key input: `0` through `9` or the decimal point.
///
/// The type cannot hold any other character, which keeps the reducer total.
///
/// # Example
///
/// ```rust
/// use tally::core::Digit;
///
/// assert!(Digit::new('7').is_some());
/// assert!(Digit::new('.').is_some());
/// assert!(Digit::new('x').is_none());
/// assert!(Digit::POINT.is_point());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

/// Error returned when a character is not a digit key.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("'{0}' is not a digit or decimal point")]
pub struct InvalidDigit(pub char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const POINT: Digit = Digit('.');

    /// Returns `None` unless `c` is an ASCII digit or `.`.
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == '0'
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = InvalidDigit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or(InvalidDigit(c))
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
