//! Grouped number formatting for the display.
//!
//! Formatting is cosmetic: it reads operand strings and never feeds back into
//! the state.

use serde::{Deserialize, Serialize};

/// How operands are rendered on screen.
///
/// The default matches the en-US locale: `,` groups thousands and `.` marks
/// the decimal point.
///
/// # Example
///
/// ```rust
/// use tally::display::DisplayFormat;
///
/// let en = DisplayFormat::default();
/// assert_eq!(en.format_operand("1234567.25"), "1,234,567.25");
///
/// let de = DisplayFormat::new().grouping_separator('.').decimal_point(',');
/// assert_eq!(de.format_operand("1234567.25"), "1.234.567,25");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    /// Inserted between groups of three integer digits; `None` disables grouping
    pub grouping_separator: Option<char>,
    /// Shown in place of the stored `.`
    pub decimal_point: char,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            grouping_separator: Some(','),
            decimal_point: '.',
        }
    }
}

impl DisplayFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = Some(separator);
        self
    }

    pub fn without_grouping(mut self) -> Self {
        self.grouping_separator = None;
        self
    }

    pub fn decimal_point(mut self, point: char) -> Self {
        self.decimal_point = point;
        self
    }

    /// Render a stored operand for display.
    ///
    /// The integer part is grouped with no fractional digits; any decimal
    /// part, including an empty one after a trailing point, is reattached
    /// verbatim. Non-finite spellings and anything that is not a decimal
    /// literal are returned unchanged.
    pub fn format_operand(&self, operand: &str) -> String {
        let (integer, decimal) = match operand.split_once('.') {
            Some((integer, decimal)) => (integer, Some(decimal)),
            None => (operand, None),
        };

        let Some(mut formatted) = self.format_integer(integer) else {
            return operand.to_string();
        };
        if let Some(decimal) = decimal {
            formatted.push(self.decimal_point);
            formatted.push_str(decimal);
        }
        formatted
    }

    fn format_integer(&self, integer: &str) -> Option<String> {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        // Leading zeros are dropped; an empty integer part reads as zero
        let digits = digits.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };

        let Some(separator) = self.grouping_separator else {
            return Some(format!("{sign}{digits}"));
        };

        let mut grouped = String::with_capacity(sign.len() + digits.len() * 4 / 3);
        grouped.push_str(sign);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(c);
        }
        Some(grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(operand: &str) -> String {
        DisplayFormat::default().format_operand(operand)
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(en("0"), "0");
        assert_eq!(en("999"), "999");
        assert_eq!(en("1000"), "1,000");
        assert_eq!(en("1000000"), "1,000,000");
        assert_eq!(en("12345678"), "12,345,678");
    }

    #[test]
    fn test_decimal_part_is_verbatim() {
        assert_eq!(en("1234.5000"), "1,234.5000");
        assert_eq!(en("0.30000000000000004"), "0.30000000000000004");
    }

    #[test]
    fn test_trailing_point_is_kept() {
        assert_eq!(en("12."), "12.");
        assert_eq!(en("1000."), "1,000.");
    }

    #[test]
    fn test_missing_integer_part_reads_as_zero() {
        assert_eq!(en(".5"), "0.5");
        assert_eq!(en("."), "0.");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(en("-3"), "-3");
        assert_eq!(en("-1234.5"), "-1,234.5");
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert_eq!(en("Infinity"), "Infinity");
        assert_eq!(en("-Infinity"), "-Infinity");
        assert_eq!(en("NaN"), "NaN");
    }

    #[test]
    fn test_huge_integers_keep_every_digit() {
        assert_eq!(
            en("1000000000000000000000"),
            "1,000,000,000,000,000,000,000"
        );
    }

    #[test]
    fn test_grouping_can_be_disabled() {
        let plain = DisplayFormat::new().without_grouping();
        assert_eq!(plain.format_operand("1234567.8"), "1234567.8");
    }

    #[test]
    fn test_formatting_does_not_touch_input() {
        let stored = String::from("9876543.21");
        let _ = en(&stored);
        assert_eq!(stored, "9876543.21");
    }

    #[test]
    fn test_format_deserializes_with_defaults() {
        let format: DisplayFormat = serde_json::from_str(r#"{"decimal_point":","}"#).unwrap();
        assert_eq!(format.grouping_separator, Some(','));
        assert_eq!(format.decimal_point, ',');
    }
}
