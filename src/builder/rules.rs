//! Invariant checks for calculator states using Validation.

use crate::builder::state::StateParts;
use crate::builder::violations::{StateViolation, ValueField};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<StateViolation>>;

const NON_FINITE: [&str; 3] = ["Infinity", "-Infinity", "NaN"];

/// Check every invariant of a raw state, accumulating ALL violations.
/// Returns Validation::Success(()) if all checks pass.
pub fn validate(parts: &StateParts) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    checks.extend(value_shape(ValueField::Current, &parts.current_value));
    if let Some(previous) = &parts.previous_value {
        checks.extend(value_shape(ValueField::Previous, previous));
    }

    // Only a computed result may carry a sign or be non-finite
    if !parts.overwrite && is_signed_or_non_finite(&parts.current_value) {
        checks.push(Validation::fail(StateViolation::SignedEntry {
            value: parts.current_value.clone(),
        }));
    }

    // Operation and its left operand are set and cleared together
    match (&parts.operation, &parts.previous_value) {
        (Some(op), None) => checks.push(Validation::fail(
            StateViolation::OperationWithoutOperand {
                operation: op.to_string(),
            },
        )),
        (None, Some(value)) => checks.push(Validation::fail(
            StateViolation::OperandWithoutOperation {
                value: value.clone(),
            },
        )),
        _ => checks.push(Validation::success(())),
    }

    Validation::all_vec(checks).map(|_| ())
}

fn value_shape(field: ValueField, value: &str) -> Vec<Check> {
    if value.is_empty() {
        return vec![Validation::fail(StateViolation::EmptyValue { field })];
    }
    if NON_FINITE.contains(&value) {
        return vec![Validation::success(())];
    }

    let mut checks = Vec::new();
    if value.contains(',') {
        checks.push(Validation::fail(StateViolation::GroupingSeparator {
            field,
            value: value.to_string(),
        }));
    }
    if value.matches('.').count() > 1 {
        checks.push(Validation::fail(StateViolation::MultipleDecimalPoints {
            field,
            value: value.to_string(),
        }));
    }

    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let well_formed = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == ',');
    if !well_formed {
        checks.push(Validation::fail(StateViolation::MalformedValue {
            field,
            value: value.to_string(),
        }));
    }

    checks
}

fn is_signed_or_non_finite(value: &str) -> bool {
    value.starts_with('-') || NON_FINITE.contains(&value)
}
