//! Per-field input validation — loss-of-focus feedback, independent of the
//! submission path. A field failing validation never blocks other fields.

use serde::{Deserialize, Serialize};

use crate::form::{fmt_bound, FieldId};

/// Outcome of validating one field, shaped for inline UI feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    pub field: FieldId,
    pub valid: bool,
    /// Present only when invalid; the UI attaches it next to the input.
    pub message: Option<String>,
}

impl FieldValidation {
    fn valid(field: FieldId) -> Self {
        Self {
            field,
            valid: true,
            message: None,
        }
    }

    fn invalid(field: FieldId, message: String) -> Self {
        Self {
            field,
            valid: false,
            message: Some(message),
        }
    }
}

/// Validates a single field's raw value against its configured range.
///
/// All fields are checked with decimal parsing here — this is display
/// feedback, not the submission gate, and a value like "95.5" in an integer
/// field still reads as in-range to the user until submit rejects it.
pub fn validate_field(field: FieldId, raw: &str) -> FieldValidation {
    let spec = field.spec();
    let parsed: Option<f64> = raw.trim().parse().ok().filter(|v: &f64| v.is_finite());
    match parsed {
        Some(v) if v >= spec.min && v <= spec.max => FieldValidation::valid(field),
        _ => FieldValidation::invalid(
            field,
            format!(
                "Please enter a value between {} and {}",
                fmt_bound(spec.min),
                fmt_bound(spec.max),
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_value_is_valid_and_clears_message() {
        let result = validate_field(FieldId::Glucose, "120");
        assert!(result.valid);
        assert!(result.message.is_none());
    }

    #[test]
    fn out_of_range_value_reports_bounds() {
        let result = validate_field(FieldId::Glucose, "400");
        assert!(!result.valid);
        assert_eq!(
            result.message.as_deref(),
            Some("Please enter a value between 50 and 300"),
        );
    }

    #[test]
    fn unparsable_value_is_invalid() {
        let result = validate_field(FieldId::Bmi, "not a number");
        assert!(!result.valid);
        assert!(result.message.is_some());
    }

    #[test]
    fn decimal_bounds_keep_fractional_rendering() {
        let result = validate_field(FieldId::DiabetesPedigree, "9");
        assert_eq!(
            result.message.as_deref(),
            Some("Please enter a value between 0 and 2.5"),
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate_field(FieldId::Glucose, "50").valid);
        assert!(validate_field(FieldId::Glucose, "300").valid);
        assert!(!validate_field(FieldId::Glucose, "49.9").valid);
    }

    #[test]
    fn blank_value_is_invalid() {
        assert!(!validate_field(FieldId::Age, "  ").valid);
    }

    #[test]
    fn validation_serializes_for_ipc() {
        let json = serde_json::to_value(validate_field(FieldId::Age, "30")).unwrap();
        assert_eq!(json["field"], "age");
        assert_eq!(json["valid"], true);
    }
}
