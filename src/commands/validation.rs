//! Field-level IPC commands — inline validation, canonical formatting, and
//! the field catalog for tooltips and input attributes.

use serde::Serialize;

use crate::form::{self, FieldId, NumericKind};
use crate::validation::{self, FieldValidation};

/// Validates one field on loss of focus.
#[tauri::command]
pub fn validate_field(field: String, value: String) -> Result<FieldValidation, String> {
    let field = FieldId::from_str(&field).ok_or_else(|| format!("Unknown field: {field}"))?;
    Ok(validation::validate_field(field, &value))
}

/// Canonical decimal rendering for a keystroke value.
///
/// Returns `None` when the field is not reformatted (integer fields) or the
/// value does not parse yet — the UI leaves the input untouched.
#[tauri::command]
pub fn format_field(field: String, value: String) -> Result<Option<String>, String> {
    let field = FieldId::from_str(&field).ok_or_else(|| format!("Unknown field: {field}"))?;
    Ok(form::canonical_format(field, &value))
}

/// One catalog entry, shaped for input attributes and tooltips.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpecView {
    pub id: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub min: f64,
    pub max: f64,
    /// Decimal places for fixed-point fields; `None` for integers.
    pub decimal_places: Option<usize>,
}

/// The full field catalog, in form order.
#[tauri::command]
pub fn get_field_specs() -> Vec<FieldSpecView> {
    FieldId::ALL
        .iter()
        .map(|field| {
            let spec = field.spec();
            FieldSpecView {
                id: field.as_str(),
                label: field.label(),
                help: spec.help,
                min: spec.min,
                max: spec.max,
                decimal_places: match spec.kind {
                    NumericKind::Integer => None,
                    NumericKind::Decimal { places } => Some(places),
                },
            }
        })
        .collect()
}
