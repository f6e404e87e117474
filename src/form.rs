//! Assessment form — field catalog, typed input record, parsing, progress.
//!
//! The eight numeric fields of the risk questionnaire, with their bounds and
//! help text, plus the conversions between what the UI holds (raw strings)
//! and what the model consumes (a typed `AssessmentInput`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Field catalog
// ---------------------------------------------------------------------------

/// The eight questionnaire fields, identified by their wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigree,
    Age,
}

impl FieldId {
    /// All fields, in form order.
    pub const ALL: [FieldId; 8] = [
        FieldId::Pregnancies,
        FieldId::Glucose,
        FieldId::BloodPressure,
        FieldId::SkinThickness,
        FieldId::Insulin,
        FieldId::Bmi,
        FieldId::DiabetesPedigree,
        FieldId::Age,
    ];

    /// Wire name — matches the JSON key expected by the model backend.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Pregnancies => "pregnancies",
            FieldId::Glucose => "glucose",
            FieldId::BloodPressure => "bloodPressure",
            FieldId::SkinThickness => "skinThickness",
            FieldId::Insulin => "insulin",
            FieldId::Bmi => "bmi",
            FieldId::DiabetesPedigree => "diabetesPedigree",
            FieldId::Age => "age",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pregnancies" => Some(FieldId::Pregnancies),
            "glucose" => Some(FieldId::Glucose),
            "bloodPressure" => Some(FieldId::BloodPressure),
            "skinThickness" => Some(FieldId::SkinThickness),
            "insulin" => Some(FieldId::Insulin),
            "bmi" => Some(FieldId::Bmi),
            "diabetesPedigree" => Some(FieldId::DiabetesPedigree),
            "age" => Some(FieldId::Age),
            _ => None,
        }
    }

    /// Human-readable label for error messages and the UI.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Pregnancies => "Pregnancies",
            FieldId::Glucose => "Glucose",
            FieldId::BloodPressure => "Blood pressure",
            FieldId::SkinThickness => "Skin thickness",
            FieldId::Insulin => "Insulin",
            FieldId::Bmi => "BMI",
            FieldId::DiabetesPedigree => "Diabetes pedigree",
            FieldId::Age => "Age",
        }
    }

    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self as usize]
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How a field's value is parsed and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Integer,
    /// Fixed-point decimal, canonically rendered to `places` digits.
    Decimal { places: usize },
}

/// Static description of one questionnaire field.
#[derive(Debug)]
pub struct FieldSpec {
    pub id: FieldId,
    pub kind: NumericKind,
    pub min: f64,
    pub max: f64,
    /// Tooltip text shown next to the input.
    pub help: &'static str,
}

/// The field catalog, indexed by `FieldId as usize`.
pub static FIELD_SPECS: [FieldSpec; 8] = [
    FieldSpec {
        id: FieldId::Pregnancies,
        kind: NumericKind::Integer,
        min: 0.0,
        max: 20.0,
        help: "Number of times pregnant (0 if never pregnant)",
    },
    FieldSpec {
        id: FieldId::Glucose,
        kind: NumericKind::Integer,
        min: 50.0,
        max: 300.0,
        help: "Plasma glucose concentration a 2 hours in an oral glucose tolerance test",
    },
    FieldSpec {
        id: FieldId::BloodPressure,
        kind: NumericKind::Integer,
        min: 40.0,
        max: 180.0,
        help: "Diastolic blood pressure (mm Hg)",
    },
    FieldSpec {
        id: FieldId::SkinThickness,
        kind: NumericKind::Integer,
        min: 0.0,
        max: 99.0,
        help: "Triceps skin fold thickness (mm)",
    },
    FieldSpec {
        id: FieldId::Insulin,
        kind: NumericKind::Integer,
        min: 0.0,
        max: 900.0,
        help: "2-Hour serum insulin (mu U/ml)",
    },
    FieldSpec {
        id: FieldId::Bmi,
        kind: NumericKind::Decimal { places: 1 },
        min: 10.0,
        max: 70.0,
        help: "Body mass index (weight in kg/(height in m)^2)",
    },
    FieldSpec {
        id: FieldId::DiabetesPedigree,
        kind: NumericKind::Decimal { places: 3 },
        min: 0.0,
        max: 2.5,
        help: "Diabetes pedigree function - a score of genetic influence",
    },
    FieldSpec {
        id: FieldId::Age,
        kind: NumericKind::Integer,
        min: 18.0,
        max: 120.0,
        help: "Age in years",
    },
];

/// Render a bound the way the UI shows it — integers without a decimal point.
pub fn fmt_bound(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

// ---------------------------------------------------------------------------
// Raw form values
// ---------------------------------------------------------------------------

/// The form exactly as the UI holds it: one raw string per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawForm {
    pub pregnancies: String,
    pub glucose: String,
    pub blood_pressure: String,
    pub skin_thickness: String,
    pub insulin: String,
    pub bmi: String,
    pub diabetes_pedigree: String,
    pub age: String,
}

impl RawForm {
    /// Raw value for one field.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Pregnancies => &self.pregnancies,
            FieldId::Glucose => &self.glucose,
            FieldId::BloodPressure => &self.blood_pressure,
            FieldId::SkinThickness => &self.skin_thickness,
            FieldId::Insulin => &self.insulin,
            FieldId::Bmi => &self.bmi,
            FieldId::DiabetesPedigree => &self.diabetes_pedigree,
            FieldId::Age => &self.age,
        }
    }
}

// ---------------------------------------------------------------------------
// Typed input record
// ---------------------------------------------------------------------------

/// A complete, bounds-checked assessment submission.
///
/// Serializes to exactly the JSON body the model backend expects; the
/// camelCase keys are the wire contract, do not rename them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub pregnancies: u32,
    pub glucose: u32,
    pub blood_pressure: u32,
    pub skin_thickness: u32,
    pub insulin: u32,
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub age: u32,
}

/// Why a form failed to parse into an `AssessmentInput`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(FieldId),
    #[error("{0} must be a whole number")]
    NotAnInteger(FieldId),
    #[error("{0} must be a number")]
    NotANumber(FieldId),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: FieldId,
        min: String,
        max: String,
    },
}

impl FormError {
    /// The field the error is about.
    pub fn field(&self) -> FieldId {
        match self {
            FormError::Missing(f)
            | FormError::NotAnInteger(f)
            | FormError::NotANumber(f) => *f,
            FormError::OutOfRange { field, .. } => *field,
        }
    }
}

fn out_of_range(spec: &FieldSpec) -> FormError {
    FormError::OutOfRange {
        field: spec.id,
        min: fmt_bound(spec.min),
        max: fmt_bound(spec.max),
    }
}

fn parse_integer(spec: &FieldSpec, raw: &str) -> Result<u32, FormError> {
    let value: u32 = raw
        .parse()
        .map_err(|_| FormError::NotAnInteger(spec.id))?;
    if f64::from(value) < spec.min || f64::from(value) > spec.max {
        return Err(out_of_range(spec));
    }
    Ok(value)
}

fn parse_decimal(spec: &FieldSpec, raw: &str) -> Result<f64, FormError> {
    let value: f64 = raw.parse().map_err(|_| FormError::NotANumber(spec.id))?;
    if !value.is_finite() {
        return Err(FormError::NotANumber(spec.id));
    }
    if value < spec.min || value > spec.max {
        return Err(out_of_range(spec));
    }
    Ok(value)
}

/// Parses and bounds-checks the raw form into a typed submission.
///
/// Integer fields take integer syntax only; bmi and diabetesPedigree take
/// decimal syntax. Every field must be present and within its configured
/// range — the first offending field is reported.
pub fn parse_form(form: &RawForm) -> Result<AssessmentInput, FormError> {
    // Missing values are reported before syntax errors, in form order.
    for field in FieldId::ALL {
        if form.value(field).trim().is_empty() {
            return Err(FormError::Missing(field));
        }
    }

    let int = |id: FieldId| parse_integer(id.spec(), form.value(id).trim());
    let dec = |id: FieldId| parse_decimal(id.spec(), form.value(id).trim());

    Ok(AssessmentInput {
        pregnancies: int(FieldId::Pregnancies)?,
        glucose: int(FieldId::Glucose)?,
        blood_pressure: int(FieldId::BloodPressure)?,
        skin_thickness: int(FieldId::SkinThickness)?,
        insulin: int(FieldId::Insulin)?,
        bmi: dec(FieldId::Bmi)?,
        diabetes_pedigree: dec(FieldId::DiabetesPedigree)?,
        age: int(FieldId::Age)?,
    })
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Completion of the form: filled required fields over total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormProgress {
    pub filled: u32,
    pub total: u32,
    pub percent: f64,
}

/// Recomputed on every input change; purely derived, never stored.
pub fn compute_progress(form: &RawForm) -> FormProgress {
    let total = FieldId::ALL.len() as u32;
    let filled = FieldId::ALL
        .iter()
        .filter(|f| !form.value(**f).trim().is_empty())
        .count() as u32;
    FormProgress {
        filled,
        total,
        percent: f64::from(filled) / f64::from(total) * 100.0,
    }
}

// ---------------------------------------------------------------------------
// Canonical decimal formatting
// ---------------------------------------------------------------------------

/// Reformats a keystroke value to the field's canonical decimal form.
///
/// Only bmi (1 place) and diabetesPedigree (3 places) are reformatted;
/// returns `None` for other fields or values that do not parse yet.
pub fn canonical_format(field: FieldId, raw: &str) -> Option<String> {
    let NumericKind::Decimal { places } = field.spec().kind else {
        return None;
    };
    let value: f64 = raw.trim().parse().ok().filter(|v: &f64| v.is_finite())?;
    Some(format!("{value:.places$}"))
}
