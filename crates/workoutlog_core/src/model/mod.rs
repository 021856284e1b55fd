//! Domain model for workouts, exercises and their associations.
//!
//! # Responsibility
//! - Define the canonical records persisted by the store.
//! - Define draft ("new record") shapes for caller input and their
//!   field-level validation rules.
//!
//! # Invariants
//! - Every stored record is identified by a store-assigned `RecordId`.
//! - Draft validation reports all offending fields in one error, never
//!   just the first.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod exercise;
pub mod workout;

/// Store-assigned row identifier shared by all record kinds.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;

/// One rejected field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name as it appears in caller input.
    pub field: &'static str,
    /// Why the value was rejected.
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Aggregated validation failure for one draft record.
///
/// Carries every offending field so callers can report the full set of
/// problems instead of fixing them one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Builds the error from collected violations.
    ///
    /// Returns `Ok(())` when the list is empty, so validation call sites
    /// can finish with `ValidationError::check(violations)`.
    pub fn check(violations: Vec<FieldViolation>) -> Result<(), ValidationError> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }

    /// Returns whether the given field is among the violations.
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: ")?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Checks one optional count-like field (`reps`, `sets`, `duration_seconds`).
///
/// Absence is always permitted; present values must be non-negative.
pub(crate) fn check_non_negative(
    field: &'static str,
    value: Option<i64>,
    violations: &mut Vec<FieldViolation>,
) {
    if let Some(value) = value {
        if value < 0 {
            violations.push(FieldViolation::new(
                field,
                format!("must be >= 0 when set, got {value}"),
            ));
        }
    }
}
