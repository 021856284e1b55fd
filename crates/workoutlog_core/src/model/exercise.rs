//! Exercise domain model.
//!
//! # Responsibility
//! - Define the stored exercise record and its creation draft.
//! - Enforce the name invariant before anything reaches SQL.
//!
//! # Invariants
//! - `name` is non-empty after trimming and persisted trimmed.
//! - Name uniqueness is a store-level rule; see the exercise repository.

use crate::model::{FieldViolation, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// Stored exercise record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Store-assigned id.
    pub id: RecordId,
    /// Unique display name, trimmed of surrounding whitespace.
    pub name: String,
    /// Optional free-text grouping, e.g. "Strength" or "Core".
    pub category: Option<String>,
    /// Whether the exercise requires equipment.
    pub equipment_needed: bool,
}

/// Caller-supplied fields for creating an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewExercise {
    pub name: String,
    pub category: Option<String>,
    pub equipment_needed: bool,
}

impl NewExercise {
    pub fn new(name: impl Into<String>, category: Option<String>, equipment_needed: bool) -> Self {
        Self {
            name: name.into(),
            category,
            equipment_needed,
        }
    }

    /// The name as it will be persisted.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Checks field invariants, reporting every offending field at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        if self.trimmed_name().is_empty() {
            violations.push(FieldViolation::new(
                "name",
                "must not be empty or whitespace-only",
            ));
        }
        ValidationError::check(violations)
    }
}
