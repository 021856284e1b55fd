//! Workout and workout-exercise domain models.
//!
//! # Responsibility
//! - Define the stored workout record, the association record linking a
//!   workout to an exercise, and both creation drafts.
//! - Enforce duration and per-association metadata invariants before
//!   anything reaches SQL.
//!
//! # Invariants
//! - `duration_minutes` is strictly positive whenever a workout exists.
//! - `reps`, `sets` and `duration_seconds` are each absent or >= 0.
//! - A missing workout date resolves to the current local date exactly
//!   once, at persistence time.

use crate::model::{check_non_negative, FieldViolation, RecordId, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Stored workout record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Store-assigned id.
    pub id: RecordId,
    /// Calendar date of the session.
    pub date: NaiveDate,
    /// Session length; always > 0.
    pub duration_minutes: i64,
    /// Optional free text.
    pub notes: Option<String>,
}

/// Stored association between one workout and one exercise.
///
/// Carries the per-pairing metadata; a workout may link the same exercise
/// more than once (e.g. repeated circuit rounds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Store-assigned id.
    pub id: RecordId,
    /// Parent workout; guaranteed to exist at creation time.
    pub workout_id: RecordId,
    /// Linked exercise; guaranteed to exist at creation time.
    pub exercise_id: RecordId,
    pub reps: Option<i64>,
    pub sets: Option<i64>,
    pub duration_seconds: Option<i64>,
}

/// Caller-supplied fields for creating a workout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewWorkout {
    /// Session date; `None` means "today".
    pub date: Option<NaiveDate>,
    pub duration_minutes: i64,
    pub notes: Option<String>,
}

impl NewWorkout {
    pub fn new(date: Option<NaiveDate>, duration_minutes: i64, notes: Option<String>) -> Self {
        Self {
            date,
            duration_minutes,
            notes,
        }
    }

    /// The date as it will be persisted: supplied, or the current local date.
    pub fn effective_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Checks field invariants, reporting every offending field at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        if self.duration_minutes <= 0 {
            violations.push(FieldViolation::new(
                "duration_minutes",
                format!("must be > 0, got {}", self.duration_minutes),
            ));
        }
        ValidationError::check(violations)
    }
}

/// Caller-supplied metadata for attaching an exercise to a workout.
///
/// The parent ids travel separately in the attach call; this draft only
/// holds the per-pairing numbers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewWorkoutEntry {
    pub reps: Option<i64>,
    pub sets: Option<i64>,
    pub duration_seconds: Option<i64>,
}

impl NewWorkoutEntry {
    pub fn new(reps: Option<i64>, sets: Option<i64>, duration_seconds: Option<i64>) -> Self {
        Self {
            reps,
            sets,
            duration_seconds,
        }
    }

    /// Checks field invariants, reporting every offending field at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        check_non_negative("reps", self.reps, &mut violations);
        check_non_negative("sets", self.sets, &mut violations);
        check_non_negative("duration_seconds", self.duration_seconds, &mut violations);
        ValidationError::check(violations)
    }
}
