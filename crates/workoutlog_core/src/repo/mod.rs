//! Repository contracts and shared persistence plumbing.
//!
//! # Responsibility
//! - Define the error taxonomy shared by all repositories.
//! - Keep SQL row decoding helpers in one place.
//!
//! # Invariants
//! - Write paths must call draft `validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::exercise::Exercise;
use crate::model::workout::{Workout, WorkoutExercise};
use crate::model::{RecordId, ValidationError};
use chrono::NaiveDate;
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod exercise_repo;
pub mod workout_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Which table a record id refers to; used to keep not-found errors precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Exercise,
    Workout,
    WorkoutExercise,
}

impl RecordKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Exercise => "exercise",
            Self::Workout => "workout",
            Self::WorkoutExercise => "workout_exercise",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Draft failed field validation; nothing was written.
    Validation(ValidationError),
    /// Exercise name collides with an existing row.
    DuplicateName(String),
    /// Referenced record does not exist.
    NotFound { kind: RecordKind, id: RecordId },
    /// Storage-layer failure.
    Db(DbError),
    /// Persisted row violates model invariants.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateName(name) => write!(f, "exercise name already exists: `{name}`"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn parse_stored_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {column}"
        ))),
    }
}

pub(crate) fn parse_stored_date(value: &str, column: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| RepoError::InvalidData(format!("invalid date value `{value}` in {column}")))
}

pub(crate) fn parse_exercise_row(row: &Row<'_>) -> RepoResult<Exercise> {
    Ok(Exercise {
        id: row.get("id")?,
        name: row.get("name")?,
        category: row.get("category")?,
        equipment_needed: parse_stored_bool(
            row.get("equipment_needed")?,
            "exercises.equipment_needed",
        )?,
    })
}

pub(crate) fn parse_workout_row(row: &Row<'_>) -> RepoResult<Workout> {
    let date_text: String = row.get("date")?;
    Ok(Workout {
        id: row.get("id")?,
        date: parse_stored_date(&date_text, "workouts.date")?,
        duration_minutes: row.get("duration_minutes")?,
        notes: row.get("notes")?,
    })
}

pub(crate) fn parse_entry_row(row: &Row<'_>) -> RepoResult<WorkoutExercise> {
    Ok(WorkoutExercise {
        id: row.get("id")?,
        workout_id: row.get("workout_id")?,
        exercise_id: row.get("exercise_id")?,
        reps: row.get("reps")?,
        sets: row.get("sets")?,
        duration_seconds: row.get("duration_seconds")?,
    })
}

/// Checks whether `id` exists in `table` within the current transaction
/// scope. `table` must be a compile-time constant, never caller input.
pub(crate) fn record_exists(conn: &Connection, table: &str, id: RecordId) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        &format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?1);"),
        [id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
