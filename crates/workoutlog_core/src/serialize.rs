//! Response-shaping views over the domain records.
//!
//! # Responsibility
//! - Render entities (and one hop of related entities) into
//!   serialization-ready structures.
//! - Break the Workout <-> Exercise rendering cycle.
//!
//! # Invariants
//! - Nesting never recurses past one hop: a nested entity is always the
//!   summary shape, which carries no back-reference field to follow.
//! - A workout detail surfaces join metadata (`workout_exercises`)
//!   alongside the plain `exercises` list.

use crate::model::exercise::Exercise;
use crate::model::workout::{Workout, WorkoutExercise};
use crate::model::RecordId;
use chrono::NaiveDate;
use serde::Serialize;

/// Exercise without its `workouts` back-reference; the shape nested inside
/// workout renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseSummary {
    pub id: RecordId,
    pub name: String,
    pub category: Option<String>,
    pub equipment_needed: bool,
}

impl From<&Exercise> for ExerciseSummary {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.clone(),
            category: exercise.category.clone(),
            equipment_needed: exercise.equipment_needed,
        }
    }
}

/// Workout without its `exercises`/`workout_exercises` back-references; the
/// shape nested inside exercise renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutSummary {
    pub id: RecordId,
    /// Renders as ISO-8601 `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub notes: Option<String>,
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id,
            date: workout.date,
            duration_minutes: workout.duration_minutes,
            notes: workout.notes.clone(),
        }
    }
}

/// Association row with its per-pairing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutEntryView {
    pub id: RecordId,
    pub workout_id: RecordId,
    pub exercise_id: RecordId,
    pub reps: Option<i64>,
    pub sets: Option<i64>,
    pub duration_seconds: Option<i64>,
}

impl From<&WorkoutExercise> for WorkoutEntryView {
    fn from(entry: &WorkoutExercise) -> Self {
        Self {
            id: entry.id,
            workout_id: entry.workout_id,
            exercise_id: entry.exercise_id,
            reps: entry.reps,
            sets: entry.sets,
            duration_seconds: entry.duration_seconds,
        }
    }
}

/// Workout with one hop of nested relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutDetail {
    pub id: RecordId,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub notes: Option<String>,
    /// Distinct linked exercises, without their own `workouts` lists.
    pub exercises: Vec<ExerciseSummary>,
    /// Join metadata for every association row of this workout.
    pub workout_exercises: Vec<WorkoutEntryView>,
}

impl WorkoutDetail {
    /// Shapes a workout and its already-loaded relations for the caller.
    pub fn render(workout: &Workout, exercises: &[Exercise], entries: &[WorkoutExercise]) -> Self {
        Self {
            id: workout.id,
            date: workout.date,
            duration_minutes: workout.duration_minutes,
            notes: workout.notes.clone(),
            exercises: exercises.iter().map(ExerciseSummary::from).collect(),
            workout_exercises: entries.iter().map(WorkoutEntryView::from).collect(),
        }
    }
}

/// Exercise with one hop of nested relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseDetail {
    pub id: RecordId,
    pub name: String,
    pub category: Option<String>,
    pub equipment_needed: bool,
    /// Distinct workouts reachable through association rows, without their
    /// own `exercises`/`workout_exercises` lists.
    pub workouts: Vec<WorkoutSummary>,
}

impl ExerciseDetail {
    /// Shapes an exercise and its already-loaded workouts for the caller.
    pub fn render(exercise: &Exercise, workouts: &[Workout]) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.clone(),
            category: exercise.category.clone(),
            equipment_needed: exercise.equipment_needed,
            workouts: workouts.iter().map(WorkoutSummary::from).collect(),
        }
    }
}
