//! Workout repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `workouts` table.
//! - Own association-row creation (`attach_exercise`) and the cascading
//!   delete of dependent `workout_exercises` rows.
//!
//! # Invariants
//! - Attach verifies both parent rows inside the same transaction as the
//!   insert, so associations never reference missing records.
//! - Deletes remove dependent association rows and the workout row in one
//!   transaction, or nothing at all.

use crate::model::exercise::Exercise;
use crate::model::workout::{NewWorkout, NewWorkoutEntry, Workout, WorkoutExercise};
use crate::model::RecordId;
use crate::repo::{
    parse_entry_row, parse_exercise_row, parse_workout_row, record_exists, RecordKind, RepoError,
    RepoResult,
};
use log::info;
use rusqlite::{params, Connection, TransactionBehavior};

const WORKOUT_SELECT_SQL: &str = "SELECT
    id,
    date,
    duration_minutes,
    notes
FROM workouts";

const ENTRY_SELECT_SQL: &str = "SELECT
    id,
    workout_id,
    exercise_id,
    reps,
    sets,
    duration_seconds
FROM workout_exercises";

/// Repository interface for workout and association operations.
pub trait WorkoutRepository {
    /// Creates one workout and returns the stored record.
    fn create_workout(&mut self, draft: &NewWorkout) -> RepoResult<Workout>;
    /// Gets one workout by id.
    fn get_workout(&self, id: RecordId) -> RepoResult<Option<Workout>>;
    /// Lists all workouts in insertion order.
    fn list_workouts(&self) -> RepoResult<Vec<Workout>>;
    /// Deletes one workout plus every association row referencing it.
    fn delete_workout(&mut self, id: RecordId) -> RepoResult<()>;
    /// Links an exercise to a workout with per-pairing metadata.
    fn attach_exercise(
        &mut self,
        workout_id: RecordId,
        exercise_id: RecordId,
        draft: &NewWorkoutEntry,
    ) -> RepoResult<WorkoutExercise>;
    /// Gets one association row by id.
    fn get_entry(&self, id: RecordId) -> RepoResult<Option<WorkoutExercise>>;
    /// Lists association rows for one workout in insertion order.
    fn entries_for_workout(&self, workout_id: RecordId) -> RepoResult<Vec<WorkoutExercise>>;
    /// Lists the distinct exercises reachable from one workout, in exercise
    /// insertion order.
    fn exercises_for_workout(&self, workout_id: RecordId) -> RepoResult<Vec<Exercise>>;
}

/// SQLite-backed workout repository.
pub struct SqliteWorkoutRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteWorkoutRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl WorkoutRepository for SqliteWorkoutRepository<'_> {
    fn create_workout(&mut self, draft: &NewWorkout) -> RepoResult<Workout> {
        draft.validate()?;
        let date = draft.effective_date();

        self.conn.execute(
            "INSERT INTO workouts (date, duration_minutes, notes)
             VALUES (?1, ?2, ?3);",
            params![
                date.format("%Y-%m-%d").to_string(),
                draft.duration_minutes,
                draft.notes.as_deref(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();

        info!("event=workout_create module=repo status=ok workout_id={id}");
        Ok(Workout {
            id,
            date,
            duration_minutes: draft.duration_minutes,
            notes: draft.notes.clone(),
        })
    }

    fn get_workout(&self, id: RecordId) -> RepoResult<Option<Workout>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{WORKOUT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_workout_row(row)?));
        }
        Ok(None)
    }

    fn list_workouts(&self) -> RepoResult<Vec<Workout>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{WORKOUT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut workouts = Vec::new();
        while let Some(row) = rows.next()? {
            workouts.push(parse_workout_row(row)?);
        }
        Ok(workouts)
    }

    fn delete_workout(&mut self, id: RecordId) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !record_exists(&tx, "workouts", id)? {
            return Err(RepoError::NotFound {
                kind: RecordKind::Workout,
                id,
            });
        }

        let cascade_rows =
            tx.execute("DELETE FROM workout_exercises WHERE workout_id = ?1;", [id])?;
        tx.execute("DELETE FROM workouts WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!(
            "event=workout_delete module=repo status=ok workout_id={id} cascade_rows={cascade_rows}"
        );
        Ok(())
    }

    fn attach_exercise(
        &mut self,
        workout_id: RecordId,
        exercise_id: RecordId,
        draft: &NewWorkoutEntry,
    ) -> RepoResult<WorkoutExercise> {
        draft.validate()?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !record_exists(&tx, "workouts", workout_id)? {
            return Err(RepoError::NotFound {
                kind: RecordKind::Workout,
                id: workout_id,
            });
        }
        if !record_exists(&tx, "exercises", exercise_id)? {
            return Err(RepoError::NotFound {
                kind: RecordKind::Exercise,
                id: exercise_id,
            });
        }

        tx.execute(
            "INSERT INTO workout_exercises (workout_id, exercise_id, reps, sets, duration_seconds)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                workout_id,
                exercise_id,
                draft.reps,
                draft.sets,
                draft.duration_seconds,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!(
            "event=workout_attach module=repo status=ok entry_id={id} workout_id={workout_id} exercise_id={exercise_id}"
        );
        Ok(WorkoutExercise {
            id,
            workout_id,
            exercise_id,
            reps: draft.reps,
            sets: draft.sets,
            duration_seconds: draft.duration_seconds,
        })
    }

    fn get_entry(&self, id: RecordId) -> RepoResult<Option<WorkoutExercise>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entry_row(row)?));
        }
        Ok(None)
    }

    fn entries_for_workout(&self, workout_id: RecordId) -> RepoResult<Vec<WorkoutExercise>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ENTRY_SELECT_SQL} WHERE workout_id = ?1 ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([workout_id])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }
        Ok(entries)
    }

    fn exercises_for_workout(&self, workout_id: RecordId) -> RepoResult<Vec<Exercise>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT
                e.id,
                e.name,
                e.category,
                e.equipment_needed
             FROM exercises e
             INNER JOIN workout_exercises we ON we.exercise_id = e.id
             WHERE we.workout_id = ?1
             ORDER BY e.id ASC;",
        )?;
        let mut rows = stmt.query([workout_id])?;
        let mut exercises = Vec::new();
        while let Some(row) = rows.next()? {
            exercises.push(parse_exercise_row(row)?);
        }
        Ok(exercises)
    }
}
