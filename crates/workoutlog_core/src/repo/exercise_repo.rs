//! Exercise repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `exercises` table.
//! - Own the name-uniqueness check and the cascading delete of dependent
//!   `workout_exercises` rows.
//!
//! # Invariants
//! - Name uniqueness is checked case-sensitively inside the same
//!   transaction as the insert.
//! - Deletes remove dependent association rows and the exercise row in one
//!   transaction, or nothing at all.

use crate::model::exercise::{Exercise, NewExercise};
use crate::model::workout::Workout;
use crate::model::RecordId;
use crate::repo::{
    bool_to_int, parse_exercise_row, parse_workout_row, record_exists, RecordKind, RepoError,
    RepoResult,
};
use log::info;
use rusqlite::{params, Connection, TransactionBehavior};

const EXERCISE_SELECT_SQL: &str = "SELECT
    id,
    name,
    category,
    equipment_needed
FROM exercises";

/// Repository interface for exercise operations.
pub trait ExerciseRepository {
    /// Creates one exercise and returns the stored record.
    fn create_exercise(&mut self, draft: &NewExercise) -> RepoResult<Exercise>;
    /// Gets one exercise by id.
    fn get_exercise(&self, id: RecordId) -> RepoResult<Option<Exercise>>;
    /// Lists all exercises in insertion order.
    fn list_exercises(&self) -> RepoResult<Vec<Exercise>>;
    /// Deletes one exercise plus every association row referencing it.
    fn delete_exercise(&mut self, id: RecordId) -> RepoResult<()>;
    /// Lists the distinct workouts reachable from one exercise, in workout
    /// insertion order.
    fn workouts_for_exercise(&self, id: RecordId) -> RepoResult<Vec<Workout>>;
}

/// SQLite-backed exercise repository.
pub struct SqliteExerciseRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteExerciseRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl ExerciseRepository for SqliteExerciseRepository<'_> {
    fn create_exercise(&mut self, draft: &NewExercise) -> RepoResult<Exercise> {
        draft.validate()?;
        let name = draft.trimmed_name().to_string();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        // `=` on TEXT is case-sensitive in SQLite: "Push Ups" and
        // "push ups" are distinct names.
        let taken: i64 = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM exercises WHERE name = ?1);",
            [name.as_str()],
            |row| row.get(0),
        )?;
        if taken == 1 {
            return Err(RepoError::DuplicateName(name));
        }

        tx.execute(
            "INSERT INTO exercises (name, category, equipment_needed)
             VALUES (?1, ?2, ?3);",
            params![
                name.as_str(),
                draft.category.as_deref(),
                bool_to_int(draft.equipment_needed),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!("event=exercise_create module=repo status=ok exercise_id={id}");
        Ok(Exercise {
            id,
            name,
            category: draft.category.clone(),
            equipment_needed: draft.equipment_needed,
        })
    }

    fn get_exercise(&self, id: RecordId) -> RepoResult<Option<Exercise>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EXERCISE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_exercise_row(row)?));
        }
        Ok(None)
    }

    fn list_exercises(&self) -> RepoResult<Vec<Exercise>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EXERCISE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut exercises = Vec::new();
        while let Some(row) = rows.next()? {
            exercises.push(parse_exercise_row(row)?);
        }
        Ok(exercises)
    }

    fn delete_exercise(&mut self, id: RecordId) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !record_exists(&tx, "exercises", id)? {
            return Err(RepoError::NotFound {
                kind: RecordKind::Exercise,
                id,
            });
        }

        let cascade_rows = tx.execute(
            "DELETE FROM workout_exercises WHERE exercise_id = ?1;",
            [id],
        )?;
        tx.execute("DELETE FROM exercises WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!(
            "event=exercise_delete module=repo status=ok exercise_id={id} cascade_rows={cascade_rows}"
        );
        Ok(())
    }

    fn workouts_for_exercise(&self, id: RecordId) -> RepoResult<Vec<Workout>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT
                w.id,
                w.date,
                w.duration_minutes,
                w.notes
             FROM workouts w
             INNER JOIN workout_exercises we ON we.workout_id = w.id
             WHERE we.exercise_id = ?1
             ORDER BY w.id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut workouts = Vec::new();
        while let Some(row) = rows.next()? {
            workouts.push(parse_workout_row(row)?);
        }
        Ok(workouts)
    }
}
