//! Exercise use-case service.
//!
//! # Responsibility
//! - Provide create/get/list/delete entry points for exercises.
//! - Assemble the one-hop `ExerciseDetail` view from repository reads.

use crate::model::exercise::NewExercise;
use crate::model::RecordId;
use crate::repo::exercise_repo::ExerciseRepository;
use crate::repo::RecordKind;
use crate::serialize::{ExerciseDetail, ExerciseSummary};
use crate::service::{ServiceError, ServiceResult};

/// Use-case service wrapper for exercise operations.
pub struct ExerciseService<R: ExerciseRepository> {
    repo: R,
}

impl<R: ExerciseRepository> ExerciseService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one exercise and returns its rendered view.
    ///
    /// A fresh exercise has no associations yet, so the nested `workouts`
    /// list is empty by construction.
    pub fn create_exercise(&mut self, draft: &NewExercise) -> ServiceResult<ExerciseDetail> {
        let exercise = self.repo.create_exercise(draft)?;
        Ok(ExerciseDetail::render(&exercise, &[]))
    }

    /// Gets one exercise with its nested workouts.
    pub fn get_exercise(&self, id: RecordId) -> ServiceResult<ExerciseDetail> {
        let exercise = self.repo.get_exercise(id)?.ok_or(ServiceError::NotFound {
            kind: RecordKind::Exercise,
            id,
        })?;
        let workouts = self.repo.workouts_for_exercise(id)?;
        Ok(ExerciseDetail::render(&exercise, &workouts))
    }

    /// Lists all exercises in insertion order, without nesting.
    pub fn list_exercises(&self) -> ServiceResult<Vec<ExerciseSummary>> {
        let exercises = self.repo.list_exercises()?;
        Ok(exercises.iter().map(ExerciseSummary::from).collect())
    }

    /// Deletes one exercise and every association row referencing it.
    pub fn delete_exercise(&mut self, id: RecordId) -> ServiceResult<()> {
        self.repo.delete_exercise(id)?;
        Ok(())
    }
}
