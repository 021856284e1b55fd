//! Workout use-case service.
//!
//! # Responsibility
//! - Provide create/get/list/delete entry points for workouts and the
//!   attach-exercise operation.
//! - Assemble the one-hop `WorkoutDetail` view from repository reads.

use crate::model::workout::{NewWorkout, NewWorkoutEntry};
use crate::model::RecordId;
use crate::repo::workout_repo::WorkoutRepository;
use crate::repo::RecordKind;
use crate::serialize::{WorkoutDetail, WorkoutEntryView, WorkoutSummary};
use crate::service::{ServiceError, ServiceResult};

/// Use-case service wrapper for workout operations.
pub struct WorkoutService<R: WorkoutRepository> {
    repo: R,
}

impl<R: WorkoutRepository> WorkoutService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one workout and returns its rendered view.
    ///
    /// A fresh workout has no associations yet, so both nested lists are
    /// empty by construction.
    pub fn create_workout(&mut self, draft: &NewWorkout) -> ServiceResult<WorkoutDetail> {
        let workout = self.repo.create_workout(draft)?;
        Ok(WorkoutDetail::render(&workout, &[], &[]))
    }

    /// Gets one workout with its nested exercises and join metadata.
    pub fn get_workout(&self, id: RecordId) -> ServiceResult<WorkoutDetail> {
        let workout = self.repo.get_workout(id)?.ok_or(ServiceError::NotFound {
            kind: RecordKind::Workout,
            id,
        })?;
        let exercises = self.repo.exercises_for_workout(id)?;
        let entries = self.repo.entries_for_workout(id)?;
        Ok(WorkoutDetail::render(&workout, &exercises, &entries))
    }

    /// Lists all workouts in insertion order, without nesting.
    pub fn list_workouts(&self) -> ServiceResult<Vec<WorkoutSummary>> {
        let workouts = self.repo.list_workouts()?;
        Ok(workouts.iter().map(WorkoutSummary::from).collect())
    }

    /// Deletes one workout and every association row referencing it.
    pub fn delete_workout(&mut self, id: RecordId) -> ServiceResult<()> {
        self.repo.delete_workout(id)?;
        Ok(())
    }

    /// Links an exercise to a workout with per-pairing metadata.
    pub fn attach_exercise(
        &mut self,
        workout_id: RecordId,
        exercise_id: RecordId,
        draft: &NewWorkoutEntry,
    ) -> ServiceResult<WorkoutEntryView> {
        let entry = self.repo.attach_exercise(workout_id, exercise_id, draft)?;
        Ok(WorkoutEntryView::from(&entry))
    }

    /// Gets one association row by id.
    pub fn get_entry(&self, id: RecordId) -> ServiceResult<WorkoutEntryView> {
        let entry = self.repo.get_entry(id)?.ok_or(ServiceError::NotFound {
            kind: RecordKind::WorkoutExercise,
            id,
        })?;
        Ok(WorkoutEntryView::from(&entry))
    }
}
