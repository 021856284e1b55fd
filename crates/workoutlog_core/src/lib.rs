//! Core domain logic for the workout log.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod serialize;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::exercise::{Exercise, NewExercise};
pub use model::workout::{NewWorkout, NewWorkoutEntry, Workout, WorkoutExercise};
pub use model::{FieldViolation, RecordId, ValidationError};
pub use repo::exercise_repo::{ExerciseRepository, SqliteExerciseRepository};
pub use repo::workout_repo::{SqliteWorkoutRepository, WorkoutRepository};
pub use repo::{RecordKind, RepoError, RepoResult};
pub use serialize::{
    ExerciseDetail, ExerciseSummary, WorkoutDetail, WorkoutEntryView, WorkoutSummary,
};
pub use service::exercise_service::ExerciseService;
pub use service::workout_service::WorkoutService;
pub use service::{ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
