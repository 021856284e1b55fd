//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `workoutlog_core` linkage.
//! - Seed a deterministic sample dataset into an in-memory store and print
//!   a rendered workout, for quick local sanity checks.

use chrono::NaiveDate;
use std::error::Error;
use workoutlog_core::db::open_db_in_memory;
use workoutlog_core::{
    ExerciseService, NewExercise, NewWorkout, NewWorkoutEntry, SqliteExerciseRepository,
    SqliteWorkoutRepository, WorkoutService,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("workoutlog_core ping={}", workoutlog_core::ping());
    println!("workoutlog_core version={}", workoutlog_core::core_version());

    let mut conn = open_db_in_memory()?;

    let (push_ups, squats, plank) = {
        let repo = SqliteExerciseRepository::new(&mut conn);
        let mut exercises = ExerciseService::new(repo);
        let push_ups = exercises
            .create_exercise(&NewExercise::new(
                "Push Ups",
                Some("Strength".to_string()),
                false,
            ))?
            .id;
        let squats = exercises
            .create_exercise(&NewExercise::new(
                "Squats",
                Some("Strength".to_string()),
                false,
            ))?
            .id;
        let plank = exercises
            .create_exercise(&NewExercise::new("Plank", Some("Core".to_string()), false))?
            .id;
        (push_ups, squats, plank)
    };

    let repo = SqliteWorkoutRepository::new(&mut conn);
    let mut workouts = WorkoutService::new(repo);

    let strength_day = workouts
        .create_workout(&NewWorkout::new(
            Some("2025-10-01".parse::<NaiveDate>()?),
            30,
            Some("Morning strength session".to_string()),
        ))?
        .id;
    let core_day = workouts
        .create_workout(&NewWorkout::new(
            Some("2025-10-03".parse::<NaiveDate>()?),
            45,
            Some("Core and mixed work".to_string()),
        ))?
        .id;

    workouts.attach_exercise(
        strength_day,
        push_ups,
        &NewWorkoutEntry::new(Some(20), Some(3), None),
    )?;
    workouts.attach_exercise(
        strength_day,
        squats,
        &NewWorkoutEntry::new(Some(15), Some(4), None),
    )?;
    workouts.attach_exercise(
        core_day,
        plank,
        &NewWorkoutEntry::new(None, Some(3), Some(60)),
    )?;

    println!("seeded exercises=3 workouts=2 links=3");
    let detail = workouts.get_workout(strength_day)?;
    println!(
        "workout {}={}",
        strength_day,
        serde_json::to_string(&detail)?
    );

    Ok(())
}
