use chrono::NaiveDate;
use rusqlite::Connection;
use workoutlog_core::db::open_db_in_memory;
use workoutlog_core::{
    ExerciseService, NewExercise, NewWorkout, NewWorkoutEntry, RecordKind, ServiceError,
    SqliteExerciseRepository, SqliteWorkoutRepository, WorkoutService,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn seed_linked_pair(conn: &mut Connection) -> (i64, i64, i64) {
    let exercise_id = {
        let repo = SqliteExerciseRepository::new(conn);
        let mut service = ExerciseService::new(repo);
        service
            .create_exercise(&NewExercise::new(
                "Push Ups",
                Some("Strength".to_string()),
                false,
            ))
            .unwrap()
            .id
    };

    let repo = SqliteWorkoutRepository::new(conn);
    let mut service = WorkoutService::new(repo);
    let workout_id = service
        .create_workout(&NewWorkout::new(
            Some(date(2025, 10, 1)),
            30,
            Some("Morning strength session".to_string()),
        ))
        .unwrap()
        .id;
    let entry_id = service
        .attach_exercise(
            workout_id,
            exercise_id,
            &NewWorkoutEntry::new(Some(20), Some(3), None),
        )
        .unwrap()
        .id;

    (workout_id, exercise_id, entry_id)
}

#[test]
fn workout_detail_nests_exercises_without_back_references() {
    let mut conn = open_db_in_memory().unwrap();
    let (workout_id, exercise_id, entry_id) = seed_linked_pair(&mut conn);

    let repo = SqliteWorkoutRepository::new(&mut conn);
    let service = WorkoutService::new(repo);
    let detail = service.get_workout(workout_id).unwrap();
    let json = serde_json::to_value(&detail).unwrap();

    assert_eq!(json["id"], workout_id);
    assert_eq!(json["date"], "2025-10-01");
    assert_eq!(json["duration_minutes"], 30);

    assert_eq!(json["exercises"].as_array().unwrap().len(), 1);
    assert_eq!(json["exercises"][0]["name"], "Push Ups");
    assert!(json["exercises"][0].get("workouts").is_none());

    assert_eq!(json["workout_exercises"].as_array().unwrap().len(), 1);
    assert_eq!(json["workout_exercises"][0]["id"], entry_id);
    assert_eq!(json["workout_exercises"][0]["exercise_id"], exercise_id);
    assert_eq!(json["workout_exercises"][0]["reps"], 20);
    assert_eq!(json["workout_exercises"][0]["sets"], 3);
    assert_eq!(
        json["workout_exercises"][0]["duration_seconds"],
        serde_json::Value::Null
    );
}

#[test]
fn exercise_detail_nests_workouts_without_back_references() {
    let mut conn = open_db_in_memory().unwrap();
    let (workout_id, exercise_id, _entry_id) = seed_linked_pair(&mut conn);

    let repo = SqliteExerciseRepository::new(&mut conn);
    let service = ExerciseService::new(repo);
    let detail = service.get_exercise(exercise_id).unwrap();
    let json = serde_json::to_value(&detail).unwrap();

    assert_eq!(json["name"], "Push Ups");
    assert_eq!(json["equipment_needed"], false);

    assert_eq!(json["workouts"].as_array().unwrap().len(), 1);
    assert_eq!(json["workouts"][0]["id"], workout_id);
    assert_eq!(json["workouts"][0]["notes"], "Morning strength session");
    assert!(json["workouts"][0].get("exercises").is_none());
    assert!(json["workouts"][0].get("workout_exercises").is_none());
}

#[test]
fn fresh_creates_render_empty_nested_lists() {
    let mut conn = open_db_in_memory().unwrap();

    {
        let repo = SqliteExerciseRepository::new(&mut conn);
        let mut service = ExerciseService::new(repo);
        let detail = service
            .create_exercise(&NewExercise::new("Plank", Some("Core".to_string()), false))
            .unwrap();
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["workouts"], serde_json::json!([]));
    }

    let repo = SqliteWorkoutRepository::new(&mut conn);
    let mut service = WorkoutService::new(repo);
    let detail = service
        .create_workout(&NewWorkout::new(Some(date(2025, 10, 3)), 45, None))
        .unwrap();
    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["exercises"], serde_json::json!([]));
    assert_eq!(json["workout_exercises"], serde_json::json!([]));
    assert_eq!(json["notes"], serde_json::Value::Null);
}

#[test]
fn list_summaries_carry_no_nested_fields() {
    let mut conn = open_db_in_memory().unwrap();
    let (_workout_id, _exercise_id, _entry_id) = seed_linked_pair(&mut conn);

    {
        let repo = SqliteWorkoutRepository::new(&mut conn);
        let service = WorkoutService::new(repo);
        let listed = service.list_workouts().unwrap();
        let json = serde_json::to_value(&listed).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert!(json[0].get("exercises").is_none());
        assert!(json[0].get("workout_exercises").is_none());
    }

    let repo = SqliteExerciseRepository::new(&mut conn);
    let service = ExerciseService::new(repo);
    let listed = service.list_exercises().unwrap();
    let json = serde_json::to_value(&listed).unwrap();
    assert!(json[0].get("workouts").is_none());
}

#[test]
fn services_surface_missing_records_as_not_found() {
    let mut conn = open_db_in_memory().unwrap();

    {
        let repo = SqliteWorkoutRepository::new(&mut conn);
        let service = WorkoutService::new(repo);
        let err = service.get_workout(42).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound {
                kind: RecordKind::Workout,
                id: 42,
            }
        ));

        let err = service.get_entry(7).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound {
                kind: RecordKind::WorkoutExercise,
                id: 7,
            }
        ));
    }

    let repo = SqliteExerciseRepository::new(&mut conn);
    let service = ExerciseService::new(repo);
    let err = service.get_exercise(42).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            kind: RecordKind::Exercise,
            id: 42,
        }
    ));
}

#[test]
fn services_reshape_validation_and_duplicate_errors() {
    let mut conn = open_db_in_memory().unwrap();
    let (workout_id, exercise_id, _entry_id) = seed_linked_pair(&mut conn);

    {
        let repo = SqliteWorkoutRepository::new(&mut conn);
        let mut service = WorkoutService::new(repo);
        let err = service
            .attach_exercise(
                workout_id,
                exercise_id,
                &NewWorkoutEntry::new(Some(-1), None, None),
            )
            .unwrap_err();
        match err {
            ServiceError::InvalidInput(validation) => assert!(validation.mentions("reps")),
            other => panic!("unexpected error: {other}"),
        }
    }

    let repo = SqliteExerciseRepository::new(&mut conn);
    let mut service = ExerciseService::new(repo);
    let err = service
        .create_exercise(&NewExercise::new("Push Ups", None, true))
        .unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateName(name) if name == "Push Ups"));
}

#[test]
fn deleting_through_services_cascades_and_then_reports_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    let (workout_id, _exercise_id, entry_id) = seed_linked_pair(&mut conn);

    let repo = SqliteWorkoutRepository::new(&mut conn);
    let mut service = WorkoutService::new(repo);
    service.delete_workout(workout_id).unwrap();

    assert!(matches!(
        service.get_workout(workout_id).unwrap_err(),
        ServiceError::NotFound {
            kind: RecordKind::Workout,
            ..
        }
    ));
    assert!(matches!(
        service.get_entry(entry_id).unwrap_err(),
        ServiceError::NotFound {
            kind: RecordKind::WorkoutExercise,
            ..
        }
    ));
}
