use workoutlog_core::db::open_db_in_memory;
use workoutlog_core::{
    ExerciseRepository, NewExercise, RecordKind, RepoError, SqliteExerciseRepository,
};

#[test]
fn create_and_get_roundtrip() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteExerciseRepository::new(&mut conn);

    let created = repo
        .create_exercise(&NewExercise::new(
            "Push Ups",
            Some("Strength".to_string()),
            false,
        ))
        .unwrap();

    let loaded = repo.get_exercise(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.name, "Push Ups");
    assert_eq!(loaded.category.as_deref(), Some("Strength"));
    assert!(!loaded.equipment_needed);
}

#[test]
fn create_trims_surrounding_whitespace() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteExerciseRepository::new(&mut conn);

    let created = repo
        .create_exercise(&NewExercise::new(" Lunges ", None, false))
        .unwrap();
    assert_eq!(created.name, "Lunges");

    let loaded = repo.get_exercise(created.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Lunges");
}

#[test]
fn create_rejects_empty_and_whitespace_names() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteExerciseRepository::new(&mut conn);

    for name in ["", "   "] {
        let err = repo
            .create_exercise(&NewExercise::new(name, None, true))
            .unwrap_err();
        match err {
            RepoError::Validation(validation) => assert!(validation.mentions("name")),
            other => panic!("unexpected error: {other}"),
        }
    }

    assert!(repo.list_exercises().unwrap().is_empty());
}

#[test]
fn create_rejects_duplicate_name() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteExerciseRepository::new(&mut conn);

    repo.create_exercise(&NewExercise::new("Squats", None, false))
        .unwrap();
    let err = repo
        .create_exercise(&NewExercise::new("Squats", Some("Legs".to_string()), true))
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateName(name) if name == "Squats"));

    // Trimming applies before the uniqueness check.
    let err = repo
        .create_exercise(&NewExercise::new("  Squats  ", None, false))
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateName(_)));

    assert_eq!(repo.list_exercises().unwrap().len(), 1);
}

#[test]
fn duplicate_check_is_case_sensitive() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteExerciseRepository::new(&mut conn);

    repo.create_exercise(&NewExercise::new("Push Ups", None, false))
        .unwrap();
    repo.create_exercise(&NewExercise::new("push ups", None, false))
        .unwrap();

    assert_eq!(repo.list_exercises().unwrap().len(), 2);
}

#[test]
fn list_returns_insertion_order() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteExerciseRepository::new(&mut conn);

    for name in ["Push Ups", "Squats", "Plank"] {
        repo.create_exercise(&NewExercise::new(name, None, false))
            .unwrap();
    }

    let names: Vec<String> = repo
        .list_exercises()
        .unwrap()
        .into_iter()
        .map(|exercise| exercise.name)
        .collect();
    assert_eq!(names, ["Push Ups", "Squats", "Plank"]);
}

#[test]
fn get_missing_exercise_returns_none() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteExerciseRepository::new(&mut conn);
    assert!(repo.get_exercise(42).unwrap().is_none());
}

#[test]
fn delete_missing_exercise_returns_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteExerciseRepository::new(&mut conn);

    let err = repo.delete_exercise(42).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            kind: RecordKind::Exercise,
            id: 42,
        }
    ));
}
