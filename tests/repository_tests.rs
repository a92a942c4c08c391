// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Repository tests against an in-memory SQLite database.

use workout_log::error::AppError;
use workout_log::models::{NewActivityDetail, NewWorkout, WorkoutChanges};

mod common;

use common::tables;

fn workout(date: &str, workout_type: &str) -> NewWorkout {
    NewWorkout {
        workout_date: date.to_string(),
        workout_type: workout_type.to_string(),
        duration_minutes: 30,
        active_calories: 250,
        notes: None,
    }
}

#[tokio::test]
async fn test_create_and_read_joined_row() {
    let db = common::test_db().await;
    let repo = db.workouts();

    let detail = NewActivityDetail {
        distance_miles: Some(2.5),
        calories_segment: Some(180),
    };
    let created = repo
        .create(&workout("2025-04-01", "running"), Some(&detail))
        .await
        .unwrap();
    assert!(created.details_created);

    let row = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(row.workout_type, "running");
    assert_eq!(row.distance_miles, Some(2.5));
    assert_eq!(row.calories_segment, Some(180));

    let plain = repo
        .create(&workout("2025-04-02", "yoga"), None)
        .await
        .unwrap();
    assert!(!plain.details_created);

    let row = repo.get_by_id(plain.id).await.unwrap().unwrap();
    assert_eq!(row.distance_miles, None);
    assert_eq!(row.calories_segment, None);
}

#[tokio::test]
async fn test_missing_rows() {
    let db = common::test_db().await;
    let repo = db.workouts();

    assert!(repo.get_by_id(1).await.unwrap().is_none());
    assert!(repo.get_latest().await.unwrap().is_none());
    assert!(repo.list_all().await.unwrap().is_empty());

    let changes = WorkoutChanges {
        notes: Some("x".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        repo.update(1, &changes).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        repo.delete_by_id(1).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_update_keeps_unprovided_fields() {
    let db = common::test_db().await;
    let repo = db.workouts();

    let created = repo
        .create(&workout("2025-04-01", "walking"), None)
        .await
        .unwrap();

    let changes = WorkoutChanges {
        duration_minutes: Some(0),
        workout_date: Some("2025-04-03".to_string()),
        ..Default::default()
    };
    repo.update(created.id, &changes).await.unwrap();

    let row = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(row.duration_minutes, 0);
    assert_eq!(row.workout_date, "2025-04-03");
    assert_eq!(row.workout_type, "walking");
    assert_eq!(row.active_calories, 250);
    assert_eq!(row.notes, None);
}

#[tokio::test]
async fn test_delete_cascades_to_detail() {
    let db = common::test_db().await;
    let repo = db.workouts();

    let detail = NewActivityDetail {
        distance_miles: Some(1.0),
        calories_segment: None,
    };
    let created = repo
        .create(&workout("2025-04-01", "elliptical"), Some(&detail))
        .await
        .unwrap();
    assert!(repo.get_activity_detail(created.id).await.unwrap().is_some());

    repo.delete_by_id(created.id).await.unwrap();

    assert!(repo.get_activity_detail(created.id).await.unwrap().is_none());
    assert_eq!(common::count_rows(&db, tables::ACTIVITY_DETAILS).await, 0);
}

#[tokio::test]
async fn test_only_one_detail_per_session() {
    let db = common::test_db().await;
    let repo = db.workouts();

    let detail = NewActivityDetail {
        distance_miles: Some(1.0),
        calories_segment: None,
    };
    let created = repo
        .create(&workout("2025-04-01", "running"), Some(&detail))
        .await
        .unwrap();

    let duplicate = sqlx::query("INSERT INTO activity_details (workout_id) VALUES (?)")
        .bind(created.id)
        .execute(db.pool())
        .await;
    assert!(duplicate.is_err());
}

/// Session and detail inserts are not atomic: when the detail insert
/// fails, the session row is left behind and the caller sees the error.
#[tokio::test]
async fn test_create_leaves_session_when_detail_insert_fails() {
    let db = common::test_db().await;
    let repo = db.workouts();

    sqlx::query(
        r#"
CREATE TRIGGER reject_details BEFORE INSERT ON activity_details
BEGIN
    SELECT RAISE(ABORT, 'detail insert rejected');
END
"#,
    )
    .execute(db.pool())
    .await
    .unwrap();

    let detail = NewActivityDetail {
        distance_miles: Some(3.1),
        calories_segment: None,
    };
    let result = repo
        .create(&workout("2025-01-10", "running"), Some(&detail))
        .await;
    assert!(matches!(result, Err(AppError::Database(_))));

    assert_eq!(common::count_rows(&db, tables::WORKOUT_SESSIONS).await, 1);
    assert_eq!(common::count_rows(&db, tables::ACTIVITY_DETAILS).await, 0);

    let orphan = repo.get_latest().await.unwrap().unwrap();
    assert_eq!(orphan.workout_date, "2025-01-10");
    assert_eq!(orphan.distance_miles, None);
}
