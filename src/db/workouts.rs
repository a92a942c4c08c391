// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout session queries.
//!
//! Every read returns sessions LEFT JOINed with their activity detail, so
//! the detail columns are `NULL` for sessions without one.

use crate::error::AppError;
use crate::models::{
    ActivityDetail, CreatedWorkout, NewActivityDetail, NewWorkout, WorkoutChanges, WorkoutRecord,
};
use sqlx::SqlitePool;

const SELECT_JOINED: &str = r#"
SELECT s.id, s.workout_date, s.workout_type, s.duration_minutes, s.active_calories, s.notes,
       d.distance_miles, d.calories_segment
FROM workout_sessions s
LEFT JOIN activity_details d ON d.workout_id = s.id
"#;

/// Repository over the `workout_sessions` and `activity_details` tables.
#[derive(Clone)]
pub struct WorkoutRepository {
    pool: SqlitePool,
}

impl WorkoutRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All workouts, most recent `workout_date` first.
    pub async fn list_all(&self) -> Result<Vec<WorkoutRecord>, AppError> {
        let sql = format!("{SELECT_JOINED} ORDER BY s.workout_date DESC, s.id DESC");
        let rows = sqlx::query_as::<_, WorkoutRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// A single workout by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<WorkoutRecord>, AppError> {
        let sql = format!("{SELECT_JOINED} WHERE s.id = ?");
        let row = sqlx::query_as::<_, WorkoutRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// The workout with the highest id, regardless of its date.
    pub async fn get_latest(&self) -> Result<Option<WorkoutRecord>, AppError> {
        let sql = format!("{SELECT_JOINED} ORDER BY s.id DESC LIMIT 1");
        let row = sqlx::query_as::<_, WorkoutRecord>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a workout session and, if given, its activity detail.
    ///
    /// The two inserts run as separate statements with no transaction. If
    /// the detail insert fails the session row stays behind and the error
    /// is returned.
    pub async fn create(
        &self,
        workout: &NewWorkout,
        detail: Option<&NewActivityDetail>,
    ) -> Result<CreatedWorkout, AppError> {
        let id = sqlx::query(
            r#"
INSERT INTO workout_sessions (workout_date, workout_type, duration_minutes, active_calories, notes)
VALUES (?, ?, ?, ?, ?)
"#,
        )
        .bind(&workout.workout_date)
        .bind(&workout.workout_type)
        .bind(workout.duration_minutes)
        .bind(workout.active_calories)
        .bind(&workout.notes)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        let Some(detail) = detail else {
            return Ok(CreatedWorkout {
                id,
                details_created: false,
            });
        };

        sqlx::query(
            r#"
INSERT INTO activity_details (workout_id, distance_miles, calories_segment)
VALUES (?, ?, ?)
"#,
        )
        .bind(id)
        .bind(detail.distance_miles)
        .bind(detail.calories_segment)
        .execute(&self.pool)
        .await
        .inspect_err(|e| {
            tracing::error!(
                workout_id = id,
                error = %e,
                "Activity detail insert failed; workout session was kept"
            );
        })?;

        Ok(CreatedWorkout {
            id,
            details_created: true,
        })
    }

    /// Apply a partial update. Fields left as `None` keep their stored value.
    pub async fn update(&self, id: i64, changes: &WorkoutChanges) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
UPDATE workout_sessions
SET workout_date = COALESCE(?, workout_date),
    workout_type = COALESCE(?, workout_type),
    duration_minutes = COALESCE(?, duration_minutes),
    active_calories = COALESCE(?, active_calories),
    notes = COALESCE(?, notes)
WHERE id = ?
"#,
        )
        .bind(&changes.workout_date)
        .bind(&changes.workout_type)
        .bind(changes.duration_minutes)
        .bind(changes.active_calories)
        .bind(&changes.notes)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(workout_not_found());
        }
        Ok(())
    }

    /// Delete a workout session; its activity detail goes with it.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM workout_sessions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(workout_not_found());
        }
        Ok(())
    }

    /// The activity detail row owned by a workout, if any.
    pub async fn get_activity_detail(
        &self,
        workout_id: i64,
    ) -> Result<Option<ActivityDetail>, AppError> {
        let row = sqlx::query_as::<_, ActivityDetail>(
            r#"
SELECT id, workout_id, distance_miles, calories_segment
FROM activity_details
WHERE workout_id = ?
"#,
        )
        .bind(workout_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

pub(crate) fn workout_not_found() -> AppError {
    AppError::NotFound("Workout not found".to_string())
}
