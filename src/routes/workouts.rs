// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout CRUD routes.

use crate::db::workouts::workout_not_found;
use crate::error::{AppError, Result};
use crate::models::{NewActivityDetail, NewWorkout, WorkoutChanges, WorkoutRecord};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Workout routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workouts", get(list_workouts).post(create_workout))
        .route(
            "/workouts/latest",
            get(get_latest_workout)
                .put(reject_latest_id)
                .delete(reject_latest_id),
        )
        .route(
            "/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

/// Parse a path id, accepting only positive integers.
fn parse_workout_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest("Invalid workout id".to_string()))
}

/// `latest` only names a workout for reads; as an update or delete target
/// it is just a malformed id.
async fn reject_latest_id() -> AppError {
    AppError::BadRequest("Invalid workout id".to_string())
}

// ─── Reads ───────────────────────────────────────────────────

async fn list_workouts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<WorkoutRecord>>> {
    let workouts = state.workouts.list_all().await?;
    tracing::debug!(count = workouts.len(), "Listed workouts");
    Ok(Json(workouts))
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutRecord>> {
    let id = parse_workout_id(&id)?;
    let workout = state
        .workouts
        .get_by_id(id)
        .await?
        .ok_or_else(workout_not_found)?;
    Ok(Json(workout))
}

/// Latest means highest id, not most recent date.
async fn get_latest_workout(State(state): State<Arc<AppState>>) -> Result<Json<WorkoutRecord>> {
    let workout = state
        .workouts
        .get_latest()
        .await?
        .ok_or_else(|| AppError::NotFound("No workouts found".to_string()))?;
    Ok(Json(workout))
}

// ─── Create ──────────────────────────────────────────────────

/// Body of `POST /workouts`.
///
/// Required fields are optional here so that a missing field produces a
/// descriptive 400 rather than a deserialization failure.
#[derive(Debug, Deserialize)]
struct CreateWorkoutRequest {
    workout_date: Option<String>,
    workout_type: Option<String>,
    duration_minutes: Option<i64>,
    active_calories: Option<i64>,
    notes: Option<String>,
    distance_miles: Option<f64>,
    calories_segment: Option<i64>,
}

impl CreateWorkoutRequest {
    /// Validate required fields and decide whether a detail row is due.
    fn into_parts(self) -> Result<(NewWorkout, Option<NewActivityDetail>)> {
        let workout_date = self.workout_date.filter(|s| !s.is_empty());
        let workout_type = self.workout_type.filter(|s| !s.is_empty());

        let missing: Vec<&str> = [
            ("workout_date", workout_date.is_none()),
            ("workout_type", workout_type.is_none()),
            ("duration_minutes", self.duration_minutes.is_none()),
            ("active_calories", self.active_calories.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        let required = (
            workout_date,
            workout_type,
            self.duration_minutes,
            self.active_calories,
        );
        let (Some(date), Some(kind), Some(duration), Some(calories)) = required else {
            return Err(AppError::BadRequest(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        };

        let detail =
            NewActivityDetail::for_workout(&kind, self.distance_miles, self.calories_segment);

        let workout = NewWorkout {
            workout_date: date,
            workout_type: kind,
            duration_minutes: duration,
            active_calories: calories,
            notes: self.notes,
        };

        Ok((workout, detail))
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct CreateWorkoutResponse {
    pub message: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    pub details_created: bool,
}

async fn create_workout(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateWorkoutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateWorkoutResponse>)> {
    let Json(payload) = payload?;
    let (workout, detail) = payload.into_parts()?;

    let created = state.workouts.create(&workout, detail.as_ref()).await?;

    tracing::info!(
        workout_id = created.id,
        workout_type = %workout.workout_type,
        details_created = created.details_created,
        "Workout created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateWorkoutResponse {
            message: "Workout created".to_string(),
            id: created.id,
            details_created: created.details_created,
        }),
    ))
}

// ─── Update / Delete ─────────────────────────────────────────

/// Body of `PUT /workouts/{id}`. Absent and `null` both mean "keep".
#[derive(Debug, Deserialize)]
struct UpdateWorkoutRequest {
    workout_date: Option<String>,
    workout_type: Option<String>,
    duration_minutes: Option<i64>,
    active_calories: Option<i64>,
    notes: Option<String>,
}

impl From<UpdateWorkoutRequest> for WorkoutChanges {
    fn from(req: UpdateWorkoutRequest) -> Self {
        Self {
            workout_date: req.workout_date,
            workout_type: req.workout_type,
            duration_minutes: req.duration_minutes,
            active_calories: req.active_calories,
            notes: req.notes,
        }
    }
}

/// Response for update and delete.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct WorkoutMessageResponse {
    pub message: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
}

async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateWorkoutRequest>, JsonRejection>,
) -> Result<Json<WorkoutMessageResponse>> {
    let id = parse_workout_id(&id)?;
    let Json(payload) = payload?;

    let changes = WorkoutChanges::from(payload);
    if changes.is_empty() {
        return Err(AppError::BadRequest(
            "No fields provided to update".to_string(),
        ));
    }

    state.workouts.update(id, &changes).await?;
    tracing::info!(workout_id = id, "Workout updated");

    Ok(Json(WorkoutMessageResponse {
        message: "Workout updated".to_string(),
        id,
    }))
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutMessageResponse>> {
    let id = parse_workout_id(&id)?;

    state.workouts.delete_by_id(id).await?;
    tracing::info!(workout_id = id, "Workout deleted");

    Ok(Json(WorkoutMessageResponse {
        message: "Workout deleted".to_string(),
        id,
    }))
}
