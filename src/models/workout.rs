// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout session model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Workout session joined with its optional activity detail.
///
/// This is the shape returned by every read endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct WorkoutRecord {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    /// Calendar date as entered by the client
    pub workout_date: String,
    pub workout_type: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration_minutes: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub active_calories: i64,
    pub notes: Option<String>,
    /// From the activity detail row, if any
    pub distance_miles: Option<f64>,
    /// From the activity detail row, if any
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub calories_segment: Option<i64>,
}

/// Fields for inserting a new workout session.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub workout_date: String,
    pub workout_type: String,
    pub duration_minutes: i64,
    pub active_calories: i64,
    pub notes: Option<String>,
}

/// Partial update of a workout session.
///
/// `None` means "not provided": the stored value is kept. `Some` replaces
/// it, even when the new value is empty or zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutChanges {
    pub workout_date: Option<String>,
    pub workout_type: Option<String>,
    pub duration_minutes: Option<i64>,
    pub active_calories: Option<i64>,
    pub notes: Option<String>,
}

impl WorkoutChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.workout_date.is_none()
            && self.workout_type.is_none()
            && self.duration_minutes.is_none()
            && self.active_calories.is_none()
            && self.notes.is_none()
    }
}

/// Result of inserting a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedWorkout {
    pub id: i64,
    pub details_created: bool,
}
