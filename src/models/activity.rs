// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Cardio activity detail attached to a workout session.

use serde::{Deserialize, Serialize};

/// Workout types that may carry an activity detail row.
///
/// Matching is exact and case-sensitive.
pub const CARDIO_TYPES: [&str; 4] = ["running", "walking", "elliptical", "pickleball"];

/// Whether `workout_type` is classified as cardio.
pub fn is_cardio(workout_type: &str) -> bool {
    CARDIO_TYPES.contains(&workout_type)
}

/// Stored activity detail record (at most one per workout session).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActivityDetail {
    pub id: i64,
    /// Owning workout session (cascade-deleted with it)
    pub workout_id: i64,
    pub distance_miles: Option<f64>,
    pub calories_segment: Option<i64>,
}

/// Metrics to insert alongside a new workout session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewActivityDetail {
    pub distance_miles: Option<f64>,
    pub calories_segment: Option<i64>,
}

impl NewActivityDetail {
    /// Build the detail row for a new session, if one should exist.
    ///
    /// Returns `None` unless the type is cardio and at least one metric is set.
    pub fn for_workout(
        workout_type: &str,
        distance_miles: Option<f64>,
        calories_segment: Option<i64>,
    ) -> Option<Self> {
        if !is_cardio(workout_type) {
            return None;
        }
        if distance_miles.is_none() && calories_segment.is_none() {
            return None;
        }

        Some(Self {
            distance_miles,
            calories_segment,
        })
    }
}
