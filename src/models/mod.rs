// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod workout;

pub use activity::{ActivityDetail, NewActivityDetail};
pub use workout::{CreatedWorkout, NewWorkout, WorkoutChanges, WorkoutRecord};
