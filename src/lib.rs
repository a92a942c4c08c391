// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Log: a small HTTP API for logging workout sessions
//!
//! Sessions are stored in SQLite. Cardio sessions (running, walking,
//! elliptical, pickleball) may carry an activity detail row with distance
//! and segment calories.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

use config::Config;
use db::WorkoutRepository;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub workouts: WorkoutRepository,
}
