//! Database layer (SQLite).

pub mod sqlite;
pub mod workouts;

pub use sqlite::Database;
pub use workouts::WorkoutRepository;
