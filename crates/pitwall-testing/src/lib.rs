//! Shared test utilities: in-memory sessions, lap builders, and
//! session-archive fixtures for integration tests.

mod fixtures;
mod laps;

pub use fixtures::{write_session_csv, FixtureLap};
pub use laps::{lap, lap_table, InMemorySession};
