//! Study Buddy: a student productivity desktop app.
//!
//! First launch runs an onboarding wizard (username, simulated timetable
//! upload and analysis, attendance goals, study preferences); subsequent
//! launches open the dashboard with attendance stats, a calendar, and a task
//! list. All schedule and attendance data is mocked; the config file is the
//! only persistent state.

pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod ui;

pub use error::{AppError, Result};
