//! Core module: grading model, engine, persistence and reports

pub mod config;
pub mod gpa;
pub mod models;
pub mod report;
pub mod scale;
pub mod session;
pub mod standing;
pub mod summary;
pub mod theme;
pub mod transcript;

/// Returns the current version of the `cgpa-calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
