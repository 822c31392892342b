//! Transcript files: an academic record stored as CSV
//!
//! ```text
//! Transcript,<title>
//! Scale,4.0
//! Subjects
//! Index,Semester,Subject,Credits,Grade
//! 1,Semester 1,Calculus I,3,A
//! 2,Semester 2,,,
//! ```
//!
//! `Index` is optional. Without it, consecutive rows with the same semester
//! name form one semester.

pub mod csv_parser;
pub mod csv_writer;

pub use csv_parser::{parse_transcript_csv, parse_transcript_str};
pub use csv_writer::{render_transcript_csv, write_transcript_csv};

use crate::core::models::AcademicRecord;
use std::path::PathBuf;
use thiserror::Error;

/// A record together with its title
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Title shown on reports
    pub title: String,
    /// The semesters and subjects
    pub record: AcademicRecord,
}

/// Failure to read or write a transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// The file could not be read or written
    #[error("{}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// No `Subjects` marker line
    #[error("No 'Subjects' section found in transcript")]
    MissingSubjectsSection,
    /// Nothing after the `Subjects` marker
    #[error("No subject header row found")]
    MissingHeader,
    /// Header row lacks a required column
    #[error("Subject header is missing the '{0}' column")]
    MissingColumn(&'static str),
    /// `Scale` line names neither 4.0 nor 10.0
    #[error("Invalid grade scale '{0}' (expected 4.0 or 10.0)")]
    InvalidScale(String),
}
