//! CSV writer for transcript files

use super::TranscriptError;
use crate::core::models::AcademicRecord;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Render `record` in transcript CSV form.
///
/// Commas in free text are replaced with semicolons. Every row carries the
/// 1-based position of its semester in `Index`, so semesters that share a
/// name read back as separate semesters. Empty semesters get a row with blank
/// subject fields.
#[must_use]
pub fn render_transcript_csv(record: &AcademicRecord, title: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Transcript,{}", sanitize(title));
    let _ = writeln!(out, "Scale,{}", record.scale());
    out.push_str("Subjects\n");
    out.push_str("Index,Semester,Subject,Credits,Grade\n");

    for (idx, semester) in record.semesters().iter().enumerate() {
        let index = idx + 1;
        let semester_name = sanitize(&semester.name);
        if semester.subjects().is_empty() {
            let _ = writeln!(out, "{index},{semester_name},,,");
            continue;
        }
        for subject in semester.subjects() {
            let _ = writeln!(
                out,
                "{index},{semester_name},{},{},{}",
                sanitize(&subject.name),
                subject.credits,
                sanitize(&subject.grade)
            );
        }
    }

    out
}

/// Write `record` to `path` in transcript CSV form
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn write_transcript_csv(
    record: &AcademicRecord,
    title: &str,
    path: &Path,
) -> Result<(), TranscriptError> {
    fs::write(path, render_transcript_csv(record, title)).map_err(|source| TranscriptError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn sanitize(text: &str) -> String {
    text.replace(',', ";").trim().to_string()
}
