//! CSV parser for transcript files

use super::{Transcript, TranscriptError};
use crate::core::models::{parse_credits, AcademicRecord, Semester, SemesterId, Subject};
use crate::core::scale::GradeScale;
use std::fs;
use std::path::Path;

/// Header-section marker that precedes the subject table
const SUBJECTS_MARKER: &str = "subjects";

/// Metadata found above the subject table
#[derive(Debug, Clone, Default)]
struct TranscriptMetadata {
    title: Option<String>,
    scale: Option<GradeScale>,
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    index: Option<usize>,
    semester: usize,
    subject: Option<usize>,
    credits: Option<usize>,
    grade: Option<usize>,
}

impl Columns {
    fn from_header(line: &str) -> Result<Self, TranscriptError> {
        let headers = parse_csv_line(line);
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

        Ok(Self {
            index: find("Index"),
            semester: find("Semester").ok_or(TranscriptError::MissingColumn("Semester"))?,
            subject: find("Subject"),
            credits: find("Credits"),
            grade: find("Grade"),
        })
    }
}

/// Read a transcript file.
///
/// The title defaults to the file stem when the file has no `Transcript` line,
/// and the scale defaults to `default_scale` when it has no `Scale` line.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid transcript
pub fn parse_transcript_csv<P: AsRef<Path>>(
    path: P,
    default_scale: GradeScale,
) -> Result<Transcript, TranscriptError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| TranscriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut transcript = parse_transcript_str(&content, default_scale)?;
    if transcript.title.is_empty() {
        transcript.title = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("transcript")
            .to_string();
    }
    Ok(transcript)
}

/// Parse transcript text already in memory
///
/// # Errors
/// Returns an error if the text is not a valid transcript
pub fn parse_transcript_str(
    content: &str,
    default_scale: GradeScale,
) -> Result<Transcript, TranscriptError> {
    let lines: Vec<&str> = content.lines().collect();

    let marker = lines
        .iter()
        .position(|line| is_subjects_marker(line))
        .ok_or(TranscriptError::MissingSubjectsSection)?;

    let metadata = parse_metadata(&lines[..marker])?;

    let header_idx = lines
        .iter()
        .skip(marker + 1)
        .position(|line| !line.trim().is_empty())
        .map(|offset| marker + 1 + offset)
        .ok_or(TranscriptError::MissingHeader)?;
    let columns = Columns::from_header(lines[header_idx])?;

    let mut record = AcademicRecord::new(metadata.scale.unwrap_or(default_scale));
    let mut current = None;
    for line in lines.iter().skip(header_idx + 1) {
        if line.trim().is_empty() {
            continue;
        }
        add_row(&mut record, &mut current, line, columns);
    }

    Ok(Transcript {
        title: metadata.title.unwrap_or_default(),
        record,
    })
}

fn is_subjects_marker(line: &str) -> bool {
    let fields = parse_csv_line(line);
    fields.first().is_some_and(|f| f.eq_ignore_ascii_case(SUBJECTS_MARKER))
        && fields.iter().skip(1).all(String::is_empty)
}

fn parse_metadata(lines: &[&str]) -> Result<TranscriptMetadata, TranscriptError> {
    let mut metadata = TranscriptMetadata::default();

    for line in lines {
        let fields = parse_csv_line(line);
        if fields.len() < 2 {
            continue;
        }
        let value = fields[1].as_str();
        match fields[0].to_lowercase().as_str() {
            "transcript" | "title" => metadata.title = Some(value.to_string()),
            "scale" => {
                let scale = value
                    .parse::<GradeScale>()
                    .map_err(|_| TranscriptError::InvalidScale(value.to_string()))?;
                metadata.scale = Some(scale);
            }
            _ => {}
        }
    }

    Ok(metadata)
}

/// Add one subject row to the semester it belongs to.
///
/// Consecutive rows with the same semester key form one semester. The key is
/// the `Index` cell when that column exists, otherwise the semester name, so
/// two semesters that share a name stay apart. A row with no subject data
/// only makes sure the semester exists.
fn add_row(
    record: &mut AcademicRecord,
    current: &mut Option<(String, SemesterId)>,
    line: &str,
    columns: Columns,
) {
    let fields = parse_csv_line(line);
    let field = |idx: Option<usize>| {
        idx.and_then(|i| fields.get(i))
            .map_or("", String::as_str)
    };

    let semester_name = field(Some(columns.semester));
    let subject_name = field(columns.subject);
    let credits = field(columns.credits);
    let grade = field(columns.grade);
    let key = if columns.index.is_some() {
        field(columns.index)
    } else {
        semester_name
    };

    let existing = current
        .as_ref()
        .filter(|(last_key, _)| last_key == key)
        .map(|(_, id)| *id);
    let semester_id = match existing {
        Some(id) => id,
        None => {
            let id = record.push_semester(Semester::new(semester_name));
            *current = Some((key.to_string(), id));
            id
        }
    };

    if subject_name.is_empty() && credits.is_empty() && grade.is_empty() {
        return;
    }

    let subject = Subject::new(subject_name, parse_credits(credits), grade);
    // The semester was found or created just above
    let _ = record.push_subject(semester_id, subject);
}

/// Parse a CSV line into trimmed fields
fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',').map(|f| f.trim().to_string()).collect()
}
