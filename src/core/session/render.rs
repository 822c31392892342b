//! Plain-text rendering of a summary for terminals

use crate::core::report::format_gpa;
use crate::core::scale::GradeScale;
use crate::core::summary::RecordSummary;
use std::fmt::Write;

/// Render the summary as the shell and `calc` print it
#[must_use]
pub fn render_summary(title: &str, summary: &RecordSummary) -> String {
    let mut out = String::new();
    let max = format_gpa(summary.scale.max_points());

    let heading = if title.is_empty() { "Academic Record" } else { title };
    let _ = writeln!(out, "=== {heading} ({} scale) ===", summary.scale);

    if summary.semesters.is_empty() {
        out.push_str("  (no semesters)\n");
    }

    for (idx, semester) in summary.semesters.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<20} GPA {} / {max}  {:>3} cr  [{}]",
            idx + 1,
            semester.name,
            format_gpa(semester.gpa),
            semester.credits,
            semester.standing
        );
        for (sub_idx, subject) in semester.subjects.iter().enumerate() {
            let name = if subject.name.is_empty() {
                "(unnamed)"
            } else {
                subject.name.as_str()
            };
            let points = subject
                .points
                .map_or_else(|| "unknown grade".to_string(), format_gpa);
            let _ = writeln!(
                out,
                "      {}. {name:<24} {:>3} cr  {:<3} {points}",
                sub_idx + 1,
                subject.credits,
                subject.grade
            );
        }
    }

    let _ = writeln!(
        out,
        "CGPA: {} / {max} over {} credits [{}]",
        format_gpa(summary.cgpa),
        summary.total_credits,
        summary.standing
    );

    out
}

/// Render the grade reference table of `scale`
#[must_use]
pub fn render_scale(scale: GradeScale) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Grade scale {scale}:");
    for (grade, points) in scale.grades() {
        let _ = writeln!(out, "  {grade:<3} {}", format_gpa(*points));
    }
    out
}
