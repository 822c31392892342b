//! Markdown report generator
//!
//! Generates record reports as Markdown tables. These reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::report::{fill_template, format_gpa, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = ctx.summary;

        let unknown = summary.unknown_grades();
        let note = if unknown.is_empty() {
            String::new()
        } else {
            format!(
                "\n> Grades not on the {} scale count as 0 points: {}\n",
                ctx.scale(),
                unknown.join(", ")
            )
        };

        let cgpa = format_gpa(summary.cgpa);
        let max_points = format_gpa(ctx.scale().max_points());
        let total_credits = summary.total_credits.to_string();
        let semester_count = summary.semester_count().to_string();
        let subject_count = summary.subject_count().to_string();
        let semester_table = Self::generate_semester_table(ctx);
        let subject_tables = Self::generate_subject_tables(ctx);
        let scale_table = Self::generate_scale_table(ctx);

        fill_template(
            MARKDOWN_TEMPLATE,
            &[
                ("title", ctx.display_title()),
                ("scale", ctx.scale().as_str()),
                ("cgpa", &cgpa),
                ("max_points", &max_points),
                ("standing", summary.standing.as_str()),
                ("total_credits", &total_credits),
                ("semester_count", &semester_count),
                ("subject_count", &subject_count),
                ("unknown_note", &note),
                ("semester_table", &semester_table),
                ("subject_tables", &subject_tables),
                ("scale_table", &scale_table),
            ],
        )
    }

    /// Generate the semester-by-semester table
    fn generate_semester_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        if ctx.summary.semesters.is_empty() {
            table.push_str("_No semesters recorded._\n");
            return table;
        }

        table.push_str("| # | Semester | Credits | GPA | Standing |\n");
        table.push_str("|---|---|---|---|---|\n");

        for (idx, semester) in ctx.summary.semesters.iter().enumerate() {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} |",
                idx + 1,
                escape_cell(&semester.name),
                semester.credits,
                format_gpa(semester.gpa),
                semester.standing
            );
        }

        table
    }

    /// One subject table per semester
    fn generate_subject_tables(ctx: &ReportContext) -> String {
        let mut out = String::new();

        for semester in &ctx.summary.semesters {
            let _ = writeln!(out, "### {}\n", semester.name);
            if semester.subjects.is_empty() {
                out.push_str("_No subjects._\n\n");
                continue;
            }

            out.push_str("| Subject | Credits | Grade | Points |\n");
            out.push_str("|---|---|---|---|\n");
            for subject in &semester.subjects {
                let points = subject.points.map_or_else(|| "-".to_string(), format_gpa);
                let name = if subject.name.is_empty() {
                    "(unnamed)".to_string()
                } else {
                    escape_cell(&subject.name)
                };
                let _ = writeln!(
                    out,
                    "| {name} | {} | {} | {points} |",
                    subject.credits,
                    escape_cell(&subject.grade)
                );
            }
            out.push('\n');
        }

        out
    }

    /// Letter-to-points reference for the active scale
    fn generate_scale_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Grade | Points |\n");
        table.push_str("|---|---|\n");
        for (grade, points) in ctx.scale().grades() {
            let _ = writeln!(table, "| {grade} | {} |", format_gpa(*points));
        }
        table
    }
}

/// Keep `|` in table cell text from starting a new column
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gpa::UnknownGradePolicy;
    use crate::core::models::{AcademicRecord, Subject};
    use crate::core::scale::GradeScale;
    use crate::core::summary::RecordSummary;
    use crate::core::theme::Theme;

    #[test]
    fn test_render_contains_figures() {
        let mut record = AcademicRecord::new(GradeScale::FourPoint);
        let sem = record.add_semester();
        record
            .push_subject(sem, Subject::new("Calculus", 3, "A"))
            .unwrap();
        record
            .push_subject(sem, Subject::new("Physics", 3, "B"))
            .unwrap();
        record.add_semester();
        let summary = RecordSummary::from_record(&record, UnknownGradePolicy::default());
        let ctx = ReportContext::new("Fall Plan", &summary, Theme::Dark);

        let md = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(md.starts_with("# Fall Plan"));
        assert!(md.contains("3.50 out of 4.00"));
        assert!(md.contains("| 1 | Semester 1 | 6 | 3.50 | excellent |"));
        assert!(md.contains("| 2 | Semester 2 | 0 | 0.00 | poor |"));
        assert!(md.contains("| Calculus | 3 | A | 4.00 |"));
        assert!(md.contains("_No subjects._"));
        assert!(md.contains("| D+ | 1.30 |"));
        assert!(!md.contains("{{"));
    }

    #[test]
    fn test_unknown_grades_noted() {
        let mut record = AcademicRecord::new(GradeScale::TenPoint);
        let sem = record.add_semester();
        record
            .push_subject(sem, Subject::new("Art", 2, "D+"))
            .unwrap();
        let summary = RecordSummary::from_record(&record, UnknownGradePolicy::default());
        let ctx = ReportContext::new("x", &summary, Theme::Light);

        let md = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(md.contains("count as 0 points: D+"));
        assert!(md.contains("| Art | 2 | D+ | - |"));
    }

    #[test]
    fn test_user_text_with_placeholders_kept_verbatim() {
        let mut record = AcademicRecord::new(GradeScale::FourPoint);
        let sem = record.add_semester();
        record.rename_semester(sem, "{{scale_table}}").unwrap();
        record
            .push_subject(sem, Subject::new("{{subject_tables}}", 3, "A"))
            .unwrap();
        let summary = RecordSummary::from_record(&record, UnknownGradePolicy::default());
        let ctx = ReportContext::new("{{cgpa}}", &summary, Theme::Light);

        let md = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(md.starts_with("# {{cgpa}}"));
        assert!(md.contains("| 1 | {{scale_table}} | 3 | 4.00 | excellent |"));
        assert!(md.contains("| {{subject_tables}} | 3 | A | 4.00 |"));
        assert_eq!(md.matches("| Grade | Points |").count(), 1);
    }

    #[test]
    fn test_pipes_in_names_are_escaped() {
        let mut record = AcademicRecord::new(GradeScale::FourPoint);
        let sem = record.add_semester();
        record.rename_semester(sem, "Fall | Spring").unwrap();
        record
            .push_subject(sem, Subject::new("Art|Design", 2, "B"))
            .unwrap();
        let summary = RecordSummary::from_record(&record, UnknownGradePolicy::default());
        let ctx = ReportContext::new("x", &summary, Theme::Light);

        let md = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(md.contains("| 1 | Fall \\| Spring | 2 | 3.00 | good |"));
        assert!(md.contains("| Art\\|Design | 2 | B | 3.00 |"));
    }
}
