//! Report generation for academic records
//!
//! Reports are rendered from a [`RecordSummary`] snapshot in Markdown, HTML,
//! PDF or JSON. Rendering never touches the record itself.

pub mod formats;

use crate::core::scale::GradeScale;
use crate::core::summary::RecordSummary;
use crate::core::theme::Theme;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub use formats::{HtmlReporter, JsonReporter, MarkdownReporter, PdfReporter, ReportFormat};

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Title printed at the top of the report
    pub title: &'a str,
    /// Computed figures being reported
    pub summary: &'a RecordSummary,
    /// Palette for formats that have one
    pub theme: Theme,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(title: &'a str, summary: &'a RecordSummary, theme: Theme) -> Self {
        Self {
            title,
            summary,
            theme,
        }
    }

    /// Scale the figures were computed under
    #[must_use]
    pub const fn scale(&self) -> GradeScale {
        self.summary.scale
    }

    /// Title, or a generic one when empty
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Academic Record"
        } else {
            self.title
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Write a report in `format` to `output_path`, creating parent directories
///
/// # Errors
/// Returns an error if the directory cannot be created or the generator fails
pub fn write_report(
    ctx: &ReportContext,
    format: ReportFormat,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(ctx, output_path),
        ReportFormat::Html => HtmlReporter::new().generate(ctx, output_path),
        ReportFormat::Pdf => PdfReporter::new().generate(ctx, output_path),
        ReportFormat::Json => JsonReporter::new().generate(ctx, output_path),
    }
}

/// `<reports_dir>/<stem>_report.<ext>`
#[must_use]
pub fn default_report_path(reports_dir: &Path, stem: &str, format: ReportFormat) -> PathBuf {
    reports_dir.join(format!("{stem}_report.{}", format.extension()))
}

/// Format a GPA or point value the way every report shows it
#[must_use]
pub fn format_gpa(value: f64) -> String {
    format!("{value:.2}")
}

/// Replace each `{{name}}` in `template` with its value in one left-to-right
/// pass. Substituted text is never scanned again, so values may contain
/// `{{...}}` verbatim. Names with no value are left in place.
#[must_use]
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gpa::UnknownGradePolicy;
    use crate::core::models::{AcademicRecord, Subject};

    #[test]
    fn test_default_report_path() {
        let path = default_report_path(Path::new("out"), "cgpa", ReportFormat::Html);
        assert_eq!(path, Path::new("out").join("cgpa_report.html"));
    }

    #[test]
    fn test_write_report_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = AcademicRecord::new(GradeScale::FourPoint);
        let sem = record.add_semester();
        record
            .push_subject(sem, Subject::new("Calculus", 3, "A"))
            .unwrap();
        let summary = RecordSummary::from_record(&record, UnknownGradePolicy::default());
        let ctx = ReportContext::new("", &summary, Theme::Light);

        let path = dir.path().join("nested").join("out.md");
        write_report(&ctx, ReportFormat::Markdown, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Academic Record"));
        assert!(content.contains("4.00"));
    }

    #[test]
    fn test_fill_template_single_pass() {
        let out = fill_template(
            "# {{title}} ({{cgpa}}) {{missing}} {{",
            &[("title", "{{cgpa}}"), ("cgpa", "3.50")],
        );
        assert_eq!(out, "# {{cgpa}} (3.50) {{missing}} {{");
    }
}
