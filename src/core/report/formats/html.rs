//! HTML report generator
//!
//! Generates record reports as a single self-contained HTML page with
//! embedded CSS. The page uses the light or dark palette and declares an A4
//! page size so printing splits it onto standard-width pages.

use crate::core::report::{fill_template, format_gpa, ReportContext, ReportGenerator};
use crate::core::theme::Theme;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// Background, foreground, panel, border, muted
struct Palette {
    bg: &'static str,
    fg: &'static str,
    panel: &'static str,
    border: &'static str,
    muted: &'static str,
}

const LIGHT: Palette = Palette {
    bg: "#f4f5f7",
    fg: "#1d2330",
    panel: "#ffffff",
    border: "#dde1e7",
    muted: "#6b7280",
};

const DARK: Palette = Palette {
    bg: "#14161b",
    fg: "#e6e8ec",
    panel: "#1e2128",
    border: "#30343d",
    muted: "#9aa1ad",
};

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    const fn palette(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = ctx.summary;
        let palette = Self::palette(ctx.theme);

        let unknown = summary.unknown_grades();
        let note = if unknown.is_empty() {
            String::new()
        } else {
            format!(
                "<p class=\"note\">Grades not on the {} scale count as 0 points: {}</p>",
                ctx.scale(),
                escape_html(&unknown.join(", "))
            )
        };

        let title = escape_html(ctx.display_title());
        let cgpa = format_gpa(summary.cgpa);
        let max_points = format_gpa(ctx.scale().max_points());
        let total_credits = summary.total_credits.to_string();
        let semester_count = summary.semester_count().to_string();
        let subject_count = summary.subject_count().to_string();
        let semester_rows = Self::generate_semester_rows(ctx);
        let subject_tables = Self::generate_subject_tables(ctx);
        let scale_rows = Self::generate_scale_rows(ctx);

        fill_template(
            HTML_TEMPLATE,
            &[
                ("color_bg", palette.bg),
                ("color_fg", palette.fg),
                ("color_panel", palette.panel),
                ("color_border", palette.border),
                ("color_muted", palette.muted),
                ("theme", ctx.theme.as_str()),
                ("title", &title),
                ("scale", ctx.scale().as_str()),
                ("cgpa", &cgpa),
                ("max_points", &max_points),
                ("standing", summary.standing.as_str()),
                ("total_credits", &total_credits),
                ("semester_count", &semester_count),
                ("subject_count", &subject_count),
                ("unknown_note", &note),
                ("semester_rows", &semester_rows),
                ("subject_tables", &subject_tables),
                ("scale_rows", &scale_rows),
            ],
        )
    }

    /// Semester breakdown as table rows
    fn generate_semester_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();

        if ctx.summary.semesters.is_empty() {
            html.push_str("<tr><td colspan=\"5\" class=\"note\">No semesters recorded.</td></tr>\n");
            return html;
        }

        for (idx, semester) in ctx.summary.semesters.iter().enumerate() {
            let standing = semester.standing.as_str();
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"standing-{standing}\">{}</td><td class=\"standing-{standing}\">{standing}</td></tr>",
                idx + 1,
                escape_html(&semester.name),
                semester.credits,
                format_gpa(semester.gpa),
            );
        }

        html
    }

    /// One subject table per semester
    fn generate_subject_tables(ctx: &ReportContext) -> String {
        let mut html = String::new();

        for semester in &ctx.summary.semesters {
            let _ = writeln!(
                html,
                "<h3>{} <span class=\"standing-{}\">{}</span></h3>",
                escape_html(&semester.name),
                semester.standing.as_str(),
                format_gpa(semester.gpa)
            );
            if semester.subjects.is_empty() {
                html.push_str("<p class=\"note\">No subjects.</p>\n");
                continue;
            }

            html.push_str("<table>\n");
            html.push_str(
                "<thead><tr><th>Subject</th><th>Credits</th><th>Grade</th><th>Points</th></tr></thead>\n<tbody>\n",
            );
            for subject in &semester.subjects {
                let (points, class) = subject
                    .points
                    .map_or_else(|| ("-".to_string(), " class=\"unknown\""), |p| (format_gpa(p), ""));
                let _ = writeln!(
                    html,
                    "<tr{class}><td>{}</td><td>{}</td><td>{}</td><td>{points}</td></tr>",
                    escape_html(&subject.name),
                    subject.credits,
                    escape_html(&subject.grade),
                );
            }
            html.push_str("</tbody>\n</table>\n");
        }

        html
    }

    fn generate_scale_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();
        for (grade, points) in ctx.scale().grades() {
            let _ = writeln!(
                html,
                "<tr><td>{grade}</td><td>{}</td></tr>",
                format_gpa(*points)
            );
        }
        html
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

/// Escape text for use inside HTML element content
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
