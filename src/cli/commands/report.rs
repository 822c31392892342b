//! Report command handler
//!
//! Generates record reports in Markdown, HTML, PDF or JSON.

use super::{file_stem, load_transcript};
use cgpa_calc::config::Config;
use cgpa_calc::core::report::{default_report_path, write_report, ReportContext, ReportFormat};
use cgpa_calc::core::summary::RecordSummary;
use cgpa_calc::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `input_file` - Path to the transcript CSV file
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html, pdf, json)
/// * `config` - Configuration containing the reports directory and theme
pub fn run(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown, html, pdf, or json"))?;

    let transcript = load_transcript(input_file, config)?;
    let summary = RecordSummary::from_record(&transcript.record, config.grading.unknown_grades);

    let output_path: PathBuf = output_file.map_or_else(
        || {
            default_report_path(
                Path::new(&config.paths.reports_dir),
                &file_stem(input_file, "transcript"),
                format,
            )
        },
        Path::to_path_buf,
    );

    let ctx = ReportContext::new(&transcript.title, &summary, config.display.theme);
    write_report(&ctx, format, &output_path).map_err(|e| {
        error!(
            "Report generation failed for {}: {e}",
            input_file.display()
        );
        format!("✗ Failed to generate {format} report: {e}")
    })?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    print_summary(&transcript.title, &summary);
    Ok(())
}

/// Print a short summary of the report
fn print_summary(title: &str, summary: &RecordSummary) {
    println!("\n=== Summary ===");
    if !title.is_empty() {
        println!("Title: {title}");
    }
    println!("Scale: {}", summary.scale);
    println!("Semesters: {}", summary.semester_count());
    println!("Subjects: {}", summary.subject_count());
    println!("Total Credits: {}", summary.total_credits);
    println!(
        "CGPA: {:.2} / {:.2} ({})",
        summary.cgpa,
        summary.scale.max_points(),
        summary.standing
    );

    let unknown = summary.unknown_grades();
    if !unknown.is_empty() {
        println!(
            "⚠️  Grades not on the {} scale: {}",
            summary.scale,
            unknown.join(", ")
        );
    }
}
