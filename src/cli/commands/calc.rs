//! Calc command handler
//!
//! Prints the semester GPAs and CGPA of each transcript given.

use super::load_transcript;
use cgpa_calc::config::Config;
use cgpa_calc::core::session::render_summary;
use cgpa_calc::core::summary::RecordSummary;
use cgpa_calc::{debug, verbose};
use serde_json::json;
use std::path::PathBuf;

/// Run the calc command.
///
/// Every file is attempted; the command fails if any of them could not be loaded.
pub fn run(input_files: &[PathBuf], as_json: bool, config: &Config) -> Result<(), String> {
    let mut failures = Vec::new();
    let mut reports = Vec::new();

    for path in input_files {
        let transcript = match load_transcript(path, config) {
            Ok(t) => t,
            Err(e) => {
                failures.push(e);
                continue;
            }
        };

        let summary = RecordSummary::from_record(&transcript.record, config.grading.unknown_grades);
        debug!(
            "{}: cgpa={:.4} credits={}",
            path.display(),
            summary.cgpa,
            summary.total_credits
        );
        for grade in summary.unknown_grades() {
            verbose!("  grade '{grade}' is not on the {} scale", summary.scale);
        }

        if as_json {
            reports.push(json!({
                "file": path.display().to_string(),
                "title": transcript.title,
                "summary": summary,
            }));
        } else {
            print!("{}", render_summary(&transcript.title, &summary));
            println!();
        }
    }

    if as_json {
        let value = if reports.len() == 1 {
            reports.remove(0)
        } else {
            serde_json::Value::Array(reports)
        };
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| format!("✗ Failed to encode JSON: {e}"))?;
        println!("{text}");
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("\n"))
    }
}
