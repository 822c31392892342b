//! CLI command handlers for `cgpa`.
//!
//! Each command is implemented in its own submodule. Handlers return
//! `Err(message)` with a ready-to-print `✗ ...` line when they fail.

pub mod calc;
pub mod config;
pub mod grades;
pub mod report;
pub mod shell;
pub mod theme;

use cgpa_calc::config::Config;
use cgpa_calc::core::transcript::{parse_transcript_csv, Transcript};
use cgpa_calc::{error, info};
use std::path::Path;

/// Load a transcript using the configured default scale
pub fn load_transcript(path: &Path, config: &Config) -> Result<Transcript, String> {
    let transcript = parse_transcript_csv(path, config.grading.scale).map_err(|e| {
        error!("Failed to load transcript {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })?;
    info!(
        "Transcript loaded: {} ({} semesters)",
        path.display(),
        transcript.record.semesters().len()
    );
    Ok(transcript)
}

/// File stem used for default output names
pub fn file_stem(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(fallback)
        .to_string()
}
