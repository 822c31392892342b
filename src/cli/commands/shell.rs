//! Shell command handler
//!
//! Runs an interactive editing session on stdin/stdout. Theme changes made in
//! the session are written to the config file as they happen.

use super::load_transcript;
use cgpa_calc::config::Config;
use cgpa_calc::core::models::AcademicRecord;
use cgpa_calc::core::session::{Session, SessionOptions};
use cgpa_calc::core::transcript::Transcript;
use cgpa_calc::{info, warn};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Run the shell command.
pub fn run(input_file: Option<&Path>, config: &mut Config) -> Result<(), String> {
    let transcript = match input_file {
        Some(path) => load_transcript(path, config)?,
        None => Transcript {
            title: String::new(),
            record: AcademicRecord::new(config.grading.scale),
        },
    };

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let options = SessionOptions {
        policy: config.grading.unknown_grades,
        theme: config.display.theme,
        reports_dir: PathBuf::from(&config.paths.reports_dir),
        records_dir: PathBuf::from(&config.paths.records_dir),
        file_stem: "cgpa".to_string(),
        prompt: interactive,
    };

    if interactive {
        println!("cgpa {} - type 'help' for commands", cgpa_calc::get_version());
    }
    info!("Shell session started");

    let mut session = Session::new(transcript, options).with_theme_hook(|theme| {
        config.display.theme = theme;
        super::theme::persist(theme).inspect_err(|e| {
            warn!("Failed to save theme preference: {e}");
        })
    });

    session
        .run(stdin.lock(), io::stdout().lock())
        .map_err(|e| format!("✗ Session I/O failed: {e}"))?;

    info!("Shell session ended");
    Ok(())
}
