//! CLI argument definitions for `cgpa`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cgpa_calc::config::ConfigOverrides;
use cgpa_calc::core::gpa::UnknownGradePolicy;
use cgpa_calc::core::scale::GradeScale;
use cgpa_calc::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI grading scale argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ScaleArg {
    /// The 4.0 scale
    #[value(name = "4.0", alias = "4")]
    Four,
    /// The 10.0 scale
    #[value(name = "10.0", alias = "10")]
    Ten,
}

impl From<ScaleArg> for GradeScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Four => Self::FourPoint,
            ScaleArg::Ten => Self::TenPoint,
        }
    }
}

/// CLI unknown-grade policy argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum PolicyArg {
    /// Unknown grades are 0 points and keep their credits
    Count,
    /// Unknown grades are left out of the average
    Exclude,
}

impl From<PolicyArg> for UnknownGradePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Count => Self::CountCredits,
            PolicyArg::Exclude => Self::ExcludeCredits,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `scale`, `theme`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Compute semester GPAs and the CGPA of transcript files.
    Calc {
        /// Paths to transcript CSV files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1.., required = true)]
        input_files: Vec<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a report from a transcript file.
    Report {
        /// Path to transcript CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Output file path (optional; defaults to `<reports_dir>/<name>_report.<ext>`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md), html, pdf, or json
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
    /// Edit a record interactively.
    ///
    /// Starts empty, or from a transcript file when one is given.
    Shell {
        /// Transcript CSV file to start from
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,
    },
    /// Print the grade-to-points table of a scale.
    Grades {
        /// Scale to show; defaults to the configured one
        #[arg(value_name = "SCALE", value_enum)]
        scale: Option<ScaleArg>,
    },
    /// Show or change the display theme.
    Theme {
        /// `toggle`, `dark` or `light`; prints the current theme when omitted
        #[arg(value_name = "ACTION")]
        action: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "cgpa",
    about = "Credit-weighted GPA and CGPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the default grade scale for transcripts that do not name one
    #[arg(long = "scale", value_enum)]
    pub scale: Option<ScaleArg>,

    /// Override how grades missing from the scale are counted
    #[arg(long = "unknown-grades", value_enum)]
    pub unknown_grades: Option<PolicyArg>,

    /// Override the transcript directory used by `save` in the shell
    #[arg(long = "records-dir", value_name = "DIR")]
    pub records_dir: Option<PathBuf>,

    /// Override the report output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            scale: self.scale.map(Into::into),
            unknown_grades: self.unknown_grades.map(Into::into),
            records_dir: self
                .records_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
