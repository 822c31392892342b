//! Command-line interface entry point for `cgpa`

mod args;
mod commands;

use args::{Cli, Command};
use cgpa_calc::config::Config;
use cgpa_calc::info;
use cgpa_calc::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &config, &defaults),
        Command::Calc { input_files, json } => commands::calc::run(&input_files, json, &config),
        Command::Report {
            input_file,
            output,
            format,
        } => commands::report::run(&input_file, output.as_deref(), &format, &config),
        Command::Shell { input_file } => commands::shell::run(input_file.as_deref(), &mut config),
        Command::Grades { scale } => {
            commands::grades::run(scale.map_or(config.grading.scale, Into::into));
            Ok(())
        }
        Command::Theme { action } => commands::theme::run(action.as_deref(), &mut config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
