//! Config command handler

use crate::args::ConfigSubcommand;
use cgpa_calc::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(&key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) -> Result<(), String> {
    if let Some(k) = key {
        let value = config
            .get(&k)
            .ok_or_else(|| format!("✗ Unknown config key: '{k}'"))?;
        println!("{value}");
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        println!("\nFile: {}", Config::get_config_file_path().display());
    }
    Ok(())
}

/// Handle the config set subcommand
///
/// Edits the stored file, not the in-memory config, which carries this run's
/// CLI overrides.
pub fn handle_config_set(key: &str, value: &str) -> Result<(), String> {
    let mut stored = Config::load();
    stored.set(key, value).map_err(|e| format!("✗ {e}"))?;
    stored
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;

    println!("✓ Set {key} = {value}");
    Ok(())
}

/// Handle the config unset subcommand
pub fn handle_config_unset(defaults: &Config, key: &str) -> Result<(), String> {
    let mut stored = Config::load();
    stored.unset(key, defaults).map_err(|e| format!("✗ {e}"))?;
    stored
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;

    println!("✓ Reset {key} to default");
    Ok(())
}

/// Handle the config reset subcommand
pub fn handle_config_reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("✗ Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
