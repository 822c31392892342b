//! Theme command handler

use cgpa_calc::config::Config;
use cgpa_calc::core::theme::Theme;
use cgpa_calc::info;

/// Print the theme, or change and persist it
pub fn run(action: Option<&str>, config: &mut Config) -> Result<(), String> {
    let Some(action) = action else {
        println!("{}", config.display.theme);
        return Ok(());
    };

    let theme = if action.eq_ignore_ascii_case("toggle") {
        config.toggle_theme()
    } else {
        let theme: Theme = action.parse().map_err(|e| format!("✗ {e}"))?;
        config.display.theme = theme;
        theme
    };

    persist(theme).map_err(|e| format!("✗ Failed to save config: {e}"))?;
    println!("✓ Theme: {theme}");
    Ok(())
}

/// Store `theme` in the config file.
///
/// Reloads the file so CLI overrides active in this run are not written back.
pub fn persist(theme: Theme) -> Result<(), String> {
    let mut stored = Config::load();
    stored.display.theme = theme;
    stored.save().map_err(|e| e.to_string())?;
    info!("Theme set to {theme}");
    Ok(())
}
