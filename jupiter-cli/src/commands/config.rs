use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use jupiter_db::StoreConfig;

use crate::settings::DB_ENV_VAR;
use crate::CliError;

/// Show where settings come from and what they resolve to.
pub(crate) fn run_config_show(settings_path: &Path, config: &StoreConfig) -> Result<(), CliError> {
    log::info!(
        "{}",
        "jupiter Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    let status = if settings_path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!(
        "  Settings file: {} {}",
        settings_path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );
    if let Ok(value) = std::env::var(DB_ENV_VAR) {
        log::info!("  {}: {}", DB_ENV_VAR, value);
    }
    log::info!("");

    let rendered = toml::to_string_pretty(config)
        .map_err(|e| CliError::config(format!("Failed to render settings: {}", e)))?;
    log::info!("[database]");
    for line in rendered.lines() {
        log::info!("{}", line);
    }
    Ok(())
}
