//! Settings file and database path resolution.
//!
//! The settings file is `~/.config/jupiter/settings.toml`; only the
//! `[database]` table is read.

use std::path::{Path, PathBuf};

use jupiter_db::StoreConfig;
use serde::Deserialize;

use crate::CliError;

/// Environment variable that overrides the database path.
pub(crate) const DB_ENV_VAR: &str = "JUPITER_DB";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Settings {
    #[serde(default)]
    pub database: StoreConfig,
}

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("jupiter").join("settings.toml")
}

/// Load settings from `path`, falling back to defaults if the file is absent.
pub(crate) fn load_settings(path: &Path) -> Result<Settings, CliError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_settings(&contents)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}, using defaults", path.display());
            Ok(Settings::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `JUPITER_DB` environment variable
/// 3. `database.path` from the settings file (or its default)
pub(crate) fn resolve_store_config(
    mut settings: Settings,
    cli_override: Option<PathBuf>,
    env_override: Option<PathBuf>,
) -> StoreConfig {
    if let Some(path) = cli_override.or(env_override) {
        settings.database.path = path;
    }
    settings.database
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn database_table_is_read() {
        let settings = parse_settings(
            r#"
[database]
path = "/srv/jupiter.db"
busy_timeout_ms = 1500
"#,
        )
        .unwrap();
        assert_eq!(settings.database.path, PathBuf::from("/srv/jupiter.db"));
        assert_eq!(settings.database.busy_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let file = parse_settings("[database]\npath = \"/file.db\"\n").unwrap();

        let config = resolve_store_config(
            file.clone(),
            Some(PathBuf::from("/cli.db")),
            Some(PathBuf::from("/env.db")),
        );
        assert_eq!(config.path, PathBuf::from("/cli.db"));

        let config = resolve_store_config(file.clone(), None, Some(PathBuf::from("/env.db")));
        assert_eq!(config.path, PathBuf::from("/env.db"));

        let config = resolve_store_config(file, None, None);
        assert_eq!(config.path, PathBuf::from("/file.db"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = load_settings(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[database\npath = 3").unwrap();
        assert!(matches!(load_settings(&path), Err(CliError::Config(_))));
    }
}
