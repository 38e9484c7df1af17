use std::path::PathBuf;
use std::time::Duration;

use jupiter_db::schema::DEFAULT_BUSY_TIMEOUT;
use jupiter_db::{default_database_path, StoreConfig};

#[test]
fn defaults_when_fields_missing() {
    let config: StoreConfig = toml::from_str("").unwrap();
    assert_eq!(config.path, default_database_path());
    assert_eq!(config.busy_timeout, DEFAULT_BUSY_TIMEOUT);
}

#[test]
fn parses_path_and_timeout() {
    let config: StoreConfig = toml::from_str(
        r#"
path = "/var/lib/jupiter/jupiter.db"
busy_timeout_ms = 250
"#,
    )
    .unwrap();
    assert_eq!(config.path, PathBuf::from("/var/lib/jupiter/jupiter.db"));
    assert_eq!(config.busy_timeout, Duration::from_millis(250));
}

#[test]
fn serializes_timeout_as_millis() {
    let config = StoreConfig::new("/tmp/j.db").with_busy_timeout(Duration::from_secs(2));
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("busy_timeout_ms = 2000"), "{}", text);
    let back: StoreConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn default_path_ends_in_jupiter_db() {
    let path = default_database_path();
    assert!(path.ends_with("jupiter/jupiter.db"));
}
