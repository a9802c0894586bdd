#[cfg(test)]
mod tests {
    use crate::{apply_env_overrides_from_marker, load_config_from, AppConfig, DataSourceConfig, PoolConfig};
    use std::fs;

    #[test]
    fn test_defaults_when_no_files_exist() {
        let dir = tempfile::tempdir().expect("tempdir");

        let config = load_config_from(dir.path()).expect("config should load");

        assert!(config.datasource.is_none());
        assert_eq!(config.pool, PoolConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_reads_default_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("default.toml"),
            r#"
[datasource]
uri = "gdbc:postgres://localhost:5432/app"
username = "app"

[pool]
max_connections = 12
lazy = false

[logging]
level = "debug"
"#,
        )
        .expect("write config");

        let config = load_config_from(dir.path()).expect("config should load");

        let datasource = config.datasource.expect("datasource section");
        assert_eq!(datasource.uri, "gdbc:postgres://localhost:5432/app");
        assert_eq!(datasource.username.as_deref(), Some("app"));
        assert!(datasource.password.is_none());
        assert_eq!(config.pool.max_connections, 12);
        assert!(!config.pool.lazy);
        // Unset pool fields keep their defaults
        assert_eq!(config.pool.acquire_timeout_secs, 3);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_secret_marker_is_replaced_from_env() {
        std::env::set_var("DATASOURCE_PASSWORD", "s3cr3t");
        let config = AppConfig {
            datasource: Some(DataSourceConfig {
                uri: "gdbc:sqlite:memory".to_string(),
                username: None,
                password: Some("secret_from_env".to_string()),
            }),
            ..AppConfig::default()
        };

        let config = apply_env_overrides_from_marker(config).expect("overrides apply");

        let datasource = config.datasource.expect("datasource section");
        assert_eq!(datasource.password.as_deref(), Some("s3cr3t"));
    }

    #[test]
    fn test_secret_marker_kept_when_env_missing() {
        let config = AppConfig {
            datasource: Some(DataSourceConfig {
                uri: "gdbc:sqlite:memory".to_string(),
                username: Some("secret_from_env".to_string()),
                password: None,
            }),
            ..AppConfig::default()
        };

        let config = apply_env_overrides_from_marker(config).expect("overrides apply");

        let datasource = config.datasource.expect("datasource section");
        assert_eq!(datasource.username.as_deref(), Some("secret_from_env"));
    }

    #[test]
    fn test_dotenv_loading_is_idempotent() {
        // A missing .env file is not an error, and a second call is a no-op
        crate::ensure_dotenv_loaded();
        crate::ensure_dotenv_loaded();
    }
}
