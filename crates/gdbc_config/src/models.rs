// --- File: crates/gdbc_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Application Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    /// Optional default data source, resolved by the application at startup.
    #[serde(default)]
    pub datasource: Option<DataSourceConfig>,
    #[serde(default)]
    pub pool: PoolConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// --- Data Source Config ---
// The password may be the marker "secret_from_env"; it is then read from DATASOURCE_PASSWORD.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DataSourceConfig {
    pub uri: String, // e.g. "gdbc:postgres://localhost:5432/app", via GDBC__DATASOURCE__URI
    pub username: Option<String>,
    pub password: Option<String>,
}

// --- Pool Config ---
// Handed to the sql client library; the gdbc core never pools or times out on its own.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    /// Open pools without connecting; the first query establishes the connection.
    pub lazy: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout_secs: 3,
            idle_timeout_secs: 600,
            lazy: true,
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
