//! Factory for opening configured data sources
//!
//! This module ties the configuration sections from `gdbc-config` to the
//! resolver: it builds the data source from the `datasource` section and the
//! sqlx opener from the `pool` section.

use crate::datasource::{get_data_source, DataSource};
use crate::error::{GdbcError, Result};
use crate::resolver::Resolver;
use gdbc_common::log_result;
use gdbc_config::{AppConfig, DataSourceConfig, PoolConfig};
use sqlx::AnyPool;
use tracing::debug;

/// Factory for opening sqlx pools from gdbc configuration
///
/// Drivers must already be registered in the process-wide registry.
#[derive(Debug, Clone, Default)]
pub struct DataSourceFactory {
    pool: PoolConfig,
}

impl DataSourceFactory {
    /// Create a factory using default pool settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory using the given pool settings
    pub fn with_pool_config(pool: PoolConfig) -> Self {
        Self { pool }
    }

    pub fn pool_config(&self) -> &PoolConfig {
        &self.pool
    }

    /// Open the data source described by an application configuration
    ///
    /// The `pool` section of `config` replaces the factory's own pool settings.
    ///
    /// # Errors
    ///
    /// * [`GdbcError::Config`] - the `datasource` section is missing
    /// * everything [`from_data_source`](Self::from_data_source) returns
    pub async fn from_app_config(&self, config: &AppConfig) -> Result<AnyPool> {
        debug!("Opening data source from application configuration");

        let datasource = config
            .datasource
            .as_ref()
            .ok_or_else(|| GdbcError::Config("datasource configuration is missing".to_string()))?;

        Self::with_pool_config(config.pool.clone())
            .from_datasource_config(datasource)
            .await
    }

    /// Open the data source described by a `datasource` configuration section
    pub async fn from_datasource_config(&self, config: &DataSourceConfig) -> Result<AnyPool> {
        debug!("Opening data source from datasource configuration");

        let data_source = DataSource::from_config(config)?;
        self.from_data_source(&data_source).await
    }

    /// Open the data source written as a gdbc URI
    pub async fn from_uri(&self, uri: &str) -> Result<AnyPool> {
        debug!("Opening data source from URI");

        let data_source = get_data_source(uri, [])?;
        self.from_data_source(&data_source).await
    }

    /// Open an already parsed data source
    pub async fn from_data_source(&self, data_source: &DataSource) -> Result<AnyPool> {
        let resolver = Resolver::from_pool_config(&self.pool);
        log_result(
            resolver.connect(data_source).await,
            &format!("Opened data source for alias {}", data_source.driver_name()),
            &format!(
                "Failed to open data source for alias {}",
                data_source.driver_name()
            ),
        )
    }
}
