//! Resolution of data sources into connections
//!
//! Resolving runs the same steps every time: find the driver registered under
//! the data source's alias, let its adapter write the native connection
//! string, then ask the client library to open it. There is no retry, timeout
//! or caching at this layer.

use crate::client::{ConnectionOpener, SqlxOpener};
use crate::datasource::DataSource;
use crate::error::{GdbcError, Result};
use crate::registry::{self, DriverRegistry};
use gdbc_common::log_error;
use gdbc_config::PoolConfig;
use std::sync::Arc;
use tracing::debug;

/// A data source translated for its real driver
#[derive(Clone, PartialEq, Eq)]
pub struct NativeDataSource {
    /// Real driver identity
    pub driver_name: String,
    /// Connection string in the driver's own dialect
    pub data_source_name: String,
}

impl std::fmt::Debug for NativeDataSource {
    // The connection string may carry a password
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeDataSource")
            .field("driver_name", &self.driver_name)
            .finish_non_exhaustive()
    }
}

/// Turns data sources into open connections using a registry and an opener
#[derive(Debug, Clone)]
pub struct Resolver<O> {
    registry: Arc<DriverRegistry>,
    opener: O,
}

impl Resolver<SqlxOpener> {
    /// Resolver over the process-wide registry with a default sqlx opener
    pub fn global() -> Self {
        Self::new(registry::global(), SqlxOpener::default())
    }

    /// Resolver over the process-wide registry with a configured sqlx opener
    pub fn from_pool_config(pool: &PoolConfig) -> Self {
        Self::new(registry::global(), SqlxOpener::new(pool.clone()))
    }
}

impl<O: ConnectionOpener> Resolver<O> {
    pub fn new(registry: Arc<DriverRegistry>, opener: O) -> Self {
        Self { registry, opener }
    }

    pub fn registry(&self) -> &DriverRegistry {
        &self.registry
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Translate `data_source` without opening anything.
    ///
    /// # Errors
    ///
    /// * [`GdbcError::NotRegistered`] - no driver under the data source's alias
    /// * [`GdbcError::Adapter`] - the adapter's own error, unchanged
    pub fn resolve(&self, data_source: &DataSource) -> Result<NativeDataSource> {
        let alias = data_source.driver_name();
        debug!("Resolving data source for alias: {}", alias);

        let entry = self
            .registry
            .lookup(alias)
            .ok_or_else(|| GdbcError::NotRegistered(alias.to_string()))?;

        let data_source_name = entry
            .adapter()
            .data_source_name(data_source)
            .map_err(GdbcError::Adapter)?;

        Ok(NativeDataSource {
            driver_name: entry.driver_name().to_string(),
            data_source_name,
        })
    }

    /// Translate `data_source` and open it with the client library.
    ///
    /// # Errors
    ///
    /// Everything [`resolve`](Self::resolve) returns, plus
    /// [`GdbcError::Connection`] carrying the client library's error unchanged.
    pub async fn connect(&self, data_source: &DataSource) -> Result<O::Connection> {
        let native = self.resolve(data_source)?;

        debug!(
            "Opening connection for alias {} with driver {}",
            data_source.driver_name(),
            native.driver_name
        );
        self.opener
            .open(&native.driver_name, &native.data_source_name)
            .await
            .map_err(|e| {
                let context = format!(
                    "Failed to open connection for alias {}",
                    data_source.driver_name()
                );
                log_error(&e, &context);
                GdbcError::Connection(e)
            })
    }
}
