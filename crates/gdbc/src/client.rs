//! The sql client library seam
//!
//! gdbc never talks to a database itself. Once a data source has been turned
//! into a native connection string, a [`ConnectionOpener`] hands it to the
//! client library. [`SqlxOpener`] is the default, backed by sqlx `Any` pools.

use crate::error::BoxError;
use gdbc_config::PoolConfig;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info};

/// Opens connections in an sql client library
pub trait ConnectionOpener: Send + Sync {
    /// Handle returned by the client library
    type Connection: Send;

    /// Open a connection with `driver_name` using `data_source_name`.
    ///
    /// Errors are the client library's own and reach the caller unchanged.
    fn open(
        &self,
        driver_name: &str,
        data_source_name: &str,
    ) -> impl Future<Output = Result<Self::Connection, BoxError>> + Send;
}

/// Opens sqlx `Any` pools.
///
/// sqlx picks its driver from the URL scheme, so the real driver identity for
/// sqlx is the driver's scheme name: `sqlite`, `postgres` or `mysql`. Pool
/// sizing and timeouts come from [`PoolConfig`].
///
/// With `lazy` pools (the default) no connection is made until the pool is
/// first used, but creating the pool still needs a running Tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct SqlxOpener {
    pool: PoolConfig,
}

impl SqlxOpener {
    /// Create an opener using the given pool configuration
    pub fn new(pool: PoolConfig) -> Self {
        Self { pool }
    }

    pub fn pool_config(&self) -> &PoolConfig {
        &self.pool
    }

    /// URL schemes sqlx accepts for a driver
    pub fn driver_schemes(driver_name: &str) -> &'static [&'static str] {
        match driver_name {
            "sqlite" => &["sqlite"],
            "postgres" => &["postgres", "postgresql"],
            "mysql" => &["mysql", "mariadb"],
            _ => &[],
        }
    }

    fn pool_options(&self) -> AnyPoolOptions {
        AnyPoolOptions::new()
            .max_connections(self.pool.max_connections)
            .acquire_timeout(Duration::from_secs(self.pool.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.pool.idle_timeout_secs))
    }
}

impl ConnectionOpener for SqlxOpener {
    type Connection = AnyPool;

    async fn open(&self, driver_name: &str, data_source_name: &str) -> Result<AnyPool, BoxError> {
        // Idempotent; installs every driver enabled through sqlx features
        sqlx::any::install_default_drivers();

        let scheme = data_source_name.split(':').next().unwrap_or_default();
        if !Self::driver_schemes(driver_name).contains(&scheme) {
            error!("Driver {} cannot open '{}' data sources", driver_name, scheme);
            return Err(sqlx::Error::Configuration(
                format!("sqlx driver {driver_name} does not accept the '{scheme}' scheme").into(),
            )
            .into());
        }

        debug!(
            "Opening sqlx pool for driver {} (lazy: {})",
            driver_name, self.pool.lazy
        );
        let options = self.pool_options();
        let pool = if self.pool.lazy {
            options.connect_lazy(data_source_name)
        } else {
            options.connect(data_source_name).await
        }
        .map_err(|e| {
            error!("Failed to open sqlx pool for driver {}: {}", driver_name, e);
            e
        })?;

        info!("Opened sqlx pool for driver {}", driver_name);
        Ok(pool)
    }
}
