//! One URI syntax for every database driver
//!
//! gdbc lets an application address any database with a single URI shape and
//! turns it into the native connection string of the driver behind it:
//!
//! ```text
//! gdbc:<driver>:<opaque>[?<query>]
//! gdbc:<driver>://[<user>[:<password>]@]<host>[:<port>][/<path>][?<query>]
//! ```
//!
//! The `<driver>` segment is an alias. At startup every driver is registered
//! once under its alias, together with its real identity in the sql client
//! library and a [`DataSourceNameAdapter`] that writes its connection strings.
//! Resolving a [`DataSource`] looks the alias up, lets the adapter translate
//! the URI, and hands the result to the client library (sqlx by default).
//!
//! # Features
//!
//! - `sqlite` (default) - sqlx SQLite driver and [`adapters::SqliteAdapter`]
//! - `postgres` - sqlx PostgreSQL driver and `adapters::PostgresAdapter`
//! - `mysql` - sqlx MySQL driver and `adapters::MySqlAdapter`
//!
//! # Example
//!
//! ```rust,no_run
//! use gdbc::{adapters, get_data_source, registry, DataSourceOption};
//!
//! async fn connect() -> Result<sqlx::AnyPool, gdbc::GdbcError> {
//!     adapters::register_sqlx_drivers(&registry::global());
//!
//!     let data_source = get_data_source(
//!         "gdbc:sqlite:data/app.db?mode=rwc",
//!         [DataSourceOption::username("app")],
//!     )?;
//!     data_source.get_connection().await
//! }
//! ```

pub mod adapter;
pub mod adapters;
pub mod client;
pub mod datasource;
pub mod error;
pub mod factory;
pub mod registry;
pub mod resolver;
pub mod uri;

#[cfg(test)]
mod datasource_test;
#[cfg(test)]
mod uri_proptest;

use std::sync::Arc;

// Re-export the main types for ease of use
pub use adapter::DataSourceNameAdapter;
pub use client::{ConnectionOpener, SqlxOpener};
pub use datasource::{get_data_source, DataSource, DataSourceOption};
pub use error::{BoxError, GdbcError, Result};
pub use factory::DataSourceFactory;
pub use registry::{DriverRegistry, RegistryEntry};
pub use resolver::{NativeDataSource, Resolver};
pub use uri::{parse, SCHEME};

// Configuration sections consumed by this crate
pub use gdbc_config::{AppConfig, DataSourceConfig, PoolConfig};

/// Register a driver in the process-wide registry.
///
/// # Panics
///
/// When `alias` or `driver_name` is empty, the alias is already registered, or
/// the driver is already bound to another alias.
pub fn register<A>(alias: &str, driver_name: &str, adapter: A)
where
    A: DataSourceNameAdapter + 'static,
{
    registry::global().register(alias, driver_name, adapter);
}

/// Real driver identity registered under `alias` in the process-wide registry
pub fn driver_name(alias: &str) -> Option<String> {
    registry::global().driver_name(alias)
}

/// Naming adapter registered under `alias` in the process-wide registry
pub fn data_source_name_adapter(alias: &str) -> Option<Arc<dyn DataSourceNameAdapter>> {
    registry::global().adapter(alias)
}
