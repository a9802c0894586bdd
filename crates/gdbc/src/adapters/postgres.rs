//! PostgreSQL naming adapter

use crate::adapter::DataSourceNameAdapter;
use crate::datasource::DataSource;
use crate::error::BoxError;

/// Writes sqlx PostgreSQL URLs from `gdbc:<alias>://[user[:password]@]host[:port]/database`
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresAdapter;

impl DataSourceNameAdapter for PostgresAdapter {
    fn data_source_name(&self, data_source: &DataSource) -> Result<String, BoxError> {
        super::network_url("postgres", data_source)
    }
}
