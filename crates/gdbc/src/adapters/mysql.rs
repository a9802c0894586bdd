//! MySQL naming adapter

use crate::adapter::DataSourceNameAdapter;
use crate::datasource::DataSource;
use crate::error::BoxError;

/// Writes sqlx MySQL URLs from `gdbc:<alias>://[user[:password]@]host[:port]/database`
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlAdapter;

impl DataSourceNameAdapter for MySqlAdapter {
    fn data_source_name(&self, data_source: &DataSource) -> Result<String, BoxError> {
        super::network_url("mysql", data_source)
    }
}
