//! Naming adapters
//!
//! Every driver speaks its own connection-string dialect. A naming adapter
//! turns a [`DataSource`] into exactly the string the driver expects.

use crate::datasource::DataSource;
use crate::error::BoxError;

/// Translates a data source into a driver's native connection string
#[cfg_attr(test, mockall::automock)]
pub trait DataSourceNameAdapter: Send + Sync {
    /// Produce the native data source name for `data_source`.
    ///
    /// # Errors
    ///
    /// Returns an error when the data source lacks something the driver needs
    /// or carries a value the driver cannot accept. The error reaches the
    /// caller of `get_connection` unchanged.
    fn data_source_name(&self, data_source: &DataSource) -> Result<String, BoxError>;
}

impl<F> DataSourceNameAdapter for F
where
    F: Fn(&DataSource) -> Result<String, BoxError> + Send + Sync,
{
    fn data_source_name(&self, data_source: &DataSource) -> Result<String, BoxError> {
        self(data_source)
    }
}
