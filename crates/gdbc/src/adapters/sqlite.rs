//! SQLite naming adapter
//!
//! ```text
//! gdbc:sqlite:memory            -> sqlite::memory:
//! gdbc:sqlite::memory:          -> sqlite::memory:
//! gdbc:sqlite:data/app.db?mode=rwc -> sqlite:data/app.db?mode=rwc
//! gdbc:sqlite:///var/app.db     -> sqlite:///var/app.db
//! ```

use crate::adapter::DataSourceNameAdapter;
use crate::datasource::DataSource;
use crate::error::BoxError;

/// Writes sqlx SQLite URLs
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteAdapter;

impl DataSourceNameAdapter for SqliteAdapter {
    fn data_source_name(&self, data_source: &DataSource) -> Result<String, BoxError> {
        let mut native = match data_source.opaque() {
            Some("memory") | Some(":memory:") => "sqlite::memory:".to_string(),
            Some("") => return Err("sqlite data source needs a database file".into()),
            Some(path) => format!("sqlite:{path}"),
            None => {
                if let Some(host) = data_source.host() {
                    return Err(format!(
                        "sqlite data sources are files, not hosts ({host}); use gdbc:{}:<path>",
                        data_source.driver_name()
                    )
                    .into());
                }
                if data_source.path().is_empty() || data_source.path() == "/" {
                    return Err("sqlite data source needs a database file".into());
                }
                format!("sqlite://{}", data_source.path())
            }
        };

        if let Some(query) = data_source.url().query() {
            native.push('?');
            native.push_str(query);
        }
        Ok(native)
    }
}
