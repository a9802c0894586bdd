//! Data source descriptions
//!
//! A [`DataSource`] is what a gdbc URI parses into: the driver alias, the
//! structured URI, and optional username and password overrides. The URI part
//! never changes after parsing; overrides are applied once, in order, by
//! [`get_data_source`].

use crate::client::{ConnectionOpener, SqlxOpener};
use crate::error::Result;
use crate::resolver::Resolver;
use crate::uri;
use gdbc_config::DataSourceConfig;
use percent_encoding::percent_decode_str;
use sqlx::AnyPool;
use url::Url;

/// Parsed form of a gdbc URI
#[derive(Clone, PartialEq, Eq)]
pub struct DataSource {
    driver_name: String,
    url: Url,
    username: Option<String>,
    password: Option<String>,
}

/// Configuration applied to a data source after its URI has been parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceOption {
    /// Override the username, regardless of any user-info in the URI
    Username(String),
    /// Override the password, regardless of any user-info in the URI
    Password(String),
}

impl DataSourceOption {
    pub fn username(username: impl Into<String>) -> Self {
        DataSourceOption::Username(username.into())
    }

    pub fn password(password: impl Into<String>) -> Self {
        DataSourceOption::Password(password.into())
    }
}

/// Parse `uri` and apply `options` in the order given.
///
/// When parsing fails no option is applied and the parse error is returned
/// unchanged. Later options win over earlier ones of the same kind.
///
/// # Example
///
/// ```
/// use gdbc::{get_data_source, DataSourceOption};
///
/// let data_source = get_data_source(
///     "gdbc:postgres://localhost:5432/app",
///     [DataSourceOption::username("app"), DataSourceOption::password("secret")],
/// )
/// .unwrap();
///
/// assert_eq!(data_source.driver_name(), "postgres");
/// assert_eq!(data_source.username(), Some("app"));
/// ```
pub fn get_data_source<I>(uri: &str, options: I) -> Result<DataSource>
where
    I: IntoIterator<Item = DataSourceOption>,
{
    let mut data_source = uri::parse(uri)?;
    for option in options {
        data_source.apply(option);
    }
    Ok(data_source)
}

impl DataSource {
    pub(crate) fn new(driver_name: String, url: Url) -> Self {
        Self {
            driver_name,
            url,
            username: None,
            password: None,
        }
    }

    /// Build a data source from the `datasource` configuration section.
    pub fn from_config(config: &DataSourceConfig) -> Result<Self> {
        let options = config
            .username
            .iter()
            .cloned()
            .map(DataSourceOption::Username)
            .chain(config.password.iter().cloned().map(DataSourceOption::Password));
        get_data_source(&config.uri, options)
    }

    fn apply(&mut self, option: DataSourceOption) {
        match option {
            DataSourceOption::Username(username) => self.username = Some(username),
            DataSourceOption::Password(password) => self.password = Some(password),
        }
    }

    /// The driver alias written in the URI
    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    /// The URI without the driver alias, with the `gdbc` scheme
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Username override
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Password override
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str().filter(|host| !host.is_empty())
    }

    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// The opaque segment of `gdbc:<driver>:<opaque>` URIs
    pub fn opaque(&self) -> Option<&str> {
        if self.url.cannot_be_a_base() {
            Some(self.url.path())
        } else {
            None
        }
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Last value of the query parameter `key`
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .filter(|(k, _)| k == key)
            .last()
            .map(|(_, v)| v.into_owned())
    }

    /// Every value of the query parameter `key`, in URI order
    pub fn query_values(&self, key: &str) -> Vec<String> {
        self.url
            .query_pairs()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    }

    /// Username embedded in the URI user-info, percent-decoded
    pub fn url_username(&self) -> Option<String> {
        Some(self.url.username())
            .filter(|username| !username.is_empty())
            .map(decode_user_info)
    }

    /// Password embedded in the URI user-info, percent-decoded
    pub fn url_password(&self) -> Option<String> {
        self.url.password().map(decode_user_info)
    }

    /// The override username if set, otherwise the URI user-info username
    pub fn effective_username(&self) -> Option<String> {
        self.username()
            .map(str::to_string)
            .or_else(|| self.url_username())
    }

    /// The override password if set, otherwise the URI user-info password
    pub fn effective_password(&self) -> Option<String> {
        self.password()
            .map(str::to_string)
            .or_else(|| self.url_password())
    }

    /// Open a connection through the process-wide registry and the sqlx client.
    ///
    /// Every call translates the data source again and asks sqlx for a new
    /// pool; nothing is cached. A failure leaves the data source untouched.
    ///
    /// # Errors
    ///
    /// * [`GdbcError::NotRegistered`](crate::GdbcError::NotRegistered) - no driver under this alias
    /// * [`GdbcError::Adapter`](crate::GdbcError::Adapter) - the adapter rejected the data source
    /// * [`GdbcError::Connection`](crate::GdbcError::Connection) - sqlx failed to open the pool
    pub async fn get_connection(&self) -> Result<AnyPool> {
        Resolver::<SqlxOpener>::global().connect(self).await
    }

    /// Open a connection through an explicit resolver.
    pub async fn get_connection_with<O: ConnectionOpener>(
        &self,
        resolver: &Resolver<O>,
    ) -> Result<O::Connection> {
        resolver.connect(self).await
    }
}

fn decode_user_info(encoded: &str) -> String {
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut url = self.url.clone();
        if url.password().is_some() {
            let _ = url.set_password(Some("***"));
        }
        f.debug_struct("DataSource")
            .field("driver_name", &self.driver_name)
            .field("url", &url.as_str())
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DataSource({})", self.driver_name)
    }
}
