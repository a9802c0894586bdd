//! Error types for gdbc

use thiserror::Error;

/// Boxed error produced by adapters and sql client libraries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when parsing a gdbc URI or resolving a connection.
///
/// Parse errors carry the offending URI with any user-info password masked.
///
/// Registration defects are not represented here: they panic, since they can
/// only come from wiring code that runs at startup.
#[derive(Debug, Error)]
pub enum GdbcError {
    /// The URI does not have the `gdbc:<driver>:<rest>` shape
    #[error("wrong URI format: {0}")]
    WrongFormat(String),

    /// The URI has a scheme other than `gdbc`
    #[error("URI must start with the gdbc scheme: {0}")]
    InvalidScheme(String),

    /// The driver alias segment is empty
    #[error("driver name must not be empty: {0}")]
    EmptyDriverName(String),

    /// The part after the driver alias is not a valid URI
    #[error("invalid URI {uri}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// A `%` in the user-info, host or path is not followed by two hex digits
    #[error("invalid URL escape in URI: {0}")]
    InvalidEscape(String),

    /// No driver was registered under the alias
    #[error("adapter/driver not registered for alias {0}")]
    NotRegistered(String),

    /// The naming adapter could not produce a native connection string
    #[error(transparent)]
    Adapter(BoxError),

    /// The sql client library could not open the connection
    #[error(transparent)]
    Connection(BoxError),

    /// Required configuration is missing or unusable
    #[error("configuration error: {0}")]
    Config(String),
}

impl GdbcError {
    /// Whether the error was raised while parsing the URI.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            GdbcError::WrongFormat(_)
                | GdbcError::InvalidScheme(_)
                | GdbcError::EmptyDriverName(_)
                | GdbcError::InvalidUri { .. }
                | GdbcError::InvalidEscape(_)
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GdbcError>;
