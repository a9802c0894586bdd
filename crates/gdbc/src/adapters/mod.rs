//! Naming adapters for the drivers bundled with sqlx
//!
//! Each adapter is compiled with the matching cargo feature (`sqlite` is on by
//! default, `postgres` and `mysql` are opt-in).

#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "mysql")]
pub use mysql::MySqlAdapter;
#[cfg(feature = "postgres")]
pub use postgres::PostgresAdapter;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteAdapter;

use crate::registry::DriverRegistry;
#[cfg(any(feature = "postgres", feature = "mysql"))]
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but RFC 3986 unreserved characters, `%` included
#[cfg(any(feature = "postgres", feature = "mysql"))]
const USER_INFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Register every enabled sqlx driver under its own name as alias
/// (`gdbc:sqlite:...`, `gdbc:postgres://...`, `gdbc:mysql://...`).
///
/// # Panics
///
/// When one of these aliases or drivers is already registered in `registry`.
#[cfg_attr(
    not(any(feature = "sqlite", feature = "postgres", feature = "mysql")),
    allow(unused_variables)
)]
pub fn register_sqlx_drivers(registry: &DriverRegistry) {
    #[cfg(feature = "sqlite")]
    registry.register("sqlite", "sqlite", SqliteAdapter);
    #[cfg(feature = "postgres")]
    registry.register("postgres", "postgres", PostgresAdapter);
    #[cfg(feature = "mysql")]
    registry.register("mysql", "mysql", MySqlAdapter);
}

/// Build `<scheme>://[user[:password]@]host[:port][/path][?query]` from an
/// authority-form data source. Overrides take precedence over URI user-info,
/// and credentials are percent-encoded from their plain form.
#[cfg(any(feature = "postgres", feature = "mysql"))]
pub(crate) fn network_url(
    scheme: &str,
    data_source: &crate::DataSource,
) -> Result<String, crate::BoxError> {
    let host = data_source.host().ok_or_else(|| {
        format!(
            "{} data source needs a host: gdbc:{}://host[:port]/database",
            scheme,
            data_source.driver_name()
        )
    })?;

    let mut native = url::Url::parse(&format!("{scheme}://{host}"))?;
    native
        .set_port(data_source.port())
        .map_err(|_| format!("{scheme} data source has an unusable port"))?;
    if let Some(username) = data_source.effective_username() {
        native
            .set_username(&utf8_percent_encode(&username, USER_INFO).to_string())
            .map_err(|_| format!("{scheme} data source has an unusable username"))?;
    }
    if let Some(password) = data_source.effective_password() {
        native
            .set_password(Some(&utf8_percent_encode(&password, USER_INFO).to_string()))
            .map_err(|_| format!("{scheme} data source has an unusable password"))?;
    }
    native.set_path(data_source.path());
    native.set_query(data_source.url().query());

    Ok(native.to_string())
}
