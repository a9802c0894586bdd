//! Parser for `gdbc` URIs
//!
//! Two shapes are accepted:
//!
//! ```text
//! gdbc:<driver>:<opaque>[?<query>]
//! gdbc:<driver>://[<user>[:<password>]@]<host>[:<port>][/<path>][?<query>]
//! ```
//!
//! The driver segment is cut out and the rest is parsed as a regular URI with
//! the `gdbc` scheme, so `gdbc:postgres://localhost:5432/app` is read as
//! `gdbc://localhost:5432/app` for driver `postgres`.

use crate::datasource::DataSource;
use crate::error::{GdbcError, Result};
use tracing::debug;
use url::Url;

/// The scheme every gdbc URI starts with
pub const SCHEME: &str = "gdbc";

/// Parse a gdbc URI into a data source description.
///
/// This function is pure: it never touches the driver registry, so the driver
/// alias does not need to be registered yet.
///
/// # Errors
///
/// * [`GdbcError::WrongFormat`] - fewer than three `:`-separated segments, or
///   nothing after the driver alias
/// * [`GdbcError::InvalidScheme`] - the first segment is not `gdbc`
/// * [`GdbcError::EmptyDriverName`] - the driver alias is empty
/// * [`GdbcError::InvalidUri`] - the remainder is not a valid URI (bad port, bad host, ...)
/// * [`GdbcError::InvalidEscape`] - a `%` in the user-info, host or path of an
///   authority-form URI is not followed by two hex digits
pub fn parse(uri: &str) -> Result<DataSource> {
    let segments: Vec<&str> = uri.split(':').collect();
    if segments.len() < 3 {
        return Err(GdbcError::WrongFormat(redact_password(uri)));
    }

    if segments[0] != SCHEME {
        return Err(GdbcError::InvalidScheme(redact_password(uri)));
    }

    let driver_name = segments[1];
    if driver_name.is_empty() {
        return Err(GdbcError::EmptyDriverName(redact_password(uri)));
    }

    // Colons after the driver alias belong to the host, port or path
    let remainder = segments[2..].join(":");
    if remainder.is_empty() {
        return Err(GdbcError::WrongFormat(redact_password(uri)));
    }

    let url = Url::parse(&format!("{SCHEME}:{remainder}")).map_err(|source| {
        GdbcError::InvalidUri {
            uri: redact_password(uri),
            source,
        }
    })?;

    // The url crate keeps stray `%` signs; opaque segments and queries pass through
    if !url.cannot_be_a_base() {
        let components = [
            url.username(),
            url.password().unwrap_or_default(),
            url.host_str().unwrap_or_default(),
            url.path(),
        ];
        if components.iter().any(|component| has_malformed_escape(component)) {
            return Err(GdbcError::InvalidEscape(redact_password(uri)));
        }
    }

    debug!("Parsed data source URI for driver: {}", driver_name);
    Ok(DataSource::new(driver_name.to_string(), url))
}

fn has_malformed_escape(component: &str) -> bool {
    let bytes = component.as_bytes();
    bytes.iter().enumerate().any(|(i, &byte)| {
        byte == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}

/// Replace the user-info password of `uri` with `***` so it can be shown in errors.
pub(crate) fn redact_password(uri: &str) -> String {
    let Some(start) = uri.find("://").map(|index| index + 3) else {
        return uri.to_string();
    };
    let authority_len = uri[start..]
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(uri.len() - start);
    let authority = &uri[start..start + authority_len];

    let Some(at) = authority.rfind('@') else {
        return uri.to_string();
    };
    let Some(colon) = authority[..at].find(':') else {
        return uri.to_string();
    };

    format!(
        "{}***{}",
        &uri[..start + colon + 1],
        &uri[start + at..]
    )
}
