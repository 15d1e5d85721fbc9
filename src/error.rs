//! Error types for catalog introspection and dialect translation.
//!
//! Two error families exist at this layer:
//!
//! - [`CatalogError`] — failures surfaced while reading system-catalog rows.
//!   Transport/driver failures from the external [`CatalogSource`] pass
//!   through unmodified inside `CatalogError::Source`.
//! - [`DialectError`] — a generically-built statement asked for something
//!   Informix cannot express. These fail fast instead of emitting silently
//!   incorrect SQL.
//!
//! Decode-level ambiguity (unknown type codes, unknown qualifier nibbles)
//! is never an error; decoding degrades to a best-effort descriptor so
//! introspection stays total over arbitrary live catalogs.
//!
//! [`CatalogSource`]: crate::catalog::CatalogSource

use std::fmt;

/// Catalog introspection error type
#[derive(Debug)]
pub enum CatalogError {
    /// Transport/driver failure from the catalog source, passed through unmodified
    Source(Box<dyn std::error::Error + Send + Sync>),
    /// Other introspection errors
    Other(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Source(e) => {
                write!(f, "Catalog source error: {e}")
            }
            CatalogError::Other(s) => {
                write!(f, "Catalog error: {s}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Source(e) => Some(e.as_ref()),
            CatalogError::Other(_) => None,
        }
    }
}

impl CatalogError {
    /// Wrap a transport/driver error from the catalog source.
    pub fn source_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CatalogError::Source(Box::new(err))
    }
}

/// Dialect translation error type
#[derive(Debug)]
pub enum DialectError {
    /// The requested construct is not supported by the Informix dialect
    Unsupported(String),
    /// Catalog introspection failed while translating
    Catalog(CatalogError),
    /// Other translation errors
    Other(String),
}

impl fmt::Display for DialectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialectError::Unsupported(s) => {
                write!(f, "{s} is not supported by Informix")
            }
            DialectError::Catalog(e) => {
                write!(f, "Catalog error: {e}")
            }
            DialectError::Other(s) => {
                write!(f, "Translation error: {s}")
            }
        }
    }
}

impl std::error::Error for DialectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DialectError::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for DialectError {
    fn from(err: CatalogError) -> Self {
        DialectError::Catalog(err)
    }
}
