//! # informix-dialect
//!
//! Informix dialect adaptation for a generic relational query layer:
//! system-catalog decoding into normalized table/column descriptors, and
//! SQL/parameter translation (head-of-statement SKIP/LIMIT pagination,
//! composite IN/NOT IN expansion, UNION ALL batch inserts, boolean and
//! null parameter coercion).
//!
//! The crate performs no I/O. Catalog rows arrive through the
//! [`catalog::CatalogSource`] trait, implemented by whatever transport
//! the application uses.

pub mod catalog;
pub mod config;
pub mod dialect;
pub mod error;

pub use catalog::{SchemaLoader, TableDescriptor};
pub use config::DialectConfig;
pub use dialect::IfxDialect;
pub use error::{CatalogError, DialectError};
