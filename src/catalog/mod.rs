//! Informix system-catalog introspection.
//!
//! Decodes packed, bit-encoded metadata rows from the system catalog into
//! normalized descriptors:
//!
//! - [`column::decode_column`] — one raw `syscolumns`/`sysdefaults` row
//!   into a [`ColumnDescriptor`] (total, never errors)
//! - [`constraints::ConstraintResolver`] — primary/foreign keys from
//!   positional `sysindexes` slots
//! - [`loader::SchemaLoader`] — per-table orchestration over an injected
//!   [`CatalogSource`]

pub mod column;
pub mod constraints;
pub mod loader;
pub mod qualifier;
pub mod source;
pub mod table;
pub mod types;

pub use column::decode_column;
pub use constraints::{ColumnNumberCache, ConstraintResolver};
pub use loader::SchemaLoader;
pub use qualifier::{DatetimeField, DatetimeQualifier};
pub use source::{
    CatalogSource, ConstraintRow, ForeignKeyRow, IndexPartsRow, RawColumnRow, INDEX_SLOTS,
};
pub use table::{ColumnDescriptor, DefaultValue, ForeignKeyDescriptor, TableDescriptor};
pub use types::{abstract_type_for, AbstractType, PhysicalType};
