//! Normalized schema descriptors produced by catalog introspection.

use crate::catalog::types::{AbstractType, PhysicalType};
use std::collections::BTreeMap;
use std::fmt;

/// A column default, either a named server expression or a parsed literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// `CURRENT` datetime expression
    Current,
    /// explicit `NULL` default
    Null,
    /// `DBSERVERNAME` expression
    DbServerName,
    /// `TODAY` expression
    Today,
    /// `USER` expression
    CurrentUser,
    /// Literal value parsed from the raw default bytes
    Literal(String),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Current => write!(f, "CURRENT"),
            DefaultValue::Null => write!(f, "NULL"),
            DefaultValue::DbServerName => write!(f, "DBSERVERNAME"),
            DefaultValue::Today => write!(f, "TODAY"),
            DefaultValue::CurrentUser => write!(f, "USER"),
            DefaultValue::Literal(s) => write!(f, "{s}"),
        }
    }
}

/// Normalized metadata for one table column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// Column name as stored in the catalog
    pub name: String,
    /// Whether the column accepts NULL (`coltype <= 255`)
    pub nullable: bool,
    /// Raw packed `syscolumns.coltype` value
    pub raw_type_code: i32,
    /// Resolved physical type tag
    pub physical: PhysicalType,
    /// Rendered physical type text, e.g. `decimal(12,4)` or
    /// `datetime year to second`
    pub db_type: String,
    /// Semantic category used by the generic query layer
    pub abstract_type: AbstractType,
    /// Declared size (character length, or precision for numerics)
    pub size: Option<u32>,
    /// Numeric precision
    pub precision: Option<u32>,
    /// Numeric scale
    pub scale: Option<u32>,
    /// SERIAL-family column
    pub auto_increment: bool,
    /// Set by constraint resolution, not by the column decoder
    pub primary_key: bool,
    /// Decoded default value, if the catalog records one
    pub default: Option<DefaultValue>,
}

/// Ordered mapping of one foreign key constraint.
///
/// Column pairs are `(local, referenced)` names in index slot order; the
/// order is significant and mirrors the positional correspondence in
/// `sysindexes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDescriptor {
    /// Constraint name from `sysconstraints`
    pub name: String,
    /// Referenced (peer) table name
    pub referenced_table: String,
    /// `(local column, referenced column)` pairs in slot order
    pub columns: Vec<(String, String)>,
}

/// Normalized metadata for one table.
#[derive(Debug, Clone, Default)]
pub struct TableDescriptor {
    /// Schema (owner) portion of the name
    pub schema_name: String,
    /// Bare table name
    pub name: String,
    /// Schema-qualified name when the schema differs from the session default
    pub full_name: String,
    /// Columns in catalog `colno` order; append-only, order is stable
    pub columns: Vec<ColumnDescriptor>,
    /// Primary key column names in index slot order
    pub primary_key: Vec<String>,
    /// First auto-increment primary key column, if any
    pub sequence_column: Option<String>,
    /// Foreign keys keyed by constraint name
    pub foreign_keys: BTreeMap<String, ForeignKeyDescriptor>,
}

impl TableDescriptor {
    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Ordered column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
