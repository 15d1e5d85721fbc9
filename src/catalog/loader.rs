//! Table schema loading.
//!
//! [`SchemaLoader`] owns a [`CatalogSource`] plus the per-session
//! [`ColumnNumberCache`] and orchestrates one table load: resolve the
//! name, decode the column rows in catalog order, then attach primary and
//! foreign keys through the constraint resolver.

use crate::catalog::column::decode_column;
use crate::catalog::constraints::{ColumnNumberCache, ConstraintResolver};
use crate::catalog::source::CatalogSource;
use crate::catalog::table::TableDescriptor;
use crate::error::CatalogError;

/// Schema introspection session over one catalog source.
///
/// The loader itself holds no connection; all row fetching happens through
/// the injected [`CatalogSource`]. The column-number cache lives for the
/// lifetime of the loader and is shared across all tables it loads.
pub struct SchemaLoader<S: CatalogSource> {
    source: S,
    cache: ColumnNumberCache,
    default_schema: String,
}

impl<S: CatalogSource> SchemaLoader<S> {
    pub fn new(source: S) -> Self {
        SchemaLoader {
            source,
            cache: ColumnNumberCache::new(),
            default_schema: String::new(),
        }
    }

    /// Set the schema name omitted from fully-qualified table names.
    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = schema.into();
        self
    }

    /// Load the metadata for one table.
    ///
    /// Returns `Ok(None)` when the catalog has no column rows for the
    /// table, which signals that the table does not exist. Transport
    /// failures from the source propagate unmodified.
    pub fn load_table(&self, name: &str) -> Result<Option<TableDescriptor>, CatalogError> {
        let (schema_name, table_name, full_name) =
            resolve_table_names(name, &self.default_schema);

        let rows = self.source.column_rows(&table_name)?;
        if rows.is_empty() {
            log::debug!("table {} not found in catalog", table_name);
            return Ok(None);
        }

        let mut table = TableDescriptor {
            schema_name,
            name: table_name,
            full_name,
            columns: rows.iter().map(decode_column).collect(),
            ..TableDescriptor::default()
        };

        ConstraintResolver::new(&self.source, &self.cache).apply(&mut table)?;
        log::debug!(
            "loaded table {} ({} columns, {} pk columns, {} foreign keys)",
            table.full_name,
            table.columns.len(),
            table.primary_key.len(),
            table.foreign_keys.len()
        );
        Ok(Some(table))
    }

    /// All user table names, optionally restricted to one schema.
    pub fn table_names(&self, schema: Option<&str>) -> Result<Vec<String>, CatalogError> {
        self.source.table_names(schema)
    }

    /// The underlying catalog source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Split a possibly schema-qualified, possibly quoted table name into
/// `(schema, table, full name)`.
///
/// The full name carries the schema prefix only when the schema differs
/// from the session default.
pub(crate) fn resolve_table_names(
    name: &str,
    default_schema: &str,
) -> (String, String, String) {
    let unquoted = name.replace('"', "");
    let (schema, table) = match unquoted.split_once('.') {
        Some((schema, table)) => (schema.to_string(), table.to_string()),
        None => (default_schema.to_string(), unquoted),
    };
    let full = if schema != default_schema {
        format!("{}.{}", schema, table)
    } else {
        table.clone()
    };
    (schema, table, full)
}
