//! Catalog row source trait.
//!
//! This layer never talks to the database itself; an external collaborator
//! (ODBC, PDO-style driver, test fake) implements [`CatalogSource`] and
//! hands over already-fetched rows from the Informix system catalog. The
//! trait methods document the catalog query each one corresponds to, so an
//! implementation can be written directly against `systables`,
//! `syscolumns`, `sysdefaults`, `sysconstraints`, `sysindexes` and
//! `sysreferences`.
//!
//! All methods return `Result`; transport failures must be wrapped in
//! [`CatalogError::Source`] so they propagate to the caller unmodified.

use crate::error::CatalogError;

/// Number of positional column slots in a `sysindexes` row (`part1..part16`).
pub const INDEX_SLOTS: usize = 16;

/// One raw column row, as joined from `syscolumns` and `sysdefaults`.
///
/// Corresponds to:
///
/// ```sql
/// SELECT syscolumns.colname, syscolumns.colmin, syscolumns.colmax,
///        syscolumns.coltype, syscolumns.extended_id,
///        NOT(coltype>255) AS allownull, syscolumns.collength,
///        sysdefaults.type AS deftype, sysdefaults.default AS defvalue
/// FROM systables
///   INNER JOIN syscolumns ON syscolumns.tabid = systables.tabid
///   LEFT JOIN sysdefaults ON sysdefaults.tabid = syscolumns.tabid
///                        AND sysdefaults.colno = syscolumns.colno
/// WHERE systables.tabid >= 100 AND systables.tabname = ?
/// ORDER BY syscolumns.colno
/// ```
#[derive(Debug, Clone)]
pub struct RawColumnRow {
    pub colname: String,
    pub colmin: Option<i64>,
    pub colmax: Option<i64>,
    /// Packed type code; `% 256` is the base type, `> 255` means NOT NULL
    pub coltype: i32,
    /// Extended type id, meaningful for VARIABLELENGTH/FIXEDLENGTH columns
    pub extended_id: i32,
    /// `NOT(coltype > 255)`
    pub allow_null: bool,
    /// Packed length/precision/qualifier field
    pub collength: i64,
    /// One-letter `sysdefaults.type` code (C/N/S/T/U/L), if a default exists
    pub default_type: Option<String>,
    /// Raw `sysdefaults.default` bytes
    pub default_value: Option<Vec<u8>>,
}

/// One constraint row for a table (`sysconstraints` joined to `systables`).
///
/// Only types `P` (primary) and `R` (foreign) are acted on; other types
/// are ignored by the resolver.
#[derive(Debug, Clone)]
pub struct ConstraintRow {
    /// `sysconstraints.constrtype`
    pub constraint_type: String,
    /// `sysconstraints.idxname`
    pub index_name: String,
}

/// One `sysindexes` row: the owning table id plus 16 signed column-number
/// slots (`part1..part16`). Zero means the slot is unused; a negative
/// number marks descending order and resolves by absolute value.
#[derive(Debug, Clone)]
pub struct IndexPartsRow {
    pub tabid: i64,
    pub parts: [i16; INDEX_SLOTS],
}

/// One joined foreign-key traversal row.
///
/// Produced by joining `sysindexes` through `sysconstraints` and
/// `sysreferences` to the referenced table's primary index, exposing both
/// the local (`base_parts`) and referenced (`ref_parts`) slot arrays for
/// positional pairing.
#[derive(Debug, Clone)]
pub struct ForeignKeyRow {
    /// `sysconstraints.constrname`
    pub constraint_name: String,
    /// Table id owning the foreign-key index
    pub base_tabid: i64,
    pub base_parts: [i16; INDEX_SLOTS],
    /// Referenced table id
    pub ref_tabid: i64,
    /// Referenced table name (trimmed)
    pub ref_table: String,
    /// Referenced table owner (trimmed)
    pub ref_schema: String,
    pub ref_parts: [i16; INDEX_SLOTS],
}

/// Read-only access to already-fetched Informix catalog rows.
///
/// Implementations restrict table lookups to user tables
/// (`systables.tabid >= 100`).
pub trait CatalogSource {
    /// Column rows for a table, ordered by `colno`. An empty result means
    /// the table does not exist.
    fn column_rows(&self, table: &str) -> Result<Vec<RawColumnRow>, CatalogError>;

    /// Constraint rows (`constrtype`, `idxname`) for a table.
    fn constraint_rows(&self, table: &str) -> Result<Vec<ConstraintRow>, CatalogError>;

    /// `sysindexes` rows for an index name (normally zero or one).
    fn index_parts(&self, index_name: &str) -> Result<Vec<IndexPartsRow>, CatalogError>;

    /// Joined foreign-key traversal rows for a foreign-key index name.
    fn foreign_key_rows(&self, index_name: &str) -> Result<Vec<ForeignKeyRow>, CatalogError>;

    /// `(colno, trimmed colname)` pairs for a table id, ordered by `colno`.
    /// Feeds the per-session column-number cache.
    fn column_numbers(&self, tabid: i64) -> Result<Vec<(i16, String)>, CatalogError>;

    /// User table names, optionally restricted to one schema (owner),
    /// ordered by name.
    fn table_names(&self, schema: Option<&str>) -> Result<Vec<String>, CatalogError>;
}
