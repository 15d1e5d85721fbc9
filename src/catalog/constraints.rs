//! Primary/foreign key resolution over positional index slots.
//!
//! Informix records index membership as up to 16 signed column-number
//! slots (`part1..part16`). Constraint resolution walks the slots in
//! order, resolving each non-zero number to a column name through a
//! per-session cache of `tabid -> colno -> colname`. Zero slots are
//! unused, not terminators: resolution continues through all 16 slots, so
//! matches after a gap still contribute.

use crate::catalog::source::{CatalogSource, ForeignKeyRow, IndexPartsRow};
use crate::catalog::table::{ForeignKeyDescriptor, TableDescriptor};
use crate::error::CatalogError;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Per-session cache of `tabid -> (colno -> trimmed colname)`.
///
/// Populated lazily on first use of a table id and never evicted within
/// the owning session. Writes are serialized per table id by
/// compare-and-populate: a losing writer discards its rows and reuses the
/// winner's entry.
#[derive(Debug, Default)]
pub struct ColumnNumberCache {
    tables: Mutex<HashMap<i64, Arc<BTreeMap<i16, String>>>>,
}

impl ColumnNumberCache {
    pub fn new() -> Self {
        ColumnNumberCache::default()
    }

    /// Return the column-number map for a table id, loading it from the
    /// catalog source on first use.
    pub fn get_or_load(
        &self,
        source: &dyn CatalogSource,
        tabid: i64,
    ) -> Result<Arc<BTreeMap<i16, String>>, CatalogError> {
        if let Some(columns) = self.get(tabid) {
            return Ok(columns);
        }
        let rows = source.column_numbers(tabid)?;
        let loaded: BTreeMap<i16, String> = rows.into_iter().collect();
        let mut tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        // compare-and-populate: keep an entry another writer raced in first
        let entry = tables
            .entry(tabid)
            .or_insert_with(|| Arc::new(loaded));
        Ok(Arc::clone(entry))
    }

    fn get(&self, tabid: i64) -> Option<Arc<BTreeMap<i16, String>>> {
        let tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        tables.get(&tabid).map(Arc::clone)
    }

    /// Number of table ids currently cached.
    pub fn len(&self) -> usize {
        let tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Attaches primary/foreign key descriptors to a [`TableDescriptor`].
pub struct ConstraintResolver<'a> {
    source: &'a dyn CatalogSource,
    cache: &'a ColumnNumberCache,
}

impl<'a> ConstraintResolver<'a> {
    pub fn new(source: &'a dyn CatalogSource, cache: &'a ColumnNumberCache) -> Self {
        ConstraintResolver { source, cache }
    }

    /// Walk the table's constraint rows and resolve type `P` (primary key)
    /// and `R` (foreign key) entries. Other constraint types are ignored.
    pub fn apply(&self, table: &mut TableDescriptor) -> Result<(), CatalogError> {
        for row in self.source.constraint_rows(&table.name)? {
            match row.constraint_type.trim() {
                "P" => self.resolve_primary_key(table, &row.index_name)?,
                "R" => self.resolve_foreign_key(table, &row.index_name)?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Resolve the primary key columns behind an index name.
    ///
    /// Slots resolve in order 1..=16; a zero slot is skipped. Afterwards
    /// the first primary-key column that auto-increments is recorded as
    /// the table's sequence column.
    fn resolve_primary_key(
        &self,
        table: &mut TableDescriptor,
        index_name: &str,
    ) -> Result<(), CatalogError> {
        for idx in self.source.index_parts(index_name)? {
            let columns = self.cache.get_or_load(self.source, idx.tabid)?;
            for colno in used_slots(&idx) {
                let Some(colname) = columns.get(&colno) else {
                    log::debug!(
                        "index {} references colno {} missing from tabid {}",
                        index_name,
                        colno,
                        idx.tabid
                    );
                    continue;
                };
                if let Some(col) = table.columns.iter_mut().find(|c| &c.name == colname) {
                    col.primary_key = true;
                    table.primary_key.push(colname.clone());
                }
            }
        }
        table.sequence_column = table
            .primary_key
            .iter()
            .find(|name| {
                table
                    .column(name)
                    .map(|c| c.auto_increment)
                    .unwrap_or(false)
            })
            .cloned();
        Ok(())
    }

    /// Resolve one foreign key constraint behind an index name.
    ///
    /// A slot contributes a `(local, referenced)` pair only when both
    /// column numbers are non-zero; otherwise it is skipped and resolution
    /// proceeds to the next slot.
    fn resolve_foreign_key(
        &self,
        table: &mut TableDescriptor,
        index_name: &str,
    ) -> Result<(), CatalogError> {
        for row in self.source.foreign_key_rows(index_name)? {
            let descriptor = self.pair_slots(&row)?;
            table
                .foreign_keys
                .insert(descriptor.name.clone(), descriptor);
        }
        Ok(())
    }

    fn pair_slots(&self, row: &ForeignKeyRow) -> Result<ForeignKeyDescriptor, CatalogError> {
        let base_columns = self.cache.get_or_load(self.source, row.base_tabid)?;
        let ref_columns = self.cache.get_or_load(self.source, row.ref_tabid)?;

        let mut columns = Vec::new();
        for (base_slot, ref_slot) in row.base_parts.iter().zip(row.ref_parts.iter()) {
            let local_no = base_slot.unsigned_abs() as i16;
            if local_no == 0 {
                continue;
            }
            let ref_no = ref_slot.unsigned_abs() as i16;
            if ref_no == 0 {
                continue;
            }
            let (Some(local), Some(referenced)) =
                (base_columns.get(&local_no), ref_columns.get(&ref_no))
            else {
                continue;
            };
            columns.push((local.clone(), referenced.clone()));
        }

        Ok(ForeignKeyDescriptor {
            name: row.constraint_name.clone(),
            referenced_table: row.ref_table.clone(),
            columns,
        })
    }
}

/// Non-zero slot numbers of an index row, in slot order, absolute values.
fn used_slots(row: &IndexPartsRow) -> impl Iterator<Item = i16> + '_ {
    row.parts
        .iter()
        .map(|p| p.unsigned_abs() as i16)
        .filter(|&n| n != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::source::{ConstraintRow, RawColumnRow, INDEX_SLOTS};
    use crate::catalog::column::decode_column;

    /// Minimal in-memory source: one table (tabid 101, "orders") with a
    /// serial id plus a two-column reference to "customers" (tabid 102).
    struct FakeSource;

    fn parts(slots: &[i16]) -> [i16; INDEX_SLOTS] {
        let mut out = [0i16; INDEX_SLOTS];
        out[..slots.len()].copy_from_slice(slots);
        out
    }

    impl CatalogSource for FakeSource {
        fn column_rows(&self, _table: &str) -> Result<Vec<RawColumnRow>, CatalogError> {
            unimplemented!("not used by resolver tests")
        }

        fn constraint_rows(&self, _table: &str) -> Result<Vec<ConstraintRow>, CatalogError> {
            Ok(vec![
                ConstraintRow {
                    constraint_type: "P".to_string(),
                    index_name: "pk_orders".to_string(),
                },
                ConstraintRow {
                    constraint_type: "R".to_string(),
                    index_name: "fk_orders_customers".to_string(),
                },
                ConstraintRow {
                    constraint_type: "C".to_string(),
                    index_name: "ck_ignored".to_string(),
                },
            ])
        }

        fn index_parts(&self, index_name: &str) -> Result<Vec<IndexPartsRow>, CatalogError> {
            assert_eq!(index_name, "pk_orders");
            // slot 2 unused: resolution must keep scanning past it
            Ok(vec![IndexPartsRow {
                tabid: 101,
                parts: parts(&[1, 0, -3]),
            }])
        }

        fn foreign_key_rows(&self, index_name: &str) -> Result<Vec<ForeignKeyRow>, CatalogError> {
            assert_eq!(index_name, "fk_orders_customers");
            Ok(vec![ForeignKeyRow {
                constraint_name: "fk_orders_customers".to_string(),
                base_tabid: 101,
                // slot 2 pairs a local gap with a used referenced slot; it
                // must be skipped without ending resolution
                base_parts: parts(&[2, 0, 4]),
                ref_tabid: 102,
                ref_table: "customers".to_string(),
                ref_schema: "informix".to_string(),
                ref_parts: parts(&[1, 5, 2]),
            }])
        }

        fn column_numbers(&self, tabid: i64) -> Result<Vec<(i16, String)>, CatalogError> {
            match tabid {
                101 => Ok(vec![
                    (1, "id".to_string()),
                    (2, "customer_id".to_string()),
                    (3, "region".to_string()),
                    (4, "customer_region".to_string()),
                ]),
                102 => Ok(vec![
                    (1, "id".to_string()),
                    (2, "region".to_string()),
                    (5, "code".to_string()),
                ]),
                other => Err(CatalogError::Other(format!("unknown tabid {}", other))),
            }
        }

        fn table_names(&self, _schema: Option<&str>) -> Result<Vec<String>, CatalogError> {
            Ok(vec!["orders".to_string()])
        }
    }

    fn orders_table() -> TableDescriptor {
        let names_and_types: [(&str, i32); 4] = [
            ("id", 6),          // serial
            ("customer_id", 2), // integer
            ("region", 0),      // char
            ("customer_region", 0),
        ];
        TableDescriptor {
            schema_name: "informix".to_string(),
            name: "orders".to_string(),
            full_name: "orders".to_string(),
            columns: names_and_types
                .iter()
                .map(|(name, coltype)| {
                    decode_column(&RawColumnRow {
                        colname: name.to_string(),
                        colmin: None,
                        colmax: None,
                        coltype: *coltype,
                        extended_id: 0,
                        allow_null: true,
                        collength: 10,
                        default_type: None,
                        default_value: None,
                    })
                })
                .collect(),
            ..TableDescriptor::default()
        }
    }

    #[test]
    fn test_primary_key_slot_order_with_gap() {
        let cache = ColumnNumberCache::new();
        let resolver = ConstraintResolver::new(&FakeSource, &cache);
        let mut table = orders_table();
        resolver.apply(&mut table).unwrap();

        // slot 2 was unused and slot 3 (negative) still resolved
        assert_eq!(table.primary_key, vec!["id", "region"]);
        assert!(table.column("id").unwrap().primary_key);
        assert!(table.column("region").unwrap().primary_key);
        assert!(!table.column("customer_id").unwrap().primary_key);
    }

    #[test]
    fn test_sequence_column_is_first_auto_increment_pk() {
        let cache = ColumnNumberCache::new();
        let resolver = ConstraintResolver::new(&FakeSource, &cache);
        let mut table = orders_table();
        resolver.apply(&mut table).unwrap();
        assert_eq!(table.sequence_column.as_deref(), Some("id"));
    }

    #[test]
    fn test_foreign_key_pairs_skip_gaps() {
        let cache = ColumnNumberCache::new();
        let resolver = ConstraintResolver::new(&FakeSource, &cache);
        let mut table = orders_table();
        resolver.apply(&mut table).unwrap();

        let fk = table.foreign_keys.get("fk_orders_customers").unwrap();
        assert_eq!(fk.referenced_table, "customers");
        // slot 2 (local 0) skipped; slots 1 and 3 both contribute
        assert_eq!(
            fk.columns,
            vec![
                ("customer_id".to_string(), "id".to_string()),
                ("customer_region".to_string(), "region".to_string()),
            ]
        );
    }

    #[test]
    fn test_cache_populates_once_per_table() {
        let cache = ColumnNumberCache::new();
        let resolver = ConstraintResolver::new(&FakeSource, &cache);
        let mut table = orders_table();
        resolver.apply(&mut table).unwrap();
        assert_eq!(cache.len(), 2); // tabids 101 and 102

        let first = cache.get_or_load(&FakeSource, 101).unwrap();
        let second = cache.get_or_load(&FakeSource, 101).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_source_error_propagates() {
        let cache = ColumnNumberCache::new();
        let err = cache.get_or_load(&FakeSource, 999).unwrap_err();
        assert!(err.to_string().contains("unknown tabid 999"));
    }
}
