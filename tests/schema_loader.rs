//! End-to-end schema loading over an in-memory catalog fake.
//!
//! The fake mimics the row shapes the real catalog queries produce for a
//! small two-table schema (`customer` referencing `country`) and checks
//! the fully assembled [`TableDescriptor`].

use informix_dialect::catalog::{
    AbstractType, CatalogSource, ConstraintRow, DefaultValue, ForeignKeyRow, IndexPartsRow,
    PhysicalType, RawColumnRow, SchemaLoader, INDEX_SLOTS,
};
use informix_dialect::error::CatalogError;

const CUSTOMER_TABID: i64 = 200;
const COUNTRY_TABID: i64 = 300;

struct FakeCatalog;

fn column(
    name: &str,
    coltype: i32,
    extended_id: i32,
    collength: i64,
    default: Option<(&str, &[u8])>,
) -> RawColumnRow {
    RawColumnRow {
        colname: name.to_string(),
        colmin: None,
        colmax: None,
        coltype,
        extended_id,
        allow_null: coltype <= 255,
        collength,
        default_type: default.map(|(t, _)| t.to_string()),
        default_value: default.map(|(_, v)| v.to_vec()),
    }
}

fn parts(filled: &[i16]) -> [i16; INDEX_SLOTS] {
    let mut slots = [0i16; INDEX_SLOTS];
    slots[..filled.len()].copy_from_slice(filled);
    slots
}

impl CatalogSource for FakeCatalog {
    fn column_rows(&self, table: &str) -> Result<Vec<RawColumnRow>, CatalogError> {
        match table {
            "customer" => Ok(vec![
                // SERIAL NOT NULL
                column("id", 6 + 256, 0, 4, None),
                // VARCHAR(64) NOT NULL DEFAULT 'guest'
                column("name", 13 + 256, 0, 64, Some(("L", b"guest\0"))),
                // INTEGER, FK to country
                column("country_id", 2, 0, 4, None),
                // DECIMAL(12,4)
                column("balance", 5, 0, 12 * 256 + 4, None),
                // DATETIME YEAR TO SECOND: largest YEAR (0), smallest SECOND (10)
                column("created", 10, 0, 10, Some(("C", b""))),
                // BOOLEAN (FIXEDLENGTH, extended id 5)
                column("active", 41, 5, 1, None),
            ]),
            "country" => Ok(vec![
                column("code", 0 + 256, 0, 2, None),
                column("label", 13, 0, 40, None),
            ]),
            _ => Ok(vec![]),
        }
    }

    fn constraint_rows(&self, table: &str) -> Result<Vec<ConstraintRow>, CatalogError> {
        match table {
            "customer" => Ok(vec![
                ConstraintRow {
                    constraint_type: "P ".to_string(),
                    index_name: "pk_customer_idx".to_string(),
                },
                ConstraintRow {
                    constraint_type: "R ".to_string(),
                    index_name: "fk_customer_country_idx".to_string(),
                },
                // check constraints are ignored
                ConstraintRow {
                    constraint_type: "C ".to_string(),
                    index_name: "ck_customer_idx".to_string(),
                },
            ]),
            "country" => Ok(vec![ConstraintRow {
                constraint_type: "P ".to_string(),
                index_name: "pk_country_idx".to_string(),
            }]),
            _ => Ok(vec![]),
        }
    }

    fn index_parts(&self, index_name: &str) -> Result<Vec<IndexPartsRow>, CatalogError> {
        match index_name {
            "pk_customer_idx" => Ok(vec![IndexPartsRow {
                tabid: CUSTOMER_TABID,
                parts: parts(&[1]),
            }]),
            "pk_country_idx" => Ok(vec![IndexPartsRow {
                tabid: COUNTRY_TABID,
                parts: parts(&[1]),
            }]),
            _ => Ok(vec![]),
        }
    }

    fn foreign_key_rows(&self, index_name: &str) -> Result<Vec<ForeignKeyRow>, CatalogError> {
        match index_name {
            "fk_customer_country_idx" => Ok(vec![ForeignKeyRow {
                constraint_name: "fk_customer_country".to_string(),
                base_tabid: CUSTOMER_TABID,
                base_parts: parts(&[3]),
                ref_tabid: COUNTRY_TABID,
                ref_table: "country".to_string(),
                ref_schema: "informix".to_string(),
                ref_parts: parts(&[1]),
            }]),
            _ => Ok(vec![]),
        }
    }

    fn column_numbers(&self, tabid: i64) -> Result<Vec<(i16, String)>, CatalogError> {
        match tabid {
            CUSTOMER_TABID => Ok(vec![
                (1, "id".to_string()),
                (2, "name".to_string()),
                (3, "country_id".to_string()),
                (4, "balance".to_string()),
                (5, "created".to_string()),
                (6, "active".to_string()),
            ]),
            COUNTRY_TABID => Ok(vec![(1, "code".to_string()), (2, "label".to_string())]),
            _ => Ok(vec![]),
        }
    }

    fn table_names(&self, _schema: Option<&str>) -> Result<Vec<String>, CatalogError> {
        Ok(vec!["country".to_string(), "customer".to_string()])
    }
}

#[test]
fn test_load_table_assembles_full_descriptor() {
    let loader = SchemaLoader::new(FakeCatalog).with_default_schema("informix");
    let table = loader
        .load_table("customer")
        .expect("load")
        .expect("exists");

    assert_eq!(table.name, "customer");
    assert_eq!(table.full_name, "customer");
    assert_eq!(
        table.column_names(),
        vec!["id", "name", "country_id", "balance", "created", "active"]
    );

    let id = table.column("id").expect("id column");
    assert_eq!(id.physical, PhysicalType::Serial);
    assert!(id.auto_increment);
    assert!(!id.nullable);
    assert!(id.primary_key);

    let name = table.column("name").expect("name column");
    assert_eq!(name.physical, PhysicalType::Varchar);
    assert_eq!(name.db_type, "varchar(64)");
    assert_eq!(name.size, Some(64));
    assert_eq!(name.abstract_type, AbstractType::String);
    assert_eq!(
        name.default,
        Some(DefaultValue::Literal("guest".to_string()))
    );

    let balance = table.column("balance").expect("balance column");
    assert_eq!(balance.db_type, "decimal(12,4)");
    assert_eq!(balance.precision, Some(12));
    assert_eq!(balance.scale, Some(4));
    assert_eq!(balance.abstract_type, AbstractType::Decimal);

    let created = table.column("created").expect("created column");
    assert_eq!(created.db_type, "datetime year to second");
    assert_eq!(created.abstract_type, AbstractType::DateTime);
    assert_eq!(created.default, Some(DefaultValue::Current));

    let active = table.column("active").expect("active column");
    assert_eq!(active.physical, PhysicalType::Boolean);
    assert_eq!(active.abstract_type, AbstractType::Boolean);

    assert_eq!(table.primary_key, vec!["id"]);
    assert_eq!(table.sequence_column.as_deref(), Some("id"));

    let fk = table
        .foreign_keys
        .get("fk_customer_country")
        .expect("foreign key");
    assert_eq!(fk.referenced_table, "country");
    assert_eq!(
        fk.columns,
        vec![("country_id".to_string(), "code".to_string())]
    );
}

#[test]
fn test_missing_table_loads_as_none() {
    let loader = SchemaLoader::new(FakeCatalog);
    assert!(loader.load_table("nope").expect("load").is_none());
}

#[test]
fn test_schema_prefix_only_when_not_default() {
    let loader = SchemaLoader::new(FakeCatalog).with_default_schema("informix");
    let table = loader
        .load_table("sales.customer")
        .expect("load")
        .expect("exists");
    assert_eq!(table.schema_name, "sales");
    assert_eq!(table.full_name, "sales.customer");

    let table = loader
        .load_table("\"informix\".\"customer\"")
        .expect("load")
        .expect("exists");
    assert_eq!(table.full_name, "customer");
}

#[test]
fn test_table_names_passthrough() {
    let loader = SchemaLoader::new(FakeCatalog);
    assert_eq!(
        loader.table_names(None).expect("names"),
        vec!["country", "customer"]
    );
}

#[test]
fn test_cache_shared_across_loads() {
    let loader = SchemaLoader::new(FakeCatalog);
    // both loads resolve constraints through the same per-session cache
    let first = loader.load_table("customer").expect("load").expect("t");
    let second = loader.load_table("customer").expect("load").expect("t");
    assert_eq!(first.primary_key, second.primary_key);
    assert_eq!(first.foreign_keys.len(), second.foreign_keys.len());
}
