//! Abstract-to-physical DDL type mapping and DDL statement builders.
//!
//! Maps the generic layer's abstract column type strings onto Informix
//! physical type text, following the same replacement rules the generic
//! builder uses: a bare abstract type maps directly, `type(len)`
//! substitutes the length into the physical type's parentheses, and any
//! trailing qualifiers (`not null`, ...) are carried over.
//!
//! Also renders the handful of DDL statements whose syntax diverges from
//! the generic builder: ADD CONSTRAINT PRIMARY KEY, MODIFY-style column
//! alteration, and SET CONSTRAINTS integrity toggles.

use crate::dialect::quote::Quoter;
use crate::error::DialectError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Mapping from abstract column types (keys) to physical column types (values).
static PHYSICAL_TYPE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("pk", "serial PRIMARY KEY NOT NULL"),
        ("bigpk", "serial8 PRIMARY KEY AUTOINCREMENT NOT NULL"),
        ("string", "varchar(255)"),
        ("text", "text"),
        ("smallint", "smallint"),
        ("integer", "integer"),
        ("bigint", "bigint"),
        ("float", "smallfloat"),
        ("double", "float"),
        ("decimal", "decimal(10,0)"),
        ("datetime", "datetime year to second"),
        ("timestamp", "datetime year to second"),
        ("time", "datetime hour to second"),
        ("date", "datetime year to day"),
        ("binary", "blob"),
        ("boolean", "boolean"),
        ("money", "money(19,4)"),
    ])
});

/// Convert an abstract column type definition into physical type text.
///
/// Anything not recognized as an abstract type is kept as-is, so callers
/// can pass physical text straight through.
///
/// - `"string"` becomes `"varchar(255)"`
/// - `"string(64)"` becomes `"varchar(64)"`
/// - `"string not null"` becomes `"varchar(255) not null"`
pub fn column_type(definition: &str) -> String {
    let definition = definition.trim();
    if let Some(physical) = PHYSICAL_TYPE_MAP.get(definition) {
        return (*physical).to_string();
    }

    let (head, rest) = match definition.find(char::is_whitespace) {
        Some(pos) => (&definition[..pos], &definition[pos..]),
        None => (definition, ""),
    };

    let (name, args) = match head.split_once('(') {
        Some((name, args)) => (name, args.strip_suffix(')')),
        None => (head, None),
    };

    let Some(physical) = PHYSICAL_TYPE_MAP.get(name) else {
        return definition.to_string();
    };

    let mut out = match args {
        // substitute the declared length into the physical type's parens
        Some(args) => match physical.find('(') {
            Some(open) => {
                let close = physical.find(')').unwrap_or(physical.len() - 1);
                format!("{}({}){}", &physical[..open], args, &physical[close + 1..])
            }
            None => format!("{}({})", physical, args),
        },
        None => (*physical).to_string(),
    };
    out.push_str(rest);
    out
}

/// Render an ADD CONSTRAINT PRIMARY KEY statement.
///
/// Informix names the constraint with a trailing `CONSTRAINT <name>`
/// clause rather than in front of the key definition.
pub fn add_primary_key(quoter: &Quoter, name: &str, table: &str, columns: &[&str]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| quoter.column_name(c)).collect();
    format!(
        "ALTER TABLE {} ADD CONSTRAINT PRIMARY KEY ({}) CONSTRAINT {}",
        quoter.table_name(table),
        quoted.join(", "),
        quoter.column_name(name)
    )
}

/// Render a column type change. Informix uses `MODIFY`, not
/// `ALTER COLUMN ... SET DATA TYPE`.
pub fn alter_column(quoter: &Quoter, table: &str, column: &str, definition: &str) -> String {
    format!(
        "ALTER TABLE {} MODIFY ({} {})",
        quoter.table_name(table),
        quoter.column_name(column),
        column_type(definition)
    )
}

/// Render a SET CONSTRAINTS statement enabling or disabling integrity
/// checking, for one table or globally.
pub fn check_integrity(quoter: &Quoter, table: Option<&str>, enabled: bool) -> String {
    match table {
        Some(table) => format!(
            "SET CONSTRAINTS FOR {} {}",
            quoter.table_name(table),
            if enabled { "ENABLED" } else { "DISABLED" }
        ),
        None => format!(
            "SET CONSTRAINTS ALL {}",
            if enabled { "IMMEDIATE" } else { "DEFERRED" }
        ),
    }
}

/// UPSERT has no Informix rendering.
pub fn upsert(_table: &str) -> Result<String, DialectError> {
    Err(DialectError::Unsupported("upsert".to_string()))
}

/// Column and table comments have no Informix rendering.
pub fn comment(_target: &str) -> Result<String, DialectError> {
    Err(DialectError::Unsupported("comments".to_string()))
}

/// Named default-value constraints have no Informix rendering.
pub fn default_value_constraint(_table: &str, _column: &str) -> Result<String, DialectError> {
    Err(DialectError::Unsupported(
        "default value constraints".to_string(),
    ))
}
