//! Batch INSERT synthesis.
//!
//! Informix cannot take multiple VALUES tuples in one INSERT, so a batch
//! becomes a UNION ALL of single-row SELECTs over a one-row source:
//!
//! ```sql
//! INSERT INTO t (a, b) SELECT * FROM (
//!     SELECT 'x', 1 FROM TABLE(set{1})
//!     UNION ALL SELECT 'y', 2 FROM TABLE(set{1})
//! )
//! ```
//!
//! Inside a UNION there is no contextual typing for NULL, so every null
//! value carries an explicit cast to the destination column's physical
//! type — or to a generic character type when the column is unknown.

use crate::catalog::table::TableDescriptor;
use crate::dialect::quote::Quoter;
use crate::error::DialectError;
use sea_query::Value;

/// Single-row source used for each UNION ALL arm.
const ROW_SOURCE: &str = "TABLE(set{1})";

/// Render a batch INSERT statement for `rows` over `columns`.
///
/// When a [`TableDescriptor`] for the destination is supplied, null
/// values are cast to the matching column's physical type; otherwise they
/// fall back to `NULL::char`. An empty row set renders an empty statement
/// for the caller to skip.
pub fn batch_insert(
    quoter: &Quoter,
    table: &str,
    columns: &[&str],
    rows: &[Vec<Value>],
    schema: Option<&TableDescriptor>,
) -> Result<String, DialectError> {
    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut selects = Vec::with_capacity(rows.len());
    for row in rows {
        if row.len() != columns.len() {
            return Err(DialectError::Other(format!(
                "batch insert row has {} values for {} columns",
                row.len(),
                columns.len()
            )));
        }
        let mut rendered = Vec::with_capacity(row.len());
        for (column, value) in columns.iter().zip(row.iter()) {
            let descriptor = schema.and_then(|t| t.column(column));
            rendered.push(render_literal(quoter, value, descriptor.map(|c| c.db_type.as_str()))?);
        }
        selects.push(format!("SELECT {} FROM {}", rendered.join(", "), ROW_SOURCE));
    }

    let quoted_columns: Vec<String> = columns.iter().map(|c| quoter.column_name(c)).collect();
    Ok(format!(
        "INSERT INTO {} ({}) SELECT * FROM ({})",
        quoter.table_name(table),
        quoted_columns.join(", "),
        selects.join(" UNION ALL ")
    ))
}

/// Render one value as an inline SQL literal.
///
/// Strings are quote-escaped, booleans render as integers, nulls carry an
/// explicit type cast. Values with no literal form (binary streams,
/// anything unrecognized) fail fast instead of producing broken SQL.
fn render_literal(
    quoter: &Quoter,
    value: &Value,
    db_type: Option<&str>,
) -> Result<String, DialectError> {
    let rendered = match value {
        Value::String(Some(s)) => quoter.value(s),
        Value::Bool(Some(b)) => i32::from(*b).to_string(),
        Value::TinyInt(Some(v)) => v.to_string(),
        Value::SmallInt(Some(v)) => v.to_string(),
        Value::Int(Some(v)) => v.to_string(),
        Value::BigInt(Some(v)) => v.to_string(),
        Value::TinyUnsigned(Some(v)) => v.to_string(),
        Value::SmallUnsigned(Some(v)) => v.to_string(),
        Value::Unsigned(Some(v)) => v.to_string(),
        Value::BigUnsigned(Some(v)) => v.to_string(),
        Value::Float(Some(v)) => v.to_string(),
        Value::Double(Some(v)) => v.to_string(),
        Value::Json(Some(j)) => quoter.value(&j.to_string()),
        Value::Bool(None)
        | Value::TinyInt(None)
        | Value::SmallInt(None)
        | Value::Int(None)
        | Value::BigInt(None)
        | Value::TinyUnsigned(None)
        | Value::SmallUnsigned(None)
        | Value::Unsigned(None)
        | Value::BigUnsigned(None)
        | Value::Float(None)
        | Value::Double(None)
        | Value::String(None)
        | Value::Bytes(None)
        | Value::Json(None) => format!("NULL::{}", db_type.unwrap_or("char")),
        Value::Bytes(Some(_)) => {
            return Err(DialectError::Unsupported(
                "binary literal in batch insert".to_string(),
            ));
        }
        other => {
            return Err(DialectError::Unsupported(format!(
                "literal rendering for value {:?}",
                other
            )));
        }
    };
    Ok(rendered)
}
