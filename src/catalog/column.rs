//! Column row decoding.
//!
//! Turns one raw `syscolumns`/`sysdefaults` row into a normalized
//! [`ColumnDescriptor`]. Decoding is total: unrecognized type codes or
//! qualifier nibbles degrade to `Unknown`/String classification instead of
//! erroring, so introspection keeps working against arbitrary live
//! catalogs.

use crate::catalog::qualifier::DatetimeQualifier;
use crate::catalog::source::RawColumnRow;
use crate::catalog::table::{ColumnDescriptor, DefaultValue};
use crate::catalog::types::{abstract_type_for, AbstractType, PhysicalType};

/// Base type codes whose literal defaults are stored as NUL-terminated
/// character data: CHAR, VARCHAR, NCHAR, NVARCHAR, VARIABLELENGTH,
/// FIXEDLENGTH.
const CHARACTER_BASE_CODES: [i32; 6] = [0, 13, 15, 16, 40, 41];

/// Base type codes whose literal defaults round-trip through floating
/// point: FLOAT, DECIMAL, MONEY.
const FLOAT_BASE_CODES: [i32; 3] = [3, 5, 8];

/// Decode one raw catalog column row into a normalized descriptor.
///
/// Never fails; unknown inputs produce a best-effort descriptor with
/// `PhysicalType::Unknown` and an `AbstractType::String` classification.
pub fn decode_column(row: &RawColumnRow) -> ColumnDescriptor {
    let base_code = row.coltype.rem_euclid(256);

    let decoded = match PhysicalType::from_base_code(base_code) {
        Some(base) => decode_type(base, row),
        None => {
            log::debug!(
                "unrecognized coltype {} for column {}, degrading to unknown",
                row.coltype,
                row.colname
            );
            DecodedType {
                physical: PhysicalType::Unknown,
                db_type: PhysicalType::Unknown.name().to_string(),
                size: None,
                precision: None,
                scale: None,
            }
        }
    };

    let abstract_type = resolve_abstract(decoded.physical, &decoded.db_type);
    let default = decode_default(row, base_code);

    ColumnDescriptor {
        name: row.colname.clone(),
        nullable: row.allow_null,
        raw_type_code: row.coltype,
        physical: decoded.physical,
        db_type: decoded.db_type,
        abstract_type,
        size: decoded.size,
        precision: decoded.precision,
        scale: decoded.scale,
        auto_increment: decoded.physical.is_auto_increment(),
        primary_key: false,
        default,
    }
}

struct DecodedType {
    physical: PhysicalType,
    db_type: String,
    size: Option<u32>,
    precision: Option<u32>,
    scale: Option<u32>,
}

/// Type-specific secondary decode of `collength`/`extended_id`.
fn decode_type(base: PhysicalType, row: &RawColumnRow) -> DecodedType {
    // VARIABLELENGTH/FIXEDLENGTH refine through the extended type id first
    let physical = match base {
        PhysicalType::VariableLength => match row.extended_id {
            1 => PhysicalType::Lvarchar,
            25 => PhysicalType::Json,
            _ => PhysicalType::UdtVar,
        },
        PhysicalType::FixedLength => match row.extended_id {
            5 => PhysicalType::Boolean,
            10 => PhysicalType::Blob,
            11 => PhysicalType::Clob,
            _ => PhysicalType::UdtFixed,
        },
        other => other,
    };

    match physical {
        // Character family: collength is the declared length
        PhysicalType::Char
        | PhysicalType::Varchar
        | PhysicalType::Nchar
        | PhysicalType::Nvarchar
        | PhysicalType::Lvarchar => {
            let len = row.collength.max(0) as u32;
            DecodedType {
                physical,
                db_type: format!("{}({})", physical.name(), len),
                size: Some(len),
                precision: Some(len),
                scale: None,
            }
        }
        // DECIMAL/MONEY pack precision in the high byte, scale in the low
        PhysicalType::Decimal | PhysicalType::Money => {
            let precision = (row.collength / 256).max(0) as u32;
            let scale = (row.collength % 256).max(0) as u32;
            DecodedType {
                physical,
                db_type: format!("{}({},{})", physical.name(), precision, scale),
                size: Some(precision),
                precision: Some(precision),
                scale: Some(scale),
            }
        }
        PhysicalType::Datetime => {
            let qualifier = DatetimeQualifier::decode_datetime(row.collength);
            DecodedType {
                physical,
                db_type: format!("{} {}", physical.name(), qualifier.to_string().to_lowercase()),
                size: None,
                precision: None,
                scale: None,
            }
        }
        PhysicalType::Interval => {
            let qualifier = DatetimeQualifier::decode_interval(row.collength);
            DecodedType {
                physical,
                db_type: format!("{} {}", physical.name(), qualifier.to_string().to_lowercase()),
                size: None,
                precision: None,
                scale: None,
            }
        }
        other => DecodedType {
            physical: other,
            db_type: other.name().to_string(),
            size: None,
            precision: None,
            scale: None,
        },
    }
}

/// Map the physical type onto an abstract category.
///
/// Datetime/interval columns are keyed by name plus qualifier so that only
/// the ranges in the fixed map resolve beyond String (e.g. `datetime year
/// to second` is DateTime, `datetime month to day` stays String).
fn resolve_abstract(physical: PhysicalType, db_type: &str) -> AbstractType {
    if matches!(physical, PhysicalType::Datetime | PhysicalType::Interval) {
        return abstract_type_for(db_type).unwrap_or(AbstractType::String);
    }
    abstract_type_for(physical.name()).unwrap_or(AbstractType::String)
}

/// Decode the `sysdefaults` row attached to a column.
///
/// See the Informix `sysdefaults` documentation for the one-letter codes.
/// Literal (`L`) defaults embed the value in the raw bytes: character
/// types store it NUL-terminated, every other family stores it after a
/// leading binary prefix ended by the first space.
fn decode_default(row: &RawColumnRow, base_code: i32) -> Option<DefaultValue> {
    let code = row.default_type.as_deref()?.trim();
    match code {
        "C" => Some(DefaultValue::Current),
        "N" => Some(DefaultValue::Null),
        "S" => Some(DefaultValue::DbServerName),
        "T" => Some(DefaultValue::Today),
        "U" => Some(DefaultValue::CurrentUser),
        "L" => Some(DefaultValue::Literal(decode_literal_default(row, base_code))),
        _ => None,
    }
}

fn decode_literal_default(row: &RawColumnRow, base_code: i32) -> String {
    let raw = row.default_value.as_deref().unwrap_or(&[]);
    if CHARACTER_BASE_CODES.contains(&base_code) {
        // substring before the first embedded NUL
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        return String::from_utf8_lossy(&raw[..end]).into_owned();
    }
    let text = String::from_utf8_lossy(raw);
    let literal = match text.split_once(' ') {
        Some((_, rest)) => rest.trim_end(),
        None => "",
    };
    if FLOAT_BASE_CODES.contains(&base_code) {
        // Round trip through f64, matching the catalog's stored rendering.
        // Lossy for high-scale DECIMAL/MONEY defaults.
        let value: f64 = literal.parse().unwrap_or(0.0);
        return value.to_string();
    }
    literal.to_string()
}
