//! Physical and abstract column type vocabularies.
//!
//! Informix stores a column's type as a packed integer in
//! `syscolumns.coltype`: the low byte (`coltype % 256`) is the base type
//! code, and any value above 255 marks the column NOT NULL. This module
//! holds the fixed base-code table, the extended-type refinements used for
//! `VARIABLELENGTH`/`FIXEDLENGTH` columns, and the mapping from physical
//! type text to the semantic [`AbstractType`] category the generic query
//! layer works with.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Physical Informix column type, as resolved from the catalog.
///
/// The first block of variants corresponds to base type codes in
/// `syscolumns.coltype`; the second block (`Lvarchar` through `UdtFixed`)
/// is resolved from `extended_id` for the `VariableLength`/`FixedLength`
/// base codes. `Unknown` is the degraded result for codes this decoder
/// does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalType {
    Char,
    Smallint,
    Integer,
    Float,
    Smallfloat,
    Decimal,
    Serial,
    Date,
    Money,
    Null,
    Datetime,
    Byte,
    Text,
    Varchar,
    Interval,
    Nchar,
    Nvarchar,
    Int8,
    Serial8,
    Set,
    Multiset,
    List,
    Row,
    Collection,
    RowRef,
    VariableLength,
    FixedLength,
    RefSer8,
    Bigint,
    // Extended refinements
    Lvarchar,
    Json,
    UdtVar,
    Boolean,
    Blob,
    Clob,
    UdtFixed,
    Unknown,
}

impl PhysicalType {
    /// Resolve a base type code (`coltype % 256`) to a physical type.
    ///
    /// Returns `None` for codes outside the fixed table; callers degrade
    /// those to [`PhysicalType::Unknown`].
    pub fn from_base_code(code: i32) -> Option<PhysicalType> {
        let t = match code {
            0 => PhysicalType::Char,
            1 => PhysicalType::Smallint,
            2 => PhysicalType::Integer,
            3 => PhysicalType::Float,
            4 => PhysicalType::Smallfloat,
            5 => PhysicalType::Decimal,
            6 => PhysicalType::Serial,
            7 => PhysicalType::Date,
            8 => PhysicalType::Money,
            9 => PhysicalType::Null,
            10 => PhysicalType::Datetime,
            11 => PhysicalType::Byte,
            12 => PhysicalType::Text,
            13 => PhysicalType::Varchar,
            14 => PhysicalType::Interval,
            15 => PhysicalType::Nchar,
            16 => PhysicalType::Nvarchar,
            17 => PhysicalType::Int8,
            18 => PhysicalType::Serial8,
            19 => PhysicalType::Set,
            20 => PhysicalType::Multiset,
            21 => PhysicalType::List,
            22 => PhysicalType::Row,
            23 => PhysicalType::Collection,
            24 => PhysicalType::RowRef,
            40 => PhysicalType::VariableLength,
            41 => PhysicalType::FixedLength,
            42 => PhysicalType::RefSer8,
            52 | 53 => PhysicalType::Bigint,
            _ => return None,
        };
        Some(t)
    }

    /// Lowercase physical type name as it appears in rendered DDL text.
    pub fn name(&self) -> &'static str {
        match self {
            PhysicalType::Char => "char",
            PhysicalType::Smallint => "smallint",
            PhysicalType::Integer => "integer",
            PhysicalType::Float => "float",
            PhysicalType::Smallfloat => "smallfloat",
            PhysicalType::Decimal => "decimal",
            PhysicalType::Serial => "serial",
            PhysicalType::Date => "date",
            PhysicalType::Money => "money",
            PhysicalType::Null => "null",
            PhysicalType::Datetime => "datetime",
            PhysicalType::Byte => "byte",
            PhysicalType::Text => "text",
            PhysicalType::Varchar => "varchar",
            PhysicalType::Interval => "interval",
            PhysicalType::Nchar => "nchar",
            PhysicalType::Nvarchar => "nvarchar",
            PhysicalType::Int8 => "int8",
            PhysicalType::Serial8 => "serial8",
            PhysicalType::Set => "set",
            PhysicalType::Multiset => "multiset",
            PhysicalType::List => "list",
            PhysicalType::Row => "row",
            PhysicalType::Collection => "collection",
            PhysicalType::RowRef => "rowref",
            PhysicalType::VariableLength => "variablelength",
            PhysicalType::FixedLength => "fixedlength",
            PhysicalType::RefSer8 => "refser8",
            PhysicalType::Bigint => "bigint",
            PhysicalType::Lvarchar => "lvarchar",
            PhysicalType::Json => "json",
            PhysicalType::UdtVar => "udtvar",
            PhysicalType::Boolean => "boolean",
            PhysicalType::Blob => "blob",
            PhysicalType::Clob => "clob",
            PhysicalType::UdtFixed => "udtfixed",
            PhysicalType::Unknown => "unknown",
        }
    }

    /// Whether this type auto-increments (SERIAL family).
    pub fn is_auto_increment(&self) -> bool {
        self.name().contains("serial")
    }
}

/// Semantic column category, independent of physical encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbstractType {
    String,
    Text,
    Integer,
    BigInt,
    SmallInt,
    Float,
    Double,
    Decimal,
    Money,
    Date,
    DateTime,
    Time,
    Binary,
    Boolean,
    Json,
}

/// Mapping from physical column type text (keys) to abstract column types (values).
///
/// Datetime entries are keyed by name plus qualifier, so only the ranges
/// listed here resolve beyond the String fallback.
static ABSTRACT_TYPE_MAP: Lazy<HashMap<&'static str, AbstractType>> = Lazy::new(|| {
    HashMap::from([
        ("bigint", AbstractType::BigInt),
        ("bigserial", AbstractType::BigInt),
        ("binary18", AbstractType::Binary),
        ("binaryvar", AbstractType::Binary),
        ("blob", AbstractType::Binary),
        ("boolean", AbstractType::Boolean),
        ("byte", AbstractType::Binary),
        ("char", AbstractType::String),
        ("character varying", AbstractType::String),
        ("character", AbstractType::String),
        ("clob", AbstractType::Text),
        ("date", AbstractType::Date),
        ("datetime hour to second", AbstractType::Time),
        ("datetime year to day", AbstractType::Date),
        ("datetime year to second", AbstractType::DateTime),
        ("dec", AbstractType::Decimal),
        ("decimal", AbstractType::Decimal),
        ("double precision", AbstractType::Double),
        ("float", AbstractType::Double),
        ("int", AbstractType::Integer),
        ("int8", AbstractType::BigInt),
        ("integer", AbstractType::Integer),
        ("json", AbstractType::Json),
        ("lvarchar", AbstractType::String),
        ("money", AbstractType::Money),
        ("nchar", AbstractType::String),
        ("numeric", AbstractType::Decimal),
        ("nvarchar", AbstractType::String),
        ("real", AbstractType::Float),
        ("serial", AbstractType::Integer),
        ("serial8", AbstractType::BigInt),
        ("smallfloat", AbstractType::Float),
        ("smallint", AbstractType::SmallInt),
        ("text", AbstractType::Text),
        ("varchar", AbstractType::String),
    ])
});

/// Look up the abstract type for a physical type name or full db type text.
///
/// Returns `None` when the text is not in the fixed map; callers fall back
/// to [`AbstractType::String`].
pub fn abstract_type_for(physical_text: &str) -> Option<AbstractType> {
    ABSTRACT_TYPE_MAP.get(physical_text).copied()
}
