//! DATETIME/INTERVAL qualifier decoding.
//!
//! Informix packs a datetime or interval column's field range into
//! `syscolumns.collength`: bits 4-7 of the low byte carry the largest
//! field code, bits 0-3 the smallest. Codes 11 through 15 denote a
//! FRACTION field with `code - 10` digits. Intervals additionally carry a
//! leading-field digit count spread across the full value.
//!
//! The decode functions here are deliberately standalone so the bit
//! arithmetic is testable in isolation.

use std::fmt;

/// One field of a datetime/interval qualifier range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatetimeField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    /// Sub-second field with the given digit count.
    Fraction(u8),
    /// Degraded result for an unrecognized field code.
    Unknown,
}

impl DatetimeField {
    /// Decode a 4-bit field code.
    pub fn from_code(code: i64) -> DatetimeField {
        match code {
            0 => DatetimeField::Year,
            2 => DatetimeField::Month,
            4 => DatetimeField::Day,
            6 => DatetimeField::Hour,
            8 => DatetimeField::Minute,
            10 => DatetimeField::Second,
            11..=15 => DatetimeField::Fraction((code - 10) as u8),
            _ => DatetimeField::Unknown,
        }
    }
}

impl fmt::Display for DatetimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatetimeField::Year => write!(f, "YEAR"),
            DatetimeField::Month => write!(f, "MONTH"),
            DatetimeField::Day => write!(f, "DAY"),
            DatetimeField::Hour => write!(f, "HOUR"),
            DatetimeField::Minute => write!(f, "MINUTE"),
            DatetimeField::Second => write!(f, "SECOND"),
            DatetimeField::Fraction(n) => write!(f, "FRACTION({n})"),
            DatetimeField::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Decoded qualifier range of a DATETIME or INTERVAL column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatetimeQualifier {
    pub largest: DatetimeField,
    pub smallest: DatetimeField,
    /// Leading-field digit count; present for INTERVAL columns only.
    pub interval_digits: Option<i64>,
}

impl DatetimeQualifier {
    /// Decode a DATETIME qualifier from a packed `collength`.
    pub fn decode_datetime(collength: i64) -> DatetimeQualifier {
        DatetimeQualifier {
            largest: DatetimeField::from_code(largest_code(collength)),
            smallest: DatetimeField::from_code(smallest_code(collength)),
            interval_digits: None,
        }
    }

    /// Decode an INTERVAL qualifier from a packed `collength`.
    pub fn decode_interval(collength: i64) -> DatetimeQualifier {
        DatetimeQualifier {
            largest: DatetimeField::from_code(largest_code(collength)),
            smallest: DatetimeField::from_code(smallest_code(collength)),
            interval_digits: Some(interval_digit_count(collength)),
        }
    }
}

impl fmt::Display for DatetimeQualifier {
    /// Render `"<LARGEST>[(n)] TO <SMALLEST>[(n)]"`.
    ///
    /// The interval digit count replaces a FRACTION largest field's own
    /// digits, so a fraction-leading interval renders a single
    /// `FRACTION(<count>)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.interval_digits, self.largest) {
            (Some(digits), DatetimeField::Fraction(_)) => write!(f, "FRACTION({digits})")?,
            (Some(digits), largest) => write!(f, "{largest}({digits})")?,
            (None, largest) => write!(f, "{largest}")?,
        }
        write!(f, " TO {}", self.smallest)
    }
}

/// Largest qualifier field code: bits 4-7 of the low byte.
pub fn largest_code(collength: i64) -> i64 {
    (collength % 256) / 16
}

/// Smallest qualifier field code: bits 0-3 of the low byte.
pub fn smallest_code(collength: i64) -> i64 {
    collength % 16
}

/// INTERVAL leading-field digit count packed across the full `collength`.
pub fn interval_digit_count(collength: i64) -> i64 {
    collength / 256 + (collength % 256) / 16 - collength % 16
}
