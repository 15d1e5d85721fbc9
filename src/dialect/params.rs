//! Bound-parameter handling.
//!
//! Three concerns live here:
//!
//! - [`ParamBinder`] hands out uniquely-named placeholders
//!   (`:qp0`, `:qp1`, ...) and collects values in encounter order.
//! - [`coerce_bool_params`] is the final post-pass that turns every
//!   boolean value into integer 1/0 — Informix has no boolean binding.
//! - [`bind_class`] selects the binding class for inline (non-prepared)
//!   parameter binding.

use sea_query::Value;

/// Allocates uniquely-named placeholders per statement and records the
/// bound values in encounter order.
///
/// Placeholder numbering is strictly the order in which values are bound,
/// so identical inputs always produce identical SQL text and parameter
/// ordering.
#[derive(Debug, Clone)]
pub struct ParamBinder {
    prefix: String,
    values: Vec<(String, Value)>,
}

impl ParamBinder {
    pub fn new(prefix: impl Into<String>) -> Self {
        ParamBinder {
            prefix: prefix.into(),
            values: Vec::new(),
        }
    }

    /// Bind a value, returning its freshly allocated placeholder name.
    pub fn bind(&mut self, value: Value) -> String {
        let name = format!("{}{}", self.prefix, self.values.len());
        self.values.push((name.clone(), value));
        name
    }

    /// The `(placeholder, value)` pairs bound so far, in order.
    pub fn values(&self) -> &[(String, Value)] {
        &self.values
    }

    /// Consume the binder, yielding the ordered parameter list.
    pub fn into_values(self) -> Vec<(String, Value)> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Post-pass over a built statement's parameters: every boolean value
/// becomes the integer 1 (true) or 0 (false). Null booleans become null
/// integers.
pub fn coerce_bool_params(params: &mut [(String, Value)]) {
    for (_, value) in params.iter_mut() {
        if let Value::Bool(b) = value {
            *value = Value::Int(b.map(i32::from));
        }
    }
}

/// Binding class for inline (non-prepared) parameter binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindClass {
    /// Text/string binding
    Text,
    /// Integer binding
    Integer,
    /// Large-object/stream binding
    LargeObject,
}

/// Select the binding class for a value.
///
/// Booleans and untyped nulls bind as text: the Informix ODBC driver
/// reports "Wrong number of parameters" when a parameter is bound with a
/// true null class, so nulls go through the string class instead. Any
/// runtime type without a dedicated class defaults to text.
pub fn bind_class(value: &Value) -> BindClass {
    match value {
        Value::Bool(_) => BindClass::Text,
        Value::TinyInt(Some(_))
        | Value::SmallInt(Some(_))
        | Value::Int(Some(_))
        | Value::BigInt(Some(_))
        | Value::TinyUnsigned(Some(_))
        | Value::SmallUnsigned(Some(_))
        | Value::Unsigned(Some(_))
        | Value::BigUnsigned(Some(_)) => BindClass::Integer,
        Value::Bytes(Some(_)) => BindClass::LargeObject,
        _ => BindClass::Text,
    }
}
