//! Composite (tuple-valued) IN/NOT IN expansion.
//!
//! Informix has no row-value constructor in membership tests, so a
//! tuple-valued `(a, b) IN ((1, 'x'), (2, 'y'))` is expanded into boolean
//! combinations of per-column comparisons: each candidate tuple becomes a
//! conjunction (IN) or disjunction (NOT IN) of equality tests, and the
//! tuples combine with OR (IN) or AND (NOT IN). A column with no value in
//! a tuple renders as `IS NULL` / `IS NOT NULL` instead of a bound
//! comparison.
//!
//! Only a literal tuple list can be expanded; a subquery source fails
//! fast rather than emitting incorrect SQL.

use crate::dialect::params::ParamBinder;
use crate::dialect::quote::Quoter;
use crate::error::DialectError;
use sea_query::Value;
use std::collections::HashMap;

/// Membership operator being expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipOp {
    In,
    NotIn,
}

impl MembershipOp {
    fn comparison(self) -> &'static str {
        match self {
            MembershipOp::In => " = ",
            MembershipOp::NotIn => " != ",
        }
    }

    fn null_test(self) -> &'static str {
        match self {
            MembershipOp::In => " IS NULL",
            MembershipOp::NotIn => " IS NOT NULL",
        }
    }

    /// Combinator for one tuple's per-column expressions.
    fn inner_glue(self) -> &'static str {
        match self {
            MembershipOp::In => " AND ",
            MembershipOp::NotIn => " OR ",
        }
    }

    /// Combinator across tuples.
    fn outer_glue(self) -> &'static str {
        match self {
            MembershipOp::In => " OR ",
            MembershipOp::NotIn => " AND ",
        }
    }
}

/// Source of membership candidates.
#[derive(Debug, Clone)]
pub enum MembershipSource {
    /// Literal candidate tuples, keyed by column name.
    Tuples(Vec<HashMap<String, Value>>),
    /// A subquery — unsupported for composite membership.
    Subquery(String),
}

/// Expand a composite membership test into boolean combinations.
///
/// Parameters are numbered strictly in the order values are encountered
/// (tuple by tuple, column by column within a tuple).
pub fn composite_in_condition(
    quoter: &Quoter,
    op: MembershipOp,
    columns: &[&str],
    source: &MembershipSource,
    binder: &mut ParamBinder,
) -> Result<String, DialectError> {
    let tuples = match source {
        MembershipSource::Tuples(tuples) => tuples,
        MembershipSource::Subquery(_) => {
            return Err(DialectError::Unsupported(
                "composite IN condition over a subquery".to_string(),
            ));
        }
    };

    // The generic builder short-circuits an empty candidate list before
    // reaching the composite path; mirror its base behavior here so the
    // expansion stays total.
    if tuples.is_empty() {
        return Ok(match op {
            MembershipOp::In => "0=1".to_string(),
            MembershipOp::NotIn => String::new(),
        });
    }

    let quoted: Vec<String> = columns.iter().map(|c| quoter.column_name(c)).collect();

    let mut tuple_exprs = Vec::with_capacity(tuples.len());
    for tuple in tuples {
        let mut column_exprs = Vec::with_capacity(columns.len());
        for (column, quoted_column) in columns.iter().zip(quoted.iter()) {
            match tuple.get(*column) {
                Some(value) => {
                    let placeholder = binder.bind(value.clone());
                    column_exprs.push(format!(
                        "{}{}{}",
                        quoted_column,
                        op.comparison(),
                        placeholder
                    ));
                }
                None => {
                    column_exprs.push(format!("{}{}", quoted_column, op.null_test()));
                }
            }
        }
        tuple_exprs.push(format!("({})", column_exprs.join(op.inner_glue())));
    }

    Ok(format!("({})", tuple_exprs.join(op.outer_glue())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_composite_in_expansion() {
        let quoter = Quoter::new(false);
        let mut binder = ParamBinder::new(":qp");
        let source = MembershipSource::Tuples(vec![
            tuple(&[
                ("id", Value::Int(Some(1))),
                ("name", Value::String(Some("foo".to_string()))),
            ]),
            tuple(&[
                ("id", Value::Int(Some(2))),
                ("name", Value::String(Some("bar".to_string()))),
            ]),
        ]);

        let sql = composite_in_condition(
            &quoter,
            MembershipOp::In,
            &["id", "name"],
            &source,
            &mut binder,
        )
        .unwrap();

        assert_eq!(
            sql,
            "((id = :qp0 AND name = :qp1) OR (id = :qp2 AND name = :qp3))"
        );
        let values = binder.into_values();
        assert_eq!(values[0].1, Value::Int(Some(1)));
        assert_eq!(values[1].1, Value::String(Some("foo".to_string())));
        assert_eq!(values[2].1, Value::Int(Some(2)));
        assert_eq!(values[3].1, Value::String(Some("bar".to_string())));
    }

    #[test]
    fn test_not_in_missing_value_renders_null_test() {
        let quoter = Quoter::new(false);
        let mut binder = ParamBinder::new(":qp");
        let source = MembershipSource::Tuples(vec![tuple(&[("id", Value::Int(Some(1)))])]);

        let sql = composite_in_condition(
            &quoter,
            MembershipOp::NotIn,
            &["id", "name"],
            &source,
            &mut binder,
        )
        .unwrap();

        assert_eq!(sql, "((id != :qp0 OR name IS NOT NULL))");
        assert_eq!(binder.len(), 1);
    }

    #[test]
    fn test_expression_column_not_quoted() {
        let quoter = Quoter::new(true);
        let mut binder = ParamBinder::new(":qp");
        let source = MembershipSource::Tuples(vec![tuple(&[
            ("LOWER(name)", Value::String(Some("x".to_string()))),
        ])]);

        let sql = composite_in_condition(
            &quoter,
            MembershipOp::In,
            &["LOWER(name)"],
            &source,
            &mut binder,
        )
        .unwrap();
        assert_eq!(sql, "((LOWER(name) = :qp0))");
    }

    #[test]
    fn test_subquery_source_fails_fast() {
        let quoter = Quoter::new(false);
        let mut binder = ParamBinder::new(":qp");
        let source = MembershipSource::Subquery("SELECT id FROM other".to_string());

        let err = composite_in_condition(
            &quoter,
            MembershipOp::In,
            &["id", "name"],
            &source,
            &mut binder,
        )
        .unwrap_err();
        assert!(matches!(err, DialectError::Unsupported(_)));
        assert!(binder.is_empty());
    }

    #[test]
    fn test_empty_tuple_list() {
        let quoter = Quoter::new(false);
        let mut binder = ParamBinder::new(":qp");
        let source = MembershipSource::Tuples(vec![]);
        let sql = composite_in_condition(
            &quoter,
            MembershipOp::In,
            &["id"],
            &source,
            &mut binder,
        )
        .unwrap();
        assert_eq!(sql, "0=1");
    }
}
