//! SQL dialect translation for Informix.
//!
//! The generic query-building layer produces portable SQL and bound
//! parameters; the submodules here rewrite both into forms Informix
//! accepts. [`IfxDialect`] is the facade a caller holds: it carries the
//! quoting mode and parameter prefix and delegates to the per-concern
//! modules.

pub mod insert;
pub mod membership;
pub mod pagination;
pub mod params;
pub mod quote;
pub mod typemap;

use crate::catalog::table::TableDescriptor;
use crate::config::DialectConfig;
use crate::error::DialectError;
use sea_query::Value;

pub use insert::batch_insert;
pub use membership::{composite_in_condition, MembershipOp, MembershipSource};
pub use pagination::{apply_limit_offset, build_order_by_and_limit};
pub use params::{bind_class, coerce_bool_params, BindClass, ParamBinder};
pub use quote::Quoter;

/// Facade over the Informix dialect rules.
///
/// Holds the identifier quoting mode (driven by the server's DELIMIDENT
/// setting) and the placeholder prefix used when binding parameters.
///
/// # Example
///
/// ```
/// use informix_dialect::dialect::IfxDialect;
///
/// let dialect = IfxDialect::new(false);
/// let sql = dialect.apply_limit_offset("SELECT id FROM item", Some(10), Some(5));
/// assert_eq!(sql, "SELECT SKIP 5 LIMIT 10 id FROM item");
/// ```
#[derive(Debug, Clone)]
pub struct IfxDialect {
    quoter: Quoter,
    param_prefix: String,
}

impl IfxDialect {
    /// Create a dialect with the default `:qp` parameter prefix.
    pub fn new(delimident: bool) -> Self {
        IfxDialect {
            quoter: Quoter::new(delimident),
            param_prefix: ":qp".to_string(),
        }
    }

    /// Create a dialect from loaded configuration.
    pub fn from_config(config: &DialectConfig) -> Self {
        IfxDialect {
            quoter: Quoter::new(config.delimident),
            param_prefix: config.param_prefix.clone(),
        }
    }

    pub fn quoter(&self) -> &Quoter {
        &self.quoter
    }

    /// A fresh per-statement parameter binder using this dialect's prefix.
    pub fn param_binder(&self) -> ParamBinder {
        ParamBinder::new(self.param_prefix.clone())
    }

    /// Inject SKIP/LIMIT into a SELECT head. See [`pagination::apply_limit_offset`].
    pub fn apply_limit_offset(&self, sql: &str, limit: Option<u64>, offset: Option<u64>) -> String {
        pagination::apply_limit_offset(sql, limit, offset)
    }

    /// Append ORDER BY and inject SKIP/LIMIT. See
    /// [`pagination::build_order_by_and_limit`].
    pub fn build_order_by_and_limit(
        &self,
        sql: &str,
        order_by: Option<&str>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> String {
        pagination::build_order_by_and_limit(sql, order_by, limit, offset)
    }

    /// Expand a composite IN/NOT IN condition. See
    /// [`membership::composite_in_condition`].
    pub fn composite_in_condition(
        &self,
        op: MembershipOp,
        columns: &[&str],
        source: &MembershipSource,
        binder: &mut ParamBinder,
    ) -> Result<String, DialectError> {
        membership::composite_in_condition(&self.quoter, op, columns, source, binder)
    }

    /// Render a multi-row INSERT. See [`insert::batch_insert`].
    pub fn batch_insert(
        &self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<Value>],
        schema: Option<&TableDescriptor>,
    ) -> Result<String, DialectError> {
        insert::batch_insert(&self.quoter, table, columns, rows, schema)
    }

    /// Map an abstract column type definition to physical type text.
    pub fn column_type(&self, definition: &str) -> String {
        typemap::column_type(definition)
    }

    /// Render an ADD CONSTRAINT PRIMARY KEY statement.
    pub fn add_primary_key(&self, name: &str, table: &str, columns: &[&str]) -> String {
        typemap::add_primary_key(&self.quoter, name, table, columns)
    }

    /// Render a MODIFY-style column type change.
    pub fn alter_column(&self, table: &str, column: &str, definition: &str) -> String {
        typemap::alter_column(&self.quoter, table, column, definition)
    }

    /// Render a SET CONSTRAINTS integrity toggle.
    pub fn check_integrity(&self, table: Option<&str>, enabled: bool) -> String {
        typemap::check_integrity(&self.quoter, table, enabled)
    }
}

impl Default for IfxDialect {
    fn default() -> Self {
        IfxDialect::new(false)
    }
}
