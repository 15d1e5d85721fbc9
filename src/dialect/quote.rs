//! Identifier and value quoting.
//!
//! Informix only honors double-quoted identifiers when the session runs
//! with `DELIMIDENT` set; otherwise quoted identifiers are a syntax
//! error. The quoter therefore carries the mode explicitly: with
//! `delimident` on, identifiers are wrapped in double quotes; with it
//! off, any stray quoting is stripped.

/// DELIMIDENT-aware identifier/value quoter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quoter {
    delimident: bool,
}

impl Quoter {
    pub fn new(delimident: bool) -> Self {
        Quoter { delimident }
    }

    pub fn delimident(&self) -> bool {
        self.delimident
    }

    /// Quote a simple table name (no schema prefix). Already-quoted names
    /// pass through unchanged.
    pub fn simple_table_name(&self, name: &str) -> String {
        if self.delimident {
            if name.contains('"') {
                return name.to_string();
            }
            return format!("\"{}\"", name);
        }
        name.trim_matches(|c| c == '"' || c == '\'' || c == '`').to_string()
    }

    /// Quote a possibly schema-qualified table name. Names containing a
    /// parenthesis (subquery sources) pass through verbatim.
    pub fn table_name(&self, name: &str) -> String {
        if name.contains('(') {
            return name.to_string();
        }
        name.split('.')
            .map(|part| self.simple_table_name(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Quote a simple column name. `*` and already-quoted names pass
    /// through unchanged.
    pub fn simple_column_name(&self, name: &str) -> String {
        if self.delimident {
            if name.contains('"') || name == "*" {
                return name.to_string();
            }
            return format!("\"{}\"", name);
        }
        name.trim_matches(|c| c == '"' || c == '\'' || c == '`').to_string()
    }

    /// Quote a possibly table-qualified column name. Expressions
    /// (anything containing a parenthesis) pass through verbatim.
    pub fn column_name(&self, name: &str) -> String {
        if name.contains('(') {
            return name.to_string();
        }
        match name.rsplit_once('.') {
            Some((prefix, column)) => {
                format!("{}.{}", self.table_name(prefix), self.simple_column_name(column))
            }
            None => self.simple_column_name(name),
        }
    }

    /// Quote a string value as an SQL literal, doubling embedded quotes.
    pub fn value(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimident_off_strips_quotes() {
        let q = Quoter::new(false);
        assert_eq!(q.table_name("orders"), "orders");
        assert_eq!(q.table_name("\"orders\""), "orders");
        assert_eq!(q.column_name("`name`"), "name");
    }

    #[test]
    fn test_delimident_on_wraps() {
        let q = Quoter::new(true);
        assert_eq!(q.table_name("orders"), "\"orders\"");
        assert_eq!(q.table_name("sales.orders"), "\"sales\".\"orders\"");
        assert_eq!(q.column_name("orders.id"), "\"orders\".\"id\"");
        // already quoted or asterisk left alone
        assert_eq!(q.column_name("\"id\""), "\"id\"");
        assert_eq!(q.simple_column_name("*"), "*");
    }

    #[test]
    fn test_expressions_pass_through() {
        let q = Quoter::new(true);
        assert_eq!(q.column_name("COUNT(id)"), "COUNT(id)");
        assert_eq!(q.table_name("(SELECT 1)"), "(SELECT 1)");
    }

    #[test]
    fn test_value_quoting() {
        let q = Quoter::new(false);
        assert_eq!(q.value("foo"), "'foo'");
        assert_eq!(q.value("O'Brien"), "'O''Brien'");
    }
}
