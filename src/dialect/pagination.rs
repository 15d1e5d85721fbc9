//! SKIP/LIMIT pagination injection.
//!
//! Informix places its pagination clause at the head of the statement, not
//! the tail: `SELECT [SKIP n] [LIMIT n] [DISTINCT] ...`. This module
//! rewrites an already-assembled SELECT to insert those tokens while
//! enforcing that order.
//!
//! Text-level rewriting of finished SQL is inherently fragile; the
//! contract here is kept auditable by using an explicit head tokenizer
//! (leading whitespace/parentheses, the SELECT keyword, then optional
//! SKIP/LIMIT/DISTINCT tokens) and splicing around it, instead of
//! pattern-matching the whole statement. Injecting a LIMIT replaces any
//! existing LIMIT token, and SKIP likewise, so re-applying the same
//! limit/offset is idempotent.

/// Tokenized head of a SELECT statement.
#[derive(Debug, PartialEq, Eq)]
struct SelectHead {
    /// Byte offset just past the SELECT keyword
    select_end: usize,
    /// Existing `SKIP n` token, if present
    skip: Option<u64>,
    /// Existing `LIMIT n` token, if present
    limit: Option<u64>,
    /// Existing DISTINCT token
    distinct: bool,
    /// Byte offset where the untouched remainder of the statement starts
    tail_start: usize,
}

/// Inject SKIP/LIMIT into a SELECT statement head.
///
/// `offset` becomes `SKIP n` directly after the SELECT keyword; `limit`
/// becomes `LIMIT n` after any SKIP and before any DISTINCT. Existing
/// SKIP/LIMIT tokens are replaced by the injected values. Statements
/// whose head is not a SELECT are returned unchanged.
pub fn apply_limit_offset(sql: &str, limit: Option<u64>, offset: Option<u64>) -> String {
    if limit.is_none() && offset.is_none() {
        return sql.to_string();
    }
    let Some(head) = parse_select_head(sql) else {
        return sql.to_string();
    };

    let skip = offset.or(head.skip);
    let limit = limit.or(head.limit);

    let mut out = String::with_capacity(sql.len() + 24);
    out.push_str(&sql[..head.select_end]);
    if let Some(n) = skip {
        out.push_str(" SKIP ");
        out.push_str(&n.to_string());
    }
    if let Some(n) = limit {
        out.push_str(" LIMIT ");
        out.push_str(&n.to_string());
    }
    if head.distinct {
        out.push_str(" DISTINCT");
    }
    out.push_str(&sql[head.tail_start..]);
    out
}

/// Append an ORDER BY clause, then inject LIMIT/SKIP.
///
/// `order_by` is the pre-rendered column list (e.g. `"id DESC, name"`).
/// ORDER BY is appended before the head splice and never interacts with
/// SKIP/LIMIT placement.
pub fn build_order_by_and_limit(
    sql: &str,
    order_by: Option<&str>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> String {
    let mut sql = sql.to_string();
    if let Some(order_by) = order_by {
        if !order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }
    }
    apply_limit_offset(&sql, limit, offset)
}

/// Tokenize the statement head. Returns `None` when the statement does
/// not start (after whitespace/parentheses) with a SELECT keyword.
fn parse_select_head(sql: &str) -> Option<SelectHead> {
    let bytes = sql.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() && (bytes[pos].is_ascii_whitespace() || bytes[pos] == b'(') {
        pos += 1;
    }
    let select_end = eat_keyword(bytes, pos, b"SELECT")?;

    let mut cursor = select_end;
    let mut skip = None;
    let mut limit = None;
    let mut distinct = false;
    if let Some((end, n)) = eat_numbered_clause(sql, cursor, b"SKIP") {
        skip = Some(n);
        cursor = end;
    }
    if let Some((end, n)) = eat_numbered_clause(sql, cursor, b"LIMIT") {
        limit = Some(n);
        cursor = end;
    }
    if let Some(end) = eat_spaced_keyword(bytes, cursor, b"DISTINCT") {
        distinct = true;
        cursor = end;
    }

    Some(SelectHead {
        select_end,
        skip,
        limit,
        distinct,
        tail_start: cursor,
    })
}

/// Match a case-insensitive keyword at `pos`, requiring a word boundary
/// after it. Returns the offset past the keyword.
fn eat_keyword(bytes: &[u8], pos: usize, keyword: &[u8]) -> Option<usize> {
    let end = pos.checked_add(keyword.len())?;
    if end > bytes.len() || !bytes[pos..end].eq_ignore_ascii_case(keyword) {
        return None;
    }
    if end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        return None;
    }
    Some(end)
}

/// Match whitespace followed by a keyword.
fn eat_spaced_keyword(bytes: &[u8], pos: usize, keyword: &[u8]) -> Option<usize> {
    let after_ws = eat_whitespace(bytes, pos);
    if after_ws == pos {
        return None;
    }
    eat_keyword(bytes, after_ws, keyword)
}

/// Match whitespace, a keyword, whitespace and an unsigned number
/// (`SKIP 5`, `LIMIT 10`). Returns the offset past the number and its value.
fn eat_numbered_clause(sql: &str, pos: usize, keyword: &[u8]) -> Option<(usize, u64)> {
    let bytes = sql.as_bytes();
    let after_kw = eat_spaced_keyword(bytes, pos, keyword)?;
    let digits_start = eat_whitespace(bytes, after_kw);
    if digits_start == after_kw {
        return None;
    }
    let mut end = digits_start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    let n = sql[digits_start..end].parse().ok()?;
    Some((end, n))
}

fn eat_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}
