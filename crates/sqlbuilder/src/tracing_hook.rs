//! `tracing` events for compiled statements.
//!
//! Enabled by the `tracing` crate feature (on by default). Events carry the
//! statement kind, the placeholder count and the SQL text; bound values are
//! never logged.

use crate::builder::StatementKind;
use crate::compiler::CompiledQuery;
use crate::config::CompilerConfig;

/// Cut `sql` to at most `max_bytes`. The cut moves back to the previous char
/// boundary because slicing inside a multi-byte character panics.
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn display_sql(sql: &str, max: Option<usize>) -> String {
    match max {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

pub(crate) fn log_compiled(kind: StatementKind, compiled: &CompiledQuery, config: &CompilerConfig) {
    if !tracing::enabled!(target: "sqlbuilder.sql", tracing::Level::DEBUG) {
        return;
    }
    let sql = display_sql(&compiled.sql, config.max_logged_sql_length);
    tracing::debug!(
        target: "sqlbuilder.sql",
        %kind,
        placeholders = compiled.bindings.len(),
        sql = %sql,
        "compiled statement"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_sql_bytes("select", 10), "select");
        assert_eq!(truncate_sql_bytes("select", 3), "sel");
        // 'é' is two bytes; cutting inside it backs off to the boundary.
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }

    #[test]
    fn display_appends_ellipsis() {
        assert_eq!(display_sql("select * from t", Some(6)), "select...");
        assert_eq!(display_sql("select * from t", None), "select * from t");
    }
}
