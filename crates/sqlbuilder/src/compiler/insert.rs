//! INSERT rendering.

use super::CompiledQuery;
use super::clauses::{reject_filter_clauses, reject_select_clauses, write_placeholders};
use crate::builder::ledger::BindingCategory;
use crate::builder::{Builder, StatementKind};
use crate::error::{BuildError, BuildResult};
use crate::ident::{write_identifier, write_identifier_list};

/// `insert into t (a, b) values (?, ?)`
///
/// Bindings: INSERT values only.
pub(super) fn compile(builder: &Builder, table: &str) -> BuildResult<CompiledQuery> {
    reject_select_clauses(builder, StatementKind::Insert)?;
    reject_filter_clauses(builder, StatementKind::Insert)?;
    if builder.insert_columns.is_empty() {
        return Err(BuildError::EmptyInsert {
            table: table.to_string(),
        });
    }

    let mut sql = String::with_capacity(32 + builder.insert_columns.len() * 8);
    sql.push_str("insert into ");
    write_identifier(table, &mut sql);
    sql.push_str(" (");
    write_identifier_list(builder.insert_columns.iter().map(String::as_str), &mut sql);
    sql.push_str(") values (");
    write_placeholders(builder.insert_columns.len(), &mut sql);
    sql.push(')');

    let bindings = builder.ledger.slice(BindingCategory::Insert).to_vec();
    Ok(CompiledQuery::new(sql, bindings))
}
