//! DELETE rendering.

use super::CompiledQuery;
use super::clauses::{
    check_bounded, reject_select_clauses, write_order_by, write_pagination, write_where,
};
use crate::builder::ledger::BindingCategory;
use crate::builder::{Builder, StatementKind};
use crate::config::CompilerConfig;
use crate::error::BuildResult;
use crate::ident::write_identifier;

/// `delete t where (..) order by .. limit ? offset ?` (no `from` keyword)
///
/// Bindings: WHERE, LIMIT, OFFSET.
pub(super) fn compile(
    builder: &Builder,
    table: &str,
    config: &CompilerConfig,
) -> BuildResult<CompiledQuery> {
    reject_select_clauses(builder, StatementKind::Delete)?;
    check_bounded(builder, StatementKind::Delete, config)?;

    let mut sql = String::with_capacity(48);
    sql.push_str("delete ");
    write_identifier(table, &mut sql);
    write_where(&builder.wheres, &mut sql);
    write_order_by(&builder.orders, &mut sql);
    write_pagination(builder, &mut sql);

    let ledger = &builder.ledger;
    let mut bindings = Vec::with_capacity(ledger.len());
    bindings.extend_from_slice(ledger.slice(BindingCategory::Where));
    bindings.extend(ledger.pagination().map(str::to_owned));

    Ok(CompiledQuery::new(sql, bindings))
}
