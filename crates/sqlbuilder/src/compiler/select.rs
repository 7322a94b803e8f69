//! SELECT rendering.

use super::CompiledQuery;
use super::clauses::{
    write_from, write_group_by, write_having, write_joins, write_order_by, write_pagination,
    write_select, write_where,
};
use crate::builder::Builder;
use crate::builder::ledger::BindingCategory;

/// `select cols from t joins where group having order limit offset`
///
/// Bindings: WHERE, HAVING, LIMIT, OFFSET.
pub(super) fn compile(builder: &Builder, table: &str) -> CompiledQuery {
    let mut sql = String::with_capacity(64);
    write_select(builder.distinct, &builder.columns, &mut sql);
    write_from(table, &mut sql);
    write_joins(&builder.joins, &mut sql);
    write_where(&builder.wheres, &mut sql);
    write_group_by(&builder.groups, &mut sql);
    write_having(&builder.havings, &mut sql);
    write_order_by(&builder.orders, &mut sql);
    write_pagination(builder, &mut sql);

    let ledger = &builder.ledger;
    let mut bindings = Vec::with_capacity(ledger.len());
    bindings.extend_from_slice(ledger.slice(BindingCategory::Where));
    bindings.extend_from_slice(ledger.slice(BindingCategory::Having));
    bindings.extend(ledger.pagination().map(str::to_owned));

    CompiledQuery::new(sql, bindings)
}
