//! Per-clause renderers. Each writer appends its clause (with a leading space
//! where it follows another clause) and nothing else; binding assembly lives
//! with the statement compilers so the two orders can be read side by side.

use crate::builder::{
    Assignment, Builder, Join, OrderBy, Predicate, PredicateValue, StatementKind, UpdateValue,
};
use crate::config::CompilerConfig;
use crate::error::{BuildError, BuildResult};
use crate::ident::{write_identifier, write_identifier_list};
use crate::operator::Operator;

const PLACEHOLDER: &str = "?";

pub(super) fn write_select(distinct: bool, columns: &[String], out: &mut String) {
    out.push_str("select");
    if distinct {
        out.push_str(" distinct");
    }
    out.push(' ');
    if columns.is_empty() {
        out.push('*');
    } else {
        write_identifier_list(columns.iter().map(String::as_str), out);
    }
}

pub(super) fn write_from(table: &str, out: &mut String) {
    out.push_str(" from ");
    write_identifier(table, out);
}

pub(super) fn write_joins(joins: &[Join], out: &mut String) {
    for join in joins {
        out.push(' ');
        out.push_str(join.kind.as_str());
        out.push_str(" join ");
        write_identifier(&join.table, out);
        out.push_str(" on ");
        out.push_str(&join.condition);
    }
}

/// ` where (p1 and p2 ...)`
pub(super) fn write_where(predicates: &[Predicate], out: &mut String) {
    if predicates.is_empty() {
        return;
    }
    out.push_str(" where (");
    write_predicates(predicates, out);
    out.push(')');
}

/// ` having p1 and p2 ...`
pub(super) fn write_having(predicates: &[Predicate], out: &mut String) {
    if predicates.is_empty() {
        return;
    }
    out.push_str(" having ");
    write_predicates(predicates, out);
}

fn write_predicates(predicates: &[Predicate], out: &mut String) {
    let last = predicates.len() - 1;
    for (i, predicate) in predicates.iter().enumerate() {
        write_predicate(predicate, out);
        if i < last {
            out.push(' ');
            out.push_str(predicate.connective.as_str());
            out.push(' ');
        }
    }
}

fn write_predicate(predicate: &Predicate, out: &mut String) {
    match &predicate.value {
        PredicateValue::Set(values) if values.is_empty() => {
            // Nothing can be IN an empty list; everything is NOT IN it.
            let always = if predicate.operator == Operator::NotIn {
                "1 = 1"
            } else {
                "1 = 0"
            };
            out.push_str(always);
        }
        PredicateValue::Set(values) => {
            write_identifier(&predicate.column, out);
            out.push(' ');
            out.push_str(predicate.operator.as_str());
            out.push_str(" (");
            write_placeholders(values.len(), out);
            out.push(')');
        }
        PredicateValue::Single(_) => {
            write_identifier(&predicate.column, out);
            out.push(' ');
            out.push_str(predicate.operator.as_str());
            out.push(' ');
            out.push_str(PLACEHOLDER);
        }
    }
}

/// `?, ?, ?`
pub(super) fn write_placeholders(count: usize, out: &mut String) {
    for i in 0..count {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(PLACEHOLDER);
    }
}

pub(super) fn write_group_by(groups: &[String], out: &mut String) {
    if groups.is_empty() {
        return;
    }
    out.push_str(" group by ");
    write_identifier_list(groups.iter().map(String::as_str), out);
}

pub(super) fn write_order_by(orders: &[OrderBy], out: &mut String) {
    if orders.is_empty() {
        return;
    }
    out.push_str(" order by ");
    for (i, order) in orders.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_identifier(&order.column, out);
        if !order.direction.is_empty() {
            out.push(' ');
            out.push_str(&order.direction);
        }
    }
}

/// ` limit ? offset ?`; must stay in step with `Ledger::pagination`.
pub(super) fn write_pagination(builder: &Builder, out: &mut String) {
    if builder.ledger.limit().is_some() {
        out.push_str(" limit ");
        out.push_str(PLACEHOLDER);
    }
    if builder.ledger.offset().is_some() {
        out.push_str(" offset ");
        out.push_str(PLACEHOLDER);
    }
}

/// `a = ?, b = b + 1`
pub(super) fn write_assignments(assignments: &[Assignment], out: &mut String) {
    for (i, assignment) in assignments.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match &assignment.value {
            UpdateValue::Bind(_) => {
                write_identifier(&assignment.column, out);
                out.push_str(" = ");
                out.push_str(PLACEHOLDER);
            }
            UpdateValue::Raw(expr) => out.push_str(expr),
        }
    }
}

// ==================== Shape checks ====================

fn reject_populated<const N: usize>(
    clauses: [(&'static str, bool); N],
    kind: StatementKind,
) -> BuildResult<()> {
    match clauses.into_iter().find(|(_, populated)| *populated) {
        Some((clause, _)) => Err(BuildError::clause_not_allowed(clause, kind)),
        None => Ok(()),
    }
}

/// Projection, joins, grouping and HAVING only exist on SELECT.
pub(super) fn reject_select_clauses(builder: &Builder, kind: StatementKind) -> BuildResult<()> {
    reject_populated(
        [
            ("select", !builder.columns.is_empty() || builder.distinct),
            ("join", !builder.joins.is_empty()),
            ("group by", !builder.groups.is_empty()),
            ("having", !builder.havings.is_empty()),
        ],
        kind,
    )
}

/// WHERE, ORDER BY and pagination have no place in INSERT.
pub(super) fn reject_filter_clauses(builder: &Builder, kind: StatementKind) -> BuildResult<()> {
    reject_populated(
        [
            ("where", !builder.wheres.is_empty()),
            ("order by", !builder.orders.is_empty()),
            ("limit/offset", builder.ledger.has_pagination()),
        ],
        kind,
    )
}

/// Enforce `CompilerConfig::require_where` for UPDATE/DELETE.
pub(super) fn check_bounded(
    builder: &Builder,
    kind: StatementKind,
    config: &CompilerConfig,
) -> BuildResult<()> {
    if config.require_where && builder.wheres.is_empty() {
        return Err(BuildError::UnboundedMutation { kind });
    }
    Ok(())
}
