//! UPDATE rendering.

use super::CompiledQuery;
use super::clauses::{
    check_bounded, reject_select_clauses, write_assignments, write_order_by, write_pagination,
    write_where,
};
use crate::builder::ledger::BindingCategory;
use crate::builder::{Builder, StatementKind};
use crate::config::CompilerConfig;
use crate::error::{BuildError, BuildResult};
use crate::ident::write_identifier;

/// `update t set a = ?, b = b + 1 where (..) order by .. limit ? offset ?`
///
/// Bindings: SET values (raw assignments contribute none), WHERE, LIMIT, OFFSET.
pub(super) fn compile(
    builder: &Builder,
    table: &str,
    config: &CompilerConfig,
) -> BuildResult<CompiledQuery> {
    reject_select_clauses(builder, StatementKind::Update)?;
    if builder.assignments.is_empty() {
        return Err(BuildError::EmptyUpdate {
            table: table.to_string(),
        });
    }
    check_bounded(builder, StatementKind::Update, config)?;

    let mut sql = String::with_capacity(64);
    sql.push_str("update ");
    write_identifier(table, &mut sql);
    sql.push_str(" set ");
    write_assignments(&builder.assignments, &mut sql);
    write_where(&builder.wheres, &mut sql);
    write_order_by(&builder.orders, &mut sql);
    write_pagination(builder, &mut sql);

    let ledger = &builder.ledger;
    let mut bindings = Vec::with_capacity(ledger.len());
    bindings.extend_from_slice(ledger.slice(BindingCategory::Update));
    bindings.extend_from_slice(ledger.slice(BindingCategory::Where));
    bindings.extend(ledger.pagination().map(str::to_owned));

    Ok(CompiledQuery::new(sql, bindings))
}

#[cfg(test)]
mod tests {
    use crate::{BuildError, Builder, CompilerConfig, StatementKind, UpdateValue};

    #[test]
    fn bound_and_raw_assignments_mix() {
        let q = Builder::new()
            .update(
                "posts",
                [
                    ("title", UpdateValue::from("hello")),
                    ("touched", UpdateValue::raw("updated_at = now()")),
                    ("body", UpdateValue::from("text")),
                ],
            )
            .where_eq("id", 7)
            .to_sql()
            .unwrap();
        assert_eq!(
            q.sql,
            "update `posts` set `title` = ?, updated_at = now(), `body` = ? where (`id` = ?)"
        );
        assert_eq!(q.bindings, ["hello", "text", "7"]);
    }

    #[test]
    fn increment_and_decrement() {
        let q = Builder::new()
            .increment("stats", "views", 1)
            .decrement("stats", "stock", 2)
            .where_eq("id", 1)
            .to_sql()
            .unwrap();
        assert_eq!(
            q.sql,
            "update `stats` set `views` = `views` + 1, `stock` = `stock` - 2 where (`id` = ?)"
        );
        assert_eq!(q.bindings, ["1"]);
    }

    #[test]
    fn negative_step_flips_sign() {
        let q = Builder::new()
            .increment("stats", "y", -2)
            .decrement("stats", "z", -3)
            .to_sql()
            .unwrap();
        assert_eq!(q.sql, "update `stats` set `y` = `y` - 2, `z` = `z` + 3");
        assert!(q.bindings.is_empty());

        let q = Builder::new()
            .decrement("stats", "w", i64::MIN)
            .to_sql()
            .unwrap();
        assert_eq!(q.sql, "update `stats` set `w` = `w` + 9223372036854775808");
    }

    #[test]
    fn order_by_and_pagination() {
        let q = Builder::new()
            .update("jobs", [("state", "queued")])
            .where_eq("state", "new")
            .order_by_asc("created_at")
            .limit(100)
            .to_sql()
            .unwrap();
        assert_eq!(
            q.sql,
            "update `jobs` set `state` = ? where (`state` = ?) order by `created_at` asc limit ?"
        );
        assert_eq!(q.bindings, ["queued", "new", "100"]);
    }

    #[test]
    fn join_on_update_is_rejected() {
        let err = Builder::new()
            .update("a", [("x", "1")])
            .join("b", "b.id = a.bid")
            .to_sql()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::ClauseNotAllowed {
                clause: "join",
                kind: StatementKind::Update,
            }
        );
    }

    #[test]
    fn require_where() {
        let b = Builder::new().update("a", [("x", "1")]);
        assert!(b.to_sql().is_ok());
        let err = b
            .to_sql_with(&CompilerConfig::new().with_require_where(true))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::UnboundedMutation {
                kind: StatementKind::Update
            }
        );
    }
}
