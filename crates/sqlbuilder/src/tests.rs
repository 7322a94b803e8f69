//! Scenario tests across the builder and compiler.

use crate::{BuildError, Builder, Connective, JoinKind, StatementKind, raw};
use std::collections::BTreeMap;

fn placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

#[test]
fn test_select_scenario() {
    let q = Builder::new()
        .select(["*", "sex", "a.name", "count(1) as count"])
        .from("user")
        .where_eq("a", "1")
        .group_by("a")
        .having_op("a", ">", "2")
        .limit("3")
        .offset("4")
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "select *, `sex`, a.name, count(1) as count from `user` where (`a` = ?) group by `a` having `a` > ? limit ? offset ?"
    );
    assert_eq!(q.bindings, ["1", "2", "3", "4"]);
}

#[test]
fn test_join() {
    let q = Builder::new()
        .select(["*"])
        .from("ta")
        .join("tb", "`tb`.`aid` = `ta`.`id`")
        .where_op("ta.id", ">", "1")
        .where_op("tb.name", "=", "jack")
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "select * from `ta` inner join `tb` on `tb`.`aid` = `ta`.`id` where (ta.id > ? and tb.name = ?)"
    );
    assert_eq!(q.bindings, ["1", "jack"]);
}

#[test]
fn test_left_and_right_join() {
    let q = Builder::table("a")
        .left_join("b", "b.id = a.bid")
        .join_kind("c", "c.id = a.cid", JoinKind::Right)
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "select * from `a` left join `b` on b.id = a.bid right join `c` on c.id = a.cid"
    );
}

#[test]
fn test_insert_scenario() {
    let q = Builder::new().insert("ta", [("name", "john")]).to_sql().unwrap();
    assert_eq!(q.sql, "insert into `ta` (`name`) values (?)");
    assert_eq!(q.bindings, ["john"]);
}

#[test]
fn test_update_scenario() {
    let q = Builder::new()
        .update("ta", [("name", "john")])
        .where_eq("name", "kel")
        .where_eq("sex", "2")
        .offset("1")
        .limit("2")
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "update `ta` set `name` = ? where (`name` = ? and `sex` = ?) limit ? offset ?"
    );
    assert_eq!(q.bindings, ["john", "kel", "2", "2", "1"]);
}

#[test]
fn test_update_raw_expression_scenario() {
    let q = Builder::new()
        .update("ta", [("increase a", raw("a = a + 1"))])
        .to_sql()
        .unwrap();
    assert_eq!(q.sql, "update `ta` set a = a + 1");
    assert!(q.bindings.is_empty());
}

#[test]
fn test_delete_scenario() {
    let q = Builder::new()
        .delete("ta")
        .where_eq("name", "kel")
        .where_eq("sex", "2")
        .offset("1")
        .limit("2")
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "delete `ta` where (`name` = ? and `sex` = ?) limit ? offset ?"
    );
    assert_eq!(q.bindings, ["kel", "2", "2", "1"]);
}

#[test]
fn test_or_connective() {
    let q = Builder::table("t")
        .where_with("a", "=", 1, Connective::Or)
        .where_eq("b", 2)
        .to_sql()
        .unwrap();
    assert_eq!(q.sql, "select * from `t` where (`a` = ? or `b` = ?)");
}

#[test]
fn test_or_after_set_predicate() {
    let q = Builder::table("t")
        .where_set_with("a", "in", [1, 2], Connective::Or)
        .where_eq("b", 3)
        .to_sql()
        .unwrap();
    assert_eq!(q.sql, "select * from `t` where (`a` in (?, ?) or `b` = ?)");
    assert_eq!(q.bindings, ["1", "2", "3"]);
}

#[test]
fn test_having_connective_and_set_forms() {
    let q = Builder::table("orders")
        .max("total")
        .group_by("customer_id")
        .having_with("customer_id", ">", 10, Connective::Or)
        .having_set_with("region", "in", ["eu", "us"], Connective::Or)
        .having_not_in("status", ["void"])
        .having_set("channel", "like", ["web"])
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "select max(`total`) as aggregate from `orders` group by `customer_id` \
         having `customer_id` > ? or `region` in (?, ?) or `status` not in (?) and `channel` in (?)"
    );
    assert_eq!(q.bindings, ["10", "eu", "us", "void", "web"]);
    assert_eq!(placeholders(&q.sql), q.bindings.len());

    let q = Builder::table("orders").min("total").to_sql().unwrap();
    assert_eq!(q.sql, "select min(`total`) as aggregate from `orders`");
}

#[test]
fn test_unknown_operator_renders_eq() {
    let q = Builder::table("t")
        .where_op("a", "; drop table t; --", "x")
        .having_op("b", "nope", "y")
        .to_sql()
        .unwrap();
    assert_eq!(q.sql, "select * from `t` where (`a` = ?) having `b` = ?");
    assert_eq!(q.bindings, ["x", "y"]);
}

#[test]
fn test_operator_keywords_are_canonicalized() {
    let q = Builder::table("t")
        .where_op("name", "NOT LIKE", "%x%")
        .to_sql()
        .unwrap();
    assert_eq!(q.sql, "select * from `t` where (`name` not like ?)");
}

#[test]
fn test_where_in_preserves_element_order() {
    let q = Builder::table("t")
        .where_eq("a", "first")
        .where_in("id", ["9", "3", "5"])
        .where_eq("b", "last")
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "select * from `t` where (`a` = ? and `id` in (?, ?, ?) and `b` = ?)"
    );
    assert_eq!(q.bindings, ["first", "9", "3", "5", "last"]);
}

#[test]
fn test_where_set_coerces_operator() {
    let q = Builder::table("t")
        .where_set("id", "=", [1, 2])
        .where_set("id", "not in", [3])
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "select * from `t` where (`id` in (?, ?) and `id` not in (?))"
    );
}

#[test]
fn test_empty_in_list() {
    let q = Builder::table("t")
        .where_in("id", Vec::<i64>::new())
        .where_not_in("id", Vec::<i64>::new())
        .to_sql()
        .unwrap();
    assert_eq!(q.sql, "select * from `t` where (1 = 0 and 1 = 1)");
    assert!(q.bindings.is_empty());
}

#[test]
fn test_where_map_with_ordered_map() {
    let filters = BTreeMap::from([("status", "active"), ("role", "admin")]);
    let q = Builder::table("users").where_map(filters).to_sql().unwrap();
    // BTreeMap iterates in key order.
    assert_eq!(
        q.sql,
        "select * from `users` where (`role` = ? and `status` = ?)"
    );
    assert_eq!(q.bindings, ["admin", "active"]);
}

#[test]
fn test_having_map_and_in() {
    let q = Builder::table("t")
        .group_by("k")
        .having_map([("k", "1")])
        .having_in("k", [2, 3])
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "select * from `t` group by `k` having `k` = ? and `k` in (?, ?)"
    );
    assert_eq!(q.bindings, ["1", "2", "3"]);
}

#[test]
fn test_order_by() {
    let q = Builder::table("t")
        .order_by_desc("created_at")
        .order_by("t.name", "ASC")
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "select * from `t` order by `created_at` desc, t.name ASC"
    );
}

#[test]
fn test_numeric_and_zero_pagination() {
    let q = Builder::table("t").limit(0).offset(10).to_sql().unwrap();
    assert_eq!(q.sql, "select * from `t` limit ? offset ?");
    assert_eq!(q.bindings, ["0", "10"]);

    let q = Builder::table("t").limit(5).limit("").to_sql().unwrap();
    assert_eq!(q.sql, "select * from `t`");
    assert!(q.bindings.is_empty());
}

#[test]
fn test_aggregates() {
    let q = Builder::table("orders")
        .avg("total")
        .where_eq("status", "paid")
        .to_sql()
        .unwrap();
    assert_eq!(
        q.sql,
        "select avg(`total`) as aggregate from `orders` where (`status` = ?)"
    );
}

#[test]
fn test_conflicting_kind() {
    let err = Builder::new()
        .delete("ta")
        .insert("ta", [("a", "1")])
        .to_sql()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::ConflictingKind {
            established: StatementKind::Delete,
            requested: StatementKind::Insert,
        }
    );
}

#[test]
fn test_parity_across_kinds() {
    let builders = [
        Builder::table("t")
            .where_in("a", [1, 2, 3])
            .having_op("b", "<", 4)
            .limit(1)
            .offset(2),
        Builder::new().insert("t", [("a", 1), ("b", 2)]),
        Builder::new()
            .update("t", [("a", raw("a = a * 2")), ("b", "x".into())])
            .where_eq("c", 1)
            .limit(3),
        Builder::new()
            .delete("t")
            .where_not_in("a", ["x", "y"])
            .offset(9),
    ];
    for b in &builders {
        let q = b.to_sql().unwrap();
        assert_eq!(placeholders(&q.sql), q.bindings.len(), "{}", q.sql);
        assert_eq!(b.binding_count(), q.bindings.len(), "{}", q.sql);
    }
}
