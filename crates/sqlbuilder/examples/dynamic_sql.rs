//! Build statements from optional filters and print `(sql, bindings)`.
//!
//! Run with: `cargo run -p sqlbuilder --example dynamic_sql`

use sqlbuilder::{BuildResult, Builder, CompilerConfig, raw};

struct UserFilter<'a> {
    status: Option<&'a str>,
    min_age: Option<u32>,
    roles: &'a [&'a str],
    page: u32,
    per_page: u32,
}

fn search_users(filter: &UserFilter<'_>) -> Builder {
    let mut b = Builder::new()
        .select(["id", "name", "email"])
        .from("users");
    if let Some(status) = filter.status {
        b = b.where_eq("status", status);
    }
    if let Some(min_age) = filter.min_age {
        b = b.where_op("age", ">=", min_age);
    }
    if !filter.roles.is_empty() {
        b = b.where_in("role", filter.roles);
    }
    let page = filter.page.max(1);
    b.order_by_desc("created_at")
        .limit(filter.per_page)
        .offset((page - 1) * filter.per_page)
}

fn main() -> BuildResult<()> {
    let filter = UserFilter {
        status: Some("active"),
        min_age: None,
        roles: &["admin", "editor"],
        page: 3,
        per_page: 25,
    };
    print(search_users(&filter).to_sql()?);

    print(
        Builder::new()
            .insert("users", [("name", "alice"), ("email", "alice@example.com")])
            .to_sql()?,
    );

    let strict = CompilerConfig::new().with_require_where(true);
    print(
        Builder::new()
            .update("users", [("login_count", raw("login_count = login_count + 1"))])
            .where_eq("id", 42)
            .to_sql_with(&strict)?,
    );

    match Builder::new().delete("users").to_sql_with(&strict) {
        Ok(q) => print(q),
        Err(e) => println!("refused: {e}"),
    }

    Ok(())
}

fn print(q: sqlbuilder::CompiledQuery) {
    println!("{}\n  bindings: {:?}", q.sql, q.bindings);
}
