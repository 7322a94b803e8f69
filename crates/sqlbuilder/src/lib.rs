//! # sqlbuilder
//!
//! A fluent builder that compiles SELECT/INSERT/UPDATE/DELETE descriptions into
//! parameterized SQL plus an ordered list of bound values, ready for any
//! `?`-placeholder execution API.
//!
//! ## Features
//!
//! - **Parameterized by construction**: every value becomes a `?` placeholder
//! - **Placeholder/binding parity**: the n-th `?` always matches `bindings[n]`
//! - **Operator whitelist**: unknown operators are normalized to `=`
//! - **Backtick quoting**: bare identifiers are quoted, qualified ones are left alone
//! - **Explicit errors**: missing table, mixed statement kinds and impossible
//!   clause combinations are reported instead of rendering broken SQL
//!
//! ## Example
//!
//! ```
//! use sqlbuilder::{Builder, UpdateValue};
//!
//! // SELECT
//! let q = Builder::new()
//!     .select(["*", "sex"])
//!     .from("user")
//!     .where_eq("a", "1")
//!     .group_by("a")
//!     .having_op("a", ">", "2")
//!     .limit("3")
//!     .offset("4")
//!     .to_sql()?;
//! assert_eq!(
//!     q.sql,
//!     "select *, `sex` from `user` where (`a` = ?) group by `a` having `a` > ? limit ? offset ?"
//! );
//! assert_eq!(q.bindings, ["1", "2", "3", "4"]);
//!
//! // INSERT
//! let q = Builder::new().insert("ta", [("name", "john")]).to_sql()?;
//! assert_eq!(q.sql, "insert into `ta` (`name`) values (?)");
//!
//! // UPDATE with a raw expression
//! let q = Builder::new()
//!     .update("ta", [("a", UpdateValue::raw("a = a + 1"))])
//!     .to_sql()?;
//! assert_eq!(q.sql, "update `ta` set a = a + 1");
//! assert!(q.bindings.is_empty());
//!
//! // DELETE
//! let q = Builder::new().delete("ta").where_eq("name", "kel").to_sql()?;
//! assert_eq!(q.sql, "delete `ta` where (`name` = ?)");
//! # Ok::<(), sqlbuilder::BuildError>(())
//! ```
//!
//! ## Trust boundary
//!
//! Join conditions and [`UpdateValue::Raw`] assignments are inserted verbatim.
//! They must never be built from untrusted input.
//!
//! Identifiers (tables, columns) are quoted but not validated. A name that
//! contains `?` adds a placeholder character with no binding, which breaks
//! positional drivers; column names must come from the application, not from
//! request data.

pub mod builder;
pub mod compiler;
pub mod config;
pub mod error;
pub mod ident;
pub mod operator;

#[cfg(feature = "tracing")]
mod tracing_hook;

pub use builder::{
    Assignment, Builder, Join, JoinKind, OrderBy, Predicate, PredicateValue, StatementKind,
    UpdateValue,
};
pub use compiler::{CompiledQuery, compile};
pub use config::CompilerConfig;
pub use error::{BuildError, BuildResult};
pub use operator::{Connective, Operator};

/// Create a builder reading from `table`.
///
/// # Example
/// ```
/// let q = sqlbuilder::table("users").where_eq("id", 1).to_sql()?;
/// assert_eq!(q.sql, "select * from `users` where (`id` = ?)");
/// # Ok::<(), sqlbuilder::BuildError>(())
/// ```
pub fn table(table: impl Into<String>) -> Builder {
    Builder::table(table)
}

/// Shorthand for [`UpdateValue::raw`].
pub fn raw(expr: impl Into<String>) -> UpdateValue {
    UpdateValue::raw(expr)
}

#[cfg(test)]
mod tests;
