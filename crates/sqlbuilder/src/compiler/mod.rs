//! Renders a finished [`Builder`] into SQL text plus ordered bindings.
//!
//! Compilation is a pure read of the builder: it can run any number of times
//! and always yields the same result. For every statement kind, the `n`-th
//! `?` in [`CompiledQuery::sql`] (left to right) corresponds to
//! `bindings[n]`.
//!
//! # Dialect
//!
//! - identifiers are backtick-quoted (see [`crate::ident`])
//! - `where` lists are parenthesized, `having` lists are not
//! - `limit ?` precedes `offset ?`, and their bindings follow the same order
//! - `delete` has no `from` keyword

mod clauses;
mod delete;
mod insert;
mod select;
mod update;

use crate::builder::{Builder, StatementKind};
use crate::config::CompilerConfig;
use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};

/// The result of compiling a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledQuery {
    /// SQL text with positional `?` placeholders.
    pub sql: String,
    /// Bound values, in placeholder order.
    pub bindings: Vec<String>,
}

impl CompiledQuery {
    /// Create a compiled query.
    pub fn new(sql: String, bindings: Vec<String>) -> Self {
        Self { sql, bindings }
    }

    /// Split into `(sql, bindings)`.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.sql, self.bindings)
    }
}

/// Compile `builder` according to its statement kind.
pub fn compile(builder: &Builder, config: &CompilerConfig) -> BuildResult<CompiledQuery> {
    if let Some(err) = &builder.build_error {
        return Err(err.clone());
    }
    let table = builder.source_table().ok_or(BuildError::MissingTable)?;

    let kind = builder.statement_kind();
    let compiled = match kind {
        StatementKind::Delete => delete::compile(builder, table, config)?,
        StatementKind::Insert => insert::compile(builder, table)?,
        StatementKind::Update => update::compile(builder, table, config)?,
        StatementKind::Select => select::compile(builder, table),
    };

    #[cfg(feature = "tracing")]
    crate::tracing_hook::log_compiled(kind, &compiled, config);

    Ok(compiled)
}
