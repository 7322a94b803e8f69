//! Error types for sqlbuilder

use crate::builder::StatementKind;
use thiserror::Error;

/// Result type alias for statement compilation
pub type BuildResult<T> = Result<T, BuildError>;

/// Reasons a statement description cannot be rendered into SQL.
///
/// Mutators never fail; problems are recorded on the builder and reported by
/// the terminal `to_sql` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No table was set via `from`, `insert`, `update` or `delete`.
    #[error("no source table set")]
    MissingTable,

    /// A second, different statement kind was requested.
    #[error("conflicting statement kind: already {established}, cannot become {requested}")]
    ConflictingKind {
        established: StatementKind,
        requested: StatementKind,
    },

    /// The same statement kind was requested again against another table.
    #[error("{kind} already targets `{established}`, cannot also target `{requested}`")]
    ConflictingTable {
        kind: StatementKind,
        established: String,
        requested: String,
    },

    /// INSERT without any columns.
    #[error("insert into `{table}` has no columns")]
    EmptyInsert { table: String },

    /// UPDATE without any assignments.
    #[error("update of `{table}` has no assignments")]
    EmptyUpdate { table: String },

    /// The statement shape has no place for a clause that was populated.
    #[error("{clause} clause is not allowed in {kind} statements")]
    ClauseNotAllowed {
        clause: &'static str,
        kind: StatementKind,
    },

    /// UPDATE/DELETE without WHERE while the config requires one.
    #[error("{kind} without a where clause is not allowed")]
    UnboundedMutation { kind: StatementKind },
}

impl BuildError {
    /// Create a clause-not-allowed error
    pub fn clause_not_allowed(clause: &'static str, kind: StatementKind) -> Self {
        Self::ClauseNotAllowed { clause, kind }
    }

    /// Check if this error came from mixing statement kinds
    pub fn is_conflicting_kind(&self) -> bool {
        matches!(self, Self::ConflictingKind { .. })
    }
}
