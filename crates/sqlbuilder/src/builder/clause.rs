//! Structured descriptors recorded by the builder, one per clause entry.

use crate::operator::{Connective, Operator};
use std::fmt;

/// Category of SQL statement being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatementKind {
    #[default]
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateValue {
    /// One bound value, one placeholder.
    Single(String),
    /// Set membership; one placeholder per element, in order.
    Set(Vec<String>),
}

impl PredicateValue {
    /// Number of placeholders (and bindings) this value produces.
    pub fn placeholder_count(&self) -> usize {
        match self {
            PredicateValue::Single(_) => 1,
            PredicateValue::Set(values) => values.len(),
        }
    }
}

/// A single WHERE/HAVING condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: String,
    pub operator: Operator,
    pub value: PredicateValue,
    /// Rendered between this predicate and the next one.
    pub connective: Connective,
}

/// JOIN flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
}

impl JoinKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "inner",
            JoinKind::Left => "left",
            JoinKind::Right => "right",
        }
    }
}

/// A JOIN clause. `condition` is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub table: String,
    pub condition: String,
    pub kind: JoinKind,
}

/// An ORDER BY entry. `direction` is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: String,
}

/// Value assigned by an UPDATE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateValue {
    /// Parameterized value: `column = ?`
    Bind(String),
    /// Raw SQL assignment emitted verbatim, e.g. `a = a + 1`. Produces no binding.
    Raw(String),
}

impl UpdateValue {
    /// Create a raw SQL assignment.
    ///
    /// The text is inserted into the statement without escaping; never build
    /// it from untrusted input.
    pub fn raw(expr: impl Into<String>) -> Self {
        UpdateValue::Raw(expr.into())
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, UpdateValue::Raw(_))
    }
}

impl From<&str> for UpdateValue {
    fn from(value: &str) -> Self {
        UpdateValue::Bind(value.to_string())
    }
}

impl From<String> for UpdateValue {
    fn from(value: String) -> Self {
        UpdateValue::Bind(value)
    }
}

impl From<&String> for UpdateValue {
    fn from(value: &String) -> Self {
        UpdateValue::Bind(value.clone())
    }
}

/// One SET entry of an UPDATE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: String,
    pub value: UpdateValue,
}
