//! The statement builder.
//!
//! [`Builder`] accumulates a structured description of one statement through
//! chained, consuming calls. It never renders SQL itself; the terminal
//! [`Builder::to_sql`] hands it to [`crate::compiler`].
//!
//! ```
//! use sqlbuilder::Builder;
//!
//! let query = Builder::new()
//!     .select(["id", "name"])
//!     .from("users")
//!     .where_eq("status", "active")
//!     .where_op("age", ">", 18)
//!     .order_by_desc("created_at")
//!     .limit(10)
//!     .to_sql()?;
//!
//! assert_eq!(
//!     query.sql,
//!     "select `id`, `name` from `users` where (`status` = ? and `age` > ?) order by `created_at` desc limit ?"
//! );
//! assert_eq!(query.bindings, ["active", "18", "10"]);
//! # Ok::<(), sqlbuilder::BuildError>(())
//! ```

mod clause;
pub(crate) mod ledger;

pub use clause::{
    Assignment, Join, JoinKind, OrderBy, Predicate, PredicateValue, StatementKind, UpdateValue,
};

use crate::compiler::{self, CompiledQuery};
use crate::config::CompilerConfig;
use crate::error::{BuildError, BuildResult};
use crate::ident::wrap_identifier;
use crate::operator::{Connective, Operator};
use ledger::{BindingCategory, Ledger};
use std::fmt::Display;

#[derive(Debug, Clone, Copy)]
enum PredicateTarget {
    Where,
    Having,
}

impl PredicateTarget {
    fn category(self) -> BindingCategory {
        match self {
            PredicateTarget::Where => BindingCategory::Where,
            PredicateTarget::Having => BindingCategory::Having,
        }
    }
}

/// Mutable description of one SQL statement under construction.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    /// Explicit statement kind; `None` renders a SELECT.
    pub(crate) kind: Option<StatementKind>,
    pub(crate) distinct: bool,
    /// Projection (empty => `*`)
    pub(crate) columns: Vec<String>,
    /// Source table, also the target of INSERT/UPDATE/DELETE
    pub(crate) table: Option<String>,
    pub(crate) wheres: Vec<Predicate>,
    pub(crate) havings: Vec<Predicate>,
    pub(crate) joins: Vec<Join>,
    pub(crate) groups: Vec<String>,
    pub(crate) orders: Vec<OrderBy>,
    pub(crate) insert_columns: Vec<String>,
    pub(crate) assignments: Vec<Assignment>,
    pub(crate) ledger: Ledger,
    /// First error recorded by a mutator, reported at compile time
    pub(crate) build_error: Option<BuildError>,
}

impl Builder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder reading from `table`.
    pub fn table(table: impl Into<String>) -> Self {
        Self::new().from(table)
    }

    // ==================== Introspection ====================

    /// The statement shape that will be compiled.
    pub fn statement_kind(&self) -> StatementKind {
        self.kind.unwrap_or_default()
    }

    /// The source/target table, if one has been set.
    pub fn source_table(&self) -> Option<&str> {
        self.table.as_deref().filter(|t| !t.is_empty())
    }

    /// Number of bound values recorded so far.
    pub fn binding_count(&self) -> usize {
        self.ledger.len()
    }

    // ==================== Projection & source ====================

    /// Replace the projection list.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append one column to the projection.
    pub fn add_select(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Render `select distinct`.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Set the source table.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    // ==================== Aggregates ====================

    /// Project `count(column) as aggregate`.
    pub fn count(self, column: &str) -> Self {
        self.aggregate("count", column)
    }

    /// Project `min(column) as aggregate`.
    pub fn min(self, column: &str) -> Self {
        self.aggregate("min", column)
    }

    /// Project `max(column) as aggregate`.
    pub fn max(self, column: &str) -> Self {
        self.aggregate("max", column)
    }

    /// Project `sum(column) as aggregate`.
    pub fn sum(self, column: &str) -> Self {
        self.aggregate("sum", column)
    }

    /// Project `avg(column) as aggregate`.
    pub fn avg(self, column: &str) -> Self {
        self.aggregate("avg", column)
    }

    fn aggregate(mut self, function: &str, column: &str) -> Self {
        self.columns = vec![format!(
            "{function}({}) as aggregate",
            wrap_identifier(column)
        )];
        self
    }

    // ==================== WHERE ====================

    /// Add WHERE: column = value
    pub fn where_eq(mut self, column: impl Into<String>, value: impl Display) -> Self {
        self.push_scalar(
            PredicateTarget::Where,
            column.into(),
            Operator::Eq,
            value.to_string(),
            Connective::And,
        );
        self
    }

    /// Add WHERE: column op value. Unknown operators become `=`.
    pub fn where_op(mut self, column: impl Into<String>, op: &str, value: impl Display) -> Self {
        self.push_scalar(
            PredicateTarget::Where,
            column.into(),
            Operator::normalize(op),
            value.to_string(),
            Connective::And,
        );
        self
    }

    /// Add WHERE: column op value, followed by `connective` before the next predicate.
    pub fn where_with(
        mut self,
        column: impl Into<String>,
        op: &str,
        value: impl Display,
        connective: Connective,
    ) -> Self {
        self.push_scalar(
            PredicateTarget::Where,
            column.into(),
            Operator::normalize(op),
            value.to_string(),
            connective,
        );
        self
    }

    /// Add WHERE: column IN (values...)
    pub fn where_in<I>(mut self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.push_set(
            PredicateTarget::Where,
            column.into(),
            Operator::In,
            values,
            Connective::And,
        );
        self
    }

    /// Add WHERE: column NOT IN (values...)
    pub fn where_not_in<I>(mut self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.push_set(
            PredicateTarget::Where,
            column.into(),
            Operator::NotIn,
            values,
            Connective::And,
        );
        self
    }

    /// Add a multi-value WHERE predicate; `op` is normalized to `in`/`not in`.
    pub fn where_set<I>(self, column: impl Into<String>, op: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.where_set_with(column, op, values, Connective::And)
    }

    /// Like [`Builder::where_set`], followed by `connective` before the next predicate.
    pub fn where_set_with<I>(
        mut self,
        column: impl Into<String>,
        op: &str,
        values: I,
        connective: Connective,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.push_set(
            PredicateTarget::Where,
            column.into(),
            Operator::normalize_set(op),
            values,
            connective,
        );
        self
    }

    /// Add `column = value` for each pair, joined with `and`, in iteration order.
    ///
    /// Pass an ordered collection (a `Vec` of pairs, an array, a `BTreeMap`);
    /// an unordered map makes the predicate and binding order unpredictable.
    pub fn where_map<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        self.push_pairs(PredicateTarget::Where, pairs);
        self
    }

    // ==================== HAVING ====================

    /// Add HAVING: column = value
    pub fn having_eq(mut self, column: impl Into<String>, value: impl Display) -> Self {
        self.push_scalar(
            PredicateTarget::Having,
            column.into(),
            Operator::Eq,
            value.to_string(),
            Connective::And,
        );
        self
    }

    /// Add HAVING: column op value. Unknown operators become `=`.
    pub fn having_op(mut self, column: impl Into<String>, op: &str, value: impl Display) -> Self {
        self.push_scalar(
            PredicateTarget::Having,
            column.into(),
            Operator::normalize(op),
            value.to_string(),
            Connective::And,
        );
        self
    }

    /// Add HAVING: column op value, followed by `connective` before the next predicate.
    pub fn having_with(
        mut self,
        column: impl Into<String>,
        op: &str,
        value: impl Display,
        connective: Connective,
    ) -> Self {
        self.push_scalar(
            PredicateTarget::Having,
            column.into(),
            Operator::normalize(op),
            value.to_string(),
            connective,
        );
        self
    }

    /// Add HAVING: column IN (values...)
    pub fn having_in<I>(mut self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.push_set(
            PredicateTarget::Having,
            column.into(),
            Operator::In,
            values,
            Connective::And,
        );
        self
    }

    /// Add HAVING: column NOT IN (values...)
    pub fn having_not_in<I>(mut self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.push_set(
            PredicateTarget::Having,
            column.into(),
            Operator::NotIn,
            values,
            Connective::And,
        );
        self
    }

    /// Add a multi-value HAVING predicate; `op` is normalized to `in`/`not in`.
    pub fn having_set<I>(self, column: impl Into<String>, op: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.having_set_with(column, op, values, Connective::And)
    }

    /// Like [`Builder::having_set`], followed by `connective` before the next predicate.
    pub fn having_set_with<I>(
        mut self,
        column: impl Into<String>,
        op: &str,
        values: I,
        connective: Connective,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.push_set(
            PredicateTarget::Having,
            column.into(),
            Operator::normalize_set(op),
            values,
            connective,
        );
        self
    }

    /// Add HAVING `column = value` for each pair, in iteration order.
    pub fn having_map<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        self.push_pairs(PredicateTarget::Having, pairs);
        self
    }

    // ==================== JOIN ====================

    /// Add INNER JOIN. `condition` is inserted verbatim.
    pub fn join(self, table: impl Into<String>, condition: impl Into<String>) -> Self {
        self.join_kind(table, condition, JoinKind::Inner)
    }

    /// Add LEFT JOIN.
    pub fn left_join(self, table: impl Into<String>, condition: impl Into<String>) -> Self {
        self.join_kind(table, condition, JoinKind::Left)
    }

    /// Add RIGHT JOIN.
    pub fn right_join(self, table: impl Into<String>, condition: impl Into<String>) -> Self {
        self.join_kind(table, condition, JoinKind::Right)
    }

    /// Add a JOIN of the given kind.
    ///
    /// The condition is trusted SQL: it is neither quoted nor parameterized.
    pub fn join_kind(
        mut self,
        table: impl Into<String>,
        condition: impl Into<String>,
        kind: JoinKind,
    ) -> Self {
        self.joins.push(Join {
            table: table.into(),
            condition: condition.into(),
            kind,
        });
        self
    }

    // ==================== Grouping & ordering ====================

    /// Append a GROUP BY column.
    pub fn group_by(mut self, column: impl Into<String>) -> Self {
        self.groups.push(column.into());
        self
    }

    /// Append several GROUP BY columns.
    pub fn group_by_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append an ORDER BY entry. `direction` is emitted as given.
    pub fn order_by(mut self, column: impl Into<String>, direction: impl Into<String>) -> Self {
        self.orders.push(OrderBy {
            column: column.into(),
            direction: direction.into(),
        });
        self
    }

    /// ORDER BY column asc
    pub fn order_by_asc(self, column: impl Into<String>) -> Self {
        self.order_by(column, "asc")
    }

    /// ORDER BY column desc
    pub fn order_by_desc(self, column: impl Into<String>) -> Self {
        self.order_by(column, "desc")
    }

    // ==================== Pagination ====================

    /// Set LIMIT. Accepts numbers or numeric text; empty text removes the clause.
    pub fn limit(mut self, n: impl Display) -> Self {
        self.ledger.set_limit(n.to_string());
        self
    }

    /// Set OFFSET. Accepts numbers or numeric text; empty text removes the clause.
    pub fn offset(mut self, n: impl Display) -> Self {
        self.ledger.set_offset(n.to_string());
        self
    }

    // ==================== INSERT / UPDATE / DELETE ====================

    /// Turn this into an INSERT of one row into `table`.
    pub fn insert<I, K, V>(mut self, table: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        if !self.claim(StatementKind::Insert, table.into()) {
            return self;
        }
        for (column, value) in values {
            self.insert_columns.push(column.into());
            self.ledger.push(BindingCategory::Insert, value.to_string());
        }
        self
    }

    /// Turn this into an UPDATE of `table`.
    ///
    /// Plain values become `column = ?`; [`UpdateValue::Raw`] entries are
    /// emitted verbatim with no binding.
    pub fn update<I, K, V>(mut self, table: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<UpdateValue>,
    {
        if !self.claim(StatementKind::Update, table.into()) {
            return self;
        }
        for (column, value) in values {
            self.push_assignment(column.into(), value.into());
        }
        self
    }

    /// UPDATE `table` SET column = column + by
    pub fn increment(self, table: impl Into<String>, column: &str, by: i64) -> Self {
        self.step(table, column, i128::from(by))
    }

    /// UPDATE `table` SET column = column - by
    pub fn decrement(self, table: impl Into<String>, column: &str, by: i64) -> Self {
        self.step(table, column, -i128::from(by))
    }

    /// Negative deltas render as subtraction.
    fn step(mut self, table: impl Into<String>, column: &str, delta: i128) -> Self {
        if !self.claim(StatementKind::Update, table.into()) {
            return self;
        }
        let sign = if delta < 0 { '-' } else { '+' };
        let by = delta.unsigned_abs();
        let quoted = wrap_identifier(column);
        self.push_assignment(
            column.to_string(),
            UpdateValue::Raw(format!("{quoted} = {quoted} {sign} {by}")),
        );
        self
    }

    /// Turn this into a DELETE from `table`.
    pub fn delete(mut self, table: impl Into<String>) -> Self {
        if !self.claim(StatementKind::Delete, table.into()) {
            return self;
        }
        self
    }

    // ==================== Compile ====================

    /// Compile with the default configuration.
    pub fn to_sql(&self) -> BuildResult<CompiledQuery> {
        compiler::compile(self, &CompilerConfig::default())
    }

    /// Compile with an explicit configuration.
    pub fn to_sql_with(&self, config: &CompilerConfig) -> BuildResult<CompiledQuery> {
        compiler::compile(self, config)
    }

    // ==================== Internals ====================

    /// Set the statement kind. Returns `false` (and records an error) if a
    /// different kind was already established.
    fn establish(&mut self, requested: StatementKind) -> bool {
        match self.kind {
            None => {
                self.kind = Some(requested);
                true
            }
            Some(established) if established == requested => true,
            Some(established) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "sqlbuilder",
                    %established,
                    %requested,
                    "conflicting statement kind ignored"
                );
                if self.build_error.is_none() {
                    self.build_error = Some(BuildError::ConflictingKind {
                        established,
                        requested,
                    });
                }
                false
            }
        }
    }

    /// Establish `kind` targeting `table`. Repeating the kind against a
    /// different table is refused and recorded.
    fn claim(&mut self, kind: StatementKind, table: String) -> bool {
        let repeated = self.kind == Some(kind);
        if !self.establish(kind) {
            return false;
        }
        if repeated
            && let Some(established) = self.table.as_deref().filter(|t| *t != table)
        {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "sqlbuilder",
                %kind,
                established,
                requested = %table,
                "conflicting target table ignored"
            );
            if self.build_error.is_none() {
                self.build_error = Some(BuildError::ConflictingTable {
                    kind,
                    established: established.to_string(),
                    requested: table,
                });
            }
            return false;
        }
        self.table = Some(table);
        true
    }

    fn predicates_mut(&mut self, target: PredicateTarget) -> &mut Vec<Predicate> {
        match target {
            PredicateTarget::Where => &mut self.wheres,
            PredicateTarget::Having => &mut self.havings,
        }
    }

    fn push_scalar(
        &mut self,
        target: PredicateTarget,
        column: String,
        operator: Operator,
        value: String,
        connective: Connective,
    ) {
        // `in` against a single value still needs parentheses.
        let value = if operator.is_set() {
            PredicateValue::Set(vec![value])
        } else {
            PredicateValue::Single(value)
        };
        self.push_predicate(target, column, operator, value, connective);
    }

    fn push_set<I>(
        &mut self,
        target: PredicateTarget,
        column: String,
        operator: Operator,
        values: I,
        connective: Connective,
    ) where
        I: IntoIterator,
        I::Item: Display,
    {
        let values = values.into_iter().map(|v| v.to_string()).collect();
        self.push_predicate(
            target,
            column,
            operator,
            PredicateValue::Set(values),
            connective,
        );
    }

    fn push_pairs<I, K, V>(&mut self, target: PredicateTarget, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        for (column, value) in pairs {
            self.push_scalar(
                target,
                column.into(),
                Operator::Eq,
                value.to_string(),
                Connective::And,
            );
        }
    }

    fn push_predicate(
        &mut self,
        target: PredicateTarget,
        column: String,
        operator: Operator,
        value: PredicateValue,
        connective: Connective,
    ) {
        match &value {
            PredicateValue::Single(v) => self.ledger.push(target.category(), v.clone()),
            PredicateValue::Set(vs) => self.ledger.extend(target.category(), vs.iter().cloned()),
        }
        self.predicates_mut(target).push(Predicate {
            column,
            operator,
            value,
            connective,
        });
    }

    fn push_assignment(&mut self, column: String, value: UpdateValue) {
        if let UpdateValue::Bind(v) = &value {
            self.ledger.push(BindingCategory::Update, v.clone());
        }
        self.assignments.push(Assignment { column, value });
    }
}
