//! Predicate operators and boolean connectives.
//!
//! Operators are given as text by callers and normalized against a fixed
//! whitelist. Text outside the whitelist becomes [`Operator::Eq`]; this is a
//! normalization rule, not an error.
//!
//! # Example
//! ```
//! use sqlbuilder::Operator;
//!
//! assert_eq!(Operator::normalize(">="), Operator::Gte);
//! assert_eq!(Operator::normalize("NOT LIKE"), Operator::NotLike);
//! assert_eq!(Operator::normalize("; drop table"), Operator::Eq);
//! ```

use std::fmt;

/// Comparison operator accepted in WHERE/HAVING predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    #[default]
    Eq,
    Lt,
    Gt,
    Lte,
    Gte,
    /// `<>`
    NotEqAnsi,
    /// `!=`
    Ne,
    /// `<=>` (null-safe equality)
    NullSafeEq,
    Like,
    LikeBinary,
    NotLike,
    Ilike,
    NotIlike,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    Rlike,
    Regexp,
    NotRegexp,
    /// `~`
    Match,
    /// `~*`
    MatchInsensitive,
    /// `!~`
    NotMatch,
    /// `!~*`
    NotMatchInsensitive,
    SimilarTo,
    NotSimilarTo,
    /// `~~*`
    LikeInsensitive,
    /// `!~~*`
    NotLikeInsensitive,
    In,
    NotIn,
}

impl Operator {
    /// Every whitelisted operator.
    pub const ALL: [Operator; 31] = [
        Operator::Eq,
        Operator::Lt,
        Operator::Gt,
        Operator::Lte,
        Operator::Gte,
        Operator::NotEqAnsi,
        Operator::Ne,
        Operator::NullSafeEq,
        Operator::Like,
        Operator::LikeBinary,
        Operator::NotLike,
        Operator::Ilike,
        Operator::BitAnd,
        Operator::BitOr,
        Operator::BitXor,
        Operator::ShiftLeft,
        Operator::ShiftRight,
        Operator::Rlike,
        Operator::Regexp,
        Operator::NotRegexp,
        Operator::Match,
        Operator::MatchInsensitive,
        Operator::NotMatch,
        Operator::NotMatchInsensitive,
        Operator::SimilarTo,
        Operator::NotSimilarTo,
        Operator::NotIlike,
        Operator::LikeInsensitive,
        Operator::NotLikeInsensitive,
        Operator::In,
        Operator::NotIn,
    ];

    /// SQL text of the operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Lte => "<=",
            Operator::Gte => ">=",
            Operator::NotEqAnsi => "<>",
            Operator::Ne => "!=",
            Operator::NullSafeEq => "<=>",
            Operator::Like => "like",
            Operator::LikeBinary => "like binary",
            Operator::NotLike => "not like",
            Operator::Ilike => "ilike",
            Operator::NotIlike => "not ilike",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
            Operator::Rlike => "rlike",
            Operator::Regexp => "regexp",
            Operator::NotRegexp => "not regexp",
            Operator::Match => "~",
            Operator::MatchInsensitive => "~*",
            Operator::NotMatch => "!~",
            Operator::NotMatchInsensitive => "!~*",
            Operator::SimilarTo => "similar to",
            Operator::NotSimilarTo => "not similar to",
            Operator::LikeInsensitive => "~~*",
            Operator::NotLikeInsensitive => "!~~*",
            Operator::In => "in",
            Operator::NotIn => "not in",
        }
    }

    /// Look an operator up in the whitelist.
    ///
    /// Surrounding whitespace is ignored and keywords match case-insensitively.
    pub fn parse(op: &str) -> Option<Operator> {
        let op = op.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(op))
    }

    /// Normalize caller-supplied operator text; unknown text becomes `=`.
    pub fn normalize(op: &str) -> Operator {
        match Self::parse(op) {
            Some(found) => found,
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "sqlbuilder", operator = op, "unknown operator coerced to =");
                Operator::Eq
            }
        }
    }

    /// Normalize an operator for a multi-value predicate: only `in` and
    /// `not in` survive, everything else becomes `in`.
    pub fn normalize_set(op: &str) -> Operator {
        match Self::parse(op) {
            Some(Operator::NotIn) => Operator::NotIn,
            Some(Operator::In) => Operator::In,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "sqlbuilder", operator = op, "set operator coerced to in");
                Operator::In
            }
        }
    }

    /// Whether this operator compares against a list of values.
    pub const fn is_set(self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean connective rendered between a predicate and the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connective {
    #[default]
    And,
    Or,
}

impl Connective {
    /// SQL keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
