use serde::{Deserialize, Serialize};

/// Default truncation for SQL text in log events.
pub const DEFAULT_MAX_LOGGED_SQL_LENGTH: usize = 200;

/// Configuration for the compiler.
///
/// The defaults reproduce the permissive behaviour: unbounded UPDATE/DELETE
/// is allowed. Deserializable so a host can embed it in its own config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Refuse UPDATE/DELETE statements that carry no WHERE predicate.
    pub require_where: bool,
    /// Truncate SQL in `tracing` events (in bytes). `None` disables truncation.
    pub max_logged_sql_length: Option<usize>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            require_where: false,
            max_logged_sql_length: Some(DEFAULT_MAX_LOGGED_SQL_LENGTH),
        }
    }
}

impl CompilerConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a WHERE clause on UPDATE and DELETE.
    pub fn with_require_where(mut self, require: bool) -> Self {
        self.require_where = require;
        self
    }

    /// Set the maximum SQL length written to log events.
    pub fn with_max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Log SQL text in full.
    pub fn no_log_truncation(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let config = CompilerConfig::new();
        assert!(!config.require_where);
        assert_eq!(config.max_logged_sql_length, Some(DEFAULT_MAX_LOGGED_SQL_LENGTH));
    }

    #[test]
    fn builder_methods() {
        let config = CompilerConfig::new()
            .with_require_where(true)
            .with_max_logged_sql_length(64);
        assert!(config.require_where);
        assert_eq!(config.max_logged_sql_length, Some(64));
        assert_eq!(config.no_log_truncation().max_logged_sql_length, None);
    }

    #[test]
    fn deserializes_partial_json() {
        let config: CompilerConfig = serde_json::from_str(r#"{"require_where": true}"#).unwrap();
        assert!(config.require_where);
        assert_eq!(config.max_logged_sql_length, Some(DEFAULT_MAX_LOGGED_SQL_LENGTH));

        let config: CompilerConfig =
            serde_json::from_str(r#"{"max_logged_sql_length": null}"#).unwrap();
        assert_eq!(config.max_logged_sql_length, None);
    }
}
