//! SQL identifier quoting.
//!
//! Bare identifiers are wrapped in backticks. Text that already looks
//! qualified or computed is passed through untouched:
//!
//! - the wildcard `*`
//! - anything containing `.`, `(` or `)` (`a.name`, `count(1) as count`)
//!
//! Existing backticks are stripped before re-wrapping, so quoting is idempotent.
//!
//! Quoting is not validation: `?` and other characters inside a name are kept
//! as-is, so identifiers must be trusted text.
//!
//! # Example
//! ```
//! use sqlbuilder::ident::wrap_identifier;
//!
//! assert_eq!(wrap_identifier("user"), "`user`");
//! assert_eq!(wrap_identifier("`user`"), "`user`");
//! assert_eq!(wrap_identifier("u.id"), "u.id");
//! assert_eq!(wrap_identifier("*"), "*");
//! ```

/// Delimiter used around quoted identifiers.
pub const QUOTE: char = '`';

const PASSTHROUGH_CHARS: [char; 3] = ['.', '(', ')'];

/// Whether `name` is emitted verbatim instead of quoted.
pub fn is_passthrough(name: &str) -> bool {
    name == "*" || name.contains(PASSTHROUGH_CHARS)
}

/// Quote an identifier for the backtick dialect.
pub fn wrap_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    write_identifier(name, &mut out);
    out
}

/// Append a quoted identifier to `out`.
pub(crate) fn write_identifier(name: &str, out: &mut String) {
    if is_passthrough(name) {
        out.push_str(name);
        return;
    }
    out.push(QUOTE);
    out.extend(name.chars().filter(|&c| c != QUOTE));
    out.push(QUOTE);
}

/// Quote each identifier and join them with `", "`.
pub(crate) fn write_identifier_list<'a>(
    names: impl IntoIterator<Item = &'a str>,
    out: &mut String,
) {
    for (i, name) in names.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_identifier(name, out);
    }
}
