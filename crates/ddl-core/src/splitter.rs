//! Splitting SQL blobs into individually executable statements.
//!
//! Statements are separated by `;`. A semicolon that belongs inside a
//! statement (a string literal, a default expression) is written as `\;`;
//! the backslash is dropped when the blob is split.

use tracing::trace;

/// Splits `blob` into trimmed, `;`-terminated statements in source order.
///
/// Empty and whitespace-only fragments are discarded. Never fails: a stray
/// backslash that does not precede a semicolon is kept as-is.
///
/// ```rust
/// use ddl_core::splitter::split;
///
/// assert_eq!(split("a;b;"), vec!["a;", "b;"]);
/// assert_eq!(split("a\\;b;"), vec!["a;b;"]);
/// ```
#[must_use]
pub fn split(blob: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut chars = blob.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&';') => {
                chars.next();
                current.push(';');
            }
            ';' => {
                push_fragment(&mut statements, &current);
                current.clear();
            }
            _ => current.push(c),
        }
    }
    push_fragment(&mut statements, &current);

    statements
}

fn push_fragment(statements: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return;
    }
    trace!(statement = %fragment, "Split statement");
    statements.push(format!("{fragment};"));
}

/// Escapes every semicolon in `text` as `\;`.
#[must_use]
pub fn escape(text: &str) -> String {
    text.replace(';', "\\;")
}

/// Escapes one statement so that [`split`] returns it unchanged.
///
/// A trailing `;` is kept as the terminator; every other semicolon is escaped.
/// A body ending in `\` is separated from the terminator by a space, which
/// [`split`] trims away.
///
/// ```rust
/// use ddl_core::splitter::{escape_statement, split};
///
/// let statement = "CREATE TABLE t (kind ENUM('a;b'));";
/// assert_eq!(split(&escape_statement(statement)), vec![statement]);
/// ```
#[must_use]
pub fn escape_statement(statement: &str) -> String {
    let body = statement.strip_suffix(';').unwrap_or(statement);
    let body = escape(body);
    if body.ends_with('\\') {
        format!("{body} ;")
    } else {
        format!("{body};")
    }
}

/// Joins normalized statements back into one blob that [`split`] restores.
#[must_use]
pub fn join<S: AsRef<str>>(statements: &[S]) -> String {
    statements
        .iter()
        .map(|statement| escape_statement(statement.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split("a;b;"), vec!["a;", "b;"]);
    }

    #[test]
    fn test_split_escaped_semicolon() {
        assert_eq!(split("a\\;b;"), vec!["a;b;"]);
    }

    #[test]
    fn test_split_trims_and_drops_empty() {
        assert_eq!(
            split("  CREATE TABLE a (id INTEGER) ;\n\n ;  ; DROP TABLE b"),
            vec!["CREATE TABLE a (id INTEGER);", "DROP TABLE b;"]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split("").is_empty());
        assert!(split(" ;\n; \t").is_empty());
    }

    #[test]
    fn test_split_keeps_lone_backslash() {
        assert_eq!(split("SELECT 'a\\b';"), vec!["SELECT 'a\\b';"]);
        assert_eq!(split("trailing\\"), vec!["trailing\\;"]);
    }

    #[test]
    fn test_split_double_backslash() {
        // The second backslash escapes the semicolon.
        assert_eq!(split("a\\\\;b;"), vec!["a\\;b;"]);
    }

    #[test]
    fn test_split_is_idempotent() {
        let inputs = [
            "a;b;",
            "CREATE TABLE t (d TEXT DEFAULT 'x\\;y');CREATE INDEX i ON t (d);",
            "  one ; ; two\n",
            "x\\",
            "a\\ ;b",
            "",
        ];
        for input in inputs {
            let once = split(input);
            assert_eq!(split(&join(&once)), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_trailing_backslash_survives_join() {
        let once = split("x\\");
        assert_eq!(once, vec!["x\\;"]);
        assert_eq!(join(&once), "x\\ ;");
        assert_eq!(split(&join(&once)), once);
    }

    #[test]
    fn test_escape_statement() {
        assert_eq!(escape_statement("a;b;"), "a\\;b;");
        assert_eq!(escape_statement("no terminator"), "no terminator;");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a;b"), "a\\;b");
        assert_eq!(escape("plain"), "plain");
    }
}
