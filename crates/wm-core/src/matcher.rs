//! Line matcher: visual element (line number + name) → parsed statement.
//!
//! The line number is the lookup key. The name is only a sanity check: when
//! it diverges under normalized comparison the match still succeeds and
//! carries a `NameMismatch`, because the text may have been edited by hand
//! since the visual model was last rebuilt.

use crate::document::Document;
use crate::error::{MatchError, NameMismatch};
use crate::name::names_match;
use crate::statement::{Statement, StatementKind, parse_statement};

/// A located statement.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMatch {
    /// 1-indexed line number.
    pub line: usize,
    /// Line content without its `\r` terminator; all spans index into it.
    pub text: String,
    pub statement: Statement,
    pub mismatch: Option<NameMismatch>,
}

/// Locate the `kind` statement on the 1-indexed `line`.
///
/// `expected_name` is compared against the statement's name (for evolve
/// lines, the base name or the override). Pass `None` for unnamed statements
/// such as regions and annotations.
pub fn locate(
    document: &Document,
    line: usize,
    expected_name: Option<&str>,
    kind: StatementKind,
) -> Result<LineMatch, MatchError> {
    let text = document
        .line(line)
        .ok_or(MatchError::NotFound { line, kind })?;
    let statement = parse_statement(text, kind).ok_or(MatchError::NotFound { line, kind })?;

    let mismatch = expected_name.and_then(|expected| {
        if statement_has_name(&statement, expected) {
            return None;
        }
        let found = statement
            .name()
            .map(|n| n.value.clone())
            .unwrap_or_default();
        log::warn!(
            "line {line}: expected {kind} \"{expected}\" but found \"{found}\"; editing by line number"
        );
        Some(NameMismatch {
            line,
            expected: expected.to_string(),
            found,
        })
    });

    Ok(LineMatch {
        line,
        text: text.to_string(),
        statement,
        mismatch,
    })
}

/// Scan the whole document for the first `kind` statement named `name`.
pub fn find_statement(
    document: &Document,
    kind: StatementKind,
    name: &str,
) -> Result<LineMatch, MatchError> {
    document
        .lines()
        .find_map(|(line, text)| {
            let statement = parse_statement(text, kind)?;
            statement_has_name(&statement, name).then(|| LineMatch {
                line,
                text: text.to_string(),
                statement,
                mismatch: None,
            })
        })
        .ok_or_else(|| MatchError::NameNotFound {
            kind,
            name: name.to_string(),
        })
}

/// The `evolve` statement for a component, matched by base name or override.
pub fn find_evolve_for(document: &Document, name: &str) -> Result<LineMatch, MatchError> {
    find_statement(document, StatementKind::Evolve, name)
}

fn statement_has_name(statement: &Statement, expected: &str) -> bool {
    match statement {
        Statement::Evolve {
            name,
            override_name,
            ..
        } => {
            names_match(&name.value, expected)
                || override_name
                    .as_ref()
                    .is_some_and(|o| names_match(&o.name.value, expected))
        }
        other => other
            .name()
            .is_none_or(|name| names_match(&name.value, expected)),
    }
}
