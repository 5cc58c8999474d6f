//! Error taxonomy for locating statements in map text.

use crate::statement::StatementKind;
use thiserror::Error;

/// Why a statement could not be located.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The line is absent or does not open with the expected keyword.
    #[error("line {line} does not hold a `{kind}` statement")]
    NotFound { line: usize, kind: StatementKind },

    /// No line anywhere in the document holds a matching statement.
    #[error("no `{kind}` statement named \"{name}\"")]
    NameNotFound { kind: StatementKind, name: String },
}

/// The line was found but its name drifted from the visual model's.
///
/// A soft condition: the line number stays authoritative and edits proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMismatch {
    pub line: usize,
    pub expected: String,
    pub found: String,
}
