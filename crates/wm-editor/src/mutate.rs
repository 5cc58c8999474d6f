//! Statement mutators: surgical, single-line edits of map text.
//!
//! Each mutator locates its statement by line number, then replaces only
//! the byte spans the statement parser reported. Everything else on the
//! line, and every other line, is left byte-for-byte intact.
//!
//! Setting a field to the value it already holds (at the configured
//! precision) produces no edit, so every mutator is idempotent.

use thiserror::Error;
use wm_core::document::Document;
use wm_core::error::MatchError;
use wm_core::format::{EditConfig, format_decimal, same_at_precision};
use wm_core::matcher::{LineMatch, locate};
use wm_core::name::encode_name;
use wm_core::position::MapPosition;
use wm_core::statement::{NumberToken, Span, Statement, StatementKind};

/// Why a mutator left the document unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("statement not found: {0}")]
    StatementNotFound(#[from] MatchError),

    /// The statement exists but lacks a clause the edit needs as an anchor.
    #[error("line {line}: `{kind}` statement has no {clause}")]
    MissingClause {
        line: usize,
        kind: StatementKind,
        clause: &'static str,
    },

    /// The operation does not apply to this statement kind.
    #[error("cannot {operation} a `{kind}` statement")]
    UnsupportedKind {
        kind: StatementKind,
        operation: &'static str,
    },
}

// ─── Edit plumbing ───────────────────────────────────────────────────────

/// Byte-span replacements against one line.
#[derive(Debug, Default)]
struct LineEdits {
    edits: Vec<(Span, String)>,
}

impl LineEdits {
    fn replace(&mut self, span: Span, text: impl Into<String>) {
        self.edits.push((span, text.into()));
    }

    fn insert(&mut self, at: usize, text: impl Into<String>) {
        self.replace(Span::new(at, at), text);
    }

    /// Rewrite every number of a clause unless all of them already hold
    /// their new value at `precision`. A clause is never left half rewritten.
    fn set_numbers<'a>(
        &mut self,
        tokens: impl IntoIterator<Item = &'a NumberToken>,
        values: &[f64],
        precision: usize,
    ) {
        let pairs: Vec<_> = tokens.into_iter().zip(values.iter().copied()).collect();
        if pairs
            .iter()
            .all(|(token, value)| same_at_precision(token.value, *value, precision))
        {
            return;
        }
        for (token, value) in pairs {
            self.replace(token.span, format_decimal(value, precision));
        }
    }

    /// Apply the edits right-to-left so earlier spans stay valid.
    fn apply(mut self, line: &str) -> String {
        self.edits
            .sort_by_key(|(span, _)| std::cmp::Reverse(span.start));
        let mut out = line.to_string();
        for (span, text) in self.edits {
            out.replace_range(span.start..span.end, &text);
        }
        out
    }
}

fn commit(
    document: &Document,
    found: &LineMatch,
    edits: LineEdits,
) -> Result<Document, MutationError> {
    if edits.edits.is_empty() {
        return Ok(document.clone());
    }
    let line = edits.apply(&found.text);
    if line == found.text {
        return Ok(document.clone());
    }
    log::trace!("line {}: {:?} -> {:?}", found.line, found.text, line);
    document
        .with_line(found.line, &line)
        .ok_or_else(|| {
            MutationError::StatementNotFound(MatchError::NotFound {
                line: found.line,
                kind: found.statement.kind(),
            })
        })
}

fn bracket_text(values: &[f64], precision: usize) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|v| format_decimal(*v, precision))
        .collect();
    format!("[{}]", parts.join(", "))
}

fn require_kind(
    kind: StatementKind,
    allowed: fn(StatementKind) -> bool,
    operation: &'static str,
) -> Result<(), MutationError> {
    if allowed(kind) {
        Ok(())
    } else {
        Err(MutationError::UnsupportedKind { kind, operation })
    }
}

// ─── Rename ──────────────────────────────────────────────────────────────

/// Replace the name token of a `component`/`note`/`anchor`/`pipeline` line.
///
/// A blank new name leaves the document unchanged: placements cannot be
/// anonymous.
pub fn rename_placement(
    document: &Document,
    line: usize,
    kind: StatementKind,
    old_name: &str,
    new_name: &str,
) -> Result<Document, MutationError> {
    require_kind(kind, StatementKind::is_placement, "rename")?;
    let found = locate(document, line, Some(old_name), kind)?;
    let Statement::Placement { name, .. } = &found.statement else {
        return Ok(document.clone());
    };

    let mut edits = LineEdits::default();
    if !new_name.trim().is_empty() && name.value != new_name {
        edits.replace(name.span, encode_name(new_name));
    }
    commit(document, &found, edits)
}

/// Rename an evolved component through its `evolve` line's override.
///
/// Without an override, `base->new` is added so the base component keeps its
/// identity. With one, only the override's right-hand side is replaced.
/// Renaming back to the base name (or to a blank name) removes the override.
pub fn set_evolve_override(
    document: &Document,
    line: usize,
    base_name: &str,
    new_name: &str,
) -> Result<Document, MutationError> {
    let found = locate(document, line, Some(base_name), StatementKind::Evolve)?;
    let Statement::Evolve {
        name,
        override_name,
        ..
    } = &found.statement
    else {
        return Ok(document.clone());
    };

    let reverts = new_name.trim().is_empty() || new_name == name.value;
    let mut edits = LineEdits::default();
    match override_name {
        Some(existing) if reverts => {
            edits.replace(Span::new(name.span.end, existing.name.span.end), "");
        }
        Some(existing) if existing.name.value != new_name => {
            edits.replace(existing.name.span, encode_name(new_name));
        }
        Some(_) => {}
        None if reverts => {}
        None => edits.insert(name.span.end, format!("->{}", encode_name(new_name))),
    }
    commit(document, &found, edits)
}

// ─── Coordinates ─────────────────────────────────────────────────────────

/// Write `[visibility, maturity]` into a component/note/anchor line.
///
/// A missing or malformed bracket is not repaired: fresh canonical values
/// are inserted right after the name.
pub fn move_coordinates(
    document: &Document,
    line: usize,
    kind: StatementKind,
    name: &str,
    position: MapPosition,
    config: &EditConfig,
) -> Result<Document, MutationError> {
    require_kind(
        kind,
        |k| matches!(k, StatementKind::Component | StatementKind::Note | StatementKind::Anchor),
        "move",
    )?;
    let found = locate(document, line, Some(name), kind)?;
    let Statement::Placement {
        name: token,
        coordinates,
        ..
    } = &found.statement
    else {
        return Ok(document.clone());
    };

    let mut edits = LineEdits::default();
    match coordinates {
        Some(bracket) => edits.set_numbers(
            &bracket.values,
            &[position.visibility, position.maturity],
            config.precision,
        ),
        None => edits.insert(
            token.span.end,
            format!(
                " {}",
                bracket_text(&[position.visibility, position.maturity], config.precision)
            ),
        ),
    }
    commit(document, &found, edits)
}

/// Write the maturity of an `evolve` line. Visibility has no meaning there.
pub fn move_evolve(
    document: &Document,
    line: usize,
    name: &str,
    maturity: f64,
    config: &EditConfig,
) -> Result<Document, MutationError> {
    let found = locate(document, line, Some(name), StatementKind::Evolve)?;
    let Statement::Evolve {
        maturity: current, ..
    } = &found.statement
    else {
        return Ok(document.clone());
    };

    let mut edits = LineEdits::default();
    match current {
        Some(token) => edits.set_numbers([token], &[maturity], config.precision),
        None => edits.insert(
            found.statement.clause_insert_point(),
            format!(" {}", format_decimal(maturity, config.precision)),
        ),
    }
    commit(document, &found, edits)
}

/// Write a pipeline's `[start, end]` maturity range, ordered low to high.
pub fn set_pipeline_range(
    document: &Document,
    line: usize,
    name: &str,
    start: f64,
    end: f64,
    config: &EditConfig,
) -> Result<Document, MutationError> {
    let found = locate(document, line, Some(name), StatementKind::Pipeline)?;
    let Statement::Placement {
        name: token,
        coordinates,
        ..
    } = &found.statement
    else {
        return Ok(document.clone());
    };

    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    let mut edits = LineEdits::default();
    match coordinates {
        Some(bracket) => edits.set_numbers(&bracket.values, &[low, high], config.precision),
        None => edits.insert(
            token.span.end,
            format!(" {}", bracket_text(&[low, high], config.precision)),
        ),
    }
    commit(document, &found, edits)
}

// ─── Labels ──────────────────────────────────────────────────────────────

/// Insert or update the `label [dx, dy]` clause of a placement or evolve line.
pub fn set_label_offset(
    document: &Document,
    line: usize,
    kind: StatementKind,
    name: &str,
    dx: f64,
    dy: f64,
    config: &EditConfig,
) -> Result<Document, MutationError> {
    require_kind(
        kind,
        |k| k.is_placement() || k == StatementKind::Evolve,
        "label",
    )?;
    let found = locate(document, line, Some(name), kind)?;
    // A label clause only reads back as one after the coordinates
    if let Statement::Placement {
        coordinates: None, ..
    } = &found.statement
    {
        return Err(MutationError::MissingClause {
            line,
            kind,
            clause: "coordinates",
        });
    }

    let mut edits = LineEdits::default();
    match found.statement.label() {
        Some(label) => edits.set_numbers([&label.dx, &label.dy], &[dx, dy], config.precision),
        None => edits.insert(
            found.statement.clause_insert_point(),
            format!(" label {}", bracket_text(&[dx, dy], config.precision)),
        ),
    }
    commit(document, &found, edits)
}

// ─── Regions ─────────────────────────────────────────────────────────────

/// Rewrite a PST region as `[v_top, m_left, v_bottom, m_right]`.
///
/// The corners may arrive in any order; they are normalized first.
pub fn resize_region(
    document: &Document,
    line: usize,
    kind: StatementKind,
    first: MapPosition,
    second: MapPosition,
    config: &EditConfig,
) -> Result<Document, MutationError> {
    require_kind(kind, StatementKind::is_region, "resize")?;
    let found = locate(document, line, None, kind)?;
    let Statement::Region { coordinates, .. } = &found.statement else {
        return Ok(document.clone());
    };

    let values = [
        first.visibility.max(second.visibility),
        first.maturity.min(second.maturity),
        first.visibility.min(second.visibility),
        first.maturity.max(second.maturity),
    ];
    let mut edits = LineEdits::default();
    match coordinates {
        Some(bracket) => edits.set_numbers(&bracket.values, &values, config.precision),
        None => edits.insert(
            found.statement.clause_insert_point(),
            format!(" {}", bracket_text(&values, config.precision)),
        ),
    }
    commit(document, &found, edits)
}

// ─── Annotations ─────────────────────────────────────────────────────────

/// Replace the free text after an annotation's coordinate groups.
///
/// Blank text removes the trailing clause entirely. Line breaks in the new
/// text are folded into spaces, since annotation text is single-line.
pub fn set_annotation_text(
    document: &Document,
    line: usize,
    text: &str,
) -> Result<Document, MutationError> {
    let found = locate(document, line, None, StatementKind::Annotation)?;
    let Statement::Annotation {
        coordinates,
        text: current,
        ..
    } = &found.statement
    else {
        return Ok(document.clone());
    };
    let Some(coordinates) = coordinates else {
        return Err(MutationError::MissingClause {
            line,
            kind: StatementKind::Annotation,
            clause: "coordinates",
        });
    };

    let new_text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let tail = Span::new(coordinates.end, found.text.len());
    let mut edits = LineEdits::default();
    match current {
        Some(_) if new_text.is_empty() => edits.replace(tail, ""),
        Some(span) if span.slice(&found.text) == new_text => {}
        None if new_text.is_empty() => {}
        _ => edits.replace(tail, format!(" {new_text}")),
    }
    commit(document, &found, edits)
}
