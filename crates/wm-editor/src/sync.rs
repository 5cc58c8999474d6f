//! Mutation orchestrators: visual edit → one surgical map text update.
//!
//! The host application owns the map text, the undo/redo history, and the
//! parse that rebuilds the visual model. Every orchestrator call receives
//! the current text and an explicit description of the edited element,
//! locates the statement by line number, rewrites the minimal span, and
//! hands the new full text to the host's `mutateMapText` sink.
//!
//! Nothing is committed when the element cannot be located: the sink is
//! never called with an unchanged or partially edited document.

use crate::mutate::{
    MutationError, move_coordinates, move_evolve, rename_placement, resize_region,
    set_annotation_text, set_evolve_override, set_label_offset, set_pipeline_range,
};
use kurbo::{Rect, Vec2};
use thiserror::Error;
use wm_core::document::Document;
use wm_core::format::EditConfig;
use wm_core::matcher::{find_evolve_for, locate};
use wm_core::position::{MapPosition, Viewport, is_valid_region, pixels_to_region};
use wm_core::statement::StatementKind;

/// Receives committed map text. Implemented by the host's `mutateMapText`.
pub trait MapTextSink {
    fn mutate_map_text(&mut self, text: String);
}

impl<F: FnMut(String)> MapTextSink for F {
    fn mutate_map_text(&mut self, text: String) {
        self(text)
    }
}

/// The visual element being edited, as known to the rendered model.
#[derive(Debug, Clone, PartialEq)]
pub struct MapElement {
    pub kind: StatementKind,
    /// Current name; for evolved components, the base component's name.
    pub name: String,
    /// 1-indexed source line of the element's statement.
    pub line: Option<usize>,
    /// Drawn at its evolved position, i.e. backed by an `evolve` line.
    pub evolved: bool,
    /// 1-indexed line of the `evolve` statement, when the model tracks it.
    pub evolve_line: Option<usize>,
}

impl MapElement {
    pub fn new(kind: StatementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            line: None,
            evolved: false,
            evolve_line: None,
        }
    }

    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Mark as the evolved form of a component, optionally at a known line.
    #[must_use]
    pub fn evolved(mut self, evolve_line: Option<usize>) -> Self {
        self.evolved = true;
        self.evolve_line = evolve_line;
        self
    }
}

/// One discrete edit requested by the visual layer.
#[derive(Debug, Clone, PartialEq)]
pub enum MapMutation {
    /// Rename a placement; for evolved components, set the override instead.
    Rename {
        element: MapElement,
        new_name: String,
    },
    /// Move a component, note, or anchor; evolved components move their
    /// `evolve` maturity only.
    Move {
        element: MapElement,
        position: MapPosition,
    },
    /// Set the label offset in pixels.
    SetLabel { element: MapElement, offset: Vec2 },
    /// Commit a PST region preview drawn in pixel space.
    ResizeRegion {
        element: MapElement,
        bounds: Rect,
        viewport: Viewport,
    },
    /// Set a pipeline's maturity range.
    SetPipelineRange {
        element: MapElement,
        start: f64,
        end: f64,
    },
    /// Replace (or clear, when blank) an annotation's free text.
    SetAnnotationText { line: Option<usize>, text: String },
}

/// Why an orchestrator committed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The element carries no source line. Aborted silently.
    #[error("element has no source line")]
    MissingLine,

    /// The evolve statement behind an evolved component is gone. Shown to the user.
    #[error("Could not find evolved component \"{0}\"")]
    TargetNotResolvable(String),

    /// A region preview below the minimum size. Aborted silently.
    #[error("region preview is below the minimum size")]
    RegionTooSmall,

    #[error(transparent)]
    Mutation(#[from] MutationError),
}

impl SyncError {
    /// Whether the host should surface this error as a blocking alert.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Self::TargetNotResolvable(_))
    }
}

/// Result of a successful orchestration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The new full map text.
    Changed(String),
    /// The edit was a no-op; nothing to commit.
    Unchanged,
}

// ─── Orchestration ───────────────────────────────────────────────────────

/// Compute the map text produced by `mutation`, without committing it.
pub fn apply_mutation(
    map_text: &str,
    mutation: &MapMutation,
    config: &EditConfig,
) -> Result<SyncOutcome, SyncError> {
    let document = Document::parse(map_text);
    let updated = match mutation {
        MapMutation::Rename { element, new_name } => {
            if element.evolved {
                let line = resolve_evolve_line(&document, element)?;
                set_evolve_override(&document, line, &element.name, new_name)?
            } else {
                let line = element.line.ok_or(SyncError::MissingLine)?;
                rename_placement(&document, line, element.kind, &element.name, new_name)?
            }
        }
        MapMutation::Move { element, position } => {
            if element.evolved {
                let line = resolve_evolve_line(&document, element)?;
                move_evolve(&document, line, &element.name, position.maturity, config)?
            } else {
                let line = element.line.ok_or(SyncError::MissingLine)?;
                move_coordinates(
                    &document,
                    line,
                    element.kind,
                    &element.name,
                    *position,
                    config,
                )?
            }
        }
        MapMutation::SetLabel { element, offset } => {
            let (line, kind) = if element.evolved {
                (
                    resolve_evolve_line(&document, element)?,
                    StatementKind::Evolve,
                )
            } else {
                (element.line.ok_or(SyncError::MissingLine)?, element.kind)
            };
            set_label_offset(
                &document,
                line,
                kind,
                &element.name,
                offset.x,
                offset.y,
                config,
            )?
        }
        MapMutation::ResizeRegion {
            element,
            bounds,
            viewport,
        } => {
            let line = element.line.ok_or(SyncError::MissingLine)?;
            if !is_valid_region(*bounds, config.min_region_size) {
                return Err(SyncError::RegionTooSmall);
            }
            let (top_left, bottom_right) = pixels_to_region(*bounds, *viewport);
            resize_region(&document, line, element.kind, top_left, bottom_right, config)?
        }
        MapMutation::SetPipelineRange {
            element,
            start,
            end,
        } => {
            let line = element.line.ok_or(SyncError::MissingLine)?;
            set_pipeline_range(&document, line, &element.name, *start, *end, config)?
        }
        MapMutation::SetAnnotationText { line, text } => {
            let line = line.ok_or(SyncError::MissingLine)?;
            set_annotation_text(&document, line, text)?
        }
    };

    if updated == document {
        return Ok(SyncOutcome::Unchanged);
    }
    Ok(SyncOutcome::Changed(updated.to_text()))
}

/// Apply `mutation` and hand the new text to `sink`.
///
/// The sink is called exactly once when the text changed and never
/// otherwise. Returns whether a commit happened.
pub fn dispatch(
    map_text: &str,
    mutation: &MapMutation,
    config: &EditConfig,
    sink: &mut impl MapTextSink,
) -> Result<bool, SyncError> {
    match apply_mutation(map_text, mutation, config) {
        Ok(SyncOutcome::Changed(text)) => {
            log::debug!("commit {}", describe(mutation));
            sink.mutate_map_text(text);
            Ok(true)
        }
        Ok(SyncOutcome::Unchanged) => {
            log::debug!("no-op {}", describe(mutation));
            Ok(false)
        }
        Err(err) => {
            if err.is_user_visible() {
                log::warn!("{} aborted: {err}", describe(mutation));
            } else {
                log::debug!("{} aborted: {err}", describe(mutation));
            }
            Err(err)
        }
    }
}

/// Find the `evolve` line behind an evolved element: the tracked line when it
/// still holds that component's evolve statement, else a whole-document scan.
fn resolve_evolve_line(document: &Document, element: &MapElement) -> Result<usize, SyncError> {
    if element.line.is_none() && element.evolve_line.is_none() {
        return Err(SyncError::MissingLine);
    }
    if let Some(line) = element.evolve_line
        && let Ok(found) = locate(document, line, Some(&element.name), StatementKind::Evolve)
        && found.mismatch.is_none()
    {
        return Ok(line);
    }
    find_evolve_for(document, &element.name)
        .map(|found| found.line)
        .map_err(|_| SyncError::TargetNotResolvable(element.name.clone()))
}

fn describe(mutation: &MapMutation) -> String {
    match mutation {
        MapMutation::Rename { element, new_name } => {
            format!("rename {} \"{}\" -> \"{new_name}\"", element.kind, element.name)
        }
        MapMutation::Move { element, .. } => format!("move {} \"{}\"", element.kind, element.name),
        MapMutation::SetLabel { element, .. } => {
            format!("label {} \"{}\"", element.kind, element.name)
        }
        MapMutation::ResizeRegion { element, .. } => format!("resize {}", element.kind),
        MapMutation::SetPipelineRange { element, .. } => {
            format!("pipeline range \"{}\"", element.name)
        }
        MapMutation::SetAnnotationText { line, .. } => {
            format!("annotation text on line {}", line.unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EVOLVED_MAP: &str = "component foo [0.5, 0.7]\nevolve foo 0.9";

    fn evolved_foo() -> MapElement {
        MapElement::new(StatementKind::Component, "foo")
            .at_line(1)
            .evolved(Some(2))
    }

    #[test]
    fn rename_evolved_adds_override() {
        let mutation = MapMutation::Rename {
            element: evolved_foo(),
            new_name: "barbaz".into(),
        };
        let outcome = apply_mutation(EVOLVED_MAP, &mutation, &EditConfig::default()).unwrap();
        assert_eq!(
            outcome,
            SyncOutcome::Changed("component foo [0.5, 0.7]\nevolve foo->barbaz 0.9".into())
        );
    }

    #[test]
    fn move_evolved_updates_only_evolve_maturity() {
        let mutation = MapMutation::Move {
            element: evolved_foo(),
            position: MapPosition::new(0.8, 0.2),
        };
        let outcome = apply_mutation(EVOLVED_MAP, &mutation, &EditConfig::default()).unwrap();
        assert_eq!(
            outcome,
            SyncOutcome::Changed("component foo [0.5, 0.7]\nevolve foo 0.80".into())
        );
    }

    #[test]
    fn evolve_line_is_rediscovered_after_drift() {
        let text = "title T\ncomponent foo [0.5, 0.7]\n\nevolve foo 0.9";
        let element = MapElement::new(StatementKind::Component, "foo")
            .at_line(2)
            .evolved(Some(3));
        let mutation = MapMutation::SetLabel {
            element,
            offset: Vec2::new(4.0, -2.0),
        };
        let outcome = apply_mutation(text, &mutation, &EditConfig::default()).unwrap();
        assert_eq!(
            outcome,
            SyncOutcome::Changed(
                "title T\ncomponent foo [0.5, 0.7]\n\nevolve foo 0.9 label [4.00, -2.00]".into()
            )
        );
    }

    #[test]
    fn missing_evolve_statement_is_user_visible() {
        let mutation = MapMutation::Rename {
            element: MapElement::new(StatementKind::Component, "ghost")
                .at_line(1)
                .evolved(None),
            new_name: "x".into(),
        };
        let err = apply_mutation(EVOLVED_MAP, &mutation, &EditConfig::default()).unwrap_err();
        assert_eq!(err, SyncError::TargetNotResolvable("ghost".into()));
        assert!(err.is_user_visible());
        assert_eq!(err.to_string(), "Could not find evolved component \"ghost\"");
    }

    #[test]
    fn no_line_means_no_commit() {
        let mut calls = Vec::new();
        let mut sink = |text: String| calls.push(text);
        let mutation = MapMutation::Move {
            element: MapElement::new(StatementKind::Component, "foo"),
            position: MapPosition::new(0.1, 0.1),
        };
        let result = dispatch(EVOLVED_MAP, &mutation, &EditConfig::default(), &mut sink);
        assert_eq!(result, Err(SyncError::MissingLine));
        assert!(calls.is_empty());
    }

    #[test]
    fn unchanged_text_is_not_committed() {
        let mut calls = 0;
        let mut sink = |_: String| calls += 1;
        let mutation = MapMutation::Move {
            element: MapElement::new(StatementKind::Component, "foo").at_line(1),
            position: MapPosition::new(0.5, 0.7),
        };
        let committed =
            dispatch("component foo [0.7, 0.5]", &mutation, &EditConfig::default(), &mut sink)
                .unwrap();
        assert!(!committed);
        assert_eq!(calls, 0);
    }

    #[test]
    fn tiny_region_preview_is_not_committed() {
        let mutation = MapMutation::ResizeRegion {
            element: MapElement::new(StatementKind::Pioneers, "").at_line(1),
            bounds: Rect::new(10.0, 10.0, 14.0, 200.0),
            viewport: Viewport::default(),
        };
        let err = apply_mutation(
            "pioneers [0.9, 0.1, 0.6, 0.3]",
            &mutation,
            &EditConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, SyncError::RegionTooSmall);
    }
}
