//! JSON requests from the editor shell.
//!
//! The JS side describes the edited element explicitly (kind, name, source
//! line) with every call; nothing is looked up from ambient UI state.

use serde::Deserialize;
use thiserror::Error;
use wm_core::position::{MapPosition, Viewport};
use wm_core::statement::StatementKind;
use wm_core::{Rect, Vec2};
use wm_editor::sync::{MapElement, MapMutation};
use wm_editor::tools::Corner;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown statement kind \"{0}\"")]
    UnknownKind(String),

    #[error("unknown corner \"{0}\"")]
    UnknownCorner(String),
}

/// The visual element being edited, as sent by the shell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRequest {
    /// Statement keyword: `component`, `evolve`, `pioneers`, ...
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub line: Option<usize>,
    #[serde(default)]
    pub evolved: bool,
    #[serde(default)]
    pub evolve_line: Option<usize>,
}

impl ElementRequest {
    pub fn into_element(self) -> Result<MapElement, RequestError> {
        let kind = parse_kind(&self.kind)?;
        let mut element = MapElement::new(kind, self.name);
        element.line = self.line;
        if self.evolved {
            element = element.evolved(self.evolve_line);
        }
        Ok(element)
    }
}

/// Pixel bounds of a region preview.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundsRequest {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<BoundsRequest> for Rect {
    fn from(b: BoundsRequest) -> Self {
        Rect::new(b.x, b.y, b.x + b.width, b.y + b.height)
    }
}

/// One edit, tagged by `op`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(
    tag = "op",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum MutationRequest {
    Rename {
        element: ElementRequest,
        new_name: String,
    },
    Move {
        element: ElementRequest,
        maturity: f64,
        visibility: f64,
    },
    SetLabel {
        element: ElementRequest,
        dx: f64,
        dy: f64,
    },
    ResizeRegion {
        element: ElementRequest,
        bounds: BoundsRequest,
    },
    SetPipelineRange {
        element: ElementRequest,
        start: f64,
        end: f64,
    },
    SetAnnotationText {
        #[serde(default)]
        line: Option<usize>,
        #[serde(default)]
        text: String,
    },
}

impl MutationRequest {
    /// Convert to an orchestrator mutation. Region bounds are interpreted
    /// against `viewport`.
    pub fn into_mutation(self, viewport: Viewport) -> Result<MapMutation, RequestError> {
        let mutation = match self {
            Self::Rename { element, new_name } => MapMutation::Rename {
                element: element.into_element()?,
                new_name,
            },
            Self::Move {
                element,
                maturity,
                visibility,
            } => MapMutation::Move {
                element: element.into_element()?,
                position: MapPosition::new(maturity, visibility),
            },
            Self::SetLabel { element, dx, dy } => MapMutation::SetLabel {
                element: element.into_element()?,
                offset: Vec2::new(dx, dy),
            },
            Self::ResizeRegion { element, bounds } => MapMutation::ResizeRegion {
                element: element.into_element()?,
                bounds: bounds.into(),
                viewport,
            },
            Self::SetPipelineRange {
                element,
                start,
                end,
            } => MapMutation::SetPipelineRange {
                element: element.into_element()?,
                start,
                end,
            },
            Self::SetAnnotationText { line, text } => {
                MapMutation::SetAnnotationText { line, text }
            }
        };
        Ok(mutation)
    }
}

/// Decode a mutation request from JSON.
pub fn parse_mutation(json: &str, viewport: Viewport) -> Result<MapMutation, RequestError> {
    let request: MutationRequest = serde_json::from_str(json)?;
    request.into_mutation(viewport)
}

/// Decode an element description from JSON.
pub fn parse_element(json: &str) -> Result<MapElement, RequestError> {
    let request: ElementRequest = serde_json::from_str(json)?;
    request.into_element()
}

pub fn parse_kind(keyword: &str) -> Result<StatementKind, RequestError> {
    StatementKind::ALL
        .into_iter()
        .find(|kind| kind.keyword() == keyword)
        .ok_or_else(|| RequestError::UnknownKind(keyword.to_string()))
}

pub fn parse_corner(name: &str) -> Result<Corner, RequestError> {
    match name {
        "topLeft" => Ok(Corner::TopLeft),
        "topRight" => Ok(Corner::TopRight),
        "bottomLeft" => Ok(Corner::BottomLeft),
        "bottomRight" => Ok(Corner::BottomRight),
        other => Err(RequestError::UnknownCorner(other.to_string())),
    }
}
