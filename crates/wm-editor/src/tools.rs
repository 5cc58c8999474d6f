//! Tool system for canvas gestures.
//!
//! Each tool tracks one pointer gesture and translates it into a single
//! `MapMutation` when the pointer is released. Previews during the drag
//! are exposed in unrounded pixel or map space and never touch the text.
//! A cancelled gesture produces nothing.
//!
//! ## Modifier behaviors
//!
//! | Modifier | Move Tool | Label Tool | Region Tool |
//! |----------|-----------|------------|-------------|
//! | **Shift** | Axis-constrain drag | Axis-constrain drag | - |

use crate::input::InputEvent;
use crate::sync::{MapElement, MapMutation};
use kurbo::{Point, Rect, Vec2};
use wm_core::format::EditConfig;
use wm_core::position::{
    MapPosition, Viewport, drag_position, is_valid_region, region_to_pixels,
};

/// Trait for tools that turn a pointer gesture into a mutation.
pub trait Tool {
    /// Handle an input event. Returns a mutation only when a gesture completes.
    fn handle(&mut self, event: &InputEvent) -> Option<MapMutation>;

    /// Whether a gesture is in progress.
    fn is_active(&self) -> bool;
}

// ─── Drag tracking ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    start: Option<Point>,
    current: Point,
    shift: bool,
}

impl DragState {
    fn press(&mut self, point: Point) {
        self.start = Some(point);
        self.current = point;
        self.shift = false;
    }

    /// Track the pointer. Ignored until a press starts the gesture.
    fn update(&mut self, event: &InputEvent) {
        if self.start.is_some()
            && let Some(point) = event.position()
        {
            self.current = point;
            self.shift = event.modifiers().shift;
        }
    }

    fn delta(&self) -> Option<Vec2> {
        let delta = self.current - self.start?;
        if self.shift {
            Some(constrain_axis(delta))
        } else {
            Some(delta)
        }
    }

    fn reset(&mut self) {
        self.start = None;
    }
}

/// Keep only the dominant axis of a drag.
fn constrain_axis(delta: Vec2) -> Vec2 {
    if delta.x.abs() > delta.y.abs() {
        Vec2::new(delta.x, 0.0)
    } else {
        Vec2::new(0.0, delta.y)
    }
}

// ─── Move Tool ───────────────────────────────────────────────────────────

/// Drags a component, note, or anchor (or an evolved component's maturity).
pub struct MoveTool {
    element: MapElement,
    origin: MapPosition,
    viewport: Viewport,
    clamp: bool,
    drag: DragState,
}

impl MoveTool {
    pub fn new(
        element: MapElement,
        origin: MapPosition,
        viewport: Viewport,
        config: &EditConfig,
    ) -> Self {
        Self {
            element,
            origin,
            viewport,
            clamp: config.clamp,
            drag: DragState::default(),
        }
    }

    /// Live map position under the pointer. Not rounded.
    pub fn preview(&self) -> Option<MapPosition> {
        let delta = self.drag.delta()?;
        Some(drag_position(self.origin, delta, self.viewport, self.clamp))
    }
}

impl Tool for MoveTool {
    fn handle(&mut self, event: &InputEvent) -> Option<MapMutation> {
        match event {
            InputEvent::PointerDown { x, y, .. } => {
                self.drag.press(Point::new(*x, *y));
                None
            }
            InputEvent::PointerMove { .. } => {
                self.drag.update(event);
                log::trace!("move preview {:?}", self.preview());
                None
            }
            InputEvent::PointerUp { .. } => {
                self.drag.update(event);
                let moved = self.drag.delta().is_some_and(|d| d != Vec2::ZERO);
                let position = self.preview();
                self.drag.reset();
                if !moved {
                    return None;
                }
                Some(MapMutation::Move {
                    element: self.element.clone(),
                    position: position?,
                })
            }
            InputEvent::Cancel => {
                self.drag.reset();
                None
            }
        }
    }

    fn is_active(&self) -> bool {
        self.drag.start.is_some()
    }
}

// ─── Label Tool ──────────────────────────────────────────────────────────

/// Drags an element's label; the offset is kept in pixels.
pub struct LabelTool {
    element: MapElement,
    origin: Vec2,
    drag: DragState,
}

impl LabelTool {
    pub fn new(element: MapElement, origin: Vec2) -> Self {
        Self {
            element,
            origin,
            drag: DragState::default(),
        }
    }

    /// Live label offset. Not rounded.
    pub fn preview(&self) -> Option<Vec2> {
        self.drag.delta().map(|delta| self.origin + delta)
    }
}

impl Tool for LabelTool {
    fn handle(&mut self, event: &InputEvent) -> Option<MapMutation> {
        match event {
            InputEvent::PointerDown { x, y, .. } => {
                self.drag.press(Point::new(*x, *y));
                None
            }
            InputEvent::PointerMove { .. } => {
                self.drag.update(event);
                None
            }
            InputEvent::PointerUp { .. } => {
                self.drag.update(event);
                let moved = self.drag.delta().is_some_and(|d| d != Vec2::ZERO);
                let offset = self.preview();
                self.drag.reset();
                if !moved {
                    return None;
                }
                Some(MapMutation::SetLabel {
                    element: self.element.clone(),
                    offset: offset?,
                })
            }
            InputEvent::Cancel => {
                self.drag.reset();
                None
            }
        }
    }

    fn is_active(&self) -> bool {
        self.drag.start.is_some()
    }
}

// ─── Region Tool ─────────────────────────────────────────────────────────

/// A corner handle of a region rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn of(self, rect: Rect) -> Point {
        match self {
            Self::TopLeft => Point::new(rect.x0, rect.y0),
            Self::TopRight => Point::new(rect.x1, rect.y0),
            Self::BottomLeft => Point::new(rect.x0, rect.y1),
            Self::BottomRight => Point::new(rect.x1, rect.y1),
        }
    }

    fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum RegionMode {
    /// A fresh rectangle from the press point to the pointer.
    Draw,
    /// One corner of an existing rectangle follows the pointer.
    Resize { original: Rect, corner: Corner },
}

/// Draws or resizes a Pioneers / Settlers / Town Planners region.
pub struct RegionTool {
    element: MapElement,
    viewport: Viewport,
    min_size: f64,
    mode: RegionMode,
    drag: DragState,
}

impl RegionTool {
    /// Redraw the region from scratch.
    pub fn draw(element: MapElement, viewport: Viewport, config: &EditConfig) -> Self {
        Self {
            element,
            viewport,
            min_size: config.min_region_size,
            mode: RegionMode::Draw,
            drag: DragState::default(),
        }
    }

    /// Resize the region spanned by `first`/`second` by dragging `corner`.
    pub fn resize(
        element: MapElement,
        first: MapPosition,
        second: MapPosition,
        corner: Corner,
        viewport: Viewport,
        config: &EditConfig,
    ) -> Self {
        Self {
            element,
            viewport,
            min_size: config.min_region_size,
            mode: RegionMode::Resize {
                original: region_to_pixels(first, second, viewport),
                corner,
            },
            drag: DragState::default(),
        }
    }

    fn current_rect(&self) -> Option<Rect> {
        let start = self.drag.start?;
        let rect = match self.mode {
            RegionMode::Draw => Rect::from_points(start, self.drag.current),
            RegionMode::Resize { original, corner } => {
                let moved = corner.of(original) + (self.drag.current - start);
                Rect::from_points(corner.opposite().of(original), moved)
            }
        };
        Some(rect)
    }

    /// Live pixel bounds, or `None` while the rectangle is below the
    /// minimum size and must not render.
    pub fn preview(&self) -> Option<Rect> {
        self.current_rect()
            .filter(|rect| is_valid_region(*rect, self.min_size))
    }
}

impl Tool for RegionTool {
    fn handle(&mut self, event: &InputEvent) -> Option<MapMutation> {
        match event {
            InputEvent::PointerDown { x, y, .. } => {
                self.drag.press(Point::new(*x, *y));
                None
            }
            InputEvent::PointerMove { .. } => {
                self.drag.update(event);
                log::trace!("region preview {:?}", self.preview());
                None
            }
            InputEvent::PointerUp { .. } => {
                self.drag.update(event);
                let moved = self.drag.delta().is_some_and(|d| d != Vec2::ZERO);
                let bounds = self.preview();
                self.drag.reset();
                if !moved {
                    return None;
                }
                Some(MapMutation::ResizeRegion {
                    element: self.element.clone(),
                    bounds: bounds?,
                    viewport: self.viewport,
                })
            }
            InputEvent::Cancel => {
                self.drag.reset();
                None
            }
        }
    }

    fn is_active(&self) -> bool {
        self.drag.start.is_some()
    }
}
