//! Position calculator: normalized map space ↔ canvas pixels.
//!
//! Map space is `[0, 1] × [0, 1]` with maturity growing rightwards and
//! visibility growing upwards. Pixel space has its origin at the top-left
//! with `y` growing downwards.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// The canvas (viewport) dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// A point in normalized map space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPosition {
    pub maturity: f64,
    pub visibility: f64,
}

impl MapPosition {
    pub fn new(maturity: f64, visibility: f64) -> Self {
        Self {
            maturity,
            visibility,
        }
    }

    /// Both axes clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            maturity: self.maturity.clamp(0.0, 1.0),
            visibility: self.visibility.clamp(0.0, 1.0),
        }
    }
}

/// Map position → pixel point. Not rounded.
pub fn to_pixels(position: MapPosition, viewport: Viewport) -> Point {
    Point::new(
        position.maturity * viewport.width,
        (1.0 - position.visibility) * viewport.height,
    )
}

/// Pixel point → map position, clamped to `[0, 1]`.
pub fn to_normalized(point: Point, viewport: Viewport) -> MapPosition {
    normalize(point, viewport, true)
}

/// Pixel point → map position, optionally clamped.
///
/// A zero-sized viewport axis maps to `0` rather than dividing by zero.
pub fn normalize(point: Point, viewport: Viewport, clamp: bool) -> MapPosition {
    let maturity = if viewport.width > 0.0 {
        point.x / viewport.width
    } else {
        0.0
    };
    let visibility = if viewport.height > 0.0 {
        1.0 - point.y / viewport.height
    } else {
        0.0
    };
    let position = MapPosition::new(maturity, visibility);
    if clamp { position.clamped() } else { position }
}

/// Where an element starting at `origin` lands after a pointer drag of `delta` pixels.
pub fn drag_position(
    origin: MapPosition,
    delta: Vec2,
    viewport: Viewport,
    clamp: bool,
) -> MapPosition {
    normalize(to_pixels(origin, viewport) + delta, viewport, clamp)
}

/// Pixel bounds of the rectangle spanned by two map-space corners.
///
/// Corner order does not matter: a region dragged bottom-right to top-left
/// yields the same positive-size rectangle.
pub fn region_to_pixels(first: MapPosition, second: MapPosition, viewport: Viewport) -> Rect {
    Rect::from_points(to_pixels(first, viewport), to_pixels(second, viewport))
}

/// Map-space corners of a pixel rectangle: `(top_left, bottom_right)`.
///
/// `top_left` carries the lower maturity and the higher visibility.
pub fn pixels_to_region(rect: Rect, viewport: Viewport) -> (MapPosition, MapPosition) {
    let rect = rect.abs();
    (
        to_normalized(Point::new(rect.x0, rect.y0), viewport),
        to_normalized(Point::new(rect.x1, rect.y1), viewport),
    )
}

/// Whether a preview rectangle is large enough to render or commit.
pub fn is_valid_region(rect: Rect, min_size: f64) -> bool {
    let rect = rect.abs();
    rect.width() >= min_size && rect.height() >= min_size
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 500.0,
        height: 400.0,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn to_pixels_flips_visibility() {
        let p = to_pixels(MapPosition::new(0.25, 0.75), VIEWPORT);
        assert!(close(p.x, 125.0));
        assert!(close(p.y, 100.0));
    }

    #[test]
    fn normalized_inverts_pixels() {
        for (w, h) in [(500.0, 400.0), (1.0, 1.0), (1280.0, 720.0)] {
            let viewport = Viewport {
                width: w,
                height: h,
            };
            for m in [0.0, 0.13, 0.5, 0.87, 1.0] {
                for v in [0.0, 0.29, 0.5, 0.71, 1.0] {
                    let back = to_normalized(to_pixels(MapPosition::new(m, v), viewport), viewport);
                    assert!(close(back.maturity, m), "maturity {m} in {w}x{h}");
                    assert!(close(back.visibility, v), "visibility {v} in {w}x{h}");
                }
            }
        }
    }

    #[test]
    fn to_normalized_clamps_outside_canvas() {
        let p = to_normalized(Point::new(-20.0, 900.0), VIEWPORT);
        assert_eq!(p, MapPosition::new(0.0, 0.0));
        let unclamped = normalize(Point::new(-50.0, 0.0), VIEWPORT, false);
        assert!(close(unclamped.maturity, -0.1));
    }

    #[test]
    fn zero_sized_viewport_does_not_divide_by_zero() {
        let viewport = Viewport {
            width: 0.0,
            height: 0.0,
        };
        let p = to_normalized(Point::new(10.0, 10.0), viewport);
        assert!(p.maturity.is_finite() && p.visibility.is_finite());
    }

    #[test]
    fn drag_moves_by_pixel_delta() {
        let p = drag_position(
            MapPosition::new(0.4, 0.6),
            Vec2::new(50.0, -40.0),
            VIEWPORT,
            true,
        );
        assert!(close(p.maturity, 0.5));
        assert!(close(p.visibility, 0.7));
    }

    #[test]
    fn region_corners_in_either_order() {
        let a = MapPosition::new(0.1, 0.9);
        let b = MapPosition::new(0.3, 0.6);
        let forward = region_to_pixels(a, b, VIEWPORT);
        let reversed = region_to_pixels(b, a, VIEWPORT);
        assert_eq!(forward, reversed);
        assert!(close(forward.x0, 50.0));
        assert!(close(forward.y0, 40.0));
        assert!(close(forward.width(), 100.0));
        assert!(close(forward.height(), 120.0));
    }

    #[test]
    fn pixels_to_region_returns_top_left_then_bottom_right() {
        let rect = Rect::new(150.0, 280.0, 50.0, 40.0);
        let (top_left, bottom_right) = pixels_to_region(rect, VIEWPORT);
        assert!(close(top_left.maturity, 0.1));
        assert!(close(top_left.visibility, 0.9));
        assert!(close(bottom_right.maturity, 0.3));
        assert!(close(bottom_right.visibility, 0.3));
    }

    #[test]
    fn small_regions_are_suppressed() {
        assert!(!is_valid_region(Rect::new(0.0, 0.0, 4.0, 80.0), 10.0));
        assert!(!is_valid_region(Rect::new(0.0, 0.0, 80.0, 9.9), 10.0));
        assert!(is_valid_region(Rect::new(80.0, 80.0, 0.0, 0.0), 10.0));
    }
}
