//! Geometry model and the pure resize computation.
//!
//! Everything here is a plain value type or a pure function: no state, no
//! I/O. The interactor converts raw pointer positions into a [`Delta`] in the
//! element's logical coordinate space and hands it to [`compute_resize`]
//! together with the baseline captured at gesture start.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::handle::Edges;

/// A point in either screen or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cumulative pointer displacement since the gesture started, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Displacement from `from` to `to`.
    #[must_use]
    pub fn between(from: Point, to: Point) -> Self {
        Self { dx: to.x - from.x, dy: to.y - from.y }
    }
}

/// Position and size of an element in the editor's logical coordinate space.
///
/// `width` and `height` are never negative in any state the engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Geometry {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Right edge (`left + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Rendered bounding box of an element in screen space, as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Constant translation between logical geometry and its rendered position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameOffset {
    pub x: f64,
    pub y: f64,
}

impl FrameOffset {
    /// Offset of the rendered box origin relative to the logical origin.
    #[must_use]
    pub fn between(rect: BoundingRect, geometry: &Geometry) -> Self {
        Self { x: rect.left - geometry.left, y: rect.top - geometry.top }
    }

    /// Map a screen-space point into the logical coordinate space.
    #[must_use]
    pub fn to_logical(&self, screen: Point) -> Point {
        Point { x: screen.x - self.x, y: screen.y - self.y }
    }
}

/// Compute the geometry that results from dragging `edges` by `delta`.
///
/// Each edge is evaluated independently against `baseline`; a corner applies
/// both of its edge rules. East and south collapse to zero size once the
/// dragged edge reaches the fixed one. West and north collapse to zero size
/// and pin the moving edge to the original opposite edge; they never flip.
/// Edges not named in `edges` keep their baseline values.
#[must_use]
pub fn compute_resize(edges: Edges, delta: Delta, baseline: &Geometry) -> Geometry {
    let mut out = *baseline;

    if edges.contains(Edges::E) {
        let width = baseline.width + delta.dx;
        out.width = if width <= 0.0 { 0.0 } else { width };
    }

    if edges.contains(Edges::W) {
        if delta.dx < baseline.width {
            out.width = baseline.width - delta.dx;
            out.left = baseline.left + delta.dx;
        } else {
            out.width = 0.0;
            out.left = baseline.right();
        }
    }

    if edges.contains(Edges::N) {
        if delta.dy < baseline.height {
            out.height = baseline.height - delta.dy;
            out.top = baseline.top + delta.dy;
        } else {
            out.height = 0.0;
            out.top = baseline.bottom();
        }
    }

    if edges.contains(Edges::S) {
        let height = baseline.height + delta.dy;
        out.height = if height <= 0.0 { 0.0 } else { height };
    }

    out
}
