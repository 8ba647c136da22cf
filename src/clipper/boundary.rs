//! The four half-planes bounding a clip window.

use crate::math::vec2::Vec2;
use crate::rect::ClipRect;

/// One edge of the clip window, each defining an inside half-plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// x >= xmin
    Left,
    /// x <= xmax
    Right,
    /// y >= ymin
    Bottom,
    /// y <= ymax
    Top,
}

impl Boundary {
    /// Processing order used by both clippers.
    pub const ALL: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
    ];

    /// Returns true if `p` lies in this boundary's half-plane. Points on the
    /// boundary line count as inside.
    #[inline]
    pub fn is_inside(&self, rect: &ClipRect, p: Vec2) -> bool {
        match self {
            Self::Left => p.x >= rect.xmin(),
            Self::Right => p.x <= rect.xmax(),
            Self::Bottom => p.y >= rect.ymin(),
            Self::Top => p.y <= rect.ymax(),
        }
    }

    /// Point where the edge `p1 -> p2` crosses this boundary line.
    ///
    /// Callers must only pass edges with one endpoint inside and the other
    /// outside; the delta along the boundary's axis is then non-zero.
    #[inline]
    pub fn intersect(&self, rect: &ClipRect, p1: Vec2, p2: Vec2) -> Vec2 {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        match self {
            Self::Left => Vec2::new(rect.xmin(), p1.y + dy * (rect.xmin() - p1.x) / dx),
            Self::Right => Vec2::new(rect.xmax(), p1.y + dy * (rect.xmax() - p1.x) / dx),
            Self::Bottom => Vec2::new(p1.x + dx * (rect.ymin() - p1.y) / dy, rect.ymin()),
            Self::Top => Vec2::new(p1.x + dx * (rect.ymax() - p1.y) / dy, rect.ymax()),
        }
    }

    /// The Liang-Barsky `(p, q)` pair for a segment starting at `origin` with
    /// direction `delta`. `q < 0` means `origin` is outside this half-plane.
    #[inline]
    pub fn liang_barsky_terms(&self, rect: &ClipRect, origin: Vec2, delta: Vec2) -> (f64, f64) {
        match self {
            Self::Left => (-delta.x, origin.x - rect.xmin()),
            Self::Right => (delta.x, rect.xmax() - origin.x),
            Self::Bottom => (-delta.y, origin.y - rect.ymin()),
            Self::Top => (delta.y, rect.ymax() - origin.y),
        }
    }
}
