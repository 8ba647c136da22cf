//! Liang-Barsky line clipping.
//!
//! The segment is parametrized as `P(u) = p1 + u * (p2 - p1)` for `u` in
//! `[0, 1]`. Each boundary either rejects the segment outright (parallel and
//! outside) or narrows the accepted interval `[u1, u2]`.

use log::debug;

use crate::clipper::boundary::Boundary;
use crate::math::vec2::Vec2;
use crate::rect::ClipRect;

type Point = Vec2;

/// An ordered pair of endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// The point at parameter `u` along the segment.
    pub fn point_at(&self, u: f64) -> Point {
        self.p1.lerp(self.p2, u)
    }

    /// True when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
}

/// Clip the segment `p1 -> p2` against `rect`.
///
/// Returns `None` when no part of the segment lies inside the window. A
/// segment that only touches the window yields a zero-length [`Segment`].
pub fn clip_line(rect: &ClipRect, p1: Point, p2: Point) -> Option<Segment> {
    let segment = Segment::new(p1, p2);
    let delta = p2 - p1;

    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;

    for boundary in Boundary::ALL {
        let (p, q) = boundary.liang_barsky_terms(rect, p1, delta);
        if p == 0.0 {
            // Parallel to this boundary
            if q < 0.0 {
                debug!("segment {p1:?} -> {p2:?} parallel to and outside {boundary:?}");
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                // Entering
                u1 = u1.max(t);
            } else {
                // Leaving
                u2 = u2.min(t);
            }
        }
    }

    if u1 > u2 {
        debug!("segment {p1:?} -> {p2:?} rejected, u1 = {u1} > u2 = {u2}");
        return None;
    }

    // Untouched endpoints are returned bit-for-bit rather than re-evaluated.
    let start = if u1 > 0.0 { segment.point_at(u1) } else { p1 };
    let end = if u2 < 1.0 { segment.point_at(u2) } else { p2 };
    Some(Segment::new(start, end))
}

/// Clips segments against a fixed window.
///
/// Holds nothing but the window, so it is `Copy` and freely shared across
/// threads.
#[derive(Clone, Copy, Debug)]
pub struct LineClipper {
    window: ClipRect,
}

impl LineClipper {
    pub fn new(window: ClipRect) -> Self {
        Self { window }
    }

    pub fn clip(&self, p1: Point, p2: Point) -> Option<Segment> {
        clip_line(&self.window, p1, p2)
    }

    pub fn clip_segment(&self, segment: &Segment) -> Option<Segment> {
        clip_line(&self.window, segment.p1, segment.p2)
    }

    /// Clip a batch of segments, one result per input in input order.
    pub fn clip_all<'a, I>(&self, segments: I) -> Vec<Option<Segment>>
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        segments
            .into_iter()
            .map(|s| self.clip_segment(s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn window() -> ClipRect {
        ClipRect::new(50.0, 50.0, 150.0, 150.0).unwrap()
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn diagonal_is_clipped_to_corners() {
        let s = clip_line(&window(), p(20.0, 20.0), p(180.0, 180.0)).unwrap();
        assert_relative_eq!(s.p1.x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(s.p1.y, 50.0, epsilon = 1e-9);
        assert_relative_eq!(s.p2.x, 150.0, epsilon = 1e-9);
        assert_relative_eq!(s.p2.y, 150.0, epsilon = 1e-9);
    }

    #[test]
    fn reversed_direction_keeps_orientation() {
        let s = clip_line(&window(), p(180.0, 180.0), p(20.0, 20.0)).unwrap();
        assert_relative_eq!(s.p1.x, 150.0, epsilon = 1e-9);
        assert_relative_eq!(s.p2.x, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn interior_segment_is_identity() {
        let a = p(60.3, 70.1);
        let b = p(140.7, 120.9);
        assert_eq!(clip_line(&window(), a, b), Some(Segment::new(a, b)));
    }

    #[test]
    fn parallel_outside_is_rejected() {
        assert_eq!(clip_line(&window(), p(10.0, 100.0), p(40.0, 100.0)), None);
        assert_eq!(clip_line(&window(), p(100.0, 160.0), p(100.0, 200.0)), None);
    }

    #[test]
    fn diagonal_miss_is_rejected() {
        // Crosses both the x and y extents but misses the corner
        assert_eq!(clip_line(&window(), p(0.0, 120.0), p(80.0, 200.0)), None);
    }

    #[test]
    fn zero_length_inside_is_a_point() {
        let s = clip_line(&window(), p(75.0, 75.0), p(75.0, 75.0)).unwrap();
        assert!(s.is_degenerate());
        assert_eq!(s.p1, p(75.0, 75.0));
    }

    #[test]
    fn zero_length_outside_is_rejected() {
        assert_eq!(clip_line(&window(), p(10.0, 75.0), p(10.0, 75.0)), None);
    }

    #[test]
    fn touching_endpoint_is_retained() {
        let s = clip_line(&window(), p(50.0, 75.0), p(20.0, 75.0)).unwrap();
        assert!(s.is_degenerate());
        assert_eq!(s.p1, p(50.0, 75.0));
    }

    #[test]
    fn segment_along_boundary_is_retained() {
        let s = clip_line(&window(), p(50.0, 20.0), p(50.0, 180.0)).unwrap();
        assert_relative_eq!(s.p1.y, 50.0, epsilon = 1e-9);
        assert_relative_eq!(s.p2.y, 150.0, epsilon = 1e-9);
        assert_eq!(s.p1.x, 50.0);
    }

    #[test]
    fn clip_all_preserves_order() {
        let clipper = LineClipper::new(window());
        let segments = [
            Segment::new(p(10.0, 100.0), p(40.0, 100.0)),
            Segment::new(p(100.0, 10.0), p(100.0, 190.0)),
        ];
        let results = clipper.clip_all(&segments);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_none());
        assert!(results[1].is_some());
    }
}
