//! Sutherland-Hodgman polygon clipping against a rectangular window.

use log::{debug, trace};

use crate::clipper::boundary::Boundary;
use crate::math::vec2::Vec2;
use crate::rect::ClipRect;

type Point = Vec2;

/// Clip a single boundary's half-plane out of a closed vertex cycle.
///
/// Edges are visited starting with the closing edge `v[n-1] -> v[0]`, so an
/// untouched polygon comes back with its vertices in the same positions.
pub fn clip_against_boundary(
    rect: &ClipRect,
    boundary: Boundary,
    vertices: &[Point],
) -> Vec<Point> {
    let Some(&last) = vertices.last() else {
        return Vec::new();
    };

    let mut output = Vec::with_capacity(vertices.len() + 1);
    let mut prev = last;
    let mut prev_inside = boundary.is_inside(rect, prev);

    for &current in vertices {
        let current_inside = boundary.is_inside(rect, current);

        match (prev_inside, current_inside) {
            (true, true) => output.push(current),
            (true, false) => output.push(boundary.intersect(rect, prev, current)),
            (false, true) => {
                output.push(boundary.intersect(rect, prev, current));
                output.push(current);
            }
            // Both outside, add nothing
            (false, false) => {}
        }

        prev = current;
        prev_inside = current_inside;
    }

    output
}

/// Clip `polygon` against all four boundaries of `rect`.
///
/// Returns an empty list when the polygon lies entirely outside. Results with
/// fewer than three vertices are returned as-is.
pub fn clip_polygon(rect: &ClipRect, polygon: &[Point]) -> Vec<Point> {
    let mut result = polygon.to_vec();

    for boundary in Boundary::ALL {
        result = clip_against_boundary(rect, boundary, &result);
        trace!("after {boundary:?}: {} vertices", result.len());
        if result.is_empty() {
            debug!("polygon with {} vertices is outside {boundary:?}", polygon.len());
            break;
        }
    }

    result
}

/// Clips polygons against a fixed window.
#[derive(Clone, Copy, Debug)]
pub struct PolygonClipper {
    window: ClipRect,
}

impl PolygonClipper {
    pub fn new(window: ClipRect) -> Self {
        Self { window }
    }

    pub fn clip(&self, polygon: &[Point]) -> Vec<Point> {
        clip_polygon(&self.window, polygon)
    }

    /// Run one boundary pass only.
    pub fn clip_against(&self, boundary: Boundary, polygon: &[Point]) -> Vec<Point> {
        clip_against_boundary(&self.window, boundary, polygon)
    }
}
