//! A clip window together with the shapes to clip against it.

use crate::clipper::{LineClipper, PolygonClipper, Segment};
use crate::error::ClipError;
use crate::math::vec2::Vec2;
use crate::rect::ClipRect;

/// Shapes to clip plus the window they are clipped against.
#[derive(Clone, Debug)]
pub struct Scene {
    pub window: ClipRect,
    pub segments: Vec<Segment>,
    pub polygon: Vec<Vec2>,
}

/// Output of [`Scene::clip`]. `segments[i]` is the result for the scene's
/// `segments[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipReport {
    pub segments: Vec<Option<Segment>>,
    pub polygon: Vec<Vec2>,
}

impl Scene {
    pub fn new(window: ClipRect, segments: Vec<Segment>, polygon: Vec<Vec2>) -> Self {
        Self {
            window,
            segments,
            polygon,
        }
    }

    /// The demo scene: a 100x100 window at (50, 50), two crossing segments,
    /// one segment left of the window and a quadrilateral overlapping three
    /// of its edges.
    pub fn reference() -> Result<Self, ClipError> {
        let window = ClipRect::new(50.0, 50.0, 150.0, 150.0)?;
        let segments = vec![
            Segment::new(Vec2::new(20.0, 20.0), Vec2::new(180.0, 180.0)),
            Segment::new(Vec2::new(100.0, 10.0), Vec2::new(100.0, 190.0)),
            Segment::new(Vec2::new(10.0, 100.0), Vec2::new(40.0, 100.0)),
        ];
        let polygon = vec![
            Vec2::new(30.0, 80.0),
            Vec2::new(120.0, 180.0),
            Vec2::new(180.0, 80.0),
            Vec2::new(100.0, 20.0),
        ];
        Ok(Self::new(window, segments, polygon))
    }

    pub fn clip(&self) -> ClipReport {
        ClipReport {
            segments: LineClipper::new(self.window).clip_all(&self.segments),
            polygon: PolygonClipper::new(self.window).clip(&self.polygon),
        }
    }

    /// Smallest `(min, max)` box covering the window and every input shape.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let points = self
            .window
            .corners()
            .into_iter()
            .chain(self.segments.iter().flat_map(|s| [s.p1, s.p2]))
            .chain(self.polygon.iter().copied());

        let mut min = Vec2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scene_report() {
        let scene = Scene::reference().unwrap();
        let report = scene.clip();
        assert_eq!(report.segments.len(), 3);
        assert!(report.segments[0].is_some());
        assert!(report.segments[1].is_some());
        assert!(report.segments[2].is_none());
        assert_eq!(report.polygon.len(), 8);

        // Printed polygon starts at the bottom-edge entry point
        let first = report.polygon[0];
        assert!((first.x - 65.0).abs() < 1e-9 && (first.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_cover_all_shapes() {
        let (min, max) = Scene::reference().unwrap().bounds();
        assert_eq!(min, Vec2::new(10.0, 10.0));
        assert_eq!(max, Vec2::new(180.0, 190.0));
    }
}
