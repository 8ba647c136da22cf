//! The axis-aligned clip window.

use crate::error::ClipError;
use crate::math::vec2::Vec2;

/// An axis-aligned rectangle used as the clip window.
///
/// Always satisfies `xmin <= xmax` and `ymin <= ymax` with finite bounds.
/// Fields are private so the invariant can only be established by [`ClipRect::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl ClipRect {
    /// Create a clip window from its bounds.
    ///
    /// Fails with [`ClipError::InvalidWindow`] when a minimum exceeds its
    /// maximum and [`ClipError::NonFiniteWindow`] for NaN or infinite bounds.
    /// A zero-width or zero-height window is accepted.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, ClipError> {
        if ![xmin, ymin, xmax, ymax].iter().all(|v| v.is_finite()) {
            return Err(ClipError::NonFiniteWindow);
        }
        if xmin > xmax || ymin > ymax {
            return Err(ClipError::InvalidWindow {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Boundary-inclusive point containment.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Corners in counter-clockwise order starting at `(xmin, ymin)`.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.xmin, self.ymin),
            Vec2::new(self.xmax, self.ymin),
            Vec2::new(self.xmax, self.ymax),
            Vec2::new(self.xmin, self.ymax),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordered_bounds() {
        let r = ClipRect::new(50.0, 50.0, 150.0, 150.0).unwrap();
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 100.0);
    }

    #[test]
    fn accepts_degenerate_window() {
        let r = ClipRect::new(10.0, 10.0, 10.0, 20.0).unwrap();
        assert_eq!(r.width(), 0.0);
        assert!(r.contains(Vec2::new(10.0, 15.0)));
    }

    #[test]
    fn rejects_swapped_x() {
        let err = ClipRect::new(150.0, 50.0, 50.0, 150.0).unwrap_err();
        assert!(matches!(err, ClipError::InvalidWindow { .. }));
    }

    #[test]
    fn rejects_swapped_y() {
        assert!(ClipRect::new(0.0, 1.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(
            ClipRect::new(f64::NAN, 0.0, 1.0, 1.0),
            Err(ClipError::NonFiniteWindow)
        );
        assert_eq!(
            ClipRect::new(0.0, 0.0, f64::INFINITY, 1.0),
            Err(ClipError::NonFiniteWindow)
        );
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let r = ClipRect::new(50.0, 50.0, 150.0, 150.0).unwrap();
        assert!(r.contains(Vec2::new(50.0, 75.0)));
        assert!(r.contains(Vec2::new(150.0, 150.0)));
        assert!(!r.contains(Vec2::new(49.999, 75.0)));
    }
}
