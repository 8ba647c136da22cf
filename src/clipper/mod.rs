//! Clipping against an axis-aligned rectangular window.
//!
//! - [`line`]: Liang-Barsky parametric segment clipping.
//! - [`polygon`]: Sutherland-Hodgman polygon clipping.
//!
//! Both walk the window's [`Boundary`] half-planes in the fixed order
//! left, right, bottom, top, and both treat points on a boundary as inside.

pub mod boundary;
pub mod line;
pub mod polygon;

pub use boundary::Boundary;
pub use line::{clip_line, LineClipper, Segment};
pub use polygon::{clip_against_boundary, clip_polygon, PolygonClipper};
