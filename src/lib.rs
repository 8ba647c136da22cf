//! 2D clipping against an axis-aligned rectangular window.
//!
//! Segments are clipped with Liang-Barsky, polygons with Sutherland-Hodgman.
//! Both are pure functions of the window and the input shape; a point on the
//! window's boundary counts as inside.
//!
//! # Quick Start
//!
//! ```
//! use rectclip::prelude::*;
//!
//! let window = ClipRect::new(50.0, 50.0, 150.0, 150.0)?;
//! let clipped = clip_line(&window, Vec2::new(20.0, 20.0), Vec2::new(180.0, 180.0));
//! assert!(clipped.is_some());
//!
//! let polygon = [Vec2::new(30.0, 80.0), Vec2::new(120.0, 180.0), Vec2::new(180.0, 80.0)];
//! let clipped = clip_polygon(&window, &polygon);
//! assert!(!clipped.is_empty());
//! # Ok::<(), rectclip::ClipError>(())
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod error;
pub mod math;
pub mod rect;
pub mod render;
pub mod scene;

// Internal modules - used within the crate only
pub(crate) mod colors;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{clip_line, clip_polygon, Boundary, LineClipper, PolygonClipper, Segment};
pub use error::{ClipError, RenderError};
pub use rect::ClipRect;
pub use scene::{ClipReport, Scene};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rectclip::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{
        clip_line, clip_polygon, Boundary, LineClipper, PolygonClipper, Segment,
    };

    // Window
    pub use crate::rect::ClipRect;

    // Math
    pub use crate::math::vec2::Vec2;

    // Scene & preview
    pub use crate::render::{render_preview, PreviewConfig};
    pub use crate::scene::{ClipReport, Scene};
}
