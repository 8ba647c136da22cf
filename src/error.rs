//! Error types.
//!
//! Clipping itself never fails; only building a clip window and writing a
//! preview image can.

use thiserror::Error;

/// Rejected clip window construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    #[error("invalid clip window ({xmin}, {ymin}, {xmax}, {ymax}): min must not exceed max")]
    InvalidWindow {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },
    #[error("clip window coordinates must be finite")]
    NonFiniteWindow,
}

/// Failure while producing a preview image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("preview size {width}x{height} must be non-zero")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("preview size {width}x{height} is too large")]
    CanvasTooLarge { width: u32, height: u32 },
    #[error("failed to write preview image")]
    Image(#[from] image::ImageError),
}
