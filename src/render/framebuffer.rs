//! Owned ARGB pixel buffer with the drawing primitives the preview needs.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::colors;
use crate::error::RenderError;

/// A width x height ARGB8888 color buffer.
///
/// Out-of-bounds writes are silently ignored, so shapes may extend past
/// the edges of the image.
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Pixel coordinates are `i32` and indices `u32`, so both dimensions must
    /// fit in `i32` and the pixel count in `u32`.
    pub fn new(width: u32, height: u32, background: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas { width, height });
        }
        let pixel_count = width
            .checked_mul(height)
            .filter(|_| i32::try_from(width).is_ok() && i32::try_from(height).is_ok())
            .ok_or(RenderError::CanvasTooLarge { width, height })?;
        Ok(Self {
            color_buffer: vec![background; pixel_count as usize],
            width,
            height,
        })
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    pub fn draw_grid(&mut self, spacing: i32, color: u32) {
        if spacing <= 0 {
            return;
        }
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw a line using the DDA algorithm, endpoints included.
    pub fn draw_line_dda(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = x1 - x0;
        let dy = y1 - y0;

        let side_length = dx.abs().max(dy.abs());
        if side_length == 0 {
            self.set_pixel(x0, y0, color);
            return;
        }

        let x_increment = dx as f32 / side_length as f32;
        let y_increment = dy as f32 / side_length as f32;
        let mut current_x = x0 as f32;
        let mut current_y = y0 as f32;

        for _ in 0..=side_length {
            self.set_pixel(current_x.round() as i32, current_y.round() as i32, color);
            current_x += x_increment;
            current_y += y_increment;
        }
    }

    /// Draw a closed outline through `points`.
    pub fn draw_closed_polyline(&mut self, points: &[(i32, i32)], color: u32) {
        match points {
            [] => {}
            [(x, y)] => self.set_pixel(*x, *y, color),
            _ => {
                for (i, &(x0, y0)) in points.iter().enumerate() {
                    let (x1, y1) = points[(i + 1) % points.len()];
                    self.draw_line_dda(x0, y0, x1, y1, color);
                }
            }
        }
    }

    /// Convert to an RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgba(colors::unpack_rgba(
                self.color_buffer[(y * self.width + x) as usize],
            ))
        })
    }

    /// Write the buffer to disk; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        self.to_image().save(path)?;
        Ok(())
    }
}
