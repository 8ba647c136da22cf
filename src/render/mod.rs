//! Aliased preview of a scene and its clip results.
//!
//! Originals are drawn in a dim color first, clipped results on top in a
//! bright one, and the window outline last. World `+y` points up in the image.

pub mod framebuffer;

pub use framebuffer::FrameBuffer;

use crate::colors;
use crate::error::RenderError;
use crate::math::vec2::Vec2;
use crate::scene::{ClipReport, Scene};

/// Image size and palette for a preview.
#[derive(Clone, Copy, Debug)]
pub struct PreviewConfig {
    pub width: u32,
    pub height: u32,
    /// Pixels left empty around the scene bounds.
    pub margin: u32,
    /// Grid line spacing in pixels, 0 disables the grid.
    pub grid_spacing: i32,
    pub background: u32,
    pub grid: u32,
    pub window: u32,
    pub original_line: u32,
    pub clipped_line: u32,
    pub original_polygon: u32,
    pub clipped_polygon: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            margin: 40,
            grid_spacing: 50,
            background: colors::COLOR_BACKGROUND,
            grid: colors::COLOR_GRID,
            window: colors::COLOR_WINDOW,
            original_line: colors::COLOR_ORIGINAL_LINE,
            clipped_line: colors::COLOR_CLIPPED_LINE,
            original_polygon: colors::COLOR_ORIGINAL_POLYGON,
            clipped_polygon: colors::COLOR_CLIPPED_POLYGON,
        }
    }
}

/// Uniform world-to-pixel mapping that fits a bounding box into the image.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    origin: Vec2,
    scale: f64,
    margin: f64,
    height: f64,
}

impl Viewport {
    fn fit(min: Vec2, max: Vec2, config: &PreviewConfig) -> Self {
        let margin = config.margin as f64;
        let usable_w = (config.width as f64 - 2.0 * margin).max(1.0);
        let usable_h = (config.height as f64 - 2.0 * margin).max(1.0);
        let extent_w = (max.x - min.x).max(f64::EPSILON);
        let extent_h = (max.y - min.y).max(f64::EPSILON);
        Self {
            origin: min,
            scale: (usable_w / extent_w).min(usable_h / extent_h),
            margin,
            height: config.height as f64,
        }
    }

    fn to_pixel(&self, p: Vec2) -> (i32, i32) {
        let x = self.margin + (p.x - self.origin.x) * self.scale;
        let y = self.height - 1.0 - self.margin - (p.y - self.origin.y) * self.scale;
        (x.round() as i32, y.round() as i32)
    }
}

/// Render `scene` and `report` into a new frame buffer.
pub fn render_preview(
    scene: &Scene,
    report: &ClipReport,
    config: &PreviewConfig,
) -> Result<FrameBuffer, RenderError> {
    let mut fb = FrameBuffer::new(config.width, config.height, config.background)?;
    fb.draw_grid(config.grid_spacing, config.grid);

    let (min, max) = scene.bounds();
    let view = Viewport::fit(min, max, config);
    let pixels = |points: &[Vec2]| -> Vec<(i32, i32)> {
        points.iter().map(|&p| view.to_pixel(p)).collect()
    };

    fb.draw_closed_polyline(&pixels(&scene.polygon), config.original_polygon);
    for segment in &scene.segments {
        let (x0, y0) = view.to_pixel(segment.p1);
        let (x1, y1) = view.to_pixel(segment.p2);
        fb.draw_line_dda(x0, y0, x1, y1, config.original_line);
    }

    fb.draw_closed_polyline(&pixels(&report.polygon), config.clipped_polygon);
    for segment in report.segments.iter().flatten() {
        let (x0, y0) = view.to_pixel(segment.p1);
        let (x1, y1) = view.to_pixel(segment.p2);
        fb.draw_line_dda(x0, y0, x1, y1, config.clipped_line);
    }

    fb.draw_closed_polyline(&pixels(&scene.window.corners()), config.window);

    Ok(fb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_maps_bounds_into_margin() {
        let config = PreviewConfig {
            width: 200,
            height: 200,
            margin: 10,
            ..PreviewConfig::default()
        };
        let view = Viewport::fit(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0), &config);
        assert_eq!(view.to_pixel(Vec2::new(0.0, 0.0)), (10, 189));
        assert_eq!(view.to_pixel(Vec2::new(100.0, 100.0)), (190, 9));
    }

    #[test]
    fn preview_draws_window_outline() {
        let scene = Scene::reference().unwrap();
        let report = scene.clip();
        let config = PreviewConfig {
            grid_spacing: 0,
            ..PreviewConfig::default()
        };
        let fb = render_preview(&scene, &report, &config).unwrap();

        let (min, max) = scene.bounds();
        let view = Viewport::fit(min, max, &config);
        let (x, y) = view.to_pixel(scene.window.corners()[0]);
        assert_eq!(fb.get_pixel(x, y), Some(config.window));
    }
}
