//! Clips the reference scene, prints the results and writes a PNG preview.
//!
//! Usage: `rectclip [OUTPUT.png]` (default `clipping.png`).
//!
//! Each polygon pass starts at the closing edge, so the printed vertex list
//! begins at `(65.00, 50.00)`. A walk starting at the first edge lists the same
//! cycle from `(150.00, 57.50)`.

use std::error::Error;

use log::info;
use rectclip::prelude::*;

const DEFAULT_OUTPUT: &str = "clipping.png";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let scene = Scene::reference()?;
    let report = scene.clip();

    let w = &scene.window;
    println!(
        "Clipping Window: ({}, {}, {}, {})",
        w.xmin(),
        w.ymin(),
        w.xmax(),
        w.ymax()
    );

    for (original, clipped) in scene.segments.iter().zip(&report.segments) {
        match clipped {
            Some(s) => info!(
                "segment {:?} -> {:?} clipped to ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                (original.p1.x, original.p1.y),
                (original.p2.x, original.p2.y),
                s.p1.x,
                s.p1.y,
                s.p2.x,
                s.p2.y
            ),
            None => info!(
                "segment {:?} -> {:?} is completely outside",
                (original.p1.x, original.p1.y),
                (original.p2.x, original.p2.y)
            ),
        }
    }

    println!("\nPolygon Clipping Result:");
    if report.polygon.is_empty() {
        println!("  Polygon is completely outside.");
    } else {
        println!("Number of vertices: {}", report.polygon.len());
        for (i, p) in report.polygon.iter().enumerate() {
            println!("  Vertex {}: ({:.2}, {:.2})", i + 1, p.x, p.y);
        }
    }

    let preview = render_preview(&scene, &report, &PreviewConfig::default())?;
    preview.save(&output)?;
    info!("preview written to {output}");

    Ok(())
}
