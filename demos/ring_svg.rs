//! Renders a polygon, its SDF, iso-contours, and a triangulated ring to SVG.
//!
//! Run with: cargo run --example ring_svg [output.svg]

use sdfring::{Point2, Polygon, SdfConfig, SdfProcessor};
use std::f64::consts::PI;
use std::fs::File;
use std::io::{self, Write};

const SIZE: f64 = 600.0;
/// World units shown across the canvas, centered on the origin.
const VIEW: f64 = 2.4;
const TEXT_COLOR: &str = "#e0e0e0";

struct Svg {
    content: String,
}

impl Svg {
    fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn to_screen(p: Point2<f64>) -> (f64, f64) {
        let scale = SIZE / VIEW;
        (SIZE / 2.0 + p.x * scale, SIZE / 2.0 - p.y * scale)
    }

    fn rect(&mut self, min: Point2<f64>, max: Point2<f64>, fill: &str) {
        let (x0, y0) = Self::to_screen(Point2::new(min.x, max.y));
        let (x1, y1) = Self::to_screen(Point2::new(max.x, min.y));
        self.content.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            x0,
            y0,
            x1 - x0,
            y1 - y0,
            fill
        ));
        self.content.push('\n');
    }

    fn polygon(&mut self, points: &[Point2<f64>], fill: &str, stroke: &str, stroke_width: f64) {
        let pts: String = points
            .iter()
            .map(|&p| {
                let (x, y) = Self::to_screen(p);
                format!("{:.2},{:.2}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
            pts, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn text(&mut self, x: f64, y: f64, text: &str) {
        self.content.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="system-ui, sans-serif" font-size="14" fill="{}">{}</text>"#,
            x, y, TEXT_COLOR, text
        ));
        self.content.push('\n');
    }

    fn save(&self, path: &str) -> io::Result<()> {
        let svg = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">
<rect width="100%" height="100%" fill="#1a1a2e"/>
{}
</svg>"##,
            self.content,
            size = SIZE
        );
        File::create(path)?.write_all(svg.as_bytes())
    }
}

fn star(points: usize, outer_r: f64, inner_r: f64) -> Vec<Point2<f64>> {
    (0..points * 2)
        .map(|i| {
            let angle = i as f64 * PI / points as f64 + PI / 2.0;
            let r = if i % 2 == 0 { outer_r } else { inner_r };
            Point2::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}

fn heat_color(dist: f64, lo: f64, hi: f64) -> String {
    let (r, g, b) = if dist < 0.0 {
        let t = (dist / lo).clamp(0.0, 1.0);
        (100.0 + t * 100.0, 50.0 + t * 50.0, 200.0 - t * 50.0)
    } else {
        let t = (dist / hi).clamp(0.0, 1.0);
        (255.0 - t * 200.0, 150.0 - t * 130.0, 50.0 - t * 30.0)
    };
    format!("#{:02x}{:02x}{:02x}", r as u8, g as u8, b as u8)
}

fn main() -> io::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ring.svg".to_string());

    let config = SdfConfig::default().with_grid_size(0.02);
    let mut processor: SdfProcessor<f64> = SdfProcessor::new(config);
    let shape = star(5, 0.6, 0.25);
    if !processor.set_polygon(&shape) {
        eprintln!("polygon rejected");
        return Ok(());
    }

    let mut svg = Svg::new();

    // SDF heat map, one rect per grid cell
    if let Ok(grid) = processor.sdf_grid() {
        let (lo, hi) = grid.value_range().unwrap_or((-1.0, 1.0));
        let (step_x, step_y) = grid.step();
        for y in 0..grid.height {
            for x in 0..grid.width {
                let c = grid.cell_center(x, y);
                let half = Point2::new(step_x / 2.0, step_y / 2.0);
                svg.rect(
                    Point2::new(c.x - half.x, c.y - half.y),
                    Point2::new(c.x + half.x, c.y + half.y),
                    &heat_color(grid.get(x, y), lo, hi),
                );
            }
        }
    }

    let ring = processor.generate_ring(0.15, 0.05);
    if ring.is_valid {
        for tri in ring.triangle_vertices.chunks_exact(3) {
            svg.polygon(tri, "#4ecca3", "#4ecca3", 0.5);
        }
    }

    for threshold in [-0.1, 0.0, 0.3] {
        let contour = processor.extract_contour(threshold);
        if contour.is_valid {
            let resampled = processor.resample(&contour.ordered_points);
            svg.polygon(&resampled, "none", "#ffffff", 1.0);
        }
    }

    svg.polygon(processor.polygon(), "none", "#ff6b6b", 2.0);
    let outline = Polygon::new(shape);
    svg.text(
        16.0,
        24.0,
        &format!(
            "area {:.3}, perimeter {:.3}",
            outline.signed_area().abs(),
            outline.perimeter()
        ),
    );
    svg.text(
        16.0,
        44.0,
        &format!(
            "ring: {} triangles, outer {} pts, inner {} pts",
            ring.triangle_count,
            ring.outer_contour.len(),
            ring.inner_contour.len()
        ),
    );

    svg.save(&path)?;
    println!("wrote {}", path);
    Ok(())
}
