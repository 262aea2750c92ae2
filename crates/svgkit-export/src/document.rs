//! In-memory SVG document writer.
//!
//! Collects stroked shapes and serializes a complete SVG document. The root
//! size carries the configured unit and the viewBox spans the canvas, so one
//! user unit maps to one canvas unit. Every shape uses the fixed export
//! styling: black stroke, stroke width 1, no fill.

use std::fmt::Write as _;
use std::path::Path;
use svgkit_core::{Polyline, Result};

const STYLE: &str = "stroke=\"black\" stroke-width=\"1\" fill=\"none\"";

/// A drawing being assembled for one export.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    unit: String,
    shapes: Vec<String>,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64, unit: impl Into<String>) -> Self {
        Self {
            width,
            height,
            unit: unit.into(),
            shapes: Vec::new(),
        }
    }

    /// Add an open stroked path.
    pub fn add_polyline(&mut self, points: &Polyline) {
        self.shapes.push(format!(
            "<polyline points=\"{}\" {STYLE}/>",
            points_attr(points)
        ));
    }

    /// Add a closed stroked shape (the closing edge is implicit).
    pub fn add_polygon(&mut self, points: &Polyline) {
        self.shapes.push(format!(
            "<polygon points=\"{}\" {STYLE}/>",
            points_attr(points)
        ));
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Serialize the document to SVG text.
    pub fn to_svg_string(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}{u}\" height=\"{h}{u}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height,
            u = self.unit
        );
        for shape in &self.shapes {
            svg.push_str("  ");
            svg.push_str(shape);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the document to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg_string())?;
        Ok(())
    }
}

fn points_attr(points: &Polyline) -> String {
    let mut attr = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            attr.push(' ');
        }
        let _ = write!(attr, "{},{}", p.x, p.y);
    }
    attr
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgkit_core::Point2;

    #[test]
    fn document_header_carries_size_and_viewbox() {
        let doc = SvgDocument::new(210.0, 297.0, "mm");
        let svg = doc.to_svg_string();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("width=\"210mm\""));
        assert!(svg.contains("height=\"297mm\""));
        assert!(svg.contains("viewBox=\"0 0 210 297\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn polyline_and_polygon_elements() {
        let mut doc = SvgDocument::new(100.0, 100.0, "px");
        let points = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 5.5)];
        doc.add_polyline(&points);
        doc.add_polygon(&points);
        assert_eq!(doc.shape_count(), 2);

        let svg = doc.to_svg_string();
        assert!(svg.contains("<polyline points=\"0,0 10,5.5\""));
        assert!(svg.contains("<polygon points=\"0,0 10,5.5\""));
        assert_eq!(svg.matches(STYLE).count(), 2);
    }
}
