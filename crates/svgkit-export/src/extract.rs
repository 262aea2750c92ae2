//! Polyline extraction from scene geometry.
//!
//! Walks a geometry and produces the ordered 2D polylines of its drawing,
//! projecting every point exactly once. Extraction never fails: empty faces
//! yield empty polylines, and the orchestrator rejects empty or unsupported
//! geometry before this stage runs.

use crate::projection::Projector;
use svgkit_core::{Geometry, GridMesh, Polygon, Polyline};
use tracing::debug;

/// Produce the ordered polylines of a geometry's 2D drawing.
pub fn extract_polylines(geometry: &Geometry, projector: &Projector) -> Vec<Polyline> {
    match geometry {
        Geometry::Mesh(mesh) => extract_mesh(mesh, projector),
        Geometry::Polygons(faces) => extract_polygons(faces, projector),
    }
}

/// Mesh wireframe: `rows` row-lines followed by `cols` column-lines. Both
/// families are filled in a single row-major pass, so each row-line holds
/// all columns in order and each column-line all rows in order.
fn extract_mesh(mesh: &GridMesh, projector: &Projector) -> Vec<Polyline> {
    let (rows, cols) = (mesh.rows(), mesh.cols());
    let mut polylines: Vec<Polyline> = vec![Vec::new(); rows + cols];

    for row in 0..rows {
        for col in 0..cols {
            let p = projector.project(mesh.point(row, col));
            polylines[row].push(p);
            polylines[rows + col].push(p);
        }
    }

    debug!(
        "Extracted {} wireframe lines from a {}x{} mesh",
        polylines.len(),
        rows,
        cols
    );
    polylines
}

/// One polyline per face, vertex order preserved exactly: no reordering, no
/// dedup, no closing point.
fn extract_polygons(faces: &[Polygon], projector: &Projector) -> Vec<Polyline> {
    let polylines: Vec<Polyline> = faces
        .iter()
        .map(|face| {
            face.vertices
                .iter()
                .map(|vertex| projector.project(*vertex))
                .collect()
        })
        .collect();

    debug!("Extracted {} face outlines", polylines.len());
    polylines
}
