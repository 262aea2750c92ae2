//! Scene geometry model.
//!
//! Two primitive kinds are supported: a regular mesh grid drawn as a
//! wireframe of row- and column-lines, and a set of polygon faces drawn as
//! closed or open polylines. Everything here is plain data created fresh for
//! one export and dropped after the drawing is serialized.

use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};

/// A point in 3D scene space. Immutable input; the pipeline never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A point in 2D space.
///
/// Lives either in projected space (post-projection, pre-fit) or canvas
/// space (post-fit); the two must not be mixed. A polyline is tagged
/// implicitly by the pipeline stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered sequence of 2D points. Order is significant: it defines the drawn
/// segments. Whether the path is stroked open or closed is decided at emit
/// time from the geometry kind and the polyline-only toggle.
pub type Polyline = Vec<Point2>;

/// A regular `rows x cols` grid of points, row-major storage.
///
/// Drawn as a wireframe of `rows` row-lines (each collecting all columns)
/// and `cols` column-lines (each collecting all rows); every grid point is
/// part of exactly one row-line and one column-line.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMesh {
    rows: usize,
    cols: usize,
    points: Vec<Point3>,
}

impl GridMesh {
    /// Build a grid from row-major points. The point count must match the
    /// grid dimensions exactly.
    pub fn new(rows: usize, cols: usize, points: Vec<Point3>) -> Result<Self> {
        if points.len() != rows * cols {
            return Err(ExportError::invalid_scene(format!(
                "mesh declares {}x{} = {} points but carries {}",
                rows,
                cols,
                rows * cols,
                points.len()
            )));
        }
        Ok(Self { rows, cols, points })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Point at `(row, col)`. Callers stay within the grid dimensions.
    pub fn point(&self, row: usize, col: usize) -> Point3 {
        self.points[row * self.cols + col]
    }
}

/// A single face: an ordered vertex list.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point3>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point3>) -> Self {
        Self { vertices }
    }
}

/// Kind of primitive a geometry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    /// Regular row/column grid drawn as a wireframe.
    Mesh,
    /// Arbitrary faces drawn one polyline per face.
    Polygons,
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mesh => write!(f, "mesh"),
            Self::Polygons => write!(f, "polygons"),
        }
    }
}

/// Geometry for one export, tagged by primitive kind.
///
/// Each variant has its own extraction strategy; dispatch is a plain match
/// rather than runtime type inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Mesh(GridMesh),
    Polygons(Vec<Polygon>),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Mesh(_) => GeometryKind::Mesh,
            Self::Polygons(_) => GeometryKind::Polygons,
        }
    }

    /// Number of primitives the geometry holds. A mesh grid is a single
    /// primitive; a polygon set counts its faces.
    pub fn primitive_count(&self) -> usize {
        match self {
            Self::Mesh(_) => 1,
            Self::Polygons(faces) => faces.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_point_lookup_is_row_major() {
        let points = (0..6)
            .map(|i| Point3::new(i as f64, 0.0, 0.0))
            .collect::<Vec<_>>();
        let mesh = GridMesh::new(2, 3, points).unwrap();

        assert_eq!(mesh.point(0, 0).x, 0.0);
        assert_eq!(mesh.point(0, 2).x, 2.0);
        assert_eq!(mesh.point(1, 0).x, 3.0);
        assert_eq!(mesh.point(1, 2).x, 5.0);
    }

    #[test]
    fn grid_rejects_point_count_mismatch() {
        let err = GridMesh::new(2, 2, vec![Point3::new(0.0, 0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, ExportError::InvalidScene { .. }));
    }

    #[test]
    fn primitive_count_per_kind() {
        let mesh = GridMesh::new(1, 1, vec![Point3::new(0.0, 0.0, 0.0)]).unwrap();
        assert_eq!(Geometry::Mesh(mesh).primitive_count(), 1);

        let faces = vec![Polygon::new(vec![]), Polygon::new(vec![])];
        assert_eq!(Geometry::Polygons(faces).primitive_count(), 2);
        assert_eq!(Geometry::Polygons(vec![]).primitive_count(), 0);
    }

    #[test]
    fn kind_display_matches_scene_tags() {
        assert_eq!(GeometryKind::Mesh.to_string(), "mesh");
        assert_eq!(GeometryKind::Polygons.to_string(), "polygons");
    }
}
