//! Scene input files.
//!
//! A scene file is JSON carrying one geometry (a mesh grid or a set of
//! polygon faces) plus an optional camera. The primitive kind is kept as
//! data rather than a serde tag so an unrecognized kind surfaces as the
//! typed unsupported-primitive error instead of a parse failure.

use crate::projection::Camera;
use serde::Deserialize;
use std::path::Path;
use svgkit_core::{ExportError, Geometry, GridMesh, Point3, Polygon, Result};

#[derive(Debug, Deserialize)]
struct RawGeometry {
    kind: String,
    #[serde(default)]
    rows: usize,
    #[serde(default)]
    cols: usize,
    #[serde(default)]
    points: Vec<Point3>,
    #[serde(default)]
    faces: Vec<Vec<Point3>>,
}

#[derive(Debug, Deserialize)]
struct RawScene {
    geometry: RawGeometry,
    #[serde(default)]
    camera: Option<Camera>,
}

/// A parsed scene: the geometry to draw plus the optional camera.
#[derive(Debug, Clone)]
pub struct Scene {
    pub geometry: Geometry,
    pub camera: Option<Camera>,
}

impl Scene {
    /// Load a scene from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a scene from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawScene = serde_json::from_str(json)?;
        let geometry = match raw.geometry.kind.as_str() {
            "mesh" => Geometry::Mesh(GridMesh::new(
                raw.geometry.rows,
                raw.geometry.cols,
                raw.geometry.points,
            )?),
            "polygons" => Geometry::Polygons(
                raw.geometry.faces.into_iter().map(Polygon::new).collect(),
            ),
            other => {
                return Err(ExportError::UnsupportedPrimitive {
                    kind: other.to_string(),
                })
            }
        };
        Ok(Self {
            geometry,
            camera: raw.camera,
        })
    }
}
