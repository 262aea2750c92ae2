//! # SVGKit Core
//!
//! Core types for the SVGKit export pipeline.
//! Provides the scene data model (points, polylines, mesh grids, polygon
//! faces), the export configuration surface, and the error taxonomy shared
//! by all layers.

pub mod error;
pub mod geometry;
pub mod settings;

pub use error::{ExportError, Result};

pub use geometry::{Geometry, GeometryKind, GridMesh, Point2, Point3, Polygon, Polyline};

pub use settings::{ExportSettings, ProjectionMode, SuffixMode};
