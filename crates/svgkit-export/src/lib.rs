//! # SVGKit Export
//!
//! The forward conversion pipeline: 3D scene geometry in, flat SVG file out.
//!
//! Data flow for one export:
//!
//! ```text
//! Geometry ──extract (projecting each point)──> projected polylines
//!          ──optional FitTransform───────────> canvas-space polylines
//!          ──SvgDocument──────────────────────> stroked SVG on disk
//! ```
//!
//! Everything runs synchronously on the calling thread; per-export state is
//! passed explicitly and dropped when [`exporter::export`] returns.

pub mod document;
pub mod exporter;
pub mod extract;
pub mod fit;
pub mod projection;
pub mod scene;

pub use document::SvgDocument;
pub use exporter::{export, export_scene, ReloadNotifier};
pub use extract::extract_polylines;
pub use fit::{Bounds, FitTransform};
pub use projection::{Camera, ProjectionState, Projector};
pub use scene::Scene;
