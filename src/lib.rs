//! # SVGKit
//!
//! Converts a 3D surface mesh or polygon geometry into a 2D vector drawing
//! (SVG), via an orthographic offset projection or a camera-based
//! perspective projection, with optional uniform scale-to-fit into a target
//! canvas.
//!
//! ## Architecture
//!
//! SVGKit is organized as a workspace:
//!
//! 1. **svgkit-core** - geometry model, export settings, error taxonomy
//! 2. **svgkit-export** - projection, extraction, scale-to-fit, SVG assembly
//! 3. **svgkit** - the command-line binary tying the crates together
//!
//! One invocation performs one forward conversion: scene in, flat SVG out.
//! There is no interactivity, no undo, and no incremental re-projection.

pub use svgkit_core::{
    ExportError, ExportSettings, Geometry, GeometryKind, GridMesh, Point2, Point3, Polygon,
    Polyline, ProjectionMode, Result, SuffixMode,
};

pub use svgkit_export::{
    export, export_scene, Bounds, Camera, FitTransform, ProjectionState, Projector,
    ReloadNotifier, Scene, SvgDocument,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
