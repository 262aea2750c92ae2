//! Error handling for SVGKit
//!
//! Provides the error taxonomy for the export pipeline:
//! - Configuration errors (projection mode cannot be set up)
//! - Geometry errors (nothing to draw, unsupported primitive kind)
//! - Fit errors (degenerate bounding box)
//! - File errors (scene/settings parsing, output I/O)
//!
//! All error types use `thiserror` for ergonomic error handling. Every
//! variant aborts the export before the output file is written; none are
//! retried.

use thiserror::Error;

/// Export error type
///
/// Represents every way a single export invocation can fail. This is the
/// primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The projection cannot be constructed from the current configuration
    #[error("Configuration error: {reason}")]
    Configuration {
        /// Why the projection could not be set up.
        reason: String,
    },

    /// The scene contains no primitives to draw
    #[error("No primitive to draw")]
    EmptyGeometry,

    /// The scene's primitive kind is neither a mesh grid nor a polygon set
    #[error("Unsupported primitive type: {kind}")]
    UnsupportedPrimitive {
        /// The primitive kind found in the scene.
        kind: String,
    },

    /// The projected drawing has no extent on at least one axis, so no
    /// scale-to-fit factor exists
    #[error("Degenerate bounding box: {width} x {height}")]
    DegenerateBounds {
        /// Bounding box width in projected units.
        width: f64,
        /// Bounding box height in projected units.
        height: f64,
    },

    /// A scene file is structurally valid JSON but describes an impossible
    /// geometry
    #[error("Invalid scene: {reason}")]
    InvalidScene {
        /// What is wrong with the scene data.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while reading a settings or scene file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// Create a configuration error from a reason message
    pub fn configuration(reason: impl Into<String>) -> Self {
        ExportError::Configuration {
            reason: reason.into(),
        }
    }

    /// Create an invalid-scene error from a reason message
    pub fn invalid_scene(reason: impl Into<String>) -> Self {
        ExportError::InvalidScene {
            reason: reason.into(),
        }
    }

    /// Check if this error was raised by geometry validation
    pub fn is_geometry_error(&self) -> bool {
        matches!(
            self,
            ExportError::EmptyGeometry | ExportError::UnsupportedPrimitive { .. }
        )
    }

    /// Check if this is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, ExportError::Configuration { .. })
    }
}

/// Result type using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;
