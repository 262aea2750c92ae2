//! Export configuration for SVGKit
//!
//! Provides the recognized export options, their defaults, and JSON file
//! load/save. Settings carry no cross-export state: the host reloads them
//! from file at the start of every export so parameter edits between
//! exports always take effect.

use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Projection strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Oblique shear: depth displaces x/y at configurable per-axis rates
    Offset,
    /// Perspective transform through a scene camera
    Camera,
}

impl Default for ProjectionMode {
    fn default() -> Self {
        Self::Offset
    }
}

impl std::fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Offset => write!(f, "Offset"),
            Self::Camera => write!(f, "Camera"),
        }
    }
}

/// Output filename suffix selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixMode {
    /// Base filename only
    None,
    /// Append wall-clock time at export start, formatted `ddMMyyyy_HHmmss`
    Timestamp,
}

impl Default for SuffixMode {
    fn default() -> Self {
        Self::None
    }
}

impl std::fmt::Display for SuffixMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Timestamp => write!(f, "Timestamp"),
        }
    }
}

/// Export settings
///
/// The full configuration surface of one export: projection parameters,
/// canvas geometry, output styling toggles, and file naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Projection mode for mapping 3D points to 2D
    pub projection: ProjectionMode,
    /// Offset-mode x displacement per unit of depth (any real)
    pub offset_x: f64,
    /// Offset-mode y displacement per unit of depth (any real)
    pub offset_y: f64,
    /// Emit polygon faces as open polylines instead of closed polygons
    pub polyline_only: bool,
    /// Canvas unit for the document size (e.g. "px", "mm")
    pub unit: String,
    /// Uniformly scale and center the drawing into the canvas
    pub scale_to_fit: bool,
    /// Canvas width in `unit`
    pub canvas_width: f64,
    /// Canvas height in `unit`
    pub canvas_height: f64,
    /// Margin kept free on each canvas edge when fitting, in `unit`
    pub margin: f64,
    /// Output folder
    pub folder: PathBuf,
    /// Base output filename; a trailing `.svg` is stripped before suffixing
    pub filename: String,
    /// Filename suffix mode
    pub suffix: SuffixMode,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            projection: ProjectionMode::Offset,
            offset_x: 0.0,
            offset_y: 0.0,
            polyline_only: false,
            unit: "px".to_string(),
            scale_to_fit: true,
            canvas_width: 800.0,
            canvas_height: 800.0,
            margin: 20.0,
            folder: PathBuf::from("."),
            filename: "export".to_string(),
            suffix: SuffixMode::None,
        }
    }
}

impl ExportSettings {
    /// Load settings from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        debug!("Loaded export settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate settings
    ///
    /// Rejects canvas dimensions that cannot hold a drawing and margins that
    /// leave no drawable area.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(ExportError::configuration(format!(
                "canvas must be positive, got {} x {}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.margin < 0.0 {
            return Err(ExportError::configuration(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }
        if self.scale_to_fit
            && 2.0 * self.margin >= self.canvas_width.min(self.canvas_height)
        {
            return Err(ExportError::configuration(format!(
                "margin {} leaves no drawable area on a {} x {} canvas",
                self.margin, self.canvas_width, self.canvas_height
            )));
        }
        if self.filename.is_empty() {
            return Err(ExportError::configuration("filename must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = ExportSettings::default();
        settings.validate().unwrap();
        assert_eq!(settings.projection, ProjectionMode::Offset);
        assert_eq!(settings.suffix, SuffixMode::None);
        assert!(settings.scale_to_fit);
        assert_eq!(settings.unit, "px");
    }

    #[test]
    fn mode_tags_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProjectionMode::Camera).unwrap(),
            "\"camera\""
        );
        assert_eq!(
            serde_json::to_string(&SuffixMode::Timestamp).unwrap(),
            "\"timestamp\""
        );
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let settings: ExportSettings =
            serde_json::from_str(r#"{"projection": "camera", "margin": 5.0}"#).unwrap();
        assert_eq!(settings.projection, ProjectionMode::Camera);
        assert_eq!(settings.margin, 5.0);
        assert_eq!(settings.canvas_width, 800.0);
    }

    #[test]
    fn validate_rejects_unusable_canvas() {
        let mut settings = ExportSettings {
            canvas_width: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        settings.canvas_width = 100.0;
        settings.canvas_height = 100.0;
        settings.margin = 50.0;
        assert!(settings.validate().is_err());

        // A swallowing margin is fine when fit is disabled.
        settings.scale_to_fit = false;
        settings.validate().unwrap();
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = ExportSettings::default();
        settings.projection = ProjectionMode::Camera;
        settings.canvas_width = 210.0;
        settings.unit = "mm".to_string();
        settings.save_to_file(&path).unwrap();

        let loaded = ExportSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded.projection, ProjectionMode::Camera);
        assert_eq!(loaded.canvas_width, 210.0);
        assert_eq!(loaded.unit, "mm");
    }
}
