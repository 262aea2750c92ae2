//! Export orchestration.
//!
//! Runs one export to completion on the calling thread: validate the
//! geometry, capture the projection, extract polylines, optionally fit them
//! into the canvas, assemble the SVG document, write it, and notify the
//! downstream consumer. Nothing touches the disk until extraction and fit
//! have succeeded, so an aborted export leaves no partial file behind.

use crate::document::SvgDocument;
use crate::extract::extract_polylines;
use crate::fit::FitTransform;
use crate::projection::{Camera, Projector};
use crate::scene::Scene;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use svgkit_core::{ExportError, ExportSettings, Geometry, GeometryKind, Result, SuffixMode};
use tracing::{debug, info};

/// Downstream consumer told about every written SVG so it can reload it.
pub trait ReloadNotifier {
    fn svg_written(&mut self, path: &Path);
}

/// Run one export and return the path of the written file.
///
/// Mesh wireframes are always emitted as open polylines; polygon faces are
/// closed unless the polyline-only toggle is set.
pub fn export(
    geometry: &Geometry,
    camera: Option<&Camera>,
    settings: &ExportSettings,
    mut notifier: Option<&mut dyn ReloadNotifier>,
) -> Result<PathBuf> {
    settings.validate()?;

    if geometry.primitive_count() == 0 {
        return Err(ExportError::EmptyGeometry);
    }

    info!(
        "Exporting {} geometry with {} projection",
        geometry.kind(),
        settings.projection
    );

    let projector = Projector::from_settings(settings, camera)?;
    let mut polylines = extract_polylines(geometry, &projector);

    if settings.scale_to_fit {
        let fit = FitTransform::compute(
            &polylines,
            settings.canvas_width,
            settings.canvas_height,
            settings.margin,
        )?;
        fit.apply(&mut polylines);
    }

    let mut document = SvgDocument::new(
        settings.canvas_width,
        settings.canvas_height,
        settings.unit.clone(),
    );
    let closed = geometry.kind() == GeometryKind::Polygons && !settings.polyline_only;
    for polyline in &polylines {
        if closed {
            document.add_polygon(polyline);
        } else {
            document.add_polyline(polyline);
        }
    }

    let path = output_path_at(settings, Local::now());
    document.save(&path)?;
    info!(
        "Saved {} shapes to {}",
        document.shape_count(),
        path.display()
    );

    if let Some(notifier) = notifier.as_mut() {
        debug!("Notifying reload consumer of {}", path.display());
        notifier.svg_written(&path);
    }

    Ok(path)
}

/// Export a parsed scene: its geometry with its own camera, if any.
pub fn export_scene(
    scene: &Scene,
    settings: &ExportSettings,
    notifier: Option<&mut dyn ReloadNotifier>,
) -> Result<PathBuf> {
    export(&scene.geometry, scene.camera.as_ref(), settings, notifier)
}

/// Output path for an export starting at `timestamp`: folder + base name
/// (with any trailing `.svg` stripped) + optional timestamp suffix + `.svg`.
fn output_path_at(settings: &ExportSettings, timestamp: DateTime<Local>) -> PathBuf {
    let mut name = settings
        .filename
        .strip_suffix(".svg")
        .unwrap_or(&settings.filename)
        .to_string();

    if settings.suffix == SuffixMode::Timestamp {
        name.push('_');
        name.push_str(&timestamp.format("%d%m%Y_%H%M%S").to_string());
    }

    name.push_str(".svg");
    settings.folder.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 7, 16, 5, 9).unwrap()
    }

    #[test]
    fn plain_output_path() {
        let settings = ExportSettings {
            folder: PathBuf::from("/tmp/out"),
            filename: "drawing".to_string(),
            ..Default::default()
        };
        assert_eq!(
            output_path_at(&settings, at()),
            PathBuf::from("/tmp/out/drawing.svg")
        );
    }

    #[test]
    fn trailing_svg_is_stripped_before_suffixing() {
        let settings = ExportSettings {
            filename: "drawing.svg".to_string(),
            suffix: SuffixMode::Timestamp,
            ..Default::default()
        };
        assert_eq!(
            output_path_at(&settings, at()),
            PathBuf::from("./drawing_07032024_160509.svg")
        );
    }
}
