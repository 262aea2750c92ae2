//! Uniform scale-to-fit normalization.
//!
//! Computes the axis-aligned bounding box of the whole drawing (the union
//! over all polylines, not per polyline) and derives one uniform scale plus
//! per-axis offsets that center it within the canvas. The margin only
//! constrains the scale factor; centering uses the full canvas dimensions.

use svgkit_core::{ExportError, Point2, Polyline, Result};
use tracing::debug;

/// Bounding box accumulator over projected points.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    pub fn new() -> Self {
        Self {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
        }
    }

    pub fn update(&mut self, p: Point2) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn of_polylines(polylines: &[Polyline]) -> Self {
        let mut bounds = Self::new();
        for polyline in polylines {
            for p in polyline {
                bounds.update(*p);
            }
        }
        bounds
    }

    /// False until at least one finite point has been accumulated.
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Uniform scale plus per-axis offset fitting one export's drawing into the
/// canvas. Derived from the full polyline set of that export and applied to
/// every one of its points; never mixed across exports.
#[derive(Debug, Clone, Copy)]
pub struct FitTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl FitTransform {
    /// Derive the transform for a drawing.
    ///
    /// The scale is chosen by the more constraining axis, so aspect ratio is
    /// preserved and the drawing never exceeds the margin-inset canvas. A
    /// drawing with no extent on either axis (collinear or empty) has no
    /// such scale and is rejected before any division.
    pub fn compute(
        polylines: &[Polyline],
        canvas_width: f64,
        canvas_height: f64,
        margin: f64,
    ) -> Result<Self> {
        let bounds = Bounds::of_polylines(polylines);
        if !bounds.is_valid() {
            return Err(ExportError::DegenerateBounds {
                width: 0.0,
                height: 0.0,
            });
        }

        let width = bounds.width();
        let height = bounds.height();
        if width == 0.0 || height == 0.0 {
            return Err(ExportError::DegenerateBounds { width, height });
        }

        let scale = ((canvas_width - 2.0 * margin) / width)
            .min((canvas_height - 2.0 * margin) / height);
        debug!(
            "Fitting {} x {} drawing into {} x {} canvas at scale {}",
            width, height, canvas_width, canvas_height, scale
        );

        Ok(Self {
            scale,
            offset_x: (canvas_width - width * scale) / 2.0 - bounds.min_x * scale,
            offset_y: (canvas_height - height * scale) / 2.0 - bounds.min_y * scale,
        })
    }

    pub fn apply_point(&self, p: Point2) -> Point2 {
        Point2::new(p.x * self.scale + self.offset_x, p.y * self.scale + self.offset_y)
    }

    /// Replace projected-space polylines with canvas-space polylines.
    pub fn apply(&self, polylines: &mut [Polyline]) {
        for polyline in polylines.iter_mut() {
            for p in polyline.iter_mut() {
                *p = self.apply_point(*p);
            }
        }
    }
}
