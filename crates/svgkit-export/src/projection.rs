//! 3D-to-2D point projection
//!
//! Two strategies are supported: an oblique offset shear approximating an
//! isometric view, and a perspective transform through a scene camera. The
//! camera's view and projection matrices are captured once per export before
//! any point is projected and stay immutable for its duration.

use glam::{DMat4, DVec4};
use serde::{Deserialize, Serialize};
use svgkit_core::{ExportError, ExportSettings, Point2, Point3, ProjectionMode, Result};
use tracing::debug;

/// Homogeneous coordinates below this |w| skip the perspective divide.
const MIN_W: f64 = 1e-12;

/// Perspective camera captured from the host scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Camera world transform, column-major 4x4. Must be invertible.
    pub world: [f64; 16],
    /// Vertical field of view in degrees.
    pub fov: f64,
    /// Near clip distance.
    pub near: f64,
    /// Far clip distance.
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            world: DMat4::IDENTITY.to_cols_array(),
            fov: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn from_world(world: DMat4, fov: f64, near: f64, far: f64) -> Self {
        Self {
            world: world.to_cols_array(),
            fov,
            near,
            far,
        }
    }

    pub fn world_matrix(&self) -> DMat4 {
        DMat4::from_cols_array(&self.world)
    }

    /// Projection matrix at the given aspect ratio.
    pub fn projection(&self, aspect_ratio: f64) -> DMat4 {
        DMat4::perspective_rh(self.fov.to_radians(), aspect_ratio, self.near, self.far)
    }
}

/// View and projection matrices captured once per export.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionState {
    view: DMat4,
    projection: DMat4,
}

impl ProjectionState {
    /// Capture the camera state for one export. The view matrix is the
    /// inverted camera world transform; the projection matrix is built at a
    /// 1:1 aspect ratio.
    pub fn capture(camera: &Camera) -> Result<Self> {
        let world = camera.world_matrix();
        if world.determinant().abs() < MIN_W {
            return Err(ExportError::configuration(
                "camera world transform is not invertible",
            ));
        }
        debug!("Captured camera state (fov {} deg)", camera.fov);
        Ok(Self {
            view: world.inverse(),
            projection: camera.projection(1.0),
        })
    }

    /// Project a scene point into 2D clip coordinates, with perspective
    /// divide when the homogeneous w is usable.
    pub fn project(&self, point: Point3) -> Point2 {
        let clip = self.projection * self.view * DVec4::new(point.x, point.y, point.z, 1.0);
        if clip.w.abs() > MIN_W {
            Point2::new(clip.x / clip.w, clip.y / clip.w)
        } else {
            Point2::new(clip.x, clip.y)
        }
    }
}

/// Point projection strategy for one export.
#[derive(Debug, Clone, Copy)]
pub enum Projector {
    /// Oblique shear: depth displaces the 2D position at per-axis rates.
    Offset { offset_x: f64, offset_y: f64 },
    /// Perspective transform through a captured camera state.
    Camera(ProjectionState),
}

impl Projector {
    /// Build the projector for the configured mode.
    ///
    /// Camera mode without a camera is a fatal configuration error: no
    /// projection is possible for the export.
    pub fn from_settings(settings: &ExportSettings, camera: Option<&Camera>) -> Result<Self> {
        match settings.projection {
            ProjectionMode::Offset => Ok(Self::Offset {
                offset_x: settings.offset_x,
                offset_y: settings.offset_y,
            }),
            ProjectionMode::Camera => {
                let camera = camera.ok_or_else(|| {
                    ExportError::configuration(
                        "camera projection selected but the scene has no camera",
                    )
                })?;
                Ok(Self::Camera(ProjectionState::capture(camera)?))
            }
        }
    }

    /// Project a single 3D point to 2D. Pure function of the point and the
    /// state captured at construction.
    pub fn project(&self, point: Point3) -> Point2 {
        match self {
            Self::Offset { offset_x, offset_y } => Point2::new(
                point.x + point.z * offset_x,
                point.y + point.z * offset_y,
            ),
            Self::Camera(state) => state.project(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_offsets_are_identity_on_xy() {
        let projector = Projector::Offset {
            offset_x: 0.0,
            offset_y: 0.0,
        };
        for z in [-3.0, 0.0, 12.5] {
            let p = projector.project(Point3::new(1.5, -2.0, z));
            assert_eq!(p, Point2::new(1.5, -2.0));
        }
    }

    #[test]
    fn offsets_shear_by_depth() {
        let projector = Projector::Offset {
            offset_x: 0.5,
            offset_y: -1.0,
        };
        let p = projector.project(Point3::new(1.0, 2.0, 4.0));
        assert!(close(p.x, 3.0));
        assert!(close(p.y, -2.0));
    }

    #[test]
    fn camera_centers_the_look_target() {
        // Camera at (0, 0, 5) with identity rotation looks down -Z.
        let camera = Camera::from_world(
            DMat4::from_translation(DVec3::new(0.0, 0.0, 5.0)),
            90.0,
            0.1,
            100.0,
        );
        let state = ProjectionState::capture(&camera).unwrap();
        let p = state.project(Point3::new(0.0, 0.0, 0.0));
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 0.0));
    }

    #[test]
    fn camera_applies_perspective_divide() {
        // 90 degree fov at aspect 1 gives focal length 1; a point one unit
        // off-axis at view depth 5 lands at 1/5.
        let camera = Camera::from_world(
            DMat4::from_translation(DVec3::new(0.0, 0.0, 5.0)),
            90.0,
            0.1,
            100.0,
        );
        let state = ProjectionState::capture(&camera).unwrap();
        let p = state.project(Point3::new(1.0, 0.0, 0.0));
        assert!(close(p.x, 0.2));
        assert!(close(p.y, 0.0));
    }

    #[test]
    fn singular_camera_world_is_a_configuration_error() {
        let camera = Camera::from_world(DMat4::ZERO, 45.0, 0.1, 100.0);
        let err = ProjectionState::capture(&camera).unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn camera_mode_without_camera_is_a_configuration_error() {
        let settings = ExportSettings {
            projection: ProjectionMode::Camera,
            ..Default::default()
        };
        let err = Projector::from_settings(&settings, None).unwrap_err();
        assert!(err.is_configuration_error());
    }
}
