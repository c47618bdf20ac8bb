//! Pinhole projection of world points onto the drawing surface.

use crate::camera::Camera;
use crate::constants::{FOCAL_LENGTH, NEAR_EPSILON};
use glam::{DVec2, DVec3};

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// A zero-sized (or NaN-sized) viewport has nothing to draw into.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// A world point as seen on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: DVec2,
    /// Euclidean distance from the camera to the world point.
    pub distance: f64,
}

/// Rotate a world point into camera space: x right, y down, z forward.
pub fn to_camera_space(point: DVec3, camera: &Camera) -> DVec3 {
    let d = point - camera.position;

    // yaw by -rotation_y: lateral offset and depth along the horizontal heading
    let (sy, cy) = camera.rotation_y.sin_cos();
    let x = d.x * cy + d.z * sy;
    let depth = d.x * sy - d.z * cy;

    // pitch by -rotation_x
    let (sx, cx) = camera.rotation_x.sin_cos();
    let up = d.y * cx + depth * sx;
    let z = depth * cx - d.y * sx;

    DVec3::new(x, -up, z)
}

/// Project `point` for `camera` onto a surface of size `viewport`.
///
/// Returns `None` when the point lies at or behind the near epsilon; that is
/// an ordinary outcome, not an error.
pub fn project(point: DVec3, camera: &Camera, viewport: Viewport) -> Option<Projected> {
    let c = to_camera_space(point, camera);
    if c.z.is_nan() || c.z <= NEAR_EPSILON {
        return None;
    }
    let screen = DVec2::new(c.x, c.y) * (FOCAL_LENGTH / c.z) + viewport.center();
    Some(Projected {
        screen,
        distance: point.distance(camera.position),
    })
}
