//! Free-flying gallery camera pose.
//!
//! World space is y-up. At zero yaw the camera faces world −z; positive
//! `rotation_y` turns right and positive `rotation_x` pitches the view down.

use crate::constants::{FOCUS_OFFSET, FOCUS_PITCH, OVERVIEW_POSITION, PITCH_LIMIT};
use glam::DVec3;
use std::f64::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: DVec3,
    /// Yaw about the world vertical axis, radians.
    pub rotation_y: f64,
    /// Pitch about the camera's horizontal axis, radians, kept within ±π/2.
    pub rotation_x: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::overview()
    }
}

impl Camera {
    pub fn new(position: DVec3, rotation_y: f64, rotation_x: f64) -> Self {
        Self {
            position,
            rotation_y,
            rotation_x: clamp_pitch(rotation_x),
        }
    }

    /// Fixed pose looking over the whole gallery.
    pub fn overview() -> Self {
        Self::new(OVERVIEW_POSITION, 0.0, 0.0)
    }

    /// Pose used when flying to an artifact: a fixed offset above and in
    /// front of it, pitched slightly down. This is not a look-at, so
    /// artifacts away from the gallery axis end up off-centre.
    pub fn focusing(artifact_position: DVec3) -> Self {
        Self::new(artifact_position + FOCUS_OFFSET, 0.0, FOCUS_PITCH)
    }

    /// Horizontal forward direction for the current yaw.
    #[inline]
    pub fn forward(&self) -> DVec3 {
        let (s, c) = self.rotation_y.sin_cos();
        DVec3::new(s, 0.0, -c)
    }

    /// Horizontal right direction for the current yaw.
    #[inline]
    pub fn right(&self) -> DVec3 {
        let (s, c) = self.rotation_y.sin_cos();
        DVec3::new(c, 0.0, s)
    }

    pub fn add_pitch(&mut self, delta: f64) {
        self.rotation_x = clamp_pitch(self.rotation_x + delta);
    }

    pub fn add_yaw(&mut self, delta: f64) {
        self.rotation_y += delta;
    }

    /// Linear blend of all five scalar fields toward `target`. Yaw turns
    /// along the shorter arc, so accumulated full turns are not unwound.
    pub fn lerp_toward(&mut self, target: &Camera, t: f64) {
        self.position = self.position.lerp(target.position, t);
        self.rotation_y += wrap_angle(target.rotation_y - self.rotation_y) * t;
        self.rotation_x = clamp_pitch(self.rotation_x + (target.rotation_x - self.rotation_x) * t);
    }

    #[inline]
    pub fn distance_to(&self, other: &Camera) -> f64 {
        self.position.distance(other.position)
    }
}

/// Map an angle difference into (-π, π].
#[inline]
pub fn wrap_angle(delta: f64) -> f64 {
    let r = delta.rem_euclid(TAU);
    if r > PI {
        r - TAU
    } else {
        r
    }
}

#[inline]
pub fn clamp_pitch(pitch: f64) -> f64 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}
