//! Camera controller: direct keyboard/drag control plus fly-to animation.

use crate::camera::Camera;
use crate::constants::{DRAG_SENSITIVITY, FLY_BLEND, FLY_EPSILON, MOVE_SPEED, ROTATE_SPEED};
use glam::DVec3;

/// Camera actions a held key can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraKey {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Up,
    Down,
    LookLeft,
    LookRight,
    LookUp,
    LookDown,
}

impl CameraKey {
    pub const ALL: [CameraKey; 10] = [
        CameraKey::Forward,
        CameraKey::Back,
        CameraKey::StrafeLeft,
        CameraKey::StrafeRight,
        CameraKey::Up,
        CameraKey::Down,
        CameraKey::LookLeft,
        CameraKey::LookRight,
        CameraKey::LookUp,
        CameraKey::LookDown,
    ];

    #[inline]
    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Set of camera keys currently held down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys(u16);

impl HeldKeys {
    pub fn press(&mut self, key: CameraKey) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: CameraKey) {
        self.0 &= !key.bit();
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[inline]
    pub fn is_held(&self, key: CameraKey) -> bool {
        self.0 & key.bit() != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<CameraKey> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = CameraKey>>(iter: I) -> Self {
        let mut keys = HeldKeys::default();
        for k in iter {
            keys.press(k);
        }
        keys
    }
}

/// What a single controller tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Moved,
    Flying,
    /// The fly-to target was reached on this tick and has been cleared.
    Arrived,
}

/// Sole owner and mutator of the live camera.
#[derive(Clone, Debug, Default)]
pub struct CameraController {
    camera: Camera,
    target: Option<Camera>,
}

impl CameraController {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            target: None,
        }
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn target(&self) -> Option<&Camera> {
        self.target.as_ref()
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.target.is_some()
    }

    /// Start (or retarget) a fly-to. An in-flight animation continues from
    /// the current interpolated pose toward the new target.
    pub fn fly_to(&mut self, target: Camera) {
        log::debug!(
            "[camera] fly-to ({:.2},{:.2},{:.2})",
            target.position.x,
            target.position.y,
            target.position.z
        );
        self.target = Some(target);
    }

    pub fn focus_on(&mut self, artifact_position: DVec3) {
        self.fly_to(Camera::focusing(artifact_position));
    }

    pub fn return_to_overview(&mut self) {
        self.fly_to(Camera::overview());
    }

    /// Advance one fixed-rate tick. Fly-to takes precedence over held keys.
    pub fn tick(&mut self, keys: &HeldKeys) -> TickOutcome {
        if let Some(target) = self.target {
            self.camera.lerp_toward(&target, FLY_BLEND);
            if self.camera.distance_to(&target) < FLY_EPSILON {
                self.target = None;
                log::debug!("[camera] fly-to arrived");
                return TickOutcome::Arrived;
            }
            return TickOutcome::Flying;
        }
        if keys.is_empty() {
            return TickOutcome::Idle;
        }
        self.apply_keys(keys);
        TickOutcome::Moved
    }

    fn apply_keys(&mut self, keys: &HeldKeys) {
        let forward = self.camera.forward();
        let right = self.camera.right();
        let mut step = DVec3::ZERO;
        if keys.is_held(CameraKey::Forward) {
            step += forward;
        }
        if keys.is_held(CameraKey::Back) {
            step -= forward;
        }
        if keys.is_held(CameraKey::StrafeRight) {
            step += right;
        }
        if keys.is_held(CameraKey::StrafeLeft) {
            step -= right;
        }
        if keys.is_held(CameraKey::Up) {
            step += DVec3::Y;
        }
        if keys.is_held(CameraKey::Down) {
            step -= DVec3::Y;
        }
        self.camera.position += step * MOVE_SPEED;

        if keys.is_held(CameraKey::LookLeft) {
            self.camera.add_yaw(-ROTATE_SPEED);
        }
        if keys.is_held(CameraKey::LookRight) {
            self.camera.add_yaw(ROTATE_SPEED);
        }
        if keys.is_held(CameraKey::LookUp) {
            self.camera.add_pitch(-ROTATE_SPEED);
        }
        if keys.is_held(CameraKey::LookDown) {
            self.camera.add_pitch(ROTATE_SPEED);
        }
    }

    /// Orbit the view by a pointer-drag delta in pixels. Ignored while a
    /// fly-to is running.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        if self.is_flying() {
            return;
        }
        self.camera.add_yaw(dx * DRAG_SENSITIVITY);
        self.camera.add_pitch(-dy * DRAG_SENSITIVITY);
    }
}
