//! Orthographic camera rig
//!
//! Peripheral presentation state: an eye position that tracks the tower's
//! growth at the scripted sweep speed, and projection parameters recomputed
//! on viewport resize. Resizes never touch simulation state.

use glam::{Mat4, Vec3};

use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    /// Width of the orthographic view volume in world units
    pub view_width: f32,
    /// Viewport aspect ratio (width / height)
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraRig {
    pub fn new(tuning: &Tuning, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            eye: Vec3::new(4.0, 4.0, 4.0),
            target: Vec3::ZERO,
            view_width: tuning.view_width,
            aspect: viewport_w / viewport_h,
            near: 0.0,
            far: 100.0,
        }
    }

    /// Recompute projection parameters only; simulation state is untouched
    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32) {
        self.aspect = viewport_w / viewport_h;
    }

    pub fn projection(&self) -> Mat4 {
        let half_w = self.view_width / 2.0;
        let half_h = half_w / self.aspect;
        Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    /// Rise at the scripted sweep speed while below the tower-derived
    /// ceiling, producing the smooth upward-tracking viewpoint.
    pub fn follow(&mut self, tuning: &Tuning, layers: usize, dt: f32) {
        if self.eye.y < tuning.follow_ceiling(layers) {
            self.eye.y += tuning.move_speed * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_affects_projection_only() {
        let tuning = Tuning::default();
        let mut rig = CameraRig::new(&tuning, 800.0, 600.0);
        let eye = rig.eye;
        let view_before = rig.view();
        let proj_before = rig.projection();

        rig.resize(1600.0, 600.0);
        assert_eq!(rig.eye, eye);
        assert_eq!(rig.view(), view_before);
        assert_ne!(rig.projection(), proj_before);
    }

    #[test]
    fn test_follow_rises_then_stops() {
        let tuning = Tuning::default();
        let mut rig = CameraRig::new(&tuning, 800.0, 600.0);
        let dt = 1.0 / 60.0;

        // a tall tower pulls the camera up
        let start = rig.eye.y;
        rig.follow(&tuning, 20, dt);
        assert!(rig.eye.y > start);

        // once at the ceiling the eye holds
        rig.eye.y = tuning.follow_ceiling(20) + 0.01;
        let held = rig.eye.y;
        rig.follow(&tuning, 20, dt);
        assert_eq!(rig.eye.y, held);
    }

    #[test]
    fn test_follow_zero_dt_is_idempotent() {
        let tuning = Tuning::default();
        let mut rig = CameraRig::new(&tuning, 800.0, 600.0);
        let eye = rig.eye;
        rig.follow(&tuning, 20, 0.0);
        assert_eq!(rig.eye, eye);
    }

    #[test]
    fn test_short_tower_keeps_camera_low() {
        let tuning = Tuning::default();
        let mut rig = CameraRig::new(&tuning, 800.0, 600.0);
        // eye starts at the two-layer ceiling; no rise expected
        rig.eye.y = tuning.follow_ceiling(2);
        let held = rig.eye.y;
        rig.follow(&tuning, 2, 1.0 / 60.0);
        assert_eq!(rig.eye.y, held);
    }
}
