// controls/orbit.rs
//
// Orbit controls: drag to swing the camera around a target, wheel to dolly.
// Input accumulates a pending spherical delta; `update` (once per frame)
// applies it. With damping on, only a fraction of the pending delta is
// applied per frame and the remainder decays, so motion eases out.

use std::f32::consts::{PI, TAU};
use glam::{Vec2, Vec3};
use crate::input::pointer::Viewport;
use crate::renderer::camera::PerspectiveCamera;

const EPS: f32 = 1e-6;

#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Point the camera orbits around.
    pub target: Vec3,
    pub enable_damping: bool,
    /// Fraction of the pending rotation applied per update (0..1).
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Pending azimuth change (radians).
    theta_delta: f32,
    /// Pending polar change (radians).
    phi_delta: f32,
    /// Pending dolly multiplier.
    scale: f32,
    rotating: bool,
    last_pointer: Vec2,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
            rotating: false,
            last_pointer: Vec2::ZERO,
        }
    }

    pub fn with_damping(mut self, enabled: bool, factor: f32) -> Self {
        self.enable_damping = enabled;
        self.damping_factor = factor.clamp(0.0, 1.0);
        self
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Start a rotate drag (primary button only).
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u32) {
        if button == 0 {
            self.rotating = true;
            self.last_pointer = Vec2::new(x, y);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, viewport: &Viewport) {
        if !self.rotating {
            return;
        }
        let pos = Vec2::new(x, y);
        let delta = pos - self.last_pointer;
        self.last_pointer = pos;

        // Both axes scale by height so a drag feels the same in either direction.
        let height = viewport.height.max(1.0);
        self.rotate_left(TAU * delta.x / height * self.rotate_speed);
        self.rotate_up(TAU * delta.y / height * self.rotate_speed);
    }

    pub fn pointer_up(&mut self) {
        self.rotating = false;
    }

    /// Negative `delta_y` (scroll up) moves closer.
    pub fn wheel(&mut self, delta_y: f32) {
        let step = 0.95_f32.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.scale *= step;
        } else if delta_y > 0.0 {
            self.scale /= step;
        }
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.theta_delta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.phi_delta -= angle;
    }

    /// Apply pending input to the camera. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = camera.position - self.target;
        let radius = offset.length();
        if radius < EPS {
            return false;
        }

        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        if self.enable_damping {
            theta += self.theta_delta * self.damping_factor;
            phi += self.phi_delta * self.damping_factor;
        } else {
            theta += self.theta_delta;
            phi += self.phi_delta;
        }
        phi = phi.clamp(EPS, PI - EPS);

        let new_radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);
        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            new_radius * sin_phi * theta.sin(),
            new_radius * phi.cos(),
            new_radius * sin_phi * theta.cos(),
        );

        let old_position = camera.position;
        camera.position = self.target + new_offset;
        camera.look_at(self.target);

        if self.enable_damping {
            self.theta_delta *= 1.0 - self.damping_factor;
            self.phi_delta *= 1.0 - self.damping_factor;
        } else {
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
        }
        self.scale = 1.0;

        (camera.position - old_position).length_squared() > EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 4.0 / 3.0, 0.1, 1000.0)
            .with_position(Vec3::new(0.0, 80.0, 150.0))
    }

    fn azimuth(cam: &PerspectiveCamera) -> f32 {
        cam.position.x.atan2(cam.position.z)
    }

    #[test]
    fn idle_update_keeps_camera() {
        let mut cam = camera();
        let mut controls = OrbitControls::default();
        let moved = controls.update(&mut cam);
        assert!(!moved);
        assert!((cam.position - Vec3::new(0.0, 80.0, 150.0)).length() < 1e-3);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn undamped_drag_applies_immediately() {
        let mut cam = camera();
        let mut controls = OrbitControls::default().with_damping(false, 0.05);
        let vp = Viewport::new(800.0, 600.0);

        controls.pointer_down(100.0, 100.0, 0);
        controls.pointer_move(160.0, 100.0, &vp);
        controls.update(&mut cam);

        // 60 px of a 600 px tall viewport is a tenth of a turn, leftward.
        let expected = -TAU * 60.0 / 600.0;
        assert!((azimuth(&cam) - expected).abs() < 1e-4, "azimuth {}", azimuth(&cam));
    }

    #[test]
    fn damped_drag_eases_out_to_full_angle() {
        let mut cam = camera();
        let mut controls = OrbitControls::default();
        let vp = Viewport::new(800.0, 600.0);

        controls.pointer_down(0.0, 0.0, 0);
        controls.pointer_move(30.0, 0.0, &vp);
        controls.pointer_up();

        controls.update(&mut cam);
        let after_one = azimuth(&cam);
        let full = -TAU * 30.0 / 600.0;
        assert!((after_one - full * 0.05).abs() < 1e-4);

        for _ in 0..500 {
            controls.update(&mut cam);
        }
        assert!((azimuth(&cam) - full).abs() < 1e-3, "azimuth {}", azimuth(&cam));
    }

    #[test]
    fn orbit_preserves_distance() {
        let mut cam = camera();
        let radius = cam.position.length();
        let mut controls = OrbitControls::default();
        controls.rotate_left(1.0);
        controls.rotate_up(0.3);
        for _ in 0..50 {
            controls.update(&mut cam);
        }
        assert!((cam.position.length() - radius).abs() < 1e-2);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut cam = camera();
        let mut controls = OrbitControls::default().with_damping(false, 0.0);
        controls.rotate_up(10.0);
        controls.update(&mut cam);
        assert!(cam.position.y > 0.0);
        assert!(cam.position.x.is_finite() && cam.position.z.is_finite());
    }

    #[test]
    fn wheel_up_moves_closer() {
        let mut cam = camera();
        let before = cam.position.length();
        let mut controls = OrbitControls::default();
        controls.wheel(-100.0);
        controls.update(&mut cam);
        assert!((cam.position.length() - before * 0.95).abs() < 1e-2);
    }

    #[test]
    fn secondary_button_does_not_rotate() {
        let mut controls = OrbitControls::default();
        controls.pointer_down(0.0, 0.0, 2);
        assert!(!controls.is_rotating());
    }
}
