use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use crate::picking::ray::Ray;

/// Perspective camera looking at a target point.
/// Right-handed, Y-up, OpenGL clip depth (-1..1) to match WebGL.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Width / height of the drawing surface.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub up: Vec3,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 32;
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect,
            near,
            far,
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Update the aspect ratio (e.g. on window resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix().to_cols_array_2d(),
        }
    }

    /// World point to normalized device coordinates.
    pub fn project(&self, point: Vec3) -> Vec3 {
        self.view_projection().project_point3(point)
    }

    /// Ray from the eye through a point given in normalized device coordinates.
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let on_frustum = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        Ray::new(self.position, on_frustum - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 800.0 / 600.0, 0.1, 1000.0)
            .with_position(Vec3::new(0.0, 80.0, 150.0))
    }

    #[test]
    fn target_projects_to_center() {
        let cam = camera();
        let ndc = cam.project(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "got {ndc:?}");
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = camera();
        let ray = cam.ray_through(Vec2::ZERO);
        let expected = (Vec3::ZERO - cam.position).normalize();
        assert!((ray.direction - expected).length() < 1e-4, "got {:?}", ray.direction);
        assert_eq!(ray.origin, cam.position);
    }

    #[test]
    fn ray_round_trips_through_projection() {
        let cam = camera();
        let ndc = Vec2::new(0.3, -0.6);
        let ray = cam.ray_through(ndc);
        let back = cam.project(ray.at(100.0));
        assert!((back.x - ndc.x).abs() < 1e-3 && (back.y - ndc.y).abs() < 1e-3, "got {back:?}");
    }

    #[test]
    fn set_aspect_changes_projection() {
        let mut cam = camera();
        let before = cam.projection_matrix();
        cam.set_aspect(1600.0 / 900.0);
        assert_eq!(cam.aspect, 1600.0 / 900.0);
        assert_ne!(before, cam.projection_matrix());
    }

    #[test]
    fn uniform_is_32_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
    }
}
