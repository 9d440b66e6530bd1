// core/transform.rs
//
// Local transform of a scene node: position, rotation and scale relative to
// the parent. Mutators follow object-space semantics: `rotate_y` spins about
// the node's own Y axis, `translate_x` moves along the node's own (rotated)
// X axis.

use glam::{Mat4, Quat, Vec3};

/// Transform relative to the parent node (or world for roots).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotation about the X axis only (Euler X).
    pub fn with_rotation_x(mut self, angle: f32) -> Self {
        self.rotation = Quat::from_rotation_x(angle);
        self
    }

    /// Rotate about the local Y axis.
    ///
    /// The quaternion is renormalized every call so repeated small rotations
    /// never accumulate a scale error.
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_y(angle)).normalize();
    }

    /// Move along a local axis (rotated by the current rotation).
    pub fn translate_on_axis(&mut self, axis: Vec3, distance: f32) {
        self.position += self.rotation * axis * distance;
    }

    /// Move along the local X axis.
    pub fn translate_x(&mut self, distance: f32) {
        self.translate_on_axis(Vec3::X, distance);
    }

    /// Local matrix: translate * rotate * scale.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}
