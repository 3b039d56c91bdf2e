//! Orthographic camera used to turn pointer coordinates into pick rays

use crate::core::types::{Mat4, Quat, Vec2, Vec3};
use crate::math::Ray;

/// Orthographic camera with position, rotation, and view volume
#[derive(Clone, Debug)]
pub struct Camera {
    /// World position
    pub position: Vec3,
    /// Rotation as quaternion
    pub rotation: Quat,
    /// Half height of the view volume in world units
    pub ortho_size: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Camera {
    /// Create camera looking at a target
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3, ortho_size: f32) -> Self {
        let forward = (target - position).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);

        let rotation = Quat::from_mat3(&glam::Mat3::from_cols(right, up, -forward));

        Self {
            position,
            rotation,
            ortho_size,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Get view matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        let rotation_matrix = Mat4::from_quat(self.rotation.conjugate());
        let translation_matrix = Mat4::from_translation(-self.position);
        rotation_matrix * translation_matrix
    }

    /// Get projection matrix (camera to clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        let half_w = self.ortho_size * self.aspect;
        Mat4::orthographic_rh(
            -half_w,
            half_w,
            -self.ortho_size,
            self.ortho_size,
            self.near,
            self.far,
        )
    }

    /// Get forward direction (negative Z in camera space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get right direction (positive X in camera space)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get up direction (positive Y in camera space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Update aspect ratio (call on viewport resize)
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Build a pick ray from normalized device coordinates (`[-1, 1]`, +y up).
    ///
    /// Orthographic rays are parallel: the origin slides across the near plane
    /// and every ray shares the camera's forward direction.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let offset = self.right() * (ndc.x * self.ortho_size * self.aspect)
            + self.up() * (ndc.y * self.ortho_size);
        let forward = self.forward();
        Ray::new(self.position + offset + forward * self.near, forward)
    }

    /// Convert window pixel coordinates to normalized device coordinates.
    pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
        Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
    }
}
