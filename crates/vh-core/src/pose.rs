//! Gizmo placement and cached transforms

use glam::{Mat4, Quat, Vec3};

/// Placement of a gizmo in world space
///
/// The world matrix and its inverse are rebuilt on every hit test and held
/// for the duration of a drag, so pointer deltas can be rotated into
/// gizmo-local space without recomputing per frame.
#[derive(Debug, Clone, Copy)]
pub struct GizmoPose {
    /// Gizmo origin in world space
    pub position: Vec3,
    /// Gizmo orientation
    pub rotation: Quat,
    /// Axis mirror; `(1, 1, -1)` under the inverted-Z convention
    pub flip: Vec3,
}

impl GizmoPose {
    /// Create a pose with the given mirror convention
    pub fn new(position: Vec3, rotation: Quat, flip: Vec3) -> Self {
        Self {
            position,
            rotation,
            flip,
        }
    }

    /// World transform of the gizmo frame
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.flip, self.rotation, self.position)
    }

    /// Inverse of [`GizmoPose::matrix`]
    pub fn inverse(&self) -> Mat4 {
        self.matrix().inverse()
    }

    /// World transform with handle geometry scaled uniformly to `screen_scale`
    pub fn scaled_matrix(&self, screen_scale: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(screen_scale),
            self.rotation,
            self.position,
        )
    }
}

impl Default for GizmoPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE)
    }
}
