//! Drag planes for pointer-ray projection

use glam::Vec3;

use crate::camera::ViewCamera;
use crate::constants::PLANE_PARALLEL_EPSILON;

/// A world-space plane pointer rays are projected onto during a drag
#[derive(Debug, Clone, Copy)]
pub struct DragPlane {
    /// A point on the plane (the gizmo origin)
    pub origin: Vec3,
    /// Plane normal
    pub normal: Vec3,
}

impl DragPlane {
    /// Plane through `origin` facing the camera
    ///
    /// Used for free drags, where no single axis constrains the motion.
    pub fn facing_camera(origin: Vec3, camera: &ViewCamera) -> Self {
        Self {
            origin,
            normal: camera.forward(),
        }
    }

    /// Plane through `origin` that best exposes motion along `axis_dir`
    ///
    /// Of the two candidate normals perpendicular to the axis, picks the one
    /// most aligned with the view direction, so pointer travel maps onto the
    /// axis with the least foreshortening. A zero axis falls back to the
    /// camera-facing plane.
    pub fn for_axis(origin: Vec3, axis_dir: Vec3, camera: &ViewCamera) -> Self {
        if axis_dir.length_squared() < f32::EPSILON {
            return Self::facing_camera(origin, camera);
        }

        let forward = camera.forward();
        let axis_dir = axis_dir.normalize();
        let up = if axis_dir.y.abs() < 0.9 { Vec3::Y } else { Vec3::X };
        let candidate1 = axis_dir.cross(up).normalize();
        let candidate2 = axis_dir.cross(candidate1).normalize();

        let normal = if forward.dot(candidate1).abs() > forward.dot(candidate2).abs() {
            candidate1
        } else {
            candidate2
        };
        Self { origin, normal }
    }

    /// Ray-plane intersection
    ///
    /// Returns `None` when the ray is parallel to the plane or the hit lies
    /// behind the ray origin.
    pub fn intersect_ray(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<Vec3> {
        let denom = ray_dir.dot(self.normal);
        if denom.abs() < PLANE_PARALLEL_EPSILON {
            return None;
        }

        let t = (self.origin - ray_origin).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        Some(ray_origin + ray_dir * t)
    }
}
