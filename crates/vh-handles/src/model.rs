//! Custom gizmo model delegate

use glam::{Vec2, Vec3};
use vh_core::HandleAxis;

/// Replacement gizmo geometry
///
/// When installed on a handle, hit testing defers entirely to the model
/// instead of the built-in segment/disc geometry, and every rounded-scale
/// update (including the reset on drop) is forwarded to it for rendering
/// feedback.
pub trait GizmoModel {
    /// Which part of the model the pointer is over
    fn hit_test(&self, pointer: Vec2) -> HandleAxis;

    /// Rendering feedback for the current rounded scale
    fn set_scale(&mut self, scale: Vec3);
}
