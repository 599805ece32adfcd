//! Drawing boundary

use glam::{Quat, Vec3};
use vh_core::{HandleAxis, ViewCamera};

use crate::locks::AxisLock;

/// Implemented by the embedding editor's draw layer
///
/// Handles describe what to draw; how it is drawn (meshes, lines,
/// immediate mode) stays on the editor side of the boundary.
pub trait HandleRenderer {
    /// Draw the scale gizmo; `scale` is the current rounded scale
    fn draw_scale_handle(
        &mut self,
        camera: &ViewCamera,
        scale: Vec3,
        position: Vec3,
        rotation: Quat,
        selected: HandleAxis,
        lock: Option<&AxisLock>,
    );

    /// Draw the move gizmo
    fn draw_position_handle(
        &mut self,
        camera: &ViewCamera,
        position: Vec3,
        rotation: Quat,
        selected: HandleAxis,
        lock: Option<&AxisLock>,
    );

    /// Draw the rotate gizmo
    fn draw_rotation_handle(
        &mut self,
        camera: &ViewCamera,
        position: Vec3,
        rotation: Quat,
        selected: HandleAxis,
        lock: Option<&AxisLock>,
    );
}
