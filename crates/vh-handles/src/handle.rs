//! Handle interaction state machine

use glam::{Quat, Vec3};
use vh_core::{hit_axis, hit_disc, GizmoPose, HandleAxis, PivotRotation};

use crate::input::HandleFrame;
use crate::render::HandleRenderer;
use crate::target::{CommitListener, TransformTarget};

/// Which transform a handle edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// Translation
    Move,
    /// Rotation
    Rotate,
    /// Scaling
    Scale,
}

/// The interaction lifecycle every handle implements
///
/// Each handle is a two-state machine, `Idle -> Dragging -> Idle`. A drag
/// can fail only at begin; once dragging, it runs until the pointer is
/// released. Per-frame projection failures mid-drag skip the frame without
/// leaving the dragging state.
pub trait Handle {
    /// Which transform this handle edits
    fn kind(&self) -> HandleKind;

    /// Axis under the pointer (hover) or locked in by the active drag
    fn selected_axis(&self) -> HandleAxis;

    /// Whether a drag is in progress
    fn is_dragging(&self) -> bool;

    /// Reset transient state when the handle becomes the active tool
    fn on_activate(&mut self);

    /// Idle per-frame update: hover highlighting
    fn on_tick(&mut self, frame: &HandleFrame<'_>, targets: &[TransformTarget]);

    /// Try to start a drag; `false` means no drag started
    fn on_drag_begin(&mut self, frame: &HandleFrame<'_>, targets: &[TransformTarget]) -> bool;

    /// Per-frame drag update
    fn on_drag_update(&mut self, frame: &HandleFrame<'_>, targets: &mut [TransformTarget]);

    /// Finish the drag and emit commits
    fn on_drag_end(
        &mut self,
        frame: &HandleFrame<'_>,
        targets: &[TransformTarget],
        listener: &mut dyn CommitListener,
    );

    /// Draw through the editor's renderer
    fn on_render(
        &self,
        frame: &HandleFrame<'_>,
        targets: &[TransformTarget],
        renderer: &mut dyn HandleRenderer,
    );
}

/// Gizmo placement for the current selection: anchored at the first target,
/// oriented by it only under local pivot rotation.
pub(crate) fn gizmo_placement(
    targets: &[TransformTarget],
    pivot: PivotRotation,
) -> Option<(Vec3, Quat)> {
    let anchor = targets.first()?;
    let rotation = match pivot {
        PivotRotation::Global => Quat::IDENTITY,
        PivotRotation::Local => anchor.rotation,
    };
    Some((anchor.position, rotation))
}

/// Built-in hit test shared by the arrow-style handles
///
/// The center disc takes priority over the axes. The axes are probed as
/// screen-space segments; when several are within the selection margin the
/// smallest distance wins, with Y preferred over X and X over Z on ties.
pub(crate) fn hit_axes_or_center(
    frame: &HandleFrame<'_>,
    pose: &GizmoPose,
    screen_scale: f32,
) -> HandleAxis {
    let matrix = pose.scaled_matrix(screen_scale);
    let pointer = frame.pointer.position;
    let viewport = frame.pointer.viewport;
    let margin = frame.appearance.selection_margin;
    let camera = frame.camera;

    if hit_disc(pointer, pose.position, camera, viewport, margin) {
        return HandleAxis::Free;
    }

    let tip = |axis: Vec3| matrix.transform_point3(axis);
    let (hit_y, dist_y) = hit_axis(pointer, pose.position, tip(Vec3::Y), camera, viewport, margin);
    let (hit_z, dist_z) = hit_axis(
        pointer,
        pose.position,
        tip(frame.appearance.forward()),
        camera,
        viewport,
        margin,
    );
    let (hit_x, dist_x) = hit_axis(pointer, pose.position, tip(Vec3::X), camera, viewport, margin);

    if hit_y || hit_z || hit_x {
        if dist_y <= dist_z && dist_y <= dist_x {
            HandleAxis::Y
        } else if dist_x <= dist_y && dist_x <= dist_z {
            HandleAxis::X
        } else {
            HandleAxis::Z
        }
    } else {
        HandleAxis::None
    }
}
