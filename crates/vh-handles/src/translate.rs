//! Move handle
//!
//! Drag an axis handle to translate the selection along that axis, or the
//! center region to move it in the camera plane. The world-space offset
//! accumulates over the drag and is snapped relative to the positions
//! captured at drag begin, so snapping never teleports targets onto
//! absolute grid lines.

use glam::Vec3;
use vh_core::{snap_vec3, DragPlane, GizmoPose, HandleAxis};

use crate::handle::{gizmo_placement, hit_axes_or_center, Handle, HandleKind};
use crate::input::HandleFrame;
use crate::locks::AxisLock;
use crate::render::HandleRenderer;
use crate::target::{CommitListener, TransformTarget};

/// Interactive move gizmo
pub struct MoveHandle {
    /// Grid unit for snapped movement, in world units
    pub grid_size: f32,
    selected_axis: HandleAxis,
    dragging: bool,
    screen_scale: f32,
    pose: GizmoPose,
    drag_plane: Option<DragPlane>,
    prev_point: Vec3,
    offset: Vec3,
    references: Vec<Vec3>,
}

impl MoveHandle {
    /// Create a move handle with the default grid unit
    pub fn new() -> Self {
        Self {
            grid_size: 1.0,
            selected_axis: HandleAxis::None,
            dragging: false,
            screen_scale: 1.0,
            pose: GizmoPose::default(),
            drag_plane: None,
            prev_point: Vec3::ZERO,
            offset: Vec3::ZERO,
            references: Vec::new(),
        }
    }

    fn effective_grid_unit(&self, frame: &HandleFrame<'_>) -> f32 {
        if frame.tools.unit_snapping {
            self.grid_size
        } else {
            0.0
        }
    }

    /// Axis direction in world space, honoring the gizmo orientation
    fn axis_direction(&self, axis: HandleAxis) -> Vec3 {
        self.pose.rotation * axis.direction()
    }

    fn hit(&mut self, frame: &HandleFrame<'_>, targets: &[TransformTarget]) -> HandleAxis {
        let Some((position, rotation)) = gizmo_placement(targets, frame.tools.pivot_rotation)
        else {
            return HandleAxis::None;
        };

        self.screen_scale = frame.camera.screen_scale(position, frame.pointer.viewport.y)
            * frame.appearance.handle_scale;
        self.pose = GizmoPose::new(position, rotation, frame.appearance.flip());

        hit_axes_or_center(frame, &self.pose, self.screen_scale)
    }

    /// Mask the locked position components out of an offset
    fn mask_locked(offset: Vec3, lock: Option<&AxisLock>) -> Vec3 {
        let Some(lock) = lock else {
            return offset;
        };
        Vec3::new(
            if lock.position_x { 0.0 } else { offset.x },
            if lock.position_y { 0.0 } else { offset.y },
            if lock.position_z { 0.0 } else { offset.z },
        )
    }
}

impl Default for MoveHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Handle for MoveHandle {
    fn kind(&self) -> HandleKind {
        HandleKind::Move
    }

    fn selected_axis(&self) -> HandleAxis {
        self.selected_axis
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn on_activate(&mut self) {
        self.selected_axis = HandleAxis::None;
        self.dragging = false;
        self.drag_plane = None;
        self.offset = Vec3::ZERO;
        self.references.clear();
    }

    fn on_tick(&mut self, frame: &HandleFrame<'_>, targets: &[TransformTarget]) {
        if frame.tools.is_viewing {
            self.selected_axis = HandleAxis::None;
            return;
        }
        if !frame.pointer.is_over_window || frame.pointer.is_pressed || self.dragging {
            return;
        }
        if frame.appearance.highlight_on_hover {
            self.selected_axis = self.hit(frame, targets);
        }
    }

    fn on_drag_begin(&mut self, frame: &HandleFrame<'_>, targets: &[TransformTarget]) -> bool {
        if frame.tools.is_viewing || !frame.pointer.is_over_window || targets.is_empty() {
            return false;
        }

        self.selected_axis = self.hit(frame, targets);
        if self.selected_axis == HandleAxis::None {
            return false;
        }

        let plane = DragPlane::for_axis(
            self.pose.position,
            self.axis_direction(self.selected_axis),
            frame.camera,
        );

        let (ray_origin, ray_dir) = frame.pointer.ray(frame.camera);
        let Some(point) = plane.intersect_ray(ray_origin, ray_dir) else {
            tracing::debug!("move drag aborted: pointer ray missed the drag plane");
            self.selected_axis = HandleAxis::None;
            return false;
        };

        self.references = targets.iter().map(|t| t.position).collect();
        self.offset = Vec3::ZERO;
        self.drag_plane = Some(plane);
        self.prev_point = point;
        self.dragging = true;
        tracing::debug!(axis = ?self.selected_axis, targets = targets.len(), "move drag started");
        true
    }

    fn on_drag_update(&mut self, frame: &HandleFrame<'_>, targets: &mut [TransformTarget]) {
        if !self.dragging {
            return;
        }
        let Some(plane) = self.drag_plane else {
            return;
        };

        let (ray_origin, ray_dir) = frame.pointer.ray(frame.camera);
        let Some(point) = plane.intersect_ray(ray_origin, ray_dir) else {
            return;
        };

        let delta = point - self.prev_point;
        self.offset += if self.selected_axis.is_axis() {
            let axis_dir = self.axis_direction(self.selected_axis);
            axis_dir * delta.dot(axis_dir)
        } else {
            delta
        };

        let snapped = snap_vec3(self.offset, self.effective_grid_unit(frame));
        let applied = Self::mask_locked(snapped, frame.lock);
        for (target, reference) in targets.iter_mut().zip(&self.references) {
            target.position = *reference + applied;
        }

        self.prev_point = point;
    }

    fn on_drag_end(
        &mut self,
        _frame: &HandleFrame<'_>,
        targets: &[TransformTarget],
        listener: &mut dyn CommitListener,
    ) {
        if !self.dragging {
            return;
        }

        self.dragging = false;
        self.drag_plane = None;
        self.offset = Vec3::ZERO;
        self.references.clear();

        for target in targets {
            listener.move_committed(target.id, target.position);
        }
        tracing::debug!(targets = targets.len(), "move drag dropped");
    }

    fn on_render(
        &self,
        frame: &HandleFrame<'_>,
        targets: &[TransformTarget],
        renderer: &mut dyn HandleRenderer,
    ) {
        let Some((position, rotation)) = gizmo_placement(targets, frame.tools.pivot_rotation)
        else {
            return;
        };
        renderer.draw_position_handle(
            frame.camera,
            position,
            rotation,
            self.selected_axis,
            frame.lock,
        );
    }
}
