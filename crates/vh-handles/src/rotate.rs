//! Rotate handle
//!
//! Drag one of three axis rings to rotate the selection about that axis.
//! The signed angle accumulates over the drag and snaps to a degree
//! increment when unit snapping is on; each target's rotation is rebuilt
//! from its reference captured at drag begin.

use glam::{Quat, Vec3};
use vh_core::{ray_ring_intersection, snap_angle, DragPlane, GizmoPose, HandleAxis, RING_HIT_THICKNESS};

use crate::handle::{gizmo_placement, Handle, HandleKind};
use crate::input::HandleFrame;
use crate::locks::AxisLock;
use crate::render::HandleRenderer;
use crate::target::{CommitListener, TransformTarget};

/// Interactive rotate gizmo
pub struct RotateHandle {
    /// Snap increment for rotation, in degrees
    pub grid_size_degrees: f32,
    selected_axis: HandleAxis,
    dragging: bool,
    screen_scale: f32,
    pose: GizmoPose,
    drag_plane: Option<DragPlane>,
    rotation_axis: Vec3,
    prev_angle: f32,
    angle: f32,
    references: Vec<Quat>,
}

impl RotateHandle {
    /// Create a rotate handle with the default snap increment
    pub fn new() -> Self {
        Self {
            grid_size_degrees: 15.0,
            selected_axis: HandleAxis::None,
            dragging: false,
            screen_scale: 1.0,
            pose: GizmoPose::default(),
            drag_plane: None,
            rotation_axis: Vec3::X,
            prev_angle: 0.0,
            angle: 0.0,
            references: Vec::new(),
        }
    }

    fn effective_increment(&self, frame: &HandleFrame<'_>) -> f32 {
        if frame.tools.unit_snapping {
            self.grid_size_degrees.to_radians()
        } else {
            0.0
        }
    }

    /// Ring axis in world space, honoring the gizmo orientation
    fn axis_direction(&self, axis: HandleAxis) -> Vec3 {
        self.pose.rotation * axis.direction()
    }

    /// Test the pointer ray against the three axis rings; nearest hit wins
    fn hit(&mut self, frame: &HandleFrame<'_>, targets: &[TransformTarget]) -> HandleAxis {
        let Some((position, rotation)) = gizmo_placement(targets, frame.tools.pivot_rotation)
        else {
            return HandleAxis::None;
        };

        self.screen_scale = frame.camera.screen_scale(position, frame.pointer.viewport.y)
            * frame.appearance.handle_scale;
        self.pose = GizmoPose::new(position, rotation, frame.appearance.flip());

        let (ray_origin, ray_dir) = frame.pointer.ray(frame.camera);
        let radius = self.screen_scale;
        let thickness = radius * RING_HIT_THICKNESS;

        let mut closest_axis = HandleAxis::None;
        let mut closest_t = f32::MAX;
        for axis in [HandleAxis::X, HandleAxis::Y, HandleAxis::Z] {
            let normal = self.axis_direction(axis);
            if let Some(t) =
                ray_ring_intersection(ray_origin, ray_dir, position, normal, radius, thickness)
                && t < closest_t
            {
                closest_t = t;
                closest_axis = axis;
            }
        }

        closest_axis
    }

    /// Whether the rotation about the selected axis is locked
    fn is_locked(&self, lock: Option<&AxisLock>) -> bool {
        lock.is_some_and(|l| match self.selected_axis {
            HandleAxis::X => l.rotation_x,
            HandleAxis::Y => l.rotation_y,
            HandleAxis::Z => l.rotation_z,
            HandleAxis::None | HandleAxis::Free => false,
        })
    }
}

/// Angle of `offset` on the plane perpendicular to `axis_dir`
fn angle_on_plane(offset: Vec3, axis_dir: Vec3) -> f32 {
    let up = if axis_dir.y.abs() < 0.9 { Vec3::Y } else { Vec3::X };
    let u = axis_dir.cross(up).normalize();
    let v = u.cross(axis_dir).normalize();

    let x = offset.dot(u);
    let y = offset.dot(v);
    y.atan2(x)
}

impl Default for RotateHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Handle for RotateHandle {
    fn kind(&self) -> HandleKind {
        HandleKind::Rotate
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
        self.angle = 0.0;
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

        // The drag plane is the ring's own plane
        self.rotation_axis = self.axis_direction(self.selected_axis);
        let plane = DragPlane {
            origin: self.pose.position,
            normal: self.rotation_axis,
        };

        let (ray_origin, ray_dir) = frame.pointer.ray(frame.camera);
        let Some(point) = plane.intersect_ray(ray_origin, ray_dir) else {
            tracing::debug!("rotate drag aborted: pointer ray missed the ring plane");
            self.selected_axis = HandleAxis::None;
            return false;
        };

        self.references = targets.iter().map(|t| t.rotation).collect();
        self.prev_angle = angle_on_plane(point - self.pose.position, self.rotation_axis);
        self.angle = 0.0;
        self.drag_plane = Some(plane);
        self.dragging = true;
        tracing::debug!(axis = ?self.selected_axis, targets = targets.len(), "rotate drag started");
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

        let current = angle_on_plane(point - self.pose.position, self.rotation_axis);
        self.angle += self.prev_angle - current;
        self.prev_angle = current;

        if self.is_locked(frame.lock) {
            return;
        }

        let applied = snap_angle(self.angle, self.effective_increment(frame));
        let rotation = Quat::from_axis_angle(self.rotation_axis, applied);
        for (target, reference) in targets.iter_mut().zip(&self.references) {
            target.rotation = rotation * *reference;
        }
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
        self.angle = 0.0;
        self.references.clear();

        for target in targets {
            listener.rotation_committed(target.id, target.rotation);
        }
        tracing::debug!(targets = targets.len(), "rotate drag dropped");
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
        renderer.draw_rotation_handle(
            frame.camera,
            position,
            rotation,
            self.selected_axis,
            frame.lock,
        );
    }
}
