//! Scale handle
//!
//! Drag an axis handle to scale the selection along that axis, or the
//! center region to scale uniformly. Deltas accumulate over the drag, snap
//! to the grid unit when unit snapping is on, and are written back
//! additively on top of each target's reference scale captured at drag
//! begin.

use glam::{Mat4, Quat, Vec3};
use vh_core::{DragPlane, GizmoPose, HandleAxis, PivotRotation};

use crate::accumulator::{apply_rounded, ScaleAccumulator};
use crate::handle::{gizmo_placement, hit_axes_or_center, Handle, HandleKind};
use crate::input::HandleFrame;
use crate::model::GizmoModel;
use crate::render::HandleRenderer;
use crate::target::{CommitListener, TransformTarget};

/// Reference state captured per target at drag begin
///
/// `scale` is the target's local scale pre-multiplied by `rotation`, which
/// is the target's world rotation under global pivot and identity under
/// local pivot. Both are frozen until the drag is dropped.
#[derive(Debug, Clone, Copy)]
struct ReferenceState {
    scale: Vec3,
    rotation: Quat,
}

/// Interactive scale gizmo
pub struct ScaleHandle {
    /// Grid unit for snapped scaling
    pub grid_size: f32,
    model: Option<Box<dyn GizmoModel>>,
    selected_axis: HandleAxis,
    dragging: bool,
    screen_scale: f32,
    pose: GizmoPose,
    inverse: Mat4,
    drag_plane: Option<DragPlane>,
    prev_point: Vec3,
    accumulator: ScaleAccumulator,
    references: Vec<ReferenceState>,
}

impl ScaleHandle {
    /// Create a scale handle with the default grid unit
    pub fn new() -> Self {
        Self {
            grid_size: 0.1,
            model: None,
            selected_axis: HandleAxis::None,
            dragging: false,
            screen_scale: 1.0,
            pose: GizmoPose::default(),
            inverse: Mat4::IDENTITY,
            drag_plane: None,
            prev_point: Vec3::ZERO,
            accumulator: ScaleAccumulator::default(),
            references: Vec::new(),
        }
    }

    /// Install a custom gizmo model, replacing the built-in hit geometry
    pub fn with_model(mut self, model: Box<dyn GizmoModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Current rounded scale (identity while idle)
    pub fn rounded_scale(&self) -> Vec3 {
        self.accumulator.rounded()
    }

    fn effective_grid_unit(&self, frame: &HandleFrame<'_>) -> f32 {
        if frame.tools.unit_snapping {
            self.grid_size
        } else {
            0.0
        }
    }

    /// Resolve which part of the gizmo the pointer is over
    ///
    /// Also rebuilds the cached pose transform and screen scale, which a
    /// drag that follows keeps using.
    fn hit(&mut self, frame: &HandleFrame<'_>, targets: &[TransformTarget]) -> HandleAxis {
        let Some((position, rotation)) = gizmo_placement(targets, frame.tools.pivot_rotation)
        else {
            return HandleAxis::None;
        };

        self.screen_scale = frame.camera.screen_scale(position, frame.pointer.viewport.y)
            * frame.appearance.handle_scale;
        self.pose = GizmoPose::new(position, rotation, frame.appearance.flip());
        self.inverse = self.pose.inverse();

        if let Some(model) = &self.model {
            return model.hit_test(frame.pointer.position);
        }

        hit_axes_or_center(frame, &self.pose, self.screen_scale)
    }
}

impl Default for ScaleHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Handle for ScaleHandle {
    fn kind(&self) -> HandleKind {
        HandleKind::Scale
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
        self.references.clear();
        self.accumulator.reset();
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

        // Free resolves to a zero direction, which yields the camera-facing plane
        let plane = DragPlane::for_axis(
            self.pose.position,
            self.pose.rotation * self.selected_axis.direction(),
            frame.camera,
        );

        let (ray_origin, ray_dir) = frame.pointer.ray(frame.camera);
        let Some(point) = plane.intersect_ray(ray_origin, ray_dir) else {
            tracing::debug!("scale drag aborted: pointer ray missed the drag plane");
            self.selected_axis = HandleAxis::None;
            return false;
        };

        self.references = targets
            .iter()
            .map(|target| {
                let rotation = match frame.tools.pivot_rotation {
                    PivotRotation::Global => target.rotation,
                    PivotRotation::Local => Quat::IDENTITY,
                };
                ReferenceState {
                    scale: rotation * target.local_scale,
                    rotation,
                }
            })
            .collect();

        self.drag_plane = Some(plane);
        self.prev_point = point;
        self.dragging = true;
        tracing::debug!(axis = ?self.selected_axis, targets = targets.len(), "scale drag started");
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
            // Recoverable: keep the stale anchor, the next frame retries
            return;
        };

        let offset = self
            .inverse
            .transform_vector3((point - self.prev_point) / self.screen_scale);
        self.accumulator
            .accumulate(self.selected_axis, offset, frame.lock);
        self.accumulator.round_to(self.effective_grid_unit(frame));

        let rounded = self.accumulator.rounded();
        if let Some(model) = &mut self.model {
            model.set_scale(rounded);
        }

        for (target, reference) in targets.iter_mut().zip(&self.references) {
            let scaled = apply_rounded(reference.scale, rounded, frame.lock);
            target.local_scale = reference.rotation.inverse() * scaled;
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
        self.references.clear();
        self.accumulator.reset();
        if let Some(model) = &mut self.model {
            model.set_scale(self.accumulator.rounded());
        }

        for target in targets {
            listener.scale_committed(target.id, target.local_scale);
        }
        tracing::debug!(targets = targets.len(), "scale drag dropped");
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
        renderer.draw_scale_handle(
            frame.camera,
            self.accumulator.rounded(),
            position,
            rotation,
            self.selected_axis,
            frame.lock,
        );
    }
}
