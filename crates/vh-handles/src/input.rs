//! Per-frame pointer and tool state

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use vh_core::{HandleAppearance, PivotRotation, ViewCamera};

use crate::locks::AxisLock;

/// Pointer sample for one frame
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    /// Pointer position in viewport pixels
    pub position: Vec2,
    /// Viewport size in pixels
    pub viewport: Vec2,
    /// Whether the pointer is over the viewport window
    pub is_over_window: bool,
    /// Whether the primary button is held
    pub is_pressed: bool,
}

impl PointerState {
    /// World ray under the pointer
    pub fn ray(&self, camera: &ViewCamera) -> (Vec3, Vec3) {
        camera.screen_to_ray(self.position, self.viewport)
    }
}

/// Editor tool state the handles respect
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ToolsState {
    /// Viewing-only mode: handles stop hit testing and highlighting
    pub is_viewing: bool,
    /// Coordinate space for gizmo orientation and reference capture
    pub pivot_rotation: PivotRotation,
    /// Whether drags snap to each handle's grid unit
    pub unit_snapping: bool,
}

/// Borrowed per-frame context passed into every handle callback
pub struct HandleFrame<'a> {
    /// Viewport camera
    pub camera: &'a ViewCamera,
    /// Pointer sample
    pub pointer: PointerState,
    /// Editor tool state
    pub tools: &'a ToolsState,
    /// Appearance settings
    pub appearance: &'a HandleAppearance,
    /// Optional axis locks for the current selection
    pub lock: Option<&'a AxisLock>,
}
