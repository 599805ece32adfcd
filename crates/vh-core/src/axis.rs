//! Axis and pivot vocabulary

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Which part of a handle the pointer is interacting with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HandleAxis {
    /// Nothing hit
    #[default]
    None,
    /// X axis handle
    X,
    /// Y axis handle
    Y,
    /// Z axis handle
    Z,
    /// The center region; interaction applies to all axes uniformly
    Free,
}

impl HandleAxis {
    /// Unit direction of the axis; zero for `None` and `Free`.
    pub fn direction(&self) -> Vec3 {
        match self {
            HandleAxis::X => Vec3::X,
            HandleAxis::Y => Vec3::Y,
            HandleAxis::Z => Vec3::Z,
            HandleAxis::None | HandleAxis::Free => Vec3::ZERO,
        }
    }

    /// Whether this is one of the three cardinal axes.
    pub fn is_axis(&self) -> bool {
        matches!(self, HandleAxis::X | HandleAxis::Y | HandleAxis::Z)
    }
}

/// Coordinate space the gizmo orients itself in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PivotRotation {
    /// Gizmo axes aligned to the world frame
    #[default]
    Global,
    /// Gizmo axes aligned to the active target's rotation
    Local,
}
