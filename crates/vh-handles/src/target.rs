//! Transform targets and drop-time commits

use glam::{Quat, Vec3};
use uuid::Uuid;

/// A transformable object a handle operates on
///
/// The embedding editor mirrors its scene objects into these and syncs the
/// results back. The first target in the active slice anchors the gizmo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformTarget {
    /// Stable identity used in commit records
    pub id: Uuid,
    /// World position
    pub position: Vec3,
    /// World rotation
    pub rotation: Quat,
    /// Local scale
    pub local_scale: Vec3,
}

impl TransformTarget {
    /// Create a target with a fresh identity
    pub fn new(position: Vec3, rotation: Quat, local_scale: Vec3) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            rotation,
            local_scale,
        }
    }
}

/// Receives final transforms when a drag is dropped
///
/// Called once per target on drop; nothing is emitted mid-drag. Editors
/// that persist transforms into external records implement this.
pub trait CommitListener {
    /// A scale drag finished on `target`
    fn scale_committed(&mut self, _target: Uuid, _local_scale: Vec3) {}

    /// A move drag finished on `target`
    fn move_committed(&mut self, _target: Uuid, _position: Vec3) {}

    /// A rotate drag finished on `target`
    fn rotation_committed(&mut self, _target: Uuid, _rotation: Quat) {}
}

/// No-op listener for embedders without external records
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardCommits;

impl CommitListener for DiscardCommits {}
