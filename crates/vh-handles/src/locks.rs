//! Per-axis transform locks

use serde::{Deserialize, Serialize};

/// Per-axis locks for the current selection
///
/// A set flag freezes that component for the matching handle. Locks are
/// honored both while deltas accumulate and when results are applied, so a
/// locked component never changes for any pointer motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLock {
    /// Freeze position X
    pub position_x: bool,
    /// Freeze position Y
    pub position_y: bool,
    /// Freeze position Z
    pub position_z: bool,
    /// Freeze rotation about X
    pub rotation_x: bool,
    /// Freeze rotation about Y
    pub rotation_y: bool,
    /// Freeze rotation about Z
    pub rotation_z: bool,
    /// Freeze scale X
    pub scale_x: bool,
    /// Freeze scale Y
    pub scale_y: bool,
    /// Freeze scale Z
    pub scale_z: bool,
}

impl AxisLock {
    /// A lock that freezes every component
    pub fn all() -> Self {
        Self {
            position_x: true,
            position_y: true,
            position_z: true,
            rotation_x: true,
            rotation_y: true,
            rotation_z: true,
            scale_x: true,
            scale_y: true,
            scale_z: true,
        }
    }
}
