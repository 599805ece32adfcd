//! Handle appearance configuration
//!
//! Serializable settings controlling handle sizing, hit tolerances and
//! colors, loadable from RON configuration files.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SELECTION_MARGIN;

/// Appearance and hit-test settings shared by all handles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandleAppearance {
    /// Global multiplier on the camera screen scale
    pub handle_scale: f32,
    /// Pointer-to-handle hit tolerance in pixels
    pub selection_margin: f32,
    /// Mirror the Z axis (for left-handed content conventions)
    pub invert_z: bool,
    /// Refresh hover highlighting while idle
    pub highlight_on_hover: bool,
    /// X-axis color (RGBA)
    pub x_axis_color: [f32; 4],
    /// Y-axis color (RGBA)
    pub y_axis_color: [f32; 4],
    /// Z-axis color (RGBA)
    pub z_axis_color: [f32; 4],
    /// Color of the hovered or dragged handle part (RGBA)
    pub selection_color: [f32; 4],
    /// Color of locked handle parts (RGBA)
    pub lock_color: [f32; 4],
}

impl Default for HandleAppearance {
    fn default() -> Self {
        Self {
            handle_scale: 1.0,
            selection_margin: DEFAULT_SELECTION_MARGIN,
            invert_z: false,
            highlight_on_hover: true,
            x_axis_color: [1.0, 0.2, 0.2, 1.0],
            y_axis_color: [0.2, 1.0, 0.2, 1.0],
            z_axis_color: [0.2, 0.2, 1.0, 1.0],
            selection_color: [1.0, 0.9, 0.2, 1.0],
            lock_color: [0.4, 0.4, 0.4, 1.0],
        }
    }
}

impl HandleAppearance {
    /// The axis probed as "Z" by hit testing, honoring the mirror convention
    pub fn forward(&self) -> Vec3 {
        if self.invert_z { -Vec3::Z } else { Vec3::Z }
    }

    /// Axis mirror vector for gizmo poses
    pub fn flip(&self) -> Vec3 {
        if self.invert_z {
            Vec3::new(1.0, 1.0, -1.0)
        } else {
            Vec3::ONE
        }
    }

    /// Save settings to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AppearanceError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| AppearanceError::Serialize(e.to_string()))?;
        std::fs::write(path.as_ref(), content).map_err(|e| AppearanceError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load settings from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppearanceError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| AppearanceError::Io(e.to_string()))?;
        let appearance =
            ron::from_str(&content).map_err(|e| AppearanceError::Deserialize(e.to_string()))?;
        Ok(appearance)
    }
}

/// Appearance configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppearanceError {
    /// File could not be read or written
    #[error("IO error: {0}")]
    Io(String),
    /// Settings could not be serialized
    #[error("Serialize error: {0}")]
    Serialize(String),
    /// Configuration file is not valid
    #[error("Deserialize error: {0}")]
    Deserialize(String),
}
