//! Running scale state for an active drag

use glam::Vec3;
use vh_core::{snap_vec3, HandleAxis};

use crate::locks::AxisLock;

/// Accumulates signed scale deltas over the lifetime of one drag
///
/// Holds the raw running scale and its grid-snapped projection; both start
/// at `(1, 1, 1)` and return there exactly once when the drag is dropped.
#[derive(Debug, Clone, Copy)]
pub struct ScaleAccumulator {
    scale: Vec3,
    rounded: Vec3,
}

impl Default for ScaleAccumulator {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rounded: Vec3::ONE,
        }
    }
}

impl ScaleAccumulator {
    /// Fold one frame's gizmo-local pointer offset into the running scale
    ///
    /// `offset` is the frame delta already rotated into gizmo-local space
    /// and normalized by screen scale. Only the component(s) selected by
    /// `axis` move: a cardinal axis takes `sign(component) * |offset|`, the
    /// free handle applies `sign(offset.x + offset.y) * |offset|` to all
    /// three. Locked components never change.
    pub fn accumulate(&mut self, axis: HandleAxis, offset: Vec3, lock: Option<&AxisLock>) {
        let magnitude = offset.length();
        match axis {
            HandleAxis::X => {
                if !lock.is_some_and(|l| l.scale_x) {
                    self.scale.x += offset.x.signum() * magnitude;
                }
            }
            HandleAxis::Y => {
                if !lock.is_some_and(|l| l.scale_y) {
                    self.scale.y += offset.y.signum() * magnitude;
                }
            }
            HandleAxis::Z => {
                if !lock.is_some_and(|l| l.scale_z) {
                    self.scale.z += offset.z.signum() * magnitude;
                }
            }
            HandleAxis::Free => {
                let sign = (offset.x + offset.y).signum();
                if !lock.is_some_and(|l| l.scale_x) {
                    self.scale.x += sign * magnitude;
                }
                if !lock.is_some_and(|l| l.scale_y) {
                    self.scale.y += sign * magnitude;
                }
                if !lock.is_some_and(|l| l.scale_z) {
                    self.scale.z += sign * magnitude;
                }
            }
            HandleAxis::None => {}
        }
    }

    /// Project the running scale onto the grid
    ///
    /// Units at or below the snapping threshold leave the rounded scale
    /// equal to the raw accumulated scale.
    pub fn round_to(&mut self, grid_unit: f32) {
        self.rounded = snap_vec3(self.scale, grid_unit);
    }

    /// Raw accumulated scale
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Grid-snapped scale, the value drawn and applied
    pub fn rounded(&self) -> Vec3 {
        self.rounded
    }

    /// Return to the identity scale
    pub fn reset(&mut self) {
        self.scale = Vec3::ONE;
        self.rounded = self.scale;
    }
}

/// Apply a rounded scale on top of a captured reference scale
///
/// A rounded component of exactly 1 means "no change yet" and contributes
/// nothing; any other value contributes its accumulated delta from 1. X and
/// Z never end up below 1; Y is applied unfloored. Locked components keep
/// their reference value verbatim (the floor included).
pub fn apply_rounded(reference: Vec3, rounded: Vec3, lock: Option<&AxisLock>) -> Vec3 {
    let delta = |component: f32| if component == 1.0 { 0.0 } else { component - 1.0 };

    let x = if lock.is_some_and(|l| l.scale_x) {
        reference.x
    } else {
        (reference.x + delta(rounded.x)).max(1.0)
    };
    let y = if lock.is_some_and(|l| l.scale_y) {
        reference.y
    } else {
        reference.y + delta(rounded.y)
    };
    let z = if lock.is_some_and(|l| l.scale_z) {
        reference.z
    } else {
        (reference.z + delta(rounded.z)).max(1.0)
    };
    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_accumulation_is_isolated() {
        let mut acc = ScaleAccumulator::default();
        acc.accumulate(HandleAxis::X, Vec3::new(0.5, 0.0, 0.0), None);
        acc.accumulate(HandleAxis::X, Vec3::new(0.25, 0.0, 0.0), None);

        assert!((acc.scale().x - 1.75).abs() < 1e-5);
        assert_eq!(acc.scale().y, 1.0);
        assert_eq!(acc.scale().z, 1.0);
    }

    #[test]
    fn test_negative_motion_shrinks() {
        let mut acc = ScaleAccumulator::default();
        acc.accumulate(HandleAxis::Y, Vec3::new(0.0, -0.4, 0.0), None);
        assert!((acc.scale().y - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_free_accumulation_is_uniform() {
        let mut acc = ScaleAccumulator::default();
        let offset = Vec3::new(0.3, 0.4, 0.0);
        acc.accumulate(HandleAxis::Free, offset, None);

        let expected = 1.0 + offset.length();
        assert!((acc.scale().x - expected).abs() < 1e-5);
        assert!((acc.scale().y - expected).abs() < 1e-5);
        assert!((acc.scale().z - expected).abs() < 1e-5);
    }

    #[test]
    fn test_locked_component_is_invariant() {
        let lock = AxisLock {
            scale_y: true,
            ..AxisLock::default()
        };

        let mut acc = ScaleAccumulator::default();
        acc.accumulate(HandleAxis::Y, Vec3::new(0.0, 0.7, 0.0), Some(&lock));
        assert_eq!(acc.scale().y, 1.0);

        acc.accumulate(HandleAxis::Free, Vec3::new(0.5, 0.5, 0.0), Some(&lock));
        assert_eq!(acc.scale().y, 1.0);
        assert!(acc.scale().x > 1.0);
        assert!(acc.scale().z > 1.0);
    }

    #[test]
    fn test_x_drag_scenario() {
        // Projected plane offset (+0.5, 0, 0) at unit screen scale
        let mut acc = ScaleAccumulator::default();
        acc.accumulate(HandleAxis::X, Vec3::new(0.5, 0.0, 0.0), None);
        assert_eq!(acc.scale(), Vec3::new(1.5, 1.0, 1.0));

        // Already on a 0.25 grid, so rounding changes nothing
        acc.round_to(0.25);
        assert_eq!(acc.rounded(), Vec3::new(1.5, 1.0, 1.0));
    }

    #[test]
    fn test_rounding_follows_grid() {
        let mut acc = ScaleAccumulator::default();
        acc.accumulate(HandleAxis::X, Vec3::new(0.37, 0.0, 0.0), None);

        acc.round_to(0.25);
        assert!((acc.rounded().x - 1.25).abs() < 1e-5);

        // At or below the threshold the rounded scale is the raw scale
        acc.round_to(0.01);
        assert_eq!(acc.rounded(), acc.scale());
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut acc = ScaleAccumulator::default();
        acc.accumulate(HandleAxis::Free, Vec3::new(2.0, 1.0, 0.0), None);
        acc.round_to(0.25);

        acc.reset();
        assert_eq!(acc.scale(), Vec3::ONE);
        assert_eq!(acc.rounded(), Vec3::ONE);
    }

    #[test]
    fn test_apply_adds_onto_reference() {
        // An X drag that accumulated +0.5, applied over two targets
        let rounded = Vec3::new(1.5, 1.0, 1.0);
        assert_eq!(apply_rounded(Vec3::ONE, rounded, None), Vec3::new(1.5, 1.0, 1.0));
        assert_eq!(
            apply_rounded(Vec3::new(2.0, 1.0, 2.0), rounded, None),
            Vec3::new(2.5, 1.0, 2.0)
        );
    }

    #[test]
    fn test_apply_treats_one_as_no_change() {
        let reference = Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(apply_rounded(reference, Vec3::ONE, None), reference);
    }

    #[test]
    fn test_apply_floors_x_and_z_but_not_y() {
        let reference = Vec3::ONE;
        let rounded = Vec3::new(0.5, 0.5, 0.5);
        let applied = apply_rounded(reference, rounded, None);

        assert_eq!(applied.x, 1.0);
        assert_eq!(applied.z, 1.0);
        assert!((applied.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_apply_floor_raises_sub_unit_references() {
        // Even an untouched X reference below 1 is pulled up to the floor
        let applied = apply_rounded(Vec3::new(0.5, 0.5, 0.5), Vec3::ONE, None);
        assert_eq!(applied.x, 1.0);
        assert!((applied.y - 0.5).abs() < 1e-6);
        assert_eq!(applied.z, 1.0);
    }

    #[test]
    fn test_apply_keeps_locked_components() {
        let lock = AxisLock {
            scale_x: true,
            ..AxisLock::default()
        };
        // A locked component keeps its reference even below the floor
        let applied = apply_rounded(Vec3::new(0.5, 1.0, 1.0), Vec3::new(2.0, 1.0, 1.0), Some(&lock));
        assert_eq!(applied.x, 0.5);
    }
}
