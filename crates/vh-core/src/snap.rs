//! Grid snapping

use glam::Vec3;

use crate::constants::MIN_GRID_STEP;

/// Snap a scalar to multiples of `unit`
///
/// Units at or below [`MIN_GRID_STEP`] leave the value untouched, which is
/// how "snapping off" is represented.
pub fn snap_component(value: f32, unit: f32) -> f32 {
    if unit <= MIN_GRID_STEP {
        return value;
    }
    (value / unit).round() * unit
}

/// Snap a vector to the grid per component
pub fn snap_vec3(v: Vec3, unit: f32) -> Vec3 {
    Vec3::new(
        snap_component(v.x, unit),
        snap_component(v.y, unit),
        snap_component(v.z, unit),
    )
}

/// Snap an angle in radians to multiples of `increment`
pub fn snap_angle(angle: f32, increment: f32) -> f32 {
    if increment <= MIN_GRID_STEP {
        return angle;
    }
    (angle / increment).round() * increment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_component() {
        assert!((snap_component(1.37, 0.25) - 1.25).abs() < 1e-5);
        assert!((snap_component(1.4, 0.25) - 1.5).abs() < 1e-5);
        assert!((snap_component(-1.37, 0.25) + 1.25).abs() < 1e-5);
    }

    #[test]
    fn test_tiny_unit_is_identity() {
        assert_eq!(snap_component(1.37, 0.01), 1.37);
        assert_eq!(snap_component(1.37, 0.0), 1.37);
        assert_eq!(snap_component(1.37, -1.0), 1.37);
    }

    #[test]
    fn test_on_grid_value_is_unchanged() {
        assert!((snap_component(1.5, 0.25) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_snap_vec3_is_per_component() {
        let snapped = snap_vec3(Vec3::new(1.1, 2.6, -0.4), 0.5);
        assert!(snapped.distance(Vec3::new(1.0, 2.5, -0.5)) < 1e-5);
    }

    #[test]
    fn test_snap_angle() {
        let increment = 15.0_f32.to_radians();
        let snapped = snap_angle(17.0_f32.to_radians(), increment);
        assert!((snapped - increment).abs() < 1e-5);
    }
}
