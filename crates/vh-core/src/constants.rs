//! Global constants for vh-core

/// Normalization factor for the camera screen-scale law: frustum height at
/// the gizmo's depth divided by viewport pixel height, times this factor.
pub const SCREEN_SCALE_NORMALIZATION: f32 = 90.0;

/// Grid unit sizes at or below this are treated as "snapping off".
pub const MIN_GRID_STEP: f32 = 0.01;

/// Default pointer-to-handle hit tolerance in pixels.
pub const DEFAULT_SELECTION_MARGIN: f32 = 10.0;

/// Ray-plane intersections with |denominator| below this are parallel.
pub const PLANE_PARALLEL_EPSILON: f32 = 1e-6;

/// Rotation-ring hit thickness as a fraction of the ring radius.
pub const RING_HIT_THICKNESS: f32 = 0.1;
