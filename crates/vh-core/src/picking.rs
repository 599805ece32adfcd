//! Hit-test primitives for handle picking
//!
//! Axis handles are tested in screen space: the handle segment is projected
//! to pixels and the pointer's distance to it is compared against a
//! tolerance. Rotation rings are tested in world space with a ray-ring
//! intersection.

use glam::{Vec2, Vec3};

use crate::camera::ViewCamera;
use crate::constants::PLANE_PARALLEL_EPSILON;

/// Distance from `p` to the segment `a`..`b`
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Screen-space axis handle test
///
/// Projects the handle segment from `origin` to `tip` into pixels and
/// measures the pointer's distance to it. The distance is reported even on
/// a miss so callers can break ties between axes by raw distance;
/// unprojectable endpoints report `f32::MAX`.
pub fn hit_axis(
    pointer: Vec2,
    origin: Vec3,
    tip: Vec3,
    camera: &ViewCamera,
    viewport: Vec2,
    tolerance: f32,
) -> (bool, f32) {
    let (Some(a), Some(b)) = (
        camera.world_to_screen(origin, viewport),
        camera.world_to_screen(tip, viewport),
    ) else {
        return (false, f32::MAX);
    };

    let distance = point_segment_distance(pointer, a, b);
    (distance <= tolerance, distance)
}

/// Screen-space disc test around a world point (the free-handle center)
pub fn hit_disc(
    pointer: Vec2,
    center: Vec3,
    camera: &ViewCamera,
    viewport: Vec2,
    radius: f32,
) -> bool {
    match camera.world_to_screen(center, viewport) {
        Some(c) => pointer.distance(c) <= radius,
        None => false,
    }
}

/// Ray-ring intersection test
///
/// Tests a ray against a ring (a circle with thickness) in 3D space.
/// Intersects the ray with the ring's plane, then checks that the hit lies
/// within the annular region `ring_radius ± thickness`.
///
/// Returns the ray parameter at the intersection, or `None` on a miss.
pub fn ray_ring_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    ring_center: Vec3,
    ring_normal: Vec3,
    ring_radius: f32,
    thickness: f32,
) -> Option<f32> {
    let denom = ray_dir.dot(ring_normal);

    // Ray is nearly parallel to the ring's plane
    if denom.abs() < PLANE_PARALLEL_EPSILON {
        return None;
    }

    let t = (ring_center - ray_origin).dot(ring_normal) / denom;
    if t < 0.0 {
        return None;
    }

    let hit_point = ray_origin + ray_dir * t;
    let distance_from_center = (hit_point - ring_center).length();
    let distance_from_ring = (distance_from_center - ring_radius).abs();

    if distance_from_ring <= thickness {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head_on_camera() -> ViewCamera {
        let mut camera = ViewCamera::new(1.0);
        camera.target = Vec3::ZERO;
        camera.position = Vec3::new(0.0, 0.0, 10.0);
        camera
    }

    #[test]
    fn test_point_segment_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!((point_segment_distance(Vec2::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-5);
        // Beyond the end, distance is to the endpoint
        assert!((point_segment_distance(Vec2::new(14.0, 3.0), a, b) - 5.0).abs() < 1e-5);
        // Degenerate segment
        assert!((point_segment_distance(Vec2::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_pointer_on_axis_hits() {
        let camera = head_on_camera();
        let viewport = Vec2::new(800.0, 800.0);
        let tip = Vec3::new(1.0, 0.0, 0.0);
        let pointer = camera.world_to_screen(tip * 0.5, viewport).unwrap();

        let (hit, distance) = hit_axis(pointer, Vec3::ZERO, tip, &camera, viewport, 10.0);
        assert!(hit);
        assert!(distance < 1.0);
    }

    #[test]
    fn test_pointer_off_axis_misses_but_reports_distance() {
        let camera = head_on_camera();
        let viewport = Vec2::new(800.0, 800.0);
        let tip = Vec3::new(1.0, 0.0, 0.0);
        let pointer = camera.world_to_screen(tip * 0.5, viewport).unwrap() + Vec2::new(0.0, 50.0);

        let (hit, distance) = hit_axis(pointer, Vec3::ZERO, tip, &camera, viewport, 10.0);
        assert!(!hit);
        assert!((distance - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_disc_hit_at_center() {
        let camera = head_on_camera();
        let viewport = Vec2::new(800.0, 800.0);
        let pointer = camera.world_to_screen(Vec3::ZERO, viewport).unwrap();
        assert!(hit_disc(pointer, Vec3::ZERO, &camera, viewport, 10.0));
        assert!(!hit_disc(
            pointer + Vec2::new(11.0, 0.0),
            Vec3::ZERO,
            &camera,
            viewport,
            10.0
        ));
    }

    #[test]
    fn test_ray_hits_ring() {
        // Ring in the XY plane, ray aimed at a point on the circle
        let target = Vec3::new(1.0, 0.0, 0.0);
        let origin = Vec3::new(1.0, 0.0, 5.0);
        let result =
            ray_ring_intersection(origin, Vec3::new(0.0, 0.0, -1.0), Vec3::ZERO, Vec3::Z, 1.0, 0.1);
        assert!(result.is_some());
        let hit = origin + Vec3::new(0.0, 0.0, -1.0) * result.unwrap();
        assert!(hit.distance(target) < 1e-4);
    }

    #[test]
    fn test_ray_misses_ring_interior() {
        // Straight through the middle of the ring
        let result = ray_ring_intersection(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            Vec3::Z,
            1.0,
            0.1,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_ray_parallel_to_ring_plane_misses() {
        let result = ray_ring_intersection(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::X,
            Vec3::ZERO,
            Vec3::Z,
            1.0,
            0.1,
        );
        assert!(result.is_none());
    }
}
