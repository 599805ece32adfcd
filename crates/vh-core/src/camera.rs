//! Orbit camera for 3D viewports

use glam::{Mat4, Vec2, Vec3};

use crate::constants::SCREEN_SCALE_NORMALIZATION;

/// Orbit camera
///
/// Owned by the embedding viewport; the handles consume it for hit testing
/// and drag-plane projection.
#[derive(Debug, Clone)]
pub struct ViewCamera {
    /// Eye position in world space
    pub position: Vec3,
    /// Orbit target
    pub target: Vec3,
    /// Up direction
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Width / height
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    // Orbit state
    /// Orbit yaw in radians
    pub yaw: f32,
    /// Orbit pitch in radians
    pub pitch: f32,
    /// Distance from the target
    pub distance: f32,
}

impl ViewCamera {
    /// Create a new camera with default parameters
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 40.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 10000.0,
            yaw: 45.0_f32.to_radians(),
            pitch: 30.0_f32.to_radians(),
            distance: 10.0,
        };
        camera.update_position_from_orbit();
        camera
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch =
            (self.pitch + delta_pitch).clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
        self.update_position_from_orbit();
    }

    /// Pan the camera (move the target)
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = self.forward();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward).normalize();

        let scale = self.distance * 0.002;
        self.target += right * (-delta_x * scale) + up * (delta_y * scale);
        self.update_position_from_orbit();
    }

    /// Zoom the camera
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * 0.1)).clamp(0.1, 10000.0);
        self.update_position_from_orbit();
    }

    /// View direction from the eye through the target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Convert screen coordinates to a world ray
    pub fn screen_to_ray(&self, screen: Vec2, viewport: Vec2) -> (Vec3, Vec3) {
        // Convert to normalized device coordinates
        let ndc_x = (2.0 * screen.x / viewport.x) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen.y / viewport.y);

        let inv_proj = self.projection_matrix().inverse();
        let inv_view = self.view_matrix().inverse();

        // Near and far points in NDC
        let near_ndc = glam::Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_ndc = glam::Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        // Transform to view space
        let near_view = inv_proj * near_ndc;
        let far_view = inv_proj * far_ndc;
        let near_view = near_view.truncate() / near_view.w;
        let far_view = far_view.truncate() / far_view.w;

        // Transform to world space
        let near_world = (inv_view * near_view.extend(1.0)).truncate();
        let far_world = (inv_view * far_view.extend(1.0)).truncate();

        let ray_origin = near_world;
        let ray_direction = (far_world - near_world).normalize();

        (ray_origin, ray_direction)
    }

    /// Project a world point to viewport pixel coordinates
    ///
    /// Returns `None` for points at or behind the eye plane.
    pub fn world_to_screen(&self, point: Vec3, viewport: Vec2) -> Option<Vec2> {
        let clip = self.projection_matrix() * self.view_matrix() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }

    /// Apparent-size factor at a world position
    ///
    /// Frustum height at the position's depth divided by the viewport pixel
    /// height, normalized so a gizmo scaled by this factor keeps a constant
    /// on-screen size regardless of camera distance.
    pub fn screen_scale(&self, position: Vec3, viewport_height: f32) -> f32 {
        let depth = (position - self.position).dot(self.forward());
        let frustum_height = 2.0 * depth * (self.fov * 0.5).tan();
        frustum_height / viewport_height * SCREEN_SCALE_NORMALIZATION
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
    fn test_center_ray_points_at_target() {
        let camera = head_on_camera();
        let viewport = Vec2::new(800.0, 800.0);
        let (_, dir) = camera.screen_to_ray(Vec2::new(400.0, 400.0), viewport);
        assert!(dir.dot(camera.forward()) > 0.999);
    }

    #[test]
    fn test_target_projects_to_viewport_center() {
        let camera = head_on_camera();
        let viewport = Vec2::new(800.0, 600.0);
        let screen = camera.world_to_screen(camera.target, viewport).unwrap();
        assert!((screen.x - 400.0).abs() < 0.01);
        assert!((screen.y - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_point_behind_camera_is_unprojectable() {
        let camera = head_on_camera();
        let viewport = Vec2::new(800.0, 800.0);
        assert!(camera.world_to_screen(Vec3::new(0.0, 0.0, 20.0), viewport).is_none());
    }

    #[test]
    fn test_screen_and_world_round_trip() {
        let camera = head_on_camera();
        let viewport = Vec2::new(800.0, 800.0);
        let point = Vec3::new(1.5, -0.5, 2.0);

        let screen = camera.world_to_screen(point, viewport).unwrap();
        let (origin, dir) = camera.screen_to_ray(screen, viewport);

        // The ray through the projected pixel passes through the point
        let to_point = point - origin;
        let closest = origin + dir * to_point.dot(dir);
        assert!(closest.distance(point) < 0.01);
    }

    #[test]
    fn test_screen_scale_grows_with_distance() {
        let mut camera = head_on_camera();
        let near_scale = camera.screen_scale(Vec3::ZERO, 800.0);
        camera.position = Vec3::new(0.0, 0.0, 20.0);
        let far_scale = camera.screen_scale(Vec3::ZERO, 800.0);
        assert!((far_scale / near_scale - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = ViewCamera::new(1.6);
        let before = camera.position.distance(camera.target);
        camera.orbit(0.3, -0.2);
        let after = camera.position.distance(camera.target);
        assert!((before - after).abs() < 1e-4);
    }
}
