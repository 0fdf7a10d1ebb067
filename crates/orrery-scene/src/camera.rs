//! Orbit camera: target angles accumulate from input, current angles ease
//! toward them each frame, and the camera sits on a fixed-radius sphere
//! looking at the origin.

use glam::{Mat4, Vec2, Vec3};

use crate::spherical::Spherical;

/// Distance from the origin to the camera.
pub const ORBIT_RADIUS: f32 = 2500.0;
/// Fraction of the remaining distance covered each frame. Fixed by design.
pub const EASE_FACTOR: f32 = 0.04;
/// Scale from accumulated input units to radians.
pub const ANGLE_SCALE: f32 = 0.001;
/// Vertical field of view in degrees.
pub const FOV_Y_DEGREES: f32 = 50.0;
/// Near clip plane.
pub const NEAR: f32 = 0.1;
/// Far clip plane.
pub const FAR: f32 = 10000.0;

/// Camera state: current and target angle accumulators plus projection
/// aspect. The accumulators are unconstrained; input may push them to any
/// real value.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    /// Eased angle accumulators (x: horizontal, y: vertical).
    pub current: Vec2,
    /// Target angle accumulators written by the input handlers.
    pub target: Vec2,
    /// Projection aspect ratio (width / height).
    pub aspect: f32,
}

impl OrbitCamera {
    /// Create a camera at rest with the given aspect ratio.
    pub fn new(aspect: f32) -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            aspect,
        }
    }

    /// Ease the current angles toward the target. Called once per frame,
    /// unconditionally.
    pub fn update(&mut self) {
        self.current += (self.target - self.current) * EASE_FACTOR;
    }

    /// Update the aspect ratio on viewport resize.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    /// Camera position on the orbit sphere for the current frame.
    pub fn position(&self) -> Vec3 {
        Spherical::new(
            ORBIT_RADIUS,
            self.current.y * ANGLE_SCALE - std::f32::consts::FRAC_PI_2,
            self.current.x * ANGLE_SCALE,
        )
        .to_cartesian()
    }

    /// View matrix looking from the orbit position at the origin.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y)
    }

    /// Reverse-Z perspective projection (near and far swapped so the far
    /// plane maps to depth 0).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, FAR, NEAR)
    }

    /// Combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_covers_four_percent_per_frame() {
        let mut camera = OrbitCamera::new(16.0 / 9.0);
        camera.target = Vec2::new(1000.0, -500.0);
        camera.update();
        assert!((camera.current.x - 40.0).abs() < 1e-3);
        assert!((camera.current.y + 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_easing_converges_geometrically() {
        let mut camera = OrbitCamera::new(1.0);
        camera.current = Vec2::new(200.0, 0.0);
        camera.target = Vec2::new(1000.0, 0.0);
        let initial_gap = (camera.target - camera.current).length();

        for _ in 0..100 {
            camera.update();
        }
        let gap = (camera.target - camera.current).length();
        let expected = initial_gap * 0.96f32.powi(100);
        assert!(
            (gap - expected).abs() < expected * 1e-2 + 1e-3,
            "gap after 100 frames: {gap}, expected {expected}"
        );
    }

    #[test]
    fn test_easing_is_monotone_toward_target() {
        let mut camera = OrbitCamera::new(1.0);
        camera.target = Vec2::new(500.0, 500.0);
        let mut prev_gap = (camera.target - camera.current).length();
        for _ in 0..50 {
            camera.update();
            let gap = (camera.target - camera.current).length();
            assert!(gap < prev_gap, "gap increased: {gap} > {prev_gap}");
            prev_gap = gap;
        }
    }

    #[test]
    fn test_rest_position_is_behind_origin() {
        // With zero accumulators the polar angle is -pi/2, which lands the
        // camera on the -Z side at the orbit radius.
        let camera = OrbitCamera::new(1.0);
        let pos = camera.position();
        assert!((pos - Vec3::new(0.0, 0.0, -ORBIT_RADIUS)).length() < 1e-2);
    }

    #[test]
    fn test_position_stays_on_orbit_sphere() {
        let mut camera = OrbitCamera::new(1.0);
        camera.target = Vec2::new(4000.0, 2500.0);
        for _ in 0..300 {
            camera.update();
            assert!(
                (camera.position().length() - ORBIT_RADIUS).abs() < 0.5,
                "camera left the orbit sphere"
            );
        }
    }

    #[test]
    fn test_view_matrix_centers_origin() {
        let mut camera = OrbitCamera::new(1.0);
        camera.current = Vec2::new(777.0, -333.0);
        let view = camera.view_matrix();
        let origin_in_view = view.transform_point3(Vec3::ZERO);
        // The origin must sit straight ahead on the view -Z axis.
        assert!(origin_in_view.x.abs() < 1e-2);
        assert!(origin_in_view.y.abs() < 1e-2);
        assert!((origin_in_view.z + ORBIT_RADIUS).abs() < 0.5);
    }

    #[test]
    fn test_set_aspect_ratio() {
        let mut camera = OrbitCamera::new(1.0);
        camera.set_aspect_ratio(1920.0, 1080.0);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_per_frame_math_is_finite_for_extreme_accumulators() {
        let mut camera = OrbitCamera::new(21.0 / 9.0);
        camera.current = Vec2::new(1.0e7, -1.0e7);
        camera.target = Vec2::new(-1.0e7, 1.0e7);
        camera.update();
        assert!(camera.position().is_finite());
        assert!(camera
            .view_projection_matrix()
            .to_cols_array()
            .iter()
            .all(|v| v.is_finite()));
    }
}
