//! Spherical coordinates in the convention used throughout the scene:
//! `phi` is the polar angle measured from the +Y axis, `theta` the azimuth
//! around Y measured from +Z. Both star placement and the orbit camera go
//! through this one conversion.

use glam::Vec3;

/// A point in spherical coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle from +Y, in radians.
    pub phi: f32,
    /// Azimuth around Y from +Z, in radians.
    pub theta: f32,
}

impl Spherical {
    /// Create a spherical coordinate triple.
    pub fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Convert to Cartesian coordinates.
    ///
    /// Defined for all real angle values; negative radii simply mirror
    /// through the origin.
    pub fn to_cartesian(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_zero_polar_angle_is_north_pole() {
        let p = Spherical::new(10.0, 0.0, 1.234).to_cartesian();
        assert!((p - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_equator_at_zero_azimuth_is_plus_z() {
        let p = Spherical::new(5.0, FRAC_PI_2, 0.0).to_cartesian();
        assert!((p - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn test_equator_at_quarter_turn_is_plus_x() {
        let p = Spherical::new(5.0, FRAC_PI_2, FRAC_PI_2).to_cartesian();
        assert!((p - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_radius_is_preserved() {
        for (phi, theta) in [(0.3, 1.1), (2.0, -0.7), (1.5, 4.2), (3.0, 6.0)] {
            let p = Spherical::new(42.0, phi, theta).to_cartesian();
            assert!(
                (p.length() - 42.0).abs() < 1e-3,
                "radius not preserved at phi={phi}, theta={theta}: {}",
                p.length()
            );
        }
    }

    #[test]
    fn test_negative_polar_angle_is_defined() {
        // The conversion must accept any real angle (camera accumulators
        // are unconstrained).
        let p = Spherical::new(1.0, -FRAC_PI_2, 0.0).to_cartesian();
        assert!(p.is_finite());
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }
}
