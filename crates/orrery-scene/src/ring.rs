//! Orbital rings: tori pre-rotated into an inclined plane at construction,
//! then spun about the world Y axis at a fixed per-frame rate.

use glam::Mat4;

use crate::mesh::{MeshData, torus};
use crate::scene::color_from_hex;

/// Tube (minor) radius shared by all rings.
pub const RING_TUBE_RADIUS: f32 = 5.0;
/// Tube cross-section subdivision.
pub const RING_RADIAL_SEGMENTS: u32 = 16;
/// Subdivision along the ring.
pub const RING_TUBULAR_SEGMENTS: u32 = 100;
/// Inclination applied about Z after the torus is laid flat: 18 degrees.
pub const RING_TILT: f32 = std::f32::consts::PI / 10.0;

/// One orbital ring.
#[derive(Clone, Debug)]
pub struct Ring {
    /// Distance from the origin to the tube center.
    pub radius: f32,
    /// Solid color, normalized sRGB.
    pub color: [f32; 3],
    /// Per-frame spin about world Y in radians. May be negative.
    pub spin_rate: f32,
    /// Accumulated spin in radians.
    pub spin: f32,
}

impl Ring {
    /// Create a ring of the given radius, hex color, and per-frame spin rate.
    pub fn new(radius: f32, color: u32, spin_rate: f32) -> Self {
        Self {
            radius,
            color: color_from_hex(color),
            spin_rate,
            spin: 0.0,
        }
    }

    /// Generate the canonical torus mesh (XY plane, before any rotation).
    pub fn mesh(&self) -> MeshData {
        torus(
            self.radius,
            RING_TUBE_RADIUS,
            RING_RADIAL_SEGMENTS,
            RING_TUBULAR_SEGMENTS,
        )
    }

    /// The one-time construction rotation: 90 degrees about X lays the
    /// torus into the XZ plane, then [`RING_TILT`] about Z inclines it.
    pub fn pre_rotation() -> Mat4 {
        Mat4::from_rotation_z(RING_TILT) * Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2)
    }

    /// Advance one frame.
    pub fn advance(&mut self) {
        self.spin += self.spin_rate;
    }

    /// World transform for the current frame.
    ///
    /// The spin is applied about the world Y axis after the fixed
    /// pre-rotation, so the inclined plane precesses rather than spinning
    /// in place.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.spin) * Self::pre_rotation()
    }
}
