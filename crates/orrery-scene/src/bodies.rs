//! The planet and moon: textured spheres with fixed per-frame spin rates.

use glam::{Mat4, Vec3};

use crate::mesh::{MeshData, uv_sphere};

/// Planet sphere radius in scene units.
pub const PLANET_RADIUS: f32 = 700.0;
/// Planet sphere subdivision (both axes).
pub const PLANET_SEGMENTS: u32 = 128;
/// Planet spin about Y, radians per frame.
pub const PLANET_SPIN_RATE: f32 = 0.004;
/// Planet texture file name, resolved against the configured asset dir.
pub const PLANET_TEXTURE: &str = "planet.jpg";

/// Moon sphere radius in scene units.
pub const MOON_RADIUS: f32 = 100.0;
/// Moon sphere subdivision (both axes).
pub const MOON_SEGMENTS: u32 = 64;
/// Moon local spin about Y, radians per frame.
pub const MOON_SPIN_RATE: f32 = 0.02;
/// Moon group rotation about Y, radians per frame. This is what makes the
/// moon orbit the planet.
pub const MOON_GROUP_RATE: f32 = 0.007;
/// Moon offset from the origin along X, applied once at construction.
pub const MOON_OFFSET: Vec3 = Vec3::new(-1300.0, 0.0, 0.0);
/// Moon texture file name.
pub const MOON_TEXTURE: &str = "moon.jpg";

/// The central textured planet.
#[derive(Clone, Debug)]
pub struct Planet {
    /// Accumulated rotation about Y in radians.
    pub spin: f32,
}

impl Planet {
    /// Create the planet with zero rotation.
    pub fn new() -> Self {
        Self { spin: 0.0 }
    }

    /// Generate the planet sphere mesh.
    pub fn mesh(&self) -> MeshData {
        uv_sphere(PLANET_RADIUS, PLANET_SEGMENTS, PLANET_SEGMENTS)
    }

    /// Advance one frame.
    pub fn advance(&mut self) {
        self.spin += PLANET_SPIN_RATE;
    }

    /// World transform for the current frame.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.spin)
    }
}

impl Default for Planet {
    fn default() -> Self {
        Self::new()
    }
}

/// The moon mesh with its local spin.
#[derive(Clone, Debug)]
pub struct Moon {
    /// Accumulated local rotation about Y in radians.
    pub spin: f32,
}

impl Moon {
    /// Create the moon with zero rotation.
    pub fn new() -> Self {
        Self { spin: 0.0 }
    }

    /// Generate the moon sphere mesh.
    pub fn mesh(&self) -> MeshData {
        uv_sphere(MOON_RADIUS, MOON_SEGMENTS, MOON_SEGMENTS)
    }

    /// Advance one frame.
    pub fn advance(&mut self) {
        self.spin += MOON_SPIN_RATE;
    }
}

impl Default for Moon {
    fn default() -> Self {
        Self::new()
    }
}

/// Container rotating the moon around the planet.
///
/// The moon sits at a fixed local offset inside the group; rotating the
/// group about Y produces the orbit, while the moon's own spin stays local.
#[derive(Clone, Debug)]
pub struct MoonGroup {
    pub moon: Moon,
    /// Accumulated group rotation about Y in radians.
    pub angle: f32,
}

impl MoonGroup {
    /// Create the group holding a fresh moon.
    pub fn new() -> Self {
        Self {
            moon: Moon::new(),
            angle: 0.0,
        }
    }

    /// Advance one frame: the group orbits and the moon spins.
    pub fn advance(&mut self) {
        self.angle += MOON_GROUP_RATE;
        self.moon.advance();
    }

    /// World transform of the moon mesh:
    /// group rotation, then the fixed offset, then the local spin.
    pub fn moon_model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.angle)
            * Mat4::from_translation(MOON_OFFSET)
            * Mat4::from_rotation_y(self.moon.spin)
    }
}

impl Default for MoonGroup {
    fn default() -> Self {
        Self::new()
    }
}
