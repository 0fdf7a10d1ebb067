//! The owning scene context: every renderable object, the lights and fog,
//! and the per-frame animation step.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bodies::{MoonGroup, Planet};
use crate::ring::Ring;
use crate::starfield::{StarField, StarGroup};

/// Fog color.
pub const FOG_COLOR: u32 = 0xf52a82;
/// Fog start distance.
pub const FOG_NEAR: f32 = 0.1;
/// Fog end distance.
pub const FOG_FAR: f32 = 7000.0;
/// Ambient light color.
pub const AMBIENT_COLOR: u32 = 0x777777;
/// Point light color.
pub const POINT_LIGHT_COLOR: u32 = 0xffffff;
/// Point light position.
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(500.0, 500.0, -2000.0);

/// Ring radius, color, and per-frame spin for the three rings.
pub const RING_PARAMS: [(f32, u32, f32); 3] = [
    (1000.0, 0xd50ffc, -0.004),
    (1100.0, 0xffffff, 0.002),
    (1150.0, 0xffdb00, -0.003),
];

/// Sprite file, point count, and point size for the six star fields.
pub const STAR_FIELD_PARAMS: [(&str, usize, f32); 6] = [
    ("star_glow.png", 500, 100.0),
    ("star_cross.png", 500, 100.0),
    ("star_white.png", 2000, 100.0),
    ("star_red.png", 2000, 100.0),
    ("star_blue.png", 2000, 100.0),
    ("flag.png", 10, 300.0),
];

/// Convert a 24-bit hex color to normalized sRGB.
pub fn color_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Linear distance fog.
#[derive(Clone, Copy, Debug)]
pub struct Fog {
    pub color: [f32; 3],
    pub near: f32,
    pub far: f32,
}

/// A single positional light.
#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
}

/// The complete scene.
///
/// Exactly one planet, three rings, one star group with six fields, and
/// one moon group exist for the life of the process; nothing is ever
/// destroyed or recreated.
#[derive(Clone, Debug)]
pub struct Scene {
    pub planet: Planet,
    pub rings: [Ring; 3],
    pub stars: StarGroup,
    pub moon_group: MoonGroup,
    pub fog: Fog,
    pub ambient: [f32; 3],
    pub point_light: PointLight,
    /// Frames advanced so far.
    pub frame_count: u64,
}

impl Scene {
    /// Build the scene. `star_seed` makes star placement reproducible.
    pub fn new(star_seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(star_seed);

        let mut stars = StarGroup::new();
        for (sprite, count, size) in STAR_FIELD_PARAMS {
            stars.add(StarField::new(&mut rng, sprite, count, size));
        }

        let rings = RING_PARAMS.map(|(radius, color, rate)| Ring::new(radius, color, rate));

        Self {
            planet: Planet::new(),
            rings,
            stars,
            moon_group: MoonGroup::new(),
            fog: Fog {
                color: color_from_hex(FOG_COLOR),
                near: FOG_NEAR,
                far: FOG_FAR,
            },
            ambient: color_from_hex(AMBIENT_COLOR),
            point_light: PointLight {
                position: POINT_LIGHT_POSITION,
                color: color_from_hex(POINT_LIGHT_COLOR),
            },
            frame_count: 0,
        }
    }

    /// Advance every animated object by one frame.
    pub fn advance_frame(&mut self) {
        self.planet.advance();
        self.moon_group.advance();
        self.stars.advance();
        for ring in &mut self.rings {
            ring.advance();
        }
        self.frame_count += 1;
    }
}
