//! Star fields: point clouds sampled over a spherical shell, rendered as
//! additive point sprites and rotated together as one group.

use glam::{Mat4, Vec3};
use rand::Rng;

use crate::spherical::Spherical;

/// Inner radius of the star shell.
pub const STAR_SHELL_INNER: f32 = 1400.0;
/// Shell thickness. The radial offset is sampled as `100·cbrt(U)`, which
/// crowds stars toward the outer edge of the shell.
pub const STAR_SHELL_THICKNESS: f32 = 100.0;
/// Star group rotation about Y, radians per frame.
pub const STAR_GROUP_RATE: f32 = 0.000_11;

/// One point cloud with a shared sprite texture and point size.
#[derive(Clone, Debug)]
pub struct StarField {
    /// Sprite texture file name, resolved against the configured asset dir.
    pub sprite: &'static str,
    /// World-space sprite size.
    pub point_size: f32,
    /// Sampled positions. Immutable after construction.
    pub points: Vec<Vec3>,
}

impl StarField {
    /// Sample `count` points uniformly over the shell.
    ///
    /// Per point: `theta = 2π·U1`, `phi = acos(2·U2 − 1)`,
    /// `r = 100·cbrt(U3) + 1400`. The acos argument is `2U − 1` for
    /// `U ∈ [0, 1)`, so it never leaves [−1, 1] and `phi` stays in [0, π].
    pub fn new(rng: &mut impl Rng, sprite: &'static str, count: usize, point_size: f32) -> Self {
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let theta = rng.random::<f32>() * std::f32::consts::TAU;
            let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
            let r = rng.random::<f32>().cbrt() * STAR_SHELL_THICKNESS + STAR_SHELL_INNER;
            points.push(Spherical::new(r, phi, theta).to_cartesian());
        }
        Self {
            sprite,
            point_size,
            points,
        }
    }

    /// Number of points in the field.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// All star fields, rotated as a single group.
#[derive(Clone, Debug, Default)]
pub struct StarGroup {
    pub fields: Vec<StarField>,
    /// Accumulated group rotation about Y in radians.
    pub angle: f32,
}

impl StarGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field into the group.
    pub fn add(&mut self, field: StarField) {
        self.fields.push(field);
    }

    /// Advance one frame. Fields have no individual rotation.
    pub fn advance(&mut self) {
        self.angle += STAR_GROUP_RATE;
    }

    /// World transform shared by every field in the group.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.angle)
    }

    /// Total point count across all fields.
    pub fn total_points(&self) -> usize {
        self.fields.iter().map(StarField::len).sum()
    }
}
