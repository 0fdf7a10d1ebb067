//! CPU-side scene model for the orrery viewer.
//!
//! Everything here is plain math and state: sphere/torus mesh generation,
//! the planet, rings, star fields, and moon with their per-frame rotation
//! increments, and the orbit camera with exponential easing. No GPU types
//! appear in this crate, which keeps the whole animation model unit-testable.

pub mod bodies;
pub mod camera;
pub mod mesh;
pub mod ring;
pub mod scene;
pub mod spherical;
pub mod starfield;

pub use bodies::{Moon, MoonGroup, Planet};
pub use camera::OrbitCamera;
pub use mesh::MeshData;
pub use ring::Ring;
pub use scene::{Fog, PointLight, Scene, color_from_hex};
pub use spherical::Spherical;
pub use starfield::{StarField, StarGroup};
