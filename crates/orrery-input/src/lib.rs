//! Pointer input: mouse drag and touch handlers that steer the orbit camera.

pub mod controller;
pub mod drag;
pub mod touch;

pub use controller::OrbitController;
pub use drag::DragControl;
pub use touch::TouchControl;

/// Input units added to the camera target per pixel of pointer travel.
pub const POINTER_SCALE: f32 = 4.0;
