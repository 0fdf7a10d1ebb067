//! Touch orbit control.
//!
//! Unlike the mouse drag, touch is absolute: every touch-move sets the
//! camera target directly from the finger's offset to the viewport center,
//! so the first touch after a drag can snap the target.

use glam::Vec2;
use orrery_scene::OrbitCamera;

use crate::POINTER_SCALE;

/// Absolute (position-based) touch tracker.
#[derive(Debug, Clone, Copy)]
pub struct TouchControl {
    viewport: Vec2,
}

impl TouchControl {
    /// Creates a touch control for the given viewport size in pixels.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
        }
    }

    /// Track the viewport across resizes so the center stays correct.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Process a touch-move. The target becomes the scaled offset from the
    /// viewport center to the touch point; previous target state is
    /// overwritten, not accumulated.
    pub fn on_touch_moved(&mut self, position: Vec2, camera: &mut OrbitCamera) {
        camera.target = (self.viewport / 2.0 - position) * POINTER_SCALE;
    }
}
