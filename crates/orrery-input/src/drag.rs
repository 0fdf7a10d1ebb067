//! Mouse-drag orbit control.
//!
//! While the left button is held, each cursor move adds the scaled movement
//! delta to the camera's target accumulators. Releases outside the window
//! still arrive as `MouseInput` events, so the drag cannot get stuck.

use glam::Vec2;
use orrery_scene::OrbitCamera;
use winit::event::{ElementState, MouseButton};

use crate::POINTER_SCALE;

/// Relative (delta-based) drag tracker.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragControl {
    pressed: bool,
    last: Vec2,
}

impl DragControl {
    /// Creates an idle drag control.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a `MouseInput` event. Only the left button starts a drag;
    /// the press position anchors the first delta.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState, position: Vec2) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                self.pressed = true;
                self.last = position;
                tracing::trace!(x = position.x, y = position.y, "drag start");
            }
            ElementState::Released => {
                self.pressed = false;
                tracing::trace!("drag end");
            }
        }
    }

    /// Process a `CursorMoved` event. Moves while released are ignored;
    /// moves while pressed push the camera target by the scaled delta.
    pub fn on_cursor_moved(&mut self, position: Vec2, camera: &mut OrbitCamera) {
        if !self.pressed {
            return;
        }
        camera.target += (position - self.last) * POINTER_SCALE;
        self.last = position;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(16.0 / 9.0)
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut drag = DragControl::new();
        let mut cam = camera();
        drag.on_cursor_moved(Vec2::new(300.0, 300.0), &mut cam);
        assert_eq!(cam.target, Vec2::ZERO);
    }

    #[test]
    fn test_drag_adds_scaled_delta() {
        let mut drag = DragControl::new();
        let mut cam = camera();
        drag.on_button(
            MouseButton::Left,
            ElementState::Pressed,
            Vec2::new(100.0, 100.0),
        );
        drag.on_cursor_moved(Vec2::new(140.0, 120.0), &mut cam);
        assert_eq!(cam.target, Vec2::new(160.0, 80.0));
    }

    #[test]
    fn test_consecutive_moves_accumulate() {
        let mut drag = DragControl::new();
        let mut cam = camera();
        drag.on_button(
            MouseButton::Left,
            ElementState::Pressed,
            Vec2::new(0.0, 0.0),
        );
        drag.on_cursor_moved(Vec2::new(10.0, 0.0), &mut cam);
        drag.on_cursor_moved(Vec2::new(25.0, 5.0), &mut cam);
        // (10,0)*4 + (15,5)*4
        assert_eq!(cam.target, Vec2::new(100.0, 20.0));
    }

    #[test]
    fn test_release_stops_accumulation() {
        let mut drag = DragControl::new();
        let mut cam = camera();
        drag.on_button(
            MouseButton::Left,
            ElementState::Pressed,
            Vec2::new(0.0, 0.0),
        );
        drag.on_cursor_moved(Vec2::new(10.0, 10.0), &mut cam);
        drag.on_button(MouseButton::Left, ElementState::Released, Vec2::new(10.0, 10.0));
        drag.on_cursor_moved(Vec2::new(500.0, 500.0), &mut cam);
        assert_eq!(cam.target, Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_new_press_reanchors_without_jump() {
        let mut drag = DragControl::new();
        let mut cam = camera();
        drag.on_button(
            MouseButton::Left,
            ElementState::Pressed,
            Vec2::new(0.0, 0.0),
        );
        drag.on_cursor_moved(Vec2::new(10.0, 0.0), &mut cam);
        drag.on_button(MouseButton::Left, ElementState::Released, Vec2::new(10.0, 0.0));
        // Press again far away; the first move after it must measure from
        // the new press position, not the old one.
        drag.on_button(
            MouseButton::Left,
            ElementState::Pressed,
            Vec2::new(900.0, 900.0),
        );
        drag.on_cursor_moved(Vec2::new(901.0, 900.0), &mut cam);
        assert_eq!(cam.target, Vec2::new(44.0, 0.0));
    }

    #[test]
    fn test_right_button_does_not_drag() {
        let mut drag = DragControl::new();
        let mut cam = camera();
        drag.on_button(
            MouseButton::Right,
            ElementState::Pressed,
            Vec2::new(0.0, 0.0),
        );
        drag.on_cursor_moved(Vec2::new(50.0, 50.0), &mut cam);
        assert!(!drag.is_dragging());
        assert_eq!(cam.target, Vec2::ZERO);
    }
}
