//! Window-event routing for the orbit camera.

use glam::Vec2;
use orrery_scene::OrbitCamera;
use winit::event::{TouchPhase, WindowEvent};

use crate::{DragControl, TouchControl};

/// Routes pointer window events to the drag and touch controls.
///
/// Keeps the last known cursor position so button presses can anchor the
/// drag even though `MouseInput` events carry no position of their own.
#[derive(Debug, Clone, Copy)]
pub struct OrbitController {
    pub drag: DragControl,
    pub touch: TouchControl,
    cursor: Vec2,
}

impl OrbitController {
    /// Creates a controller for the given viewport size in pixels.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            drag: DragControl::new(),
            touch: TouchControl::new(width, height),
            cursor: Vec2::ZERO,
        }
    }

    /// Track the viewport across resizes.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.touch.set_viewport(width, height);
    }

    /// Feed one window event. Returns `true` if the event was consumed.
    pub fn handle_event(&mut self, event: &WindowEvent, camera: &mut OrbitCamera) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                self.drag.on_cursor_moved(self.cursor, camera);
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.drag.on_button(*button, *state, self.cursor);
                true
            }
            WindowEvent::Touch(touch) if touch.phase == TouchPhase::Moved => {
                let position = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                self.touch.on_touch_moved(position, camera);
                true
            }
            _ => false,
        }
    }
}
