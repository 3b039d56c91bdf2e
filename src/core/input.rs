//! Input events and pointer state tracking

use crate::core::types::Vec2;
use crate::core::camera::Camera;

/// A raw input event delivered by the host (window, browser, test harness).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to window pixel coordinates
    PointerMove { x: f32, y: f32 },
    /// Primary button pressed at window pixel coordinates
    PointerDown { x: f32, y: f32 },
    /// Key pressed, already translated to a character
    Key(char),
    /// Viewport resized
    Resize { width: f32, height: f32 },
}

/// What an input event means to the scene builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Pointer hover at normalized device coordinates
    Hover(Vec2),
    /// Click at normalized device coordinates
    Click(Vec2),
    /// Rotate the pending placement by a quarter turn
    Rotate,
    /// Nothing to do
    None,
}

/// Tracks viewport size and pointer position
#[derive(Clone, Debug)]
pub struct InputState {
    /// Viewport size in pixels
    viewport: (f32, f32),
    /// Current pointer position in pixels
    pointer_position: (f32, f32),
}

impl InputState {
    /// Create new input state for a viewport
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: (width.max(1.0), height.max(1.0)),
            pointer_position: (0.0, 0.0),
        }
    }

    /// Process an event and translate it into a command
    pub fn process_event(&mut self, event: &InputEvent) -> Command {
        match *event {
            InputEvent::PointerMove { x, y } => {
                self.pointer_position = (x, y);
                Command::Hover(self.pointer_ndc())
            }
            InputEvent::PointerDown { x, y } => {
                self.pointer_position = (x, y);
                Command::Click(self.pointer_ndc())
            }
            InputEvent::Key('r') | InputEvent::Key('R') => Command::Rotate,
            InputEvent::Key(_) => Command::None,
            InputEvent::Resize { width, height } => {
                self.viewport = (width.max(1.0), height.max(1.0));
                Command::None
            }
        }
    }

    /// Current pointer position in normalized device coordinates
    pub fn pointer_ndc(&self) -> Vec2 {
        Camera::pixel_to_ndc(
            self.pointer_position.0,
            self.pointer_position.1,
            self.viewport.0,
            self.viewport.1,
        )
    }

    /// Viewport size in pixels
    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Current pointer position in pixels
    pub fn pointer_position(&self) -> (f32, f32) {
        self.pointer_position
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}
