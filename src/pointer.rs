// Last known pointer position, shared between the input handlers that write
// it and the frame step that reads it once per frame.

use crate::config;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    /// Starts off-screen so nothing is attracted before the first move event.
    pub fn offscreen() -> Pointer {
        Pointer {
            x: config::POINTER_OFFSCREEN,
            y: config::POINTER_OFFSCREEN,
        }
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Mouse left the window or the touch ended.
    pub fn clear(&mut self) {
        *self = Pointer::offscreen();
    }

    pub fn is_offscreen(&self) -> bool {
        self.x == config::POINTER_OFFSCREEN && self.y == config::POINTER_OFFSCREEN
    }
}
