//! Production pointer backend — `enigo`.
//!
//! One `Enigo` handle owned for the lifetime of the device. A click is a
//! move followed by a left button press/release at that position, matching
//! how canvas applications expect a dot to be placed.

use super::device::{DispatchError, PointerDevice};
use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};

pub struct EnigoPointer {
    enigo: Enigo,
}

impl EnigoPointer {
    pub fn new() -> Result<Self, DispatchError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| DispatchError::Init(e.to_string()))?;
        Ok(Self { enigo })
    }
}

impl PointerDevice for EnigoPointer {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), DispatchError> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| DispatchError::Dispatch(format!("move to ({x}, {y}): {e}")))
    }

    fn click(&mut self, x: i32, y: i32) -> Result<(), DispatchError> {
        self.move_to(x, y)?;
        self.enigo
            .button(Button::Left, Direction::Click)
            .map_err(|e| DispatchError::Dispatch(format!("click at ({x}, {y}): {e}")))
    }

    fn position(&mut self) -> Result<(i32, i32), DispatchError> {
        self.enigo
            .location()
            .map_err(|e| DispatchError::Dispatch(format!("read cursor position: {e}")))
    }
}
