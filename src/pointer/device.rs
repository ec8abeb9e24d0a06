//! Pointer device trait and shared types.
//!
//! [`PointerDevice`] is the seam between everything that computes click
//! coordinates and the OS that receives them. The production implementation
//! is [`EnigoPointer`](super::enigo_backend::EnigoPointer); tests use the
//! recording double defined at the bottom of this module.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("failed to initialize pointer device: {0}")]
    Init(String),
    #[error("pointer dispatch failed: {0}")]
    Dispatch(String),
}

/// A device that can move the cursor and click.
///
/// All operations are blocking and complete (or fail) before returning —
/// there is no overlap between dispatches. Any failure means the OS denied
/// the action (permissions, no display, focus loss) and is surfaced as
/// [`DispatchError::Dispatch`].
pub trait PointerDevice {
    /// Move the cursor to an absolute screen position.
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), DispatchError>;

    /// Left-click at an absolute screen position (move + press + release).
    fn click(&mut self, x: i32, y: i32) -> Result<(), DispatchError>;

    /// Current cursor position.
    fn position(&mut self) -> Result<(i32, i32), DispatchError>;
}

/// Glide the cursor from its current position to `(x, y)` over `duration`.
///
/// Linear interpolation at ~60 steps per second, sleeping between steps.
/// The final step always lands exactly on the target; a zero duration
/// degenerates to a single direct move.
pub fn glide(
    device: &mut impl PointerDevice,
    x: i32,
    y: i32,
    duration: Duration,
) -> Result<(), DispatchError> {
    let steps = (duration.as_millis() / 16).max(1) as i32;
    let (start_x, start_y) = device.position()?;
    let pause = duration / steps as u32;

    for step in 1..=steps {
        let ix = start_x + (x - start_x) * step / steps;
        let iy = start_y + (y - start_y) * step / steps;
        device.move_to(ix, iy)?;
        if step < steps {
            std::thread::sleep(pause);
        }
    }
    Ok(())
}
