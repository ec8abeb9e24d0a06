//! Uniform click pacing.
//!
//! The emitter dispatches clicks back-to-back; some drawing surfaces drop
//! events when fed too fast. [`PacedPointer`] wraps any device and sleeps a
//! fixed delay after each click. It is constructed at the CLI boundary —
//! pacing is a configuration knob there, not an emitter concern.

use super::device::{DispatchError, PointerDevice};
use std::time::Duration;

pub struct PacedPointer<D: PointerDevice> {
    inner: D,
    delay: Duration,
}

impl<D: PointerDevice> PacedPointer<D> {
    pub fn new(inner: D, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl<D: PointerDevice> PointerDevice for PacedPointer<D> {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), DispatchError> {
        self.inner.move_to(x, y)
    }

    fn click(&mut self, x: i32, y: i32) -> Result<(), DispatchError> {
        self.inner.click(x, y)?;
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(())
    }

    fn position(&mut self) -> Result<(i32, i32), DispatchError> {
        self.inner.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::device::tests::RecordingPointer;

    #[test]
    fn paced_pointer_forwards_clicks() {
        let mut device = PacedPointer::new(RecordingPointer::new(), Duration::ZERO);
        device.click(5, 7).unwrap();
        device.move_to(9, 9).unwrap();
        // Destructure through position to confirm forwarding.
        assert_eq!(device.position().unwrap(), (9, 9));
    }

    #[test]
    fn paced_pointer_propagates_failures() {
        let mut device = PacedPointer::new(RecordingPointer::failing_at(0), Duration::ZERO);
        assert!(device.click(1, 1).is_err());
    }
}
