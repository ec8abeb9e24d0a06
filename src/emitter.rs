//! Click emission — replay a bitmap as mouse clicks.
//!
//! [`emit`] walks the binary bitmap in strict row-major order and dispatches
//! one click per on pixel at `anchor + (col, row)`, each click fully
//! completed before the next coordinate is computed. No deduplication, no
//! batching: the sequence is fully deterministic given the bitmap and is
//! identical to [`plan::click_points`](crate::plan::click_points).
//!
//! A dispatch failure aborts the remaining scan — a denied click usually
//! means lost permissions or focus, and silently continuing would scatter
//! a partial drawing. The error carries the click index and coordinate so
//! an operator can tell exactly where the run stopped.
//!
//! A full scan on even a modest image runs for minutes, so the loop checks
//! a cooperative [`CancelFlag`] once per scanned pixel.

use crate::bitmap::BinaryImage;
use crate::plan::click_point;
use crate::pointer::{DispatchError, PointerDevice};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("dispatch failed at click {index} ({x}, {y}): {source}")]
    Dispatch {
        /// 0-based index into the click sequence; clicks before it landed.
        index: usize,
        x: i32,
        y: i32,
        source: DispatchError,
    },
    #[error("cancelled after {emitted} clicks")]
    Cancelled { emitted: usize },
}

/// Shared cancellation signal, checked once per scanned pixel.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Dispatch one click per on pixel, returning the number of clicks sent.
pub fn emit(
    bitmap: &BinaryImage,
    anchor: (i32, i32),
    device: &mut impl PointerDevice,
    cancel: &CancelFlag,
) -> Result<usize, EmitError> {
    let mut emitted = 0;

    for row in 0..bitmap.height() {
        for col in 0..bitmap.width() {
            if cancel.is_cancelled() {
                return Err(EmitError::Cancelled { emitted });
            }
            if !bitmap.is_on(col, row) {
                continue;
            }
            let point = click_point(anchor, col, row);
            device
                .click(point.x, point.y)
                .map_err(|source| EmitError::Dispatch {
                    index: emitted,
                    x: point.x,
                    y: point.y,
                    source,
                })?;
            emitted += 1;
        }
    }

    Ok(emitted)
}
