//! Mouse automation — the only side-effecting boundary in the crate.
//!
//! | Concern | Where |
//! |---|---|
//! | **Device contract** | [`PointerDevice`] trait: move, click, report position |
//! | **Production backend** | [`EnigoPointer`] — `enigo`, OS-directed, blocking |
//! | **Click pacing** | [`PacedPointer`] — uniform delay wrapper, built at the CLI boundary |
//! | **Timed glides** | [`glide`] — interpolated moves for start-to-finish runs |
//!
//! The emitter and CLI commands only ever see the trait, so tests substitute
//! a recording double and assert on the coordinate sequence instead of OS
//! state.

pub mod device;
pub mod enigo_backend;
mod paced;

pub use device::{DispatchError, PointerDevice, glide};
pub use enigo_backend::EnigoPointer;
pub use paced::PacedPointer;
