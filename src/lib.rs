//! # dotclick
//!
//! Turn a raster image into a monochrome dot pattern and draw it with
//! simulated mouse clicks, so an external canvas application reproduces the
//! image pixel-by-pixel.
//!
//! # Architecture: Pure Pipeline, Then Side Effects
//!
//! Two components run in strict sequence with no feedback loop:
//!
//! ```text
//! 1. Transform   image + params  →  BinaryImage   (pure, deterministic)
//! 2. Emit        BinaryImage + anchor  →  OS mouse clicks (side-effecting)
//! ```
//!
//! The split exists so the pipeline can be tested pixel-for-pixel without
//! any automation capability, and the emitter can be tested against a
//! recording double instead of a real cursor. The only handoff between them
//! is the [`bitmap::BinaryImage`] value — no shared mutable state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`params`] | Transform parameter bundle, resample-filter table, boundary validation |
//! | [`pipeline`] | Resize → resolution degradation → threshold → invert |
//! | [`bitmap`] | The two-level bitmap: thresholding, inversion, row-major scan |
//! | [`codec`] | Image file load/save (delegated to the `image` crate) |
//! | [`plan`] | Pure click-coordinate computation + serializable dry-run plan |
//! | [`emitter`] | Side-effecting scan: one click per on pixel, cancellation, abort-on-failure |
//! | [`pointer`] | `PointerDevice` trait, `enigo` backend, pacing wrapper, timed glides |
//! | [`output`] | CLI output formatting — pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## One On/Off Decision
//!
//! "On" is decided exactly once, at thresholding (`luma > threshold`), and
//! every consumer asks the bitmap rather than re-reading intensities. The
//! emitter therefore cannot disagree with the pipeline about which pixels
//! are dots.
//!
//! ## Abort on Dispatch Failure
//!
//! A failed click aborts the remaining scan and reports the click index and
//! coordinate. Canvas drawing is cumulative: continuing past a persistent
//! denial (lost permission, lost focus) would scatter fragments over the
//! target window with no record of what landed.
//!
//! ## Plans as Inspectable Artifacts
//!
//! `plan` serializes the exact click sequence to JSON before anything moves.
//! A draw run on a modest image dispatches thousands of clicks over several
//! minutes — being able to inspect (and diff) the sequence first is the
//! difference between a dry run and an act of faith.

pub mod bitmap;
pub mod codec;
pub mod emitter;
pub mod output;
pub mod params;
pub mod pipeline;
pub mod plan;
pub mod pointer;
