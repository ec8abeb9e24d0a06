//! Transform parameters and their boundary validation.
//!
//! [`TransformParams`] is the immutable configuration bundle consumed by the
//! [`pipeline`](crate::pipeline). It describes *what* transformation to apply,
//! not *how* — the pipeline resolves filters and dimensions from it.
//!
//! Validation happens here, at the boundary: [`TransformParams::validate`]
//! rejects out-of-range or degenerate values with
//! [`InvalidParameter`](ParamError::InvalidParameter) before any pipeline
//! stage runs. Nothing downstream clamps silently.

use image::imageops::FilterType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParamError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Resampling filter used when resizing.
///
/// The six names follow the common imaging vocabulary (Pillow's resampling
/// set). The `image` crate ships five kernels, so `Box` and `Hamming` map to
/// their nearest standard equivalents — see [`ResampleFilter::filter_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ResampleFilter {
    /// Nearest neighbour — fastest, blockiest. The default.
    #[default]
    Nearest,
    Box,
    Bilinear,
    Hamming,
    Bicubic,
    Lanczos,
}

/// Static filter-name → kernel table. Immutable, constructed once.
const FILTER_TABLE: &[(ResampleFilter, FilterType)] = &[
    (ResampleFilter::Nearest, FilterType::Nearest),
    // No area-average kernel in the image crate; triangle is the closest
    // linear equivalent.
    (ResampleFilter::Box, FilterType::Triangle),
    (ResampleFilter::Bilinear, FilterType::Triangle),
    // No hamming-window kernel either; gaussian gives comparable smoothing.
    (ResampleFilter::Hamming, FilterType::Gaussian),
    (ResampleFilter::Bicubic, FilterType::CatmullRom),
    (ResampleFilter::Lanczos, FilterType::Lanczos3),
];

impl ResampleFilter {
    /// Resolve to the `image` crate kernel that implements this filter.
    pub fn filter_type(self) -> FilterType {
        FILTER_TABLE
            .iter()
            .find(|(f, _)| *f == self)
            .map(|(_, ft)| *ft)
            .unwrap_or(FilterType::Nearest)
    }
}

/// Immutable configuration bundle for one transform run.
///
/// Field semantics:
/// - `target_width` / `target_height`: absent means "use the source image's
///   corresponding dimension".
/// - `resolution_percent`: 100 means no degradation; lower values introduce
///   deliberate pixelation (downscale + upscale).
/// - `threshold`: strict greater-than cut — intensities above it become
///   "on", everything else (including exact matches) "off".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformParams {
    pub target_width: Option<u32>,
    pub target_height: Option<u32>,
    pub resample: ResampleFilter,
    pub resolution_percent: u32,
    pub threshold: u8,
    pub invert: bool,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            target_width: None,
            target_height: None,
            resample: ResampleFilter::default(),
            resolution_percent: 100,
            threshold: 125,
            invert: false,
        }
    }
}

impl TransformParams {
    /// Reject out-of-range or degenerate configuration.
    ///
    /// Fails fast so no pipeline stage ever sees a bad bundle:
    /// - `resolution_percent` above 100 is out of range
    /// - `resolution_percent` of 0 would floor the intermediate dimensions
    ///   to zero, which can never produce a usable image
    /// - explicit zero target dimensions are likewise degenerate
    ///
    /// `threshold` needs no check — `u8` already covers exactly [0, 255].
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.resolution_percent > 100 {
            return Err(ParamError::InvalidParameter(format!(
                "resolution must be in 0..=100, got {}",
                self.resolution_percent
            )));
        }
        if self.resolution_percent == 0 {
            return Err(ParamError::InvalidParameter(
                "resolution of 0 would produce a zero-sized image".to_string(),
            ));
        }
        if self.target_width == Some(0) || self.target_height == Some(0) {
            return Err(ParamError::InvalidParameter(
                "target dimensions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the output dimensions against a source image size.
    ///
    /// Absent dimensions default to the source's. Returns `(width, height)`.
    pub fn resolve_dimensions(&self, source_width: u32, source_height: u32) -> (u32, u32) {
        (
            self.target_width.unwrap_or(source_width),
            self.target_height.unwrap_or(source_height),
        )
    }
}
