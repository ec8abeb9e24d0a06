//! The pure image transform pipeline.
//!
//! Four stages run in fixed order, each owning its output:
//!
//! ```text
//! 1. Resize       target dims resolved against the source; skipped when equal
//! 2. Degrade      downscale by resolution% (floor, no filter) + upscale back
//! 3. Threshold    8-bit luma, strict `> threshold` cut → BinaryImage
//! 4. Invert       optional bit flip
//! ```
//!
//! [`transform`] is a pure function: no I/O, no hidden state, identical
//! inputs give bit-identical output. Invalid parameters fail fast via
//! [`TransformParams::validate`] before any stage runs; valid inputs never
//! fail except for the degenerate case where resolution degradation would
//! floor an intermediate dimension to zero.

use crate::bitmap::BinaryImage;
use crate::params::{ParamError, TransformParams};
use image::DynamicImage;
use image::imageops::FilterType;

/// Run the full pipeline: resize → degrade → threshold → invert.
pub fn transform(
    image: &DynamicImage,
    params: &TransformParams,
) -> Result<BinaryImage, ParamError> {
    params.validate()?;

    let resized = resize_stage(image, params);
    let degraded = degrade_stage(&resized, params.resolution_percent, params.resample.filter_type())?;

    let luma = degraded.to_luma8();
    let mut bitmap = BinaryImage::from_luma(&luma, params.threshold);
    if params.invert {
        bitmap.invert();
    }
    Ok(bitmap)
}

/// Resize to the resolved target dimensions.
///
/// When both resolved dimensions already match the source, the stage is a
/// pixel-for-pixel no-op — no resampling pass, no artifacts.
fn resize_stage(image: &DynamicImage, params: &TransformParams) -> DynamicImage {
    let (width, height) = params.resolve_dimensions(image.width(), image.height());
    if width == image.width() && height == image.height() {
        return image.clone();
    }
    image.resize_exact(width, height, params.resample.filter_type())
}

/// Intermediate dimensions for the degradation downscale.
///
/// Integer floor arithmetic, exactly `(w * pct / 100, h * pct / 100)`.
/// Errors when either dimension floors to zero — a zero-sized image can
/// never be produced by the pipeline.
fn degrade_dimensions(
    width: u32,
    height: u32,
    resolution_percent: u32,
) -> Result<(u32, u32), ParamError> {
    let down_w = width * resolution_percent / 100;
    let down_h = height * resolution_percent / 100;
    if down_w == 0 || down_h == 0 {
        return Err(ParamError::InvalidParameter(format!(
            "resolution {resolution_percent}% of {width}x{height} floors to \
             {down_w}x{down_h}; image too small for that resolution"
        )));
    }
    Ok((down_w, down_h))
}

/// Deliberate pixelation: downscale to `resolution_percent` of the current
/// size, then upscale back to the original dimensions.
///
/// The downscale applies no resampling filter (nearest); only the upscale
/// uses the configured filter. At 100 the stage is skipped entirely and the
/// input passes through untouched.
fn degrade_stage(
    image: &DynamicImage,
    resolution_percent: u32,
    filter: FilterType,
) -> Result<DynamicImage, ParamError> {
    if resolution_percent >= 100 {
        return Ok(image.clone());
    }
    let (width, height) = (image.width(), image.height());
    let (down_w, down_h) = degrade_dimensions(width, height, resolution_percent)?;
    let downscaled = image.resize_exact(down_w, down_h, FilterType::Nearest);
    Ok(downscaled.resize_exact(width, height, filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ResampleFilter;
    use image::{Rgb, RgbImage};

    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 37 % 256) as u8, (y * 53 % 256) as u8, 128])
        }))
    }

    #[test]
    fn matching_dimensions_skip_resize() {
        let img = gradient_image(8, 6);
        let params = TransformParams {
            target_width: Some(8),
            target_height: Some(6),
            ..TransformParams::default()
        };
        assert_eq!(resize_stage(&img, &params).to_rgb8(), img.to_rgb8());
    }

    #[test]
    fn absent_dimensions_default_to_source() {
        let img = gradient_image(8, 6);
        let params = TransformParams::default();
        assert_eq!(resize_stage(&img, &params).to_rgb8(), img.to_rgb8());
    }

    #[test]
    fn resize_hits_exact_target_dimensions() {
        let img = gradient_image(8, 6);
        let params = TransformParams {
            target_width: Some(20),
            target_height: Some(5),
            resample: ResampleFilter::Bilinear,
            ..TransformParams::default()
        };
        let resized = resize_stage(&img, &params);
        assert_eq!((resized.width(), resized.height()), (20, 5));
    }

    #[test]
    fn full_resolution_degrade_is_identity() {
        let img = gradient_image(10, 10);
        let out = degrade_stage(&img, 100, FilterType::Nearest).unwrap();
        assert_eq!(out.to_rgb8(), img.to_rgb8());
    }

    #[test]
    fn degrade_preserves_outer_dimensions() {
        let img = gradient_image(10, 8);
        let out = degrade_stage(&img, 50, FilterType::Nearest).unwrap();
        assert_eq!((out.width(), out.height()), (10, 8));
    }

    #[test]
    fn degrade_dimensions_floor() {
        assert_eq!(degrade_dimensions(10, 8, 50).unwrap(), (5, 4));
        // 7 * 50 / 100 = 3 (floored)
        assert_eq!(degrade_dimensions(7, 7, 50).unwrap(), (3, 3));
    }

    #[test]
    fn degrade_rejects_zero_intermediate() {
        // 5 * 10 / 100 floors to 0
        assert!(degrade_dimensions(5, 5, 10).is_err());
    }

    #[test]
    fn resolution_zero_fails_before_any_stage() {
        let img = gradient_image(4, 4);
        let params = TransformParams {
            resolution_percent: 0,
            ..TransformParams::default()
        };
        assert!(matches!(
            transform(&img, &params),
            Err(ParamError::InvalidParameter(_))
        ));
    }

    #[test]
    fn tiny_image_with_low_resolution_fails() {
        let img = gradient_image(5, 5);
        let params = TransformParams {
            resolution_percent: 10,
            ..TransformParams::default()
        };
        assert!(transform(&img, &params).is_err());
    }

    #[test]
    fn transform_is_deterministic() {
        let img = gradient_image(16, 12);
        let params = TransformParams {
            target_width: Some(10),
            resolution_percent: 60,
            threshold: 90,
            invert: true,
            resample: ResampleFilter::Bicubic,
            ..TransformParams::default()
        };
        let first = transform(&img, &params).unwrap();
        let second = transform(&img, &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn threshold_cut_is_strict() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::from_fn(3, 1, |x, _| {
            image::Luma([[100u8, 125, 126][x as usize]])
        }));
        let params = TransformParams::default(); // threshold 125
        let bitmap = transform(&img, &params).unwrap();
        assert!(!bitmap.is_on(0, 0));
        assert!(!bitmap.is_on(1, 0));
        assert!(bitmap.is_on(2, 0));
    }

    #[test]
    fn invert_flag_flips_output() {
        let img = gradient_image(6, 6);
        let plain = transform(&img, &TransformParams::default()).unwrap();
        let inverted = transform(
            &img,
            &TransformParams {
                invert: true,
                ..TransformParams::default()
            },
        )
        .unwrap();
        let mut flipped_back = inverted.clone();
        flipped_back.invert();
        assert_eq!(plain, flipped_back);
    }

    #[test]
    fn output_dimensions_follow_resolved_target() {
        let img = gradient_image(40, 30);
        let params = TransformParams {
            target_width: Some(20),
            target_height: Some(10),
            ..TransformParams::default()
        };
        let bitmap = transform(&img, &params).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (20, 10));
    }
}
