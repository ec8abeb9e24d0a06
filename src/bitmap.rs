//! Two-level bitmap produced by the transform pipeline.
//!
//! [`BinaryImage`] is the handoff type between the pure pipeline and the
//! click emitter. Every pixel is exactly "on" or "off", decided once at
//! construction time (`luma > threshold`) — consumers ask [`is_on`]
//! (or iterate [`on_pixels`]) and never re-interpret intensities. The
//! original tool compared raw raster bytes against 127 even on its 1-bit
//! encoding path; normalizing the on/off decision here removes that
//! ambiguity.
//!
//! [`is_on`]: BinaryImage::is_on
//! [`on_pixels`]: BinaryImage::on_pixels

use image::GrayImage;

/// A rectangular grid of on/off pixels.
///
/// Stored row-major, top row first. Dimensions are always ≥ 1 — the
/// pipeline rejects degenerate sizes before constructing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BinaryImage {
    /// Threshold an 8-bit luma image into a binary one.
    ///
    /// Strict greater-than: a pixel exactly equal to `threshold` is off.
    pub fn from_luma(luma: &GrayImage, threshold: u8) -> Self {
        let bits = luma.pixels().map(|p| p.0[0] > threshold).collect();
        Self {
            width: luma.width(),
            height: luma.height(),
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is on. Panics if out of bounds.
    pub fn is_on(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.bits[(y * self.width + x) as usize]
    }

    /// Number of on pixels (= number of clicks a draw run will dispatch).
    pub fn count_on(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Flip every pixel. Applying twice restores the original.
    pub fn invert(&mut self) {
        for bit in &mut self.bits {
            *bit = !*bit;
        }
    }

    /// Iterate `(x, y)` positions of on pixels in row-major order:
    /// top row first, left to right within each row.
    pub fn on_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(i, _)| (i as u32 % self.width, i as u32 / self.width))
    }

    /// Export as 8-bit luma: on = 255, off = 0. Used for saving.
    pub fn to_luma8(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            image::Luma([if self.is_on(x, y) { 255 } else { 0 }])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn luma_from_rows(width: u32, rows: &[&[u8]]) -> GrayImage {
        GrayImage::from_fn(width, rows.len() as u32, |x, y| {
            Luma([rows[y as usize][x as usize]])
        })
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        let luma = luma_from_rows(3, &[&[126, 127, 128]]);
        let bitmap = BinaryImage::from_luma(&luma, 127);
        assert!(!bitmap.is_on(0, 0));
        assert!(!bitmap.is_on(1, 0)); // exact match is off
        assert!(bitmap.is_on(2, 0));
    }

    #[test]
    fn on_pixels_scan_row_major() {
        // 3x2 grid, on at (col=2, row=0) and (col=0, row=1).
        let luma = luma_from_rows(3, &[&[0, 0, 255], &[255, 0, 0]]);
        let bitmap = BinaryImage::from_luma(&luma, 127);
        let on: Vec<_> = bitmap.on_pixels().collect();
        assert_eq!(on, vec![(2, 0), (0, 1)]);
    }

    #[test]
    fn invert_is_self_inverse() {
        let luma = luma_from_rows(2, &[&[255, 0], &[0, 255]]);
        let original = BinaryImage::from_luma(&luma, 127);
        let mut flipped = original.clone();
        flipped.invert();
        assert_ne!(flipped, original);
        flipped.invert();
        assert_eq!(flipped, original);
    }

    #[test]
    fn invert_flips_counts() {
        let luma = luma_from_rows(2, &[&[255, 0], &[0, 0]]);
        let mut bitmap = BinaryImage::from_luma(&luma, 127);
        assert_eq!(bitmap.count_on(), 1);
        bitmap.invert();
        assert_eq!(bitmap.count_on(), 3);
    }

    #[test]
    fn to_luma8_uses_two_levels_only() {
        let luma = luma_from_rows(2, &[&[200, 10]]);
        let bitmap = BinaryImage::from_luma(&luma, 127);
        let exported = bitmap.to_luma8();
        assert_eq!(exported.get_pixel(0, 0).0[0], 255);
        assert_eq!(exported.get_pixel(1, 0).0[0], 0);
    }

    #[test]
    fn rethresholding_binary_at_127_is_identity() {
        let luma = luma_from_rows(3, &[&[200, 10, 130], &[127, 128, 0]]);
        let first = BinaryImage::from_luma(&luma, 127);
        let second = BinaryImage::from_luma(&first.to_luma8(), 127);
        assert_eq!(first, second);
    }
}
