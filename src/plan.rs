//! Click plan — the pure coordinate side of drawing.
//!
//! [`click_points`] maps a bitmap's on pixels to absolute screen positions;
//! [`ClickPlan`] wraps the full sequence in a serializable artifact so a run
//! can be inspected (or diffed) before any cursor moves. The emitter
//! dispatches exactly this sequence, in exactly this order.

use crate::bitmap::BinaryImage;
use serde::{Deserialize, Serialize};

/// An absolute screen position, derived from a bitmap pixel offset added to
/// the anchor. Generated on demand while scanning, in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickPoint {
    pub x: i32,
    pub y: i32,
}

/// Screen position of bitmap pixel `(col, row)` for a given anchor.
///
/// The anchor is the screen coordinate of bitmap position (row 0, col 0).
pub fn click_point(anchor: (i32, i32), col: u32, row: u32) -> ClickPoint {
    ClickPoint {
        x: anchor.0 + col as i32,
        y: anchor.1 + row as i32,
    }
}

/// All click positions for a bitmap, row-major, one per on pixel.
pub fn click_points(bitmap: &BinaryImage, anchor: (i32, i32)) -> Vec<ClickPoint> {
    bitmap
        .on_pixels()
        .map(|(col, row)| click_point(anchor, col, row))
        .collect()
}

/// Serializable description of a full draw run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickPlan {
    /// Screen position of the bitmap's top-left pixel.
    pub anchor: ClickPoint,
    /// Bitmap dimensions the plan was computed from.
    pub width: u32,
    pub height: u32,
    /// Click positions in dispatch order.
    pub clicks: Vec<ClickPoint>,
}

impl ClickPlan {
    pub fn new(bitmap: &BinaryImage, anchor: (i32, i32)) -> Self {
        Self {
            anchor: ClickPoint {
                x: anchor.0,
                y: anchor.1,
            },
            width: bitmap.width(),
            height: bitmap.height(),
            clicks: click_points(bitmap, anchor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    fn bitmap_from_rows(width: u32, rows: &[&[u8]]) -> BinaryImage {
        let luma = GrayImage::from_fn(width, rows.len() as u32, |x, y| {
            image::Luma([rows[y as usize][x as usize]])
        });
        BinaryImage::from_luma(&luma, 127)
    }

    #[test]
    fn anchor_offsets_pixel_position() {
        assert_eq!(click_point((10, 20), 2, 0), ClickPoint { x: 12, y: 20 });
        assert_eq!(click_point((10, 20), 0, 1), ClickPoint { x: 10, y: 21 });
    }

    #[test]
    fn plan_follows_row_major_scan() {
        let bitmap = bitmap_from_rows(3, &[&[0, 0, 255], &[255, 0, 0]]);
        let points = click_points(&bitmap, (10, 20));
        assert_eq!(
            points,
            vec![ClickPoint { x: 12, y: 20 }, ClickPoint { x: 10, y: 21 }]
        );
    }

    #[test]
    fn plan_round_trips_through_json() {
        let bitmap = bitmap_from_rows(2, &[&[255, 255], &[255, 255]]);
        let plan = ClickPlan::new(&bitmap, (5, 5));
        let json = serde_json::to_string(&plan).unwrap();
        let back: ClickPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.clicks, plan.clicks);
        assert_eq!((back.width, back.height), (2, 2));
    }

    #[test]
    fn all_off_bitmap_yields_empty_plan() {
        let bitmap = bitmap_from_rows(3, &[&[0, 0, 0]]);
        assert!(click_points(&bitmap, (0, 0)).is_empty());
    }
}
