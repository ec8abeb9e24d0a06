//! CLI output formatting.
//!
//! Every command echoes its effective parameters before doing work, then
//! prints a one-block summary of what happened. Each block has a `format_*`
//! function (returns `Vec<String>`, pure, testable) and commands print the
//! lines via [`print_lines`].

use crate::bitmap::BinaryImage;
use crate::params::TransformParams;
use std::path::Path;

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// Echo the effective transform parameters for a run.
pub fn format_params(params: &TransformParams) -> Vec<String> {
    let dim = |d: Option<u32>| d.map_or("source".to_string(), |v| v.to_string());
    vec![
        format!("width: {}", dim(params.target_width)),
        format!("height: {}", dim(params.target_height)),
        format!("resample: {:?}", params.resample).to_lowercase(),
        format!("resolution: {}%", params.resolution_percent),
        format!("threshold: {}", params.threshold),
        format!("invert: {}", params.invert),
    ]
}

/// Summary for a convert run: dimensions, density, destination.
pub fn format_convert_summary(bitmap: &BinaryImage, out_path: &Path) -> Vec<String> {
    vec![
        format!(
            "{}x{} binary image, {} on pixels",
            bitmap.width(),
            bitmap.height(),
            bitmap.count_on()
        ),
        format!("saved: {}", out_path.display()),
    ]
}

/// Pre-flight line for a draw run — how much clicking is about to happen.
pub fn format_draw_preamble(bitmap: &BinaryImage, anchor: (i32, i32)) -> Vec<String> {
    vec![format!(
        "drawing {}x{} bitmap at ({}, {}): {} clicks",
        bitmap.width(),
        bitmap.height(),
        anchor.0,
        anchor.1,
        bitmap.count_on()
    )]
}

pub fn format_draw_summary(emitted: usize) -> Vec<String> {
    vec![format!("done: {emitted} clicks dispatched")]
}
