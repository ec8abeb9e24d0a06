use clap::{Parser, Subcommand};
use dotclick::emitter::CancelFlag;
use dotclick::params::{ResampleFilter, TransformParams};
use dotclick::plan::ClickPlan;
use dotclick::pointer::{EnigoPointer, PacedPointer, PointerDevice, glide};
use dotclick::{codec, emitter, output, pipeline};
use std::path::PathBuf;
use std::time::Duration;

/// Shared flags for commands that run the transform pipeline.
#[derive(clap::Args, Clone)]
struct TransformArgs {
    /// Input image path
    #[arg(long)]
    in_path: PathBuf,

    /// Output image width. Defaults to input image width.
    #[arg(long)]
    width: Option<u32>,

    /// Output image height. Defaults to input image height.
    #[arg(long)]
    height: Option<u32>,

    /// Resampling used when resizing. Only used if width and/or height is provided.
    #[arg(long, value_enum, default_value_t = ResampleFilter::Nearest)]
    resample: ResampleFilter,

    /// Output image resolution as a percentage. 100 = no degradation.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(0..=100))]
    resolution: u32,

    /// Threshold used when converting to monochrome.
    #[arg(long, default_value_t = 125)]
    threshold: u8,

    /// Invert image after thresholding.
    #[arg(long)]
    invert: bool,
}

impl TransformArgs {
    fn params(&self) -> TransformParams {
        TransformParams {
            target_width: self.width,
            target_height: self.height,
            resample: self.resample,
            resolution_percent: self.resolution,
            threshold: self.threshold,
            invert: self.invert,
        }
    }
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "dotclick")]
#[command(about = "Draw images with simulated mouse clicks")]
#[command(long_about = "\
Draw images with simulated mouse clicks

dotclick reduces an image to a two-level dot pattern (resize, optional
resolution degradation, threshold, optional invert) and replays the pattern
as one mouse click per dot, row by row, starting from an anchor position on
screen. Point the anchor at the top-left corner of a canvas application and
the image appears pixel-by-pixel.

A draw run can dispatch thousands of clicks over several minutes. Use
'dotclick plan' to write the exact click sequence as JSON without touching
the cursor, and 'dotclick convert' to preview the dot pattern as an image
file. '--delay-ms' paces clicks for canvases that drop fast events.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an image to its two-level dot pattern and save it
    Convert {
        /// Output image path
        #[arg(long)]
        out_path: PathBuf,

        #[command(flatten)]
        transform: TransformArgs,
    },
    /// Run the pipeline and draw the pattern with mouse clicks
    Draw {
        /// Screen position of the pattern's top-left pixel
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        pos: Vec<i32>,

        /// Uniform delay between clicks, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,

        #[command(flatten)]
        transform: TransformArgs,
    },
    /// Run the pipeline and write the click sequence as JSON (dry run)
    Plan {
        /// Screen position of the pattern's top-left pixel
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        pos: Vec<i32>,

        /// Plan output path. Prints to stdout when absent.
        #[arg(long)]
        out_path: Option<PathBuf>,

        #[command(flatten)]
        transform: TransformArgs,
    },
    /// Move the mouse cursor to a position
    MouseToPos {
        /// Target position
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        pos: Vec<i32>,
    },
    /// Move the cursor to a start position, wait, then move to a finish position
    MouseStartToFinish {
        /// Start position
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        start: Vec<i32>,

        /// Finish position
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        finish: Vec<i32>,

        /// Seconds per movement and for the wait between movements
        #[arg(long, default_value_t = 3)]
        seconds: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            out_path,
            transform,
        } => {
            let params = transform.params();
            output::print_lines(&output::format_params(&params));

            let image = codec::load(&transform.in_path)?;
            let bitmap = pipeline::transform(&image, &params)?;
            codec::save(&bitmap, &out_path)?;
            output::print_lines(&output::format_convert_summary(&bitmap, &out_path));
        }
        Command::Draw {
            pos,
            delay_ms,
            transform,
        } => {
            let params = transform.params();
            let anchor = (pos[0], pos[1]);
            output::print_lines(&output::format_params(&params));

            let image = codec::load(&transform.in_path)?;
            let bitmap = pipeline::transform(&image, &params)?;
            output::print_lines(&output::format_draw_preamble(&bitmap, anchor));

            let mut device =
                PacedPointer::new(EnigoPointer::new()?, Duration::from_millis(delay_ms));
            let emitted = emitter::emit(&bitmap, anchor, &mut device, &CancelFlag::new())?;
            output::print_lines(&output::format_draw_summary(emitted));
        }
        Command::Plan {
            pos,
            out_path,
            transform,
        } => {
            let params = transform.params();
            let anchor = (pos[0], pos[1]);

            let image = codec::load(&transform.in_path)?;
            let bitmap = pipeline::transform(&image, &params)?;
            let plan = ClickPlan::new(&bitmap, anchor);
            let json = serde_json::to_string_pretty(&plan)?;
            match out_path {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("plan: {} clicks → {}", plan.clicks.len(), path.display());
                }
                None => println!("{json}"),
            }
        }
        Command::MouseToPos { pos } => {
            let mut device = EnigoPointer::new()?;
            device.move_to(pos[0], pos[1])?;
        }
        Command::MouseStartToFinish {
            start,
            finish,
            seconds,
        } => {
            let movement = Duration::from_secs(seconds);
            let mut device = EnigoPointer::new()?;
            glide(&mut device, start[0], start[1], movement)?;
            std::thread::sleep(movement);
            glide(&mut device, finish[0], finish[1], movement)?;
        }
    }

    Ok(())
}
