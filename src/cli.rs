use clap::Parser;
use std::path::PathBuf;

use carousel::CarouselConfig;
use carousel::constants::*;

/// Shuffled image carousel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the images to cycle through
    #[arg(value_name = "IMAGE_DIR")]
    pub image_dir: PathBuf,

    /// Time each slide stays on screen, in milliseconds
    #[arg(short = 'd', long = "duration-ms", value_name = "MS", default_value_t = SLIDE_DURATION_MS)]
    pub duration_ms: u64,

    /// Progress bar update period, in milliseconds
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = PROGRESS_TICK_MS)]
    pub tick_ms: u64,

    /// Seed for a reproducible shuffle order
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Window width
    #[arg(long = "width", default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    /// Window height
    #[arg(long = "height", default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Args {
    pub fn config(&self) -> CarouselConfig {
        CarouselConfig {
            slide_duration_ms: self.duration_ms,
            progress_tick_ms: self.tick_ms,
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
