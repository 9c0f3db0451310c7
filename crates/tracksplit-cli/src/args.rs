//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use tracksplit_media::config::{DEFAULT_MIN_SILENCE_SECS, DEFAULT_NOISE_THRESHOLD_DB};

#[derive(Parser, Debug)]
#[command(
    name = "tracksplit",
    version,
    about = "Split long audio recordings into tracks at silence gaps"
)]
pub struct Args {
    /// Minimum silence duration between tracks, in seconds
    #[arg(short = 'm', long, value_name = "SECS", default_value_t = DEFAULT_MIN_SILENCE_SECS)]
    pub min_silence: f64,

    /// Silence detection noise threshold, in dB
    #[arg(short = 't', long, value_name = "DB", default_value_t = DEFAULT_NOISE_THRESHOLD_DB, allow_hyphen_values = true)]
    pub threshold_db: i32,

    /// Starting track number, for runs that continue an earlier numbering
    #[arg(short = 'c', long, value_name = "N", default_value_t = 1)]
    pub start_number: u32,

    /// Naming template for tracks, with $number as the placeholder
    #[arg(short = 'n', long, value_name = "TEMPLATE")]
    pub name_template: Option<String>,

    /// Perform the split; without this flag only markers are printed
    #[arg(short = 's', long)]
    pub split: bool,

    /// Files to process; defaults to all .mp3 files in the current directory
    #[arg(short = 'f', long, value_name = "FILE", num_args = 1..)]
    pub files: Option<Vec<PathBuf>>,
}
