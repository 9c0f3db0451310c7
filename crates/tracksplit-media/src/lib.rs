#![deny(unreachable_patterns)]
//! FFmpeg CLI wrapper for silence-based audio track splitting.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - Silence detection via the `silencedetect` filter, with diagnostic
//!   text parsed into structured events
//! - Chunk-boundary calculation with midpoint smoothing
//! - FFprobe-based duration and tag probing
//! - Sliced, re-encoded, tagged track export

pub mod boundaries;
pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod probe;
pub mod silence;

pub use boundaries::{chunk_intervals, compute_boundaries, ChunkInterval};
pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand};
pub use config::{EncodingConfig, SplitConfig};
pub use error::{MediaError, MediaResult};
pub use export::{export_track, TrackTags};
pub use probe::{probe_audio, AudioInfo};
pub use silence::{detect_silence, parse_diagnostics, SilenceEvent};
