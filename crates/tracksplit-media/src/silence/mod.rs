//! Silence detection via ffmpeg's `silencedetect` filter.
//!
//! The filter reports detected silence on ffmpeg's diagnostic stream as
//! plain text; this module runs the filter and turns that text into
//! structured [`SilenceEvent`]s for the boundary calculator.

mod detect;
mod events;

pub use detect::detect_silence;
pub use events::{parse_diagnostics, SilenceEvent};
