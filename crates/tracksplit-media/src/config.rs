//! Configuration for silence detection and export.

use serde::{Deserialize, Serialize};

/// Default minimum silence duration between tracks, in seconds.
pub const DEFAULT_MIN_SILENCE_SECS: f64 = 3.0;

/// Default silencedetect noise threshold, in dB.
pub const DEFAULT_NOISE_THRESHOLD_DB: i32 = -40;

/// Parameters for one silence-detection run.
///
/// The threshold controls what counts as silence; the duration controls
/// how long a quiet span must last before it becomes a split candidate.
/// Too high a duration yields a single track; too low yields many tiny
/// ones — no minimum-track-length policy is imposed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Noise threshold in dB for the silencedetect filter.
    pub noise_threshold_db: i32,

    /// Minimum silence duration in seconds before a gap is reported.
    pub min_silence_secs: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            noise_threshold_db: DEFAULT_NOISE_THRESHOLD_DB,
            min_silence_secs: DEFAULT_MIN_SILENCE_SECS,
        }
    }
}

impl SplitConfig {
    /// Builder-style setter for the noise threshold.
    pub fn with_threshold_db(mut self, db: i32) -> Self {
        self.noise_threshold_db = db;
        self
    }

    /// Builder-style setter for the minimum silence duration.
    pub fn with_min_silence_secs(mut self, secs: f64) -> Self {
        self.min_silence_secs = secs;
        self
    }
}

/// Fixed export encoding for produced tracks: low-bitrate speech MP3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Output codec.
    pub codec: String,
    /// Target audio bitrate.
    pub bitrate: String,
    /// Encoder VBR quality (`-q:a`).
    pub quality: u8,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            codec: "libmp3lame".to_string(),
            bitrate: "64k".to_string(),
            quality: 8,
        }
    }
}
