//! FFmpeg command builder and runner.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::error::{MediaError, MediaResult};

/// Output target for an FFmpeg invocation.
#[derive(Debug, Clone)]
enum OutputTarget {
    /// Write to a real file.
    File(PathBuf),
    /// Discard output (`-f null -`), used for analysis-only runs.
    Null,
}

/// Builder for FFmpeg commands.
#[derive(Debug, Clone)]
pub struct FfmpegCommand {
    /// Input file path
    input: PathBuf,
    /// Output target
    output: OutputTarget,
    /// Input arguments (before -i)
    input_args: Vec<String>,
    /// Output arguments (after -i)
    output_args: Vec<String>,
    /// Whether to overwrite output
    overwrite: bool,
    /// Log level
    log_level: String,
    /// Whether to suppress periodic progress stats
    nostats: bool,
}

impl FfmpegCommand {
    /// Create a command that writes to `output`.
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: OutputTarget::File(output.as_ref().to_path_buf()),
            input_args: Vec::new(),
            output_args: Vec::new(),
            overwrite: true,
            log_level: "error".to_string(),
            nostats: false,
        }
    }

    /// Create an analysis-only command that discards its output.
    pub fn new_null_output(input: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: OutputTarget::Null,
            input_args: Vec::new(),
            output_args: Vec::new(),
            overwrite: false,
            log_level: "info".to_string(),
            nostats: false,
        }
    }

    /// Add an input argument (before -i).
    pub fn input_arg(mut self, arg: impl Into<String>) -> Self {
        self.input_args.push(arg.into());
        self
    }

    /// Add an output argument (after -i).
    pub fn output_arg(mut self, arg: impl Into<String>) -> Self {
        self.output_args.push(arg.into());
        self
    }

    /// Add multiple output arguments.
    pub fn output_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set seek position. Applied on the output side so the cut is
    /// decode-accurate rather than keyframe-aligned.
    pub fn seek(self, seconds: f64) -> Self {
        self.output_arg("-ss").output_arg(format!("{:.3}", seconds))
    }

    /// Set duration.
    pub fn duration(self, seconds: f64) -> Self {
        self.output_arg("-t").output_arg(format!("{:.3}", seconds))
    }

    /// Set audio filter.
    pub fn audio_filter(self, filter: impl Into<String>) -> Self {
        self.output_arg("-af").output_arg(filter)
    }

    /// Set audio codec.
    pub fn audio_codec(self, codec: impl Into<String>) -> Self {
        self.output_arg("-c:a").output_arg(codec)
    }

    /// Set audio bitrate.
    pub fn audio_bitrate(self, bitrate: impl Into<String>) -> Self {
        self.output_arg("-b:a").output_arg(bitrate)
    }

    /// Set encoder quality (`-q:a`).
    pub fn audio_quality(self, quality: u8) -> Self {
        self.output_arg("-q:a").output_arg(quality.to_string())
    }

    /// Drop any video streams from the output.
    pub fn no_video(self) -> Self {
        self.output_arg("-vn")
    }

    /// Attach a metadata tag to the output.
    pub fn metadata(self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.output_arg("-metadata")
            .output_arg(format!("{}={}", key.as_ref(), value.as_ref()))
    }

    /// Set log level.
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Suppress periodic `size=... time=...` progress lines.
    pub fn nostats(mut self) -> Self {
        self.nostats = true;
        self
    }

    /// Build the command arguments.
    pub fn build_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.overwrite {
            args.push("-y".to_string());
        }

        args.push("-v".to_string());
        args.push(self.log_level.clone());

        if self.nostats {
            args.push("-nostats".to_string());
        }

        args.extend(self.input_args.clone());

        args.push("-i".to_string());
        args.push(self.input.to_string_lossy().to_string());

        args.extend(self.output_args.clone());

        match &self.output {
            OutputTarget::File(path) => args.push(path.to_string_lossy().to_string()),
            OutputTarget::Null => {
                args.push("-f".to_string());
                args.push("null".to_string());
                args.push("-".to_string());
            }
        }

        args
    }

    /// Run to completion, discarding diagnostic output.
    ///
    /// Fails if the process exits non-zero.
    pub async fn run(&self) -> MediaResult<()> {
        check_ffmpeg()?;

        let args = self.build_args();
        debug!("Running FFmpeg: ffmpeg {}", args.join(" "));

        let output = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if output.status.success() {
            Ok(())
        } else {
            Err(MediaError::ffmpeg_failed(
                "FFmpeg exited with non-zero status",
                Some(String::from_utf8_lossy(&output.stderr).to_string()),
                output.status.code(),
            ))
        }
    }

    /// Run to completion and return the full stderr text.
    ///
    /// Used for analysis runs whose results arrive on the diagnostic
    /// stream. A non-zero exit is an error carrying that stream.
    pub async fn run_capture_stderr(&self) -> MediaResult<String> {
        check_ffmpeg()?;

        let args = self.build_args();
        debug!("Running FFmpeg: ffmpeg {}", args.join(" "));

        let output = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(stderr)
        } else {
            Err(MediaError::ffmpeg_failed(
                "FFmpeg exited with non-zero status",
                Some(stderr),
                output.status.code(),
            ))
        }
    }
}

/// Check if FFmpeg is available.
pub fn check_ffmpeg() -> MediaResult<PathBuf> {
    which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)
}

/// Check if FFprobe is available.
pub fn check_ffprobe() -> MediaResult<PathBuf> {
    which::which("ffprobe").map_err(|_| MediaError::FfprobeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_builder() {
        let cmd = FfmpegCommand::new("input.mp3", "output.mp3")
            .seek(10.0)
            .duration(30.0)
            .audio_codec("libmp3lame")
            .audio_bitrate("64k")
            .audio_quality(8);

        let args = cmd.build_args();
        assert!(args.contains(&"-ss".to_string()));
        assert!(args.contains(&"10.000".to_string()));
        assert!(args.contains(&"-t".to_string()));
        assert!(args.contains(&"-c:a".to_string()));
        assert!(args.contains(&"libmp3lame".to_string()));
        assert!(args.contains(&"-q:a".to_string()));
        assert_eq!(args.last(), Some(&"output.mp3".to_string()));
    }

    #[test]
    fn test_null_output_command() {
        let cmd = FfmpegCommand::new_null_output("input.mp3")
            .audio_filter("silencedetect=n=-40dB:d=3")
            .nostats();

        let args = cmd.build_args();
        assert!(!args.contains(&"-y".to_string()));
        assert!(args.contains(&"-nostats".to_string()));
        assert!(args.contains(&"silencedetect=n=-40dB:d=3".to_string()));
        assert_eq!(args.last(), Some(&"-".to_string()));
        let f_pos = args.iter().position(|a| a == "-f").unwrap();
        assert_eq!(args[f_pos + 1], "null");
    }

    #[test]
    fn test_metadata_args() {
        let cmd = FfmpegCommand::new("in.mp3", "out.mp3")
            .metadata("artist", "Some Artist")
            .metadata("title", "5_ch");

        let args = cmd.build_args();
        assert!(args.contains(&"artist=Some Artist".to_string()));
        assert!(args.contains(&"title=5_ch".to_string()));
    }
}
