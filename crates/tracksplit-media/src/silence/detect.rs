//! Running the silencedetect analysis pass.

use std::path::Path;
use tracing::debug;

use super::events::{parse_diagnostics, SilenceEvent};
use crate::command::FfmpegCommand;
use crate::config::SplitConfig;
use crate::error::{MediaError, MediaResult};

/// Run silencedetect over `input` and return the parsed events.
///
/// Blocks until the analysis pass has decoded the whole file. A non-zero
/// ffmpeg exit is fatal and carries the collaborator's diagnostic output.
pub async fn detect_silence(
    input: impl AsRef<Path>,
    config: &SplitConfig,
) -> MediaResult<Vec<SilenceEvent>> {
    let input = input.as_ref();

    if !input.exists() {
        return Err(MediaError::FileNotFound(input.to_path_buf()));
    }

    let filter = format!(
        "silencedetect=n={}dB:d={}",
        config.noise_threshold_db, config.min_silence_secs
    );

    debug!(
        path = %input.display(),
        filter = %filter,
        "Running silence detection"
    );

    let stderr = FfmpegCommand::new_null_output(input)
        .audio_filter(filter)
        .nostats()
        .run_capture_stderr()
        .await?;

    let events = parse_diagnostics(&stderr);

    debug!(
        path = %input.display(),
        events = events.len(),
        "Silence detection complete"
    );

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.mp3");

        let err = detect_silence(&missing, &SplitConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::FileNotFound(_)));
    }
}
