//! Exporting one sliced, re-encoded, tagged track.

use std::path::Path;
use tracing::info;

use crate::command::FfmpegCommand;
use crate::config::EncodingConfig;
use crate::error::MediaResult;

/// Tag set written onto every exported track. Missing source metadata
/// arrives here as empty strings rather than being an error.
#[derive(Debug, Clone, Default)]
pub struct TrackTags {
    pub artist: String,
    pub album: String,
    /// Track tag; equals the rendered track name.
    pub track: String,
    /// Title tag; equals the rendered track name.
    pub title: String,
}

impl TrackTags {
    /// Build the tag set for one track from the source file's metadata
    /// and the rendered name.
    pub fn new(artist: Option<&str>, album: Option<&str>, name: &str) -> Self {
        Self {
            artist: artist.unwrap_or_default().to_string(),
            album: album.unwrap_or_default().to_string(),
            track: name.to_string(),
            title: name.to_string(),
        }
    }
}

/// Slice `[start_secs, end_secs)` out of `input`, re-encode it, tag it,
/// and write it to `output`.
pub async fn export_track(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    start_secs: f64,
    end_secs: f64,
    tags: &TrackTags,
    encoding: &EncodingConfig,
) -> MediaResult<()> {
    let input = input.as_ref();
    let output = output.as_ref();
    let duration = (end_secs - start_secs).max(0.0);

    FfmpegCommand::new(input, output)
        .seek(start_secs)
        .duration(duration)
        .no_video()
        .audio_codec(&encoding.codec)
        .audio_bitrate(&encoding.bitrate)
        .audio_quality(encoding.quality)
        .metadata("artist", &tags.artist)
        .metadata("album", &tags.album)
        .metadata("track", &tags.track)
        .metadata("title", &tags.title)
        .run()
        .await?;

    info!("Exported {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_from_missing_metadata() {
        let tags = TrackTags::new(None, None, "5_ch");
        assert_eq!(tags.artist, "");
        assert_eq!(tags.album, "");
        assert_eq!(tags.track, "5_ch");
        assert_eq!(tags.title, "5_ch");
    }

    #[test]
    fn test_tags_from_source_metadata() {
        let tags = TrackTags::new(Some("Narrator"), Some("Book One"), "1_book");
        assert_eq!(tags.artist, "Narrator");
        assert_eq!(tags.album, "Book One");
    }
}
