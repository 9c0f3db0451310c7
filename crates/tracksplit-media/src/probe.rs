//! FFprobe audio information.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::error::{MediaError, MediaResult};

/// Audio file information: decoder-accurate duration plus the tags that
/// get copied onto every exported track.
#[derive(Debug, Clone)]
pub struct AudioInfo {
    /// Duration in seconds
    pub duration_secs: f64,
    /// Album tag, if present
    pub album: Option<String>,
    /// Artist tag, if present
    pub artist: Option<String>,
}

/// FFprobe JSON output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// Probe an audio file for duration and container tags.
pub async fn probe_audio(path: impl AsRef<Path>) -> MediaResult<AudioInfo> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MediaError::FileNotFound(path.to_path_buf()));
    }

    crate::command::check_ffprobe()?;

    let output = Command::new("ffprobe")
        .args(["-v", "quiet", "-print_format", "json", "-show_format"])
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        return Err(MediaError::ffprobe_failed(
            "FFprobe failed",
            Some(String::from_utf8_lossy(&output.stderr).to_string()),
        ));
    }

    let probe: FfprobeOutput = serde_json::from_slice(&output.stdout)?;

    let duration_secs = probe
        .format
        .duration
        .as_ref()
        .and_then(|d| d.parse::<f64>().ok())
        .ok_or_else(|| {
            MediaError::InvalidAudio(format!("no duration reported for {}", path.display()))
        })?;

    Ok(AudioInfo {
        duration_secs,
        album: lookup_tag(&probe.format.tags, "album"),
        artist: lookup_tag(&probe.format.tags, "artist"),
    })
}

/// Tag keys come back with inconsistent casing across containers
/// ("artist" vs "ARTIST"), so match case-insensitively.
fn lookup_tag(tags: &HashMap<String, String>, key: &str) -> Option<String> {
    tags.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_tag_case_insensitive() {
        let mut tags = HashMap::new();
        tags.insert("ARTIST".to_string(), "Narrator".to_string());
        tags.insert("album".to_string(), "Book One".to_string());

        assert_eq!(lookup_tag(&tags, "artist").as_deref(), Some("Narrator"));
        assert_eq!(lookup_tag(&tags, "album").as_deref(), Some("Book One"));
        assert_eq!(lookup_tag(&tags, "title"), None);
    }

    #[test]
    fn test_parse_ffprobe_output() {
        let json = r#"{
            "format": {
                "filename": "book.mp3",
                "duration": "3600.123456",
                "tags": {"artist": "Narrator", "album": "Book One"}
            }
        }"#;

        let probe: FfprobeOutput = serde_json::from_str(json).unwrap();
        let duration: f64 = probe.format.duration.as_ref().unwrap().parse().unwrap();
        assert!((duration - 3600.123456).abs() < 1e-6);
        assert_eq!(probe.format.tags.get("album").unwrap(), "Book One");
    }

    #[tokio::test]
    async fn test_probe_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.mp3");

        let err = probe_audio(&missing).await.unwrap_err();
        assert!(matches!(err, MediaError::FileNotFound(_)));
    }

    #[test]
    fn test_parse_ffprobe_output_no_tags() {
        let json = r#"{"format": {"duration": "12.0"}}"#;
        let probe: FfprobeOutput = serde_json::from_str(json).unwrap();
        assert!(probe.format.tags.is_empty());
    }
}
