//! Per-file track segmentation pipeline.
//!
//! Turns one input file into an ordered sequence of track descriptors,
//! then either exports each track or prints a report line per track.
//! The track counter is threaded through as a value: each call takes the
//! starting number and returns the next unused one.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use tracksplit_media::{
    compute_boundaries, detect_silence, export_track, probe_audio, EncodingConfig, SplitConfig,
    TrackTags,
};

use crate::error::SplitResult;

/// Settings shared by every file in a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Export tracks when true; print markers only when false.
    pub split: bool,
    /// Naming template with a `$number` placeholder.
    pub name_template: Option<String>,
    /// Silence detection parameters.
    pub config: SplitConfig,
    /// Export encoding parameters.
    pub encoding: EncodingConfig,
}

/// One output track: its global number, rendered name, and span.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackDescriptor {
    pub number: u32,
    pub name: String,
    pub start_secs: f64,
    pub end_secs: f64,
}

/// Render a track name from the template, or fall back to
/// `{number}_{stem}` when no template was given.
pub fn render_track_name(template: Option<&str>, number: u32, stem: &str) -> String {
    match template {
        Some(tpl) => tpl.replace("$number", &number.to_string()),
        None => format!("{}_{}", number, stem),
    }
}

/// Build the track descriptors for one file.
///
/// Track `k` spans `[boundaries[k], boundaries[k+1])`; the final track
/// runs to `total_secs`, the decoder-accurate duration from the probe.
pub fn build_descriptors(
    boundaries: &[f64],
    total_secs: f64,
    start_number: u32,
    template: Option<&str>,
    stem: &str,
) -> Vec<TrackDescriptor> {
    boundaries
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let number = start_number + i as u32;
            let end = boundaries.get(i + 1).copied().unwrap_or(total_secs);
            TrackDescriptor {
                number,
                name: render_track_name(template, number, stem),
                start_secs: start,
                end_secs: end,
            }
        })
        .collect()
}

/// Round to millisecond precision.
fn round_ms(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

/// Format one report-mode line: start, end, name, tab-separated, times
/// at millisecond precision.
pub fn report_line(track: &TrackDescriptor) -> String {
    format!(
        "{:.3}\t{:.3}\t{}",
        round_ms(track.start_secs),
        round_ms(track.end_secs),
        track.name
    )
}

/// Per-source output directory used when a multi-file split would
/// otherwise collide: `<stem>_out` next to the source file.
pub fn output_dir_for(source: &Path) -> PathBuf {
    let mut os: OsString = source.with_extension("").into_os_string();
    os.push("_out");
    PathBuf::from(os)
}

/// Destination path for one exported track.
pub fn track_output_path(source: &Path, use_subdir: bool, name: &str) -> PathBuf {
    let file = format!("{}.mp3", name);
    if use_subdir {
        output_dir_for(source).join(file)
    } else {
        match source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(file),
            _ => PathBuf::from(file),
        }
    }
}

/// Process one input file: probe it, detect silence, compute boundaries,
/// then export tracks or print the marker report.
///
/// Returns the next unused track number so the caller can continue
/// numbering into the next file.
pub async fn process_file(
    source: &Path,
    start_number: u32,
    use_subdir: bool,
    options: &RunOptions,
) -> SplitResult<u32> {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let audio = probe_audio(source).await?;
    let events = detect_silence(source, &options.config).await?;
    let boundaries = compute_boundaries(&events, audio.duration_secs);

    let tracks = build_descriptors(
        &boundaries,
        audio.duration_secs,
        start_number,
        options.name_template.as_deref(),
        &stem,
    );

    debug!(
        path = %source.display(),
        tracks = tracks.len(),
        "Computed track boundaries"
    );

    if options.split && use_subdir {
        let dir = output_dir_for(source);
        if !dir.exists() {
            tokio::fs::create_dir_all(&dir).await?;
        }
    }

    for track in &tracks {
        if options.split {
            let dest = track_output_path(source, use_subdir, &track.name);
            let tags = TrackTags::new(audio.artist.as_deref(), audio.album.as_deref(), &track.name);
            export_track(
                source,
                &dest,
                track.start_secs,
                track.end_secs,
                &tags,
                &options.encoding,
            )
            .await?;
        } else {
            println!("{}", report_line(track));
        }
    }

    info!(
        path = %source.display(),
        tracks = tracks.len(),
        "File processed"
    );

    Ok(start_number + tracks.len() as u32)
}
