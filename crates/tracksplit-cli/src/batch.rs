//! Batch orchestration across input files.
//!
//! Selects the matching files, fixes a deterministic processing order,
//! and threads the global track counter from one file into the next.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::SplitResult;
use crate::pipeline::{process_file, RunOptions};

/// Summary of a completed batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub tracks_produced: usize,
}

/// Filter to `.mp3` files and sort lexicographically.
pub fn select_candidates(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut matching: Vec<PathBuf> = paths
        .into_iter()
        .filter(|p| has_mp3_extension(p))
        .collect();
    matching.sort();
    matching
}

fn has_mp3_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "mp3")
}

/// List candidate files from an explicit list or the current directory.
async fn collect_candidates(files: Option<&[PathBuf]>) -> SplitResult<Vec<PathBuf>> {
    match files {
        Some(list) if !list.is_empty() => Ok(list.to_vec()),
        _ => {
            let mut entries = tokio::fs::read_dir(".").await?;
            let mut paths = Vec::new();
            while let Some(entry) = entries.next_entry().await? {
                paths.push(PathBuf::from(entry.file_name()));
            }
            Ok(paths)
        }
    }
}

/// Process every matching file in order, threading the track counter.
pub async fn run_batch(
    files: Option<&[PathBuf]>,
    start_number: u32,
    options: &RunOptions,
) -> SplitResult<BatchSummary> {
    let candidates = collect_candidates(files).await?;
    let matching = select_candidates(candidates);

    info!(
        start_number,
        min_silence_secs = options.config.min_silence_secs,
        threshold_db = options.config.noise_threshold_db,
        split = options.split,
        template = options.name_template.as_deref().unwrap_or("{number}_{filename}"),
        files = matching.len(),
        "Starting run"
    );

    // Decided once for the whole batch: per-source subdirectories are
    // only needed when a multi-file split could collide on names.
    let use_subdir = options.split && matching.len() > 1;

    let mut counter = start_number;
    for path in &matching {
        counter = process_file(path, counter, use_subdir, options).await?;
    }

    let summary = BatchSummary {
        files_processed: matching.len(),
        tracks_produced: (counter - start_number) as usize,
    };

    info!(
        files = summary.files_processed,
        tracks = summary.tracks_produced,
        "Run complete"
    );

    Ok(summary)
}
