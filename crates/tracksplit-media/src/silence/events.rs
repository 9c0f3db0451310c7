//! Diagnostic-line parsing for silencedetect output.

use regex::Regex;
use std::sync::LazyLock;

static SILENCE_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" silence_start: (?P<start>[0-9]+\.?[0-9]*)$").unwrap());

// Trailing space matters: silence_end lines continue with the gap duration.
static SILENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" silence_end: (?P<end>[0-9]+\.?[0-9]*) ").unwrap());

static TOTAL_DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"size=[^ ]+ time=(?P<hours>[0-9]{2}):(?P<minutes>[0-9]{2}):(?P<seconds>[0-9.]{5}) bitrate=",
    )
    .unwrap()
});

/// One structured event from a silencedetect run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SilenceEvent {
    /// A silence interval began at this offset.
    SilenceStart { secs: f64 },
    /// A silence interval ended at this offset.
    SilenceEnd { secs: f64 },
    /// Progress marker carrying how much input has been decoded so far.
    /// The last one observed reflects the total decoded duration.
    TotalDuration { secs: f64 },
}

/// Parse the full diagnostic text of one silencedetect run.
///
/// Each line yields at most one event; lines matching none of the known
/// shapes are skipped without error. Input line order is preserved.
pub fn parse_diagnostics(text: &str) -> Vec<SilenceEvent> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<SilenceEvent> {
    if let Some(caps) = SILENCE_START_RE.captures(line) {
        let secs = caps["start"].parse().ok()?;
        return Some(SilenceEvent::SilenceStart { secs });
    }
    if let Some(caps) = SILENCE_END_RE.captures(line) {
        let secs = caps["end"].parse().ok()?;
        return Some(SilenceEvent::SilenceEnd { secs });
    }
    if let Some(caps) = TOTAL_DURATION_RE.captures(line) {
        let hours: f64 = caps["hours"].parse().ok()?;
        let minutes: f64 = caps["minutes"].parse().ok()?;
        let seconds: f64 = caps["seconds"].parse().ok()?;
        return Some(SilenceEvent::TotalDuration {
            secs: hours * 3600.0 + minutes * 60.0 + seconds,
        });
    }
    None
}
