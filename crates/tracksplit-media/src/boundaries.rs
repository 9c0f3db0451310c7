//! Chunk-boundary calculation.
//!
//! Converts the ordered silence events of one detection run into the
//! start offsets of the output tracks. Chunks start when silence ends
//! and end when silence starts; the ambiguous gap between two chunks is
//! split evenly between the track that is ending and the one beginning
//! (midpoint smoothing), so boundary precision is ±half the gap.

use crate::silence::SilenceEvent;

/// A detected non-silent span, in seconds. `end >= start`; intervals are
/// non-overlapping and ordered by start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkInterval {
    pub start: f64,
    pub end: f64,
}

/// Pair up silence events into non-silent chunk intervals.
///
/// `fallback_duration_secs` closes a trailing chunk when the events
/// themselves never reported how long the file is; callers pass the
/// probed duration so the result is always a real timestamp.
pub fn chunk_intervals(events: &[SilenceEvent], fallback_duration_secs: f64) -> Vec<ChunkInterval> {
    let mut starts: Vec<f64> = Vec::new();
    let mut ends: Vec<f64> = Vec::new();
    let mut reported_total: Option<f64> = None;

    for event in events {
        match *event {
            SilenceEvent::SilenceStart { secs } => {
                ends.push(secs);
                if starts.is_empty() {
                    // File began with non-silence.
                    starts.push(0.0);
                }
            }
            SilenceEvent::SilenceEnd { secs } => {
                starts.push(secs);
            }
            SilenceEvent::TotalDuration { secs } => {
                // Last one observed wins.
                reported_total = Some(secs);
            }
        }
    }

    if starts.is_empty() {
        // No silence found: the whole file is one chunk.
        starts.push(0.0);
    }

    if starts.len() > ends.len() {
        // File ended with non-silence.
        ends.push(reported_total.unwrap_or(fallback_duration_secs));
    }

    starts
        .into_iter()
        .zip(ends)
        .map(|(start, end)| ChunkInterval { start, end })
        .collect()
}

/// Compute the smoothed track start offsets for an event sequence.
///
/// The first chunk's boundary is its raw start; every later boundary is
/// pulled backward by half the silence gap separating it from the
/// previous chunk. The result is non-decreasing and never empty.
pub fn compute_boundaries(events: &[SilenceEvent], fallback_duration_secs: f64) -> Vec<f64> {
    let intervals = chunk_intervals(events, fallback_duration_secs);

    let mut boundaries = Vec::with_capacity(intervals.len());
    let mut prev_end: Option<f64> = None;

    for interval in &intervals {
        let boundary = match prev_end {
            Some(prev) => interval.start - (interval.start - prev) / 2.0,
            None => interval.start,
        };
        boundaries.push(boundary);
        prev_end = Some(interval.end);
    }

    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::silence::SilenceEvent::{SilenceEnd, SilenceStart, TotalDuration};

    #[test]
    fn test_no_events_single_track() {
        let boundaries = compute_boundaries(&[], 120.0);
        assert_eq!(boundaries, vec![0.0]);

        let intervals = chunk_intervals(&[], 120.0);
        assert_eq!(intervals, vec![ChunkInterval { start: 0.0, end: 120.0 }]);
    }

    #[test]
    fn test_single_gap_midpoint() {
        // One silence interval (2,4) inside a 10 second file. The gap is
        // two seconds wide, so the second boundary lands at its middle.
        let events = [SilenceStart { secs: 2.0 }, SilenceEnd { secs: 4.0 }];
        let boundaries = compute_boundaries(&events, 10.0);
        assert_eq!(boundaries, vec![0.0, 3.0]);
    }

    #[test]
    fn test_leading_silence_no_synthesized_start() {
        // Silence at the very beginning: the first chunk starts where
        // the first silence ends, and its boundary is left raw.
        let events = [
            SilenceEnd { secs: 5.0 },
            SilenceStart { secs: 20.0 },
            SilenceEnd { secs: 22.0 },
        ];
        let boundaries = compute_boundaries(&events, 30.0);
        assert_eq!(boundaries, vec![5.0, 21.0]);
    }

    #[test]
    fn test_trailing_chunk_closed_by_reported_total() {
        let events = [
            SilenceStart { secs: 10.0 },
            SilenceEnd { secs: 12.0 },
            TotalDuration { secs: 60.0 },
        ];
        let intervals = chunk_intervals(&events, 999.0);
        assert_eq!(
            intervals,
            vec![
                ChunkInterval { start: 0.0, end: 10.0 },
                ChunkInterval { start: 12.0, end: 60.0 },
            ]
        );
    }

    #[test]
    fn test_trailing_chunk_closed_by_fallback() {
        let events = [SilenceStart { secs: 10.0 }, SilenceEnd { secs: 12.0 }];
        let intervals = chunk_intervals(&events, 45.0);
        assert_eq!(intervals.last(), Some(&ChunkInterval { start: 12.0, end: 45.0 }));
    }

    #[test]
    fn test_last_total_duration_wins() {
        let events = [
            TotalDuration { secs: 5.0 },
            SilenceStart { secs: 10.0 },
            SilenceEnd { secs: 12.0 },
            TotalDuration { secs: 61.5 },
        ];
        let intervals = chunk_intervals(&events, 0.0);
        assert_eq!(intervals.last().map(|i| i.end), Some(61.5));
    }

    #[test]
    fn test_boundaries_non_decreasing() {
        let events = [
            SilenceStart { secs: 4.0 },
            SilenceEnd { secs: 6.0 },
            SilenceStart { secs: 6.5 },
            SilenceEnd { secs: 10.0 },
            SilenceStart { secs: 30.0 },
            SilenceEnd { secs: 37.0 },
        ];
        let boundaries = compute_boundaries(&events, 50.0);
        assert_eq!(boundaries.len(), 4);
        assert!(!boundaries.is_empty());
        for pair in boundaries.windows(2) {
            assert!(pair[1] >= pair[0], "boundaries must be non-decreasing");
        }
    }

    #[test]
    fn test_smoothing_spreads_gap_evenly() {
        let events = [
            SilenceStart { secs: 100.0 },
            SilenceEnd { secs: 106.0 },
            SilenceStart { secs: 200.0 },
            SilenceEnd { secs: 203.0 },
        ];
        let boundaries = compute_boundaries(&events, 300.0);
        // Second chunk starts at 106 after a 6s gap ending the first at
        // 100: boundary pulled back by 3. Third chunk's gap is 3s wide.
        assert_eq!(boundaries, vec![0.0, 103.0, 201.5]);
    }

    #[test]
    fn test_interval_invariant_end_not_before_start() {
        let events = [
            SilenceStart { secs: 7.0 },
            SilenceEnd { secs: 9.0 },
            SilenceStart { secs: 15.0 },
        ];
        for interval in chunk_intervals(&events, 20.0) {
            assert!(interval.end >= interval.start);
        }
    }
}
