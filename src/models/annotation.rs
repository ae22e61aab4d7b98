// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the labeled time segment produced by the recorder
//! and the fixed-precision time formatting used for its timestamps.

use serde::Serialize;

/// A labeled time segment of a video.
///
/// Timestamps are stored already formatted with two fraction digits so
/// that the on-screen list and every export agree character for character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationRecord {
    pub video_id: String,
    pub label: String,
    pub description: String,
    pub start: String,
    pub end: String,
}

impl AnnotationRecord {
    /// Create a record from raw start/end positions in seconds.
    pub fn new(
        video_id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        start_secs: f64,
        end_secs: f64,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            label: label.into(),
            description: description.into(),
            start: format_seconds(start_secs),
            end: format_seconds(end_secs),
        }
    }

    /// Short one-line summary, e.g. `jump (10.00s - 12.50s)`.
    pub fn summary(&self) -> String {
        format!("{} ({}s - {}s)", self.label, self.start, self.end)
    }
}

/// Format seconds with exactly two fraction digits.
///
/// Exact ties at the third digit round away from zero (`0.125` becomes
/// `"0.13"`), everything else rounds to the nearest representable value.
pub fn format_seconds(secs: f64) -> String {
    // Only multiples of 1/8 with an odd numerator are exact binary ties
    // at two decimal places; `{:.2}` would round those to even.
    let eighths = secs.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        // A tie times 100 is exact (n * 12.5), so ceil gives the rounded-up value
        let hundredths = (secs.abs() * 100.0).ceil() as u64;
        let sign = if secs < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100);
    }
    format!("{:.2}", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_integers() {
        assert_eq!(format_seconds(5.0), "5.00");
        assert_eq!(format_seconds(0.0), "0.00");
        assert_eq!(format_seconds(12.5), "12.50");
    }

    #[test]
    fn test_format_rounds_to_two_digits() {
        assert_eq!(format_seconds(10.004), "10.00");
        assert_eq!(format_seconds(10.006), "10.01");
        assert_eq!(format_seconds(1.0 / 30.0), "0.03");
    }

    #[test]
    fn test_format_exact_ties_round_up() {
        assert_eq!(format_seconds(0.125), "0.13");
        assert_eq!(format_seconds(0.375), "0.38");
        assert_eq!(format_seconds(2.625), "2.63");
        assert_eq!(format_seconds(7.875), "7.88");
    }

    #[test]
    fn test_format_ties_at_large_positions() {
        assert_eq!(format_seconds(16777216.125), "16777216.13");
        assert_eq!(format_seconds(68719476736.875), "68719476736.88");
        assert_eq!(format_seconds(-2.625), "-2.63");
    }

    #[test]
    fn test_record_formats_times() {
        let record = AnnotationRecord::new("clip.mp4", "jump", "running jump", 10.0, 12.5);
        assert_eq!(record.start, "10.00");
        assert_eq!(record.end, "12.50");
        assert_eq!(record.summary(), "jump (10.00s - 12.50s)");
    }
}
