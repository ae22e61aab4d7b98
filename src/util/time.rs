// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Time parsing and display helpers.

/// Parse user input as seconds.
///
/// Leading whitespace is skipped and the longest numeric prefix wins, so
/// `"12abc"` reads as `12.0`. Returns `None` when no prefix is a finite
/// number.
pub fn parse_seconds(input: &str) -> Option<f64> {
    let input = input.trim_start();

    // The longest prefix that parses decides; an overflow to infinity (or
    // "inf"/"NaN", which `f64::from_str` also accepts) is not retried shorter.
    let mut ends: Vec<usize> = input.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
    ends.reverse();
    ends.into_iter()
        .find_map(|end| input[..end].parse::<f64>().ok())
        .filter(|secs| secs.is_finite())
}

/// Format seconds as `m:ss.cc` (or `h:mm:ss.cc` past an hour).
pub fn format_clock(secs: f64) -> String {
    let centis = (secs.max(0.0) * 100.0).round() as u64;
    let (hours, rem) = (centis / 360_000, centis % 360_000);
    let (minutes, rem) = (rem / 6_000, rem % 6_000);
    let (seconds, centis) = (rem / 100, rem % 100);

    if hours > 0 {
        format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
    } else {
        format!("{}:{:02}.{:02}", minutes, seconds, centis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_seconds("12.5"), Some(12.5));
        assert_eq!(parse_seconds("  3"), Some(3.0));
        assert_eq!(parse_seconds(".5"), Some(0.5));
        assert_eq!(parse_seconds("1e2"), Some(100.0));
    }

    #[test]
    fn test_parse_takes_numeric_prefix() {
        assert_eq!(parse_seconds("12abc"), Some(12.0));
        assert_eq!(parse_seconds("4.25s"), Some(4.25));
        assert_eq!(parse_seconds("1e"), Some(1.0));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_seconds("abc"), None);
        assert_eq!(parse_seconds(""), None);
        assert_eq!(parse_seconds("   "), None);
        assert_eq!(parse_seconds("NaN"), None);
        assert_eq!(parse_seconds("inf"), None);
        assert_eq!(parse_seconds("infinity"), None);
    }

    #[test]
    fn test_parse_overflow_is_not_shortened() {
        assert_eq!(parse_seconds("1e400"), None);
        assert_eq!(parse_seconds("-1e400"), None);
        assert_eq!(parse_seconds("1e400abc"), None);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "0:00.00");
        assert_eq!(format_clock(75.5), "1:15.50");
        assert_eq!(format_clock(3725.25), "1:02:05.25");
    }
}
