// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation export.
//!
//! CSV is the primary output and carries only the segment columns. JSON
//! and YAML write the full records, descriptions included.

use crate::models::annotation::AnnotationRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// CSV columns, in output order.
pub const CSV_HEADER: [&str; 4] = ["video_id", "label", "start_time", "end_time"];

const CSV_LINE_BREAK: &str = "\r\n";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    /// Name shown in the save dialog filter.
    pub fn filter_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Yaml => "YAML",
        }
    }
}

/// Default export file name for a video, e.g. `clip.mp4_annotations.csv`.
pub fn default_file_name(video_id: &str, format: ExportFormat) -> String {
    format!("{}_annotations.{}", video_id, format.extension())
}

/// Quote a field when it contains a delimiter, quote, line break, or
/// leading/trailing space.
fn csv_escape(value: &str) -> String {
    let needs_quotes = value.contains([',', '"', '\n', '\r'])
        || value.starts_with(' ')
        || value.ends_with(' ');
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Build CSV text for the given records.
///
/// The header row is always present. Rows are separated by CRLF with no
/// line break after the last row.
pub fn build_csv(records: &[AnnotationRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for record in records {
        let row = [
            csv_escape(&record.video_id),
            csv_escape(&record.label),
            csv_escape(&record.start),
            csv_escape(&record.end),
        ];
        lines.push(row.join(","));
    }

    lines.join(CSV_LINE_BREAK)
}

/// Export annotations to CSV.
pub fn export_csv(records: &[AnnotationRecord], path: &Path) -> Result<()> {
    std::fs::write(path, build_csv(records))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export full annotation records to JSON.
pub fn export_json(records: &[AnnotationRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export full annotation records to YAML.
pub fn export_yaml(records: &[AnnotationRecord], path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(records)?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export in the given format.
pub fn export(records: &[AnnotationRecord], format: ExportFormat, path: &Path) -> Result<()> {
    match format {
        ExportFormat::Csv => export_csv(records, path),
        ExportFormat::Json => export_json(records, path),
        ExportFormat::Yaml => export_yaml(records, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<AnnotationRecord> {
        vec![
            AnnotationRecord::new("clip.mp4", "jump", "running jump", 10.0, 12.5),
            AnnotationRecord::new("clip.mp4", "land", "", 12.5, 13.0),
        ]
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = build_csv(&sample());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "video_id,label,start_time,end_time",
                "clip.mp4,jump,10.00,12.50",
                "clip.mp4,land,12.50,13.00",
            ]
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_csv_uses_crlf() {
        let csv = build_csv(&sample()[..1]);
        assert_eq!(csv, "video_id,label,start_time,end_time\r\nclip.mp4,jump,10.00,12.50");
    }

    #[test]
    fn test_csv_omits_description() {
        let csv = build_csv(&sample());
        assert!(!csv.contains("running jump"));
    }

    #[test]
    fn test_csv_empty_has_header_only() {
        assert_eq!(build_csv(&[]), "video_id,label,start_time,end_time");
    }

    #[test]
    fn test_csv_quotes_special_values() {
        let records = vec![
            AnnotationRecord::new("my, clip.mp4", "say \"hi\"", "", 0.0, 1.0),
            AnnotationRecord::new("clip.mp4", " padded", "", 0.0, 1.0),
            AnnotationRecord::new("clip.mp4", "two\nlines", "", 0.0, 1.0),
        ];
        let csv = build_csv(&records);
        assert!(csv.contains("\"my, clip.mp4\",\"say \"\"hi\"\"\",0.00,1.00"));
        assert!(csv.contains("clip.mp4,\" padded\",0.00,1.00"));
        assert!(csv.contains("clip.mp4,\"two\nlines\",0.00,1.00"));
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name("clip.mp4", ExportFormat::Csv), "clip.mp4_annotations.csv");
        assert_eq!(default_file_name("video1", ExportFormat::Yaml), "video1_annotations.yaml");
    }

    #[test]
    fn test_export_csv_writes_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(default_file_name("clip.mp4", ExportFormat::Csv));
        let records = sample();

        export(&records, ExportFormat::Csv, &path).expect("export csv");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, build_csv(&records));
        assert_eq!(written.lines().count(), records.len() + 1);

        // Exporting again yields the same file
        export(&records, ExportFormat::Csv, &path).expect("export csv again");
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), written);
    }

    #[test]
    fn test_export_json_keeps_description() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.json");

        export(&sample(), ExportFormat::Json, &path).expect("export json");
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read back")).expect("parse");
        assert_eq!(value[0]["description"], "running jump");
        assert_eq!(value[1]["start"], "12.50");
    }

    #[test]
    fn test_export_yaml() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.yaml");

        export(&sample(), ExportFormat::Yaml, &path).expect("export yaml");
        let yaml = std::fs::read_to_string(&path).expect("read back");
        assert!(yaml.contains("label: jump"));
        assert!(yaml.contains("description: running jump"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing").join("out.csv");
        assert!(export_csv(&sample(), &path).is_err());
    }
}
