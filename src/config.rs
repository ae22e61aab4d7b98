// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application defaults.
//!
//! Everything here is fixed at startup; nothing is read from or written
//! to disk.

use crate::models::session::PlaybackRate;

/// Startup configuration for the window and a fresh session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Frame rate used for frame stepping until the user changes it
    pub default_fps: f64,
    pub default_rate: PlaybackRate,
    /// Video id used in export file names before any file is loaded
    pub default_video_id: String,
    /// Extensions offered by the open dialog
    pub video_extensions: Vec<&'static str>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "VIDLABEL - Video Interval Labeling".to_string(),
            window_size: [1280.0, 720.0],
            min_window_size: [800.0, 600.0],
            default_fps: 30.0,
            default_rate: PlaybackRate::X1,
            default_video_id: "video1".to_string(),
            video_extensions: vec!["mp4", "mov", "mkv", "webm", "avi", "m4v", "ogv"],
        }
    }
}
