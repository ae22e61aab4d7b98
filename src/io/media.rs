// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video file loading.
//!
//! This module turns a user-selected file into a [`LoadedVideo`] and a
//! playback backend. Opening can be slow with a real decoder, so the app
//! does it on a background thread via [`spawn_open`].

use crate::models::session::LoadedVideo;
use crate::player::Player;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

/// A video ready to annotate.
pub struct OpenedMedia {
    pub video: LoadedVideo,
    pub player: Box<dyn Player + Send>,
}

/// Video id for a file: its name, falling back to the whole path.
pub fn video_id_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Open a video file and create its playback backend.
pub fn open_video(path: &Path) -> Result<OpenedMedia> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    if !metadata.is_file() {
        bail!("Not a file: {}", path.display());
    }

    let player = open_player(path)?;
    Ok(OpenedMedia {
        video: LoadedVideo {
            id: video_id_for(path),
            path: path.to_path_buf(),
        },
        player,
    })
}

#[cfg(feature = "video-opencv")]
fn open_player(path: &Path) -> Result<Box<dyn Player + Send>> {
    Ok(Box::new(crate::player::opencv::OpenCvPlayer::open(path)?))
}

#[cfg(not(feature = "video-opencv"))]
fn open_player(path: &Path) -> Result<Box<dyn Player + Send>> {
    log::debug!("No decoder compiled in, using clock playback for {}", path.display());
    Ok(Box::new(crate::player::clock::ClockPlayer::new(None)))
}

/// Open a video on a background thread.
pub fn spawn_open(path: PathBuf) -> Receiver<Result<OpenedMedia, String>> {
    let (sender, receiver) = channel();

    std::thread::spawn(move || {
        let result = open_video(&path).map_err(|e| format!("Failed to open video: {:#}", e));
        if let Ok(ref media) = result {
            log::info!("Opened video: {}", media.video.path.display());
        }
        let _ = sender.send(result);
    });

    receiver
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_id_is_file_name() {
        assert_eq!(video_id_for(Path::new("/data/clips/run_01.mp4")), "run_01.mp4");
        assert_eq!(video_id_for(Path::new("take.mov")), "take.mov");
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(open_video(&dir.path().join("nope.mp4")).is_err());
        assert!(open_video(dir.path()).is_err());
    }

    #[cfg(not(feature = "video-opencv"))]
    #[test]
    fn test_spawn_open_delivers_clock_player() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"not really a video").expect("write file");

        let media = spawn_open(path.clone())
            .recv()
            .expect("loader result")
            .expect("open succeeds");
        assert_eq!(media.video.id, "clip.mp4");
        assert_eq!(media.video.path, path);
        assert_eq!(media.player.position(), 0.0);
        assert!(media.player.duration().is_none());
    }
}
