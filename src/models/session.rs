// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation session state.
//!
//! The session owns everything the user edits during a run: the loaded
//! video, playback settings, the pending label start and the list of
//! closed annotation records. User actions are applied through
//! [`Session::apply`], which either changes state or reports why the
//! action was ignored and leaves everything untouched.

use super::annotation::AnnotationRecord;
use crate::config::AppConfig;
use crate::player::Player;
use crate::util::time::parse_seconds;
use std::fmt;
use std::path::PathBuf;

/// Supported playback speed multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackRate {
    Half,
    X1,
    X2,
    X4,
    X8,
}

impl PlaybackRate {
    pub const ALL: [PlaybackRate; 5] = [
        PlaybackRate::Half,
        PlaybackRate::X1,
        PlaybackRate::X2,
        PlaybackRate::X4,
        PlaybackRate::X8,
    ];

    pub fn as_f64(self) -> f64 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::X1 => 1.0,
            PlaybackRate::X2 => 2.0,
            PlaybackRate::X4 => 4.0,
            PlaybackRate::X8 => 8.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackRate::Half => "0.5x",
            PlaybackRate::X1 => "1x",
            PlaybackRate::X2 => "2x",
            PlaybackRate::X4 => "4x",
            PlaybackRate::X8 => "8x",
        }
    }
}

/// A video file the session is annotating.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedVideo {
    /// File name, used as the video id in records and export names
    pub id: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Backward,
    Forward,
}

/// A user action against the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    SetRate(PlaybackRate),
    StepFrame(StepDirection),
    /// Seek to the time typed into the jump field
    JumpToTime,
    /// Seek to an absolute position (timeline scrubbing)
    Seek(f64),
    TogglePlayback,
    StartLabel,
    EndLabel,
}

/// Why an action had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    NoVideo,
    NoPendingStart,
    EmptyLabel,
    InvalidJumpTime,
    InvalidFps,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Ignored::NoVideo => "no video loaded",
            Ignored::NoPendingStart => "no label start marked",
            Ignored::EmptyLabel => "label is empty",
            Ignored::InvalidJumpTime => "jump time is not a number",
            Ignored::InvalidFps => "FPS must be greater than zero",
        };
        f.write_str(reason)
    }
}

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(Ignored),
}

/// Complete state of one annotation session.
#[derive(Debug, Clone)]
pub struct Session {
    pub video: Option<LoadedVideo>,
    /// Id used for new records and export file names
    pub video_id: String,
    pub rate: PlaybackRate,
    pub fps: f64,
    /// Position captured by the last start-label action
    pub pending_start: Option<f64>,
    pub label: String,
    pub description: String,
    /// Raw text of the jump-to-time field
    pub jump_input: String,
    records: Vec<AnnotationRecord>,
}

impl Session {
    /// Create an empty session using the configured defaults.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            video: None,
            video_id: config.default_video_id.clone(),
            rate: config.default_rate,
            fps: config.default_fps,
            pending_start: None,
            label: String::new(),
            description: String::new(),
            jump_input: String::new(),
            records: Vec::new(),
        }
    }

    /// Closed annotation records in creation order.
    pub fn records(&self) -> &[AnnotationRecord] {
        &self.records
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    /// Switch the session to a newly opened video.
    ///
    /// The player gets the session's playback rate, and the fps field is
    /// pre-filled from the container when the backend reports one. A
    /// pending start from the previous video is dropped; existing records
    /// are kept.
    pub fn load_video(&mut self, video: LoadedVideo, player: &mut dyn Player) {
        player.set_rate(self.rate.as_f64());
        if let Some(fps) = player.native_fps().filter(|fps| *fps > 0.0) {
            self.fps = fps;
        }

        log::info!("Annotating {} ({})", video.id, video.path.display());
        self.video_id = video.id.clone();
        self.video = Some(video);
        self.pending_start = None;
    }

    /// Apply a user action, driving the player where needed.
    pub fn apply(&mut self, action: Action, player: &mut dyn Player) -> Outcome {
        let result = match action {
            Action::SetRate(rate) => {
                self.set_rate(rate, player);
                Ok(())
            }
            Action::StepFrame(direction) => self.step_frame(direction, player),
            Action::JumpToTime => self.jump_to_time(player),
            Action::Seek(secs) => self.seek(secs, player),
            Action::TogglePlayback => self.toggle_playback(player),
            Action::StartLabel => self.start_label(player),
            Action::EndLabel => self.end_label(player),
        };

        match result {
            Ok(()) => Outcome::Applied,
            Err(reason) => {
                log::debug!("Ignored {:?}: {}", action, reason);
                Outcome::Ignored(reason)
            }
        }
    }

    fn require_video(&self) -> Result<(), Ignored> {
        if self.video.is_some() {
            Ok(())
        } else {
            Err(Ignored::NoVideo)
        }
    }

    fn set_rate(&mut self, rate: PlaybackRate, player: &mut dyn Player) {
        self.rate = rate;
        if self.video.is_some() {
            player.set_rate(rate.as_f64());
        }
    }

    fn step_frame(&self, direction: StepDirection, player: &mut dyn Player) -> Result<(), Ignored> {
        self.require_video()?;
        if self.fps.is_nan() || self.fps <= 0.0 {
            return Err(Ignored::InvalidFps);
        }

        let delta = 1.0 / self.fps;
        let target = match direction {
            StepDirection::Backward => (player.position() - delta).max(0.0),
            StepDirection::Forward => player.position() + delta,
        };
        player.seek(target);
        Ok(())
    }

    fn jump_to_time(&self, player: &mut dyn Player) -> Result<(), Ignored> {
        self.require_video()?;
        let secs = parse_seconds(&self.jump_input).ok_or(Ignored::InvalidJumpTime)?;
        player.seek(secs);
        Ok(())
    }

    fn seek(&self, secs: f64, player: &mut dyn Player) -> Result<(), Ignored> {
        self.require_video()?;
        player.seek(secs);
        Ok(())
    }

    fn toggle_playback(&self, player: &mut dyn Player) -> Result<(), Ignored> {
        self.require_video()?;
        let playing = player.is_playing();
        player.set_playing(!playing);
        Ok(())
    }

    fn start_label(&mut self, player: &dyn Player) -> Result<(), Ignored> {
        self.require_video()?;
        self.pending_start = Some(player.position());
        Ok(())
    }

    fn end_label(&mut self, player: &dyn Player) -> Result<(), Ignored> {
        self.require_video()?;
        let start = self.pending_start.ok_or(Ignored::NoPendingStart)?;
        if self.label.is_empty() {
            return Err(Ignored::EmptyLabel);
        }

        let record = AnnotationRecord::new(
            self.video_id.clone(),
            self.label.clone(),
            self.description.clone(),
            start,
            player.position(),
        );
        log::info!("Recorded {}, total: {}", record.summary(), self.records.len() + 1);
        self.records.push(record);
        self.pending_start = None;
        Ok(())
    }
}
