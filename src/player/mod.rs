// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback backends.
//!
//! The recorder and playback controls only ever talk to a [`Player`], so
//! the session logic can run against a decoder, a plain clock, or a test
//! double without knowing which.

pub mod clock;
#[cfg(feature = "video-opencv")]
pub mod opencv;

/// Decoded frame ready for upload as a texture (tightly packed RGBA8).
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Minimal capability interface over a media playback handle.
pub trait Player {
    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Move the playback position. Backends clamp to their own bounds.
    fn seek(&mut self, secs: f64);

    /// Current speed multiplier.
    fn rate(&self) -> f64;

    fn set_rate(&mut self, rate: f64);

    fn is_playing(&self) -> bool;

    fn set_playing(&mut self, playing: bool);

    /// Total length in seconds, if the backend knows it.
    fn duration(&self) -> Option<f64> {
        None
    }

    /// Frame rate reported by the container, if any.
    fn native_fps(&self) -> Option<f64> {
        None
    }

    /// Frame for the current position when it changed since the last call.
    fn poll_frame(&mut self) -> Option<Frame> {
        None
    }
}

/// Scriptable player for exercising session logic without media.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FakePlayer {
    pub position: f64,
    pub rate: f64,
    pub playing: bool,
    pub seeks: usize,
}

#[cfg(test)]
impl FakePlayer {
    pub fn at(position: f64) -> Self {
        Self {
            position,
            rate: 1.0,
            ..Default::default()
        }
    }
}

#[cfg(test)]
impl Player for FakePlayer {
    fn position(&self) -> f64 {
        self.position
    }

    fn seek(&mut self, secs: f64) {
        self.position = secs;
        self.seeks += 1;
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }
}
