// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Wall-clock playhead.
//!
//! Keeps time for a media file without decoding it: the position advances
//! with real time multiplied by the playback rate while playing. This is
//! the default backend when no decoder feature is enabled.

use super::Player;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct ClockPlayer {
    /// Position at the moment `started` was taken (or the paused position)
    base: f64,
    rate: f64,
    /// Set while playing
    started: Option<Instant>,
    duration: Option<f64>,
}

impl Default for ClockPlayer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ClockPlayer {
    /// Create a paused playhead at zero.
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            base: 0.0,
            rate: 1.0,
            started: None,
            duration: duration.filter(|d| d.is_finite() && *d > 0.0),
        }
    }

    fn clamp(&self, secs: f64) -> f64 {
        let secs = secs.max(0.0);
        match self.duration {
            Some(duration) => secs.min(duration),
            None => secs,
        }
    }

    pub(crate) fn position_at(&self, now: Instant) -> f64 {
        let mut pos = self.base;
        if let Some(started) = self.started {
            pos += now.saturating_duration_since(started).as_secs_f64() * self.rate;
        }
        self.clamp(pos)
    }

    pub(crate) fn seek_at(&mut self, secs: f64, now: Instant) {
        self.base = self.clamp(secs);
        if self.started.is_some() {
            self.started = Some(now);
        }
    }

    pub(crate) fn set_rate_at(&mut self, rate: f64, now: Instant) {
        // Rebase so the new rate only applies from here on
        self.base = self.position_at(now);
        if self.started.is_some() {
            self.started = Some(now);
        }
        self.rate = rate;
    }

    pub(crate) fn set_playing_at(&mut self, playing: bool, now: Instant) {
        match (playing, self.started) {
            (true, None) => {
                if self.at_end(self.base) {
                    self.base = 0.0;
                }
                self.started = Some(now);
            }
            (false, Some(_)) => {
                self.base = self.position_at(now);
                self.started = None;
            }
            _ => {}
        }
    }

    pub(crate) fn is_playing_at(&self, now: Instant) -> bool {
        self.started.is_some() && !self.at_end(self.position_at(now))
    }

    fn at_end(&self, pos: f64) -> bool {
        self.duration.is_some_and(|d| pos >= d)
    }
}

impl Player for ClockPlayer {
    fn position(&self) -> f64 {
        self.position_at(Instant::now())
    }

    fn seek(&mut self, secs: f64) {
        self.seek_at(secs, Instant::now());
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn set_rate(&mut self, rate: f64) {
        self.set_rate_at(rate, Instant::now());
    }

    fn is_playing(&self) -> bool {
        self.is_playing_at(Instant::now())
    }

    fn set_playing(&mut self, playing: bool) {
        self.set_playing_at(playing, Instant::now());
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_paused_position_does_not_advance() {
        let t0 = Instant::now();
        let mut player = ClockPlayer::new(None);
        player.seek_at(3.0, t0);
        assert_eq!(player.position_at(t0 + Duration::from_secs(5)), 3.0);
    }

    #[test]
    fn test_playing_advances_with_rate() {
        let t0 = Instant::now();
        let mut player = ClockPlayer::new(None);
        player.set_rate_at(2.0, t0);
        player.set_playing_at(true, t0);
        let pos = player.position_at(t0 + Duration::from_millis(1500));
        assert!((pos - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_change_rebases() {
        let t0 = Instant::now();
        let mut player = ClockPlayer::new(None);
        player.set_playing_at(true, t0);
        let t1 = t0 + Duration::from_secs(2);
        player.set_rate_at(4.0, t1);
        let pos = player.position_at(t1 + Duration::from_secs(1));
        assert!((pos - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_seek_clamps_to_bounds() {
        let t0 = Instant::now();
        let mut player = ClockPlayer::new(Some(10.0));
        player.seek_at(-4.0, t0);
        assert_eq!(player.position_at(t0), 0.0);
        player.seek_at(25.0, t0);
        assert_eq!(player.position_at(t0), 10.0);
    }

    #[test]
    fn test_stops_at_end_and_restarts_from_zero() {
        let t0 = Instant::now();
        let mut player = ClockPlayer::new(Some(2.0));
        player.set_playing_at(true, t0);
        let t1 = t0 + Duration::from_secs(3);
        assert_eq!(player.position_at(t1), 2.0);
        assert!(!player.is_playing_at(t1));

        player.set_playing_at(false, t1);
        player.set_playing_at(true, t1);
        assert_eq!(player.position_at(t1), 0.0);
    }
}
