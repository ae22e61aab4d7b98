// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! OpenCV decoding backend (feature `video-opencv`).
//!
//! Timing comes from a [`ClockPlayer`]; this backend adds container
//! metadata and decodes the frame under the playhead for display.

use super::{clock::ClockPlayer, Frame, Player};
use anyhow::{bail, Context, Result};
use opencv::{core::Mat, imgproc, prelude::*, videoio};
use std::path::Path;

pub struct OpenCvPlayer {
    capture: videoio::VideoCapture,
    clock: ClockPlayer,
    fps: Option<f64>,
    /// Index of the frame most recently handed out
    last_frame: Option<i64>,
}

impl OpenCvPlayer {
    /// Open a video file and read its frame rate and length.
    pub fn open(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))?;
        let capture = videoio::VideoCapture::from_file(path_str, videoio::CAP_ANY)
            .with_context(|| format!("Failed to open video: {}", path.display()))?;
        if !capture.is_opened()? {
            bail!("No decoder could open {}", path.display());
        }

        let fps = capture.get(videoio::CAP_PROP_FPS)?;
        let frame_count = capture.get(videoio::CAP_PROP_FRAME_COUNT)?;
        let fps = (fps.is_finite() && fps > 0.0).then_some(fps);
        let duration = fps
            .filter(|_| frame_count > 0.0)
            .map(|fps| frame_count / fps);

        log::info!(
            "Opened {} with OpenCV (fps: {:?}, duration: {:?})",
            path.display(),
            fps,
            duration
        );

        Ok(Self {
            capture,
            clock: ClockPlayer::new(duration),
            fps,
            last_frame: None,
        })
    }

    fn frame_index(&self) -> i64 {
        let fps = self.fps.unwrap_or(30.0);
        (self.clock.position() * fps).floor() as i64
    }

    fn decode(&mut self, index: i64) -> Result<Option<Frame>> {
        // Sequential reads are cheap; anything else needs a seek
        if self.last_frame.map_or(true, |last| index != last + 1) {
            self.capture.set(videoio::CAP_PROP_POS_FRAMES, index as f64)?;
        }

        let mut bgr = Mat::default();
        if !self.capture.read(&mut bgr)? || bgr.rows() == 0 {
            return Ok(None);
        }

        let mut rgba = Mat::default();
        imgproc::cvt_color(&bgr, &mut rgba, imgproc::COLOR_BGR2RGBA, 0)?;

        Ok(Some(Frame {
            width: rgba.cols() as u32,
            height: rgba.rows() as u32,
            pixels: rgba.data_bytes()?.to_vec(),
        }))
    }
}

impl Player for OpenCvPlayer {
    fn position(&self) -> f64 {
        self.clock.position()
    }

    fn seek(&mut self, secs: f64) {
        self.clock.seek(secs);
    }

    fn rate(&self) -> f64 {
        self.clock.rate()
    }

    fn set_rate(&mut self, rate: f64) {
        self.clock.set_rate(rate);
    }

    fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    fn set_playing(&mut self, playing: bool) {
        self.clock.set_playing(playing);
    }

    fn duration(&self) -> Option<f64> {
        self.clock.duration()
    }

    fn native_fps(&self) -> Option<f64> {
        self.fps
    }

    fn poll_frame(&mut self) -> Option<Frame> {
        let index = self.frame_index();
        if self.last_frame == Some(index) {
            return None;
        }

        match self.decode(index) {
            Ok(frame) => {
                self.last_frame = Some(index);
                frame
            }
            Err(e) => {
                log::warn!("Failed to decode frame {}: {}", index, e);
                self.last_frame = Some(index);
                None
            }
        }
    }
}
