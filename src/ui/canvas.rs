// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video display area.
//!
//! Draws the current frame when a decoding backend provides one, and a
//! file/position placeholder otherwise. The status line at the bottom
//! reports the last action feedback.

use crate::models::session::{LoadedVideo, Session};
use crate::util::time::format_clock;

/// Everything the canvas needs to draw one frame.
pub struct CanvasView<'a> {
    pub texture: Option<&'a egui::TextureHandle>,
    pub frame_size: Option<(u32, u32)>,
    pub session: &'a Session,
    pub position: f64,
    pub status: Option<&'a str>,
}

/// Display the video area and status line.
pub fn show(ui: &mut egui::Ui, view: CanvasView<'_>) {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size() - egui::vec2(0.0, 24.0);

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size.max(egui::Vec2::ZERO));

        match (view.texture, view.frame_size, &view.session.video) {
            (Some(texture), Some(size), _) => draw_frame(ui, texture, size, view.position),
            (_, _, Some(video)) => draw_placeholder(ui, video, view.position),
            _ => draw_welcome(ui),
        }
    });

    // Status line
    ui.horizontal(|ui| {
        let session = view.session;
        ui.label(format!("Rate: {}", session.rate.label()));
        ui.separator();
        ui.label(format!("FPS: {}", session.fps));
        ui.separator();
        match &session.video {
            Some(video) => ui.label(video.id.as_str()),
            None => ui.label("No file loaded"),
        };
        if let Some(status) = view.status {
            ui.separator();
            ui.label(egui::RichText::new(status).weak());
        }
    });
}

/// Draw the decoded frame scaled to fit, with the position overlaid.
fn draw_frame(ui: &mut egui::Ui, texture: &egui::TextureHandle, size: (u32, u32), position: f64) {
    let (img_width, img_height) = size;
    if img_width == 0 || img_height == 0 {
        return;
    }

    let available = ui.available_size();
    let img_aspect = img_width as f32 / img_height as f32;
    let available_aspect = available.x / available.y;

    let (display_width, display_height) = if img_aspect > available_aspect {
        // Wider than the area - fit to width
        let width = available.x;
        (width, width / img_aspect)
    } else {
        let height = available.y;
        (height * img_aspect, height)
    };

    let x_offset = (available.x - display_width) / 2.0;
    let y_offset = (available.y - display_height) / 2.0;

    let image_rect = egui::Rect::from_min_size(
        ui.min_rect().min + egui::vec2(x_offset, y_offset),
        egui::vec2(display_width, display_height),
    );

    let painter = ui.painter();
    painter.image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    painter.text(
        image_rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        format_clock(position),
        egui::FontId::monospace(16.0),
        egui::Color32::WHITE,
    );
}

/// Clock-only playback: show which file is loaded and where the playhead is.
fn draw_placeholder(ui: &mut egui::Ui, video: &LoadedVideo, position: f64) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new(format_clock(position))
                    .monospace()
                    .size(48.0)
                    .color(egui::Color32::from_gray(220)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(&video.id)
                    .size(16.0)
                    .color(egui::Color32::from_gray(180)),
            );
            ui.label(
                egui::RichText::new("No decoder available; playback is time only")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}

/// Welcome message when no file is loaded.
fn draw_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("VIDLABEL")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.label(
                egui::RichText::new("Video Interval Labeling")
                    .size(14.0)
                    .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Open a video to begin labeling")
                    .color(egui::Color32::from_gray(180)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("File → Open Video...")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}
