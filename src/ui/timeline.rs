// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video timeline scrubber control.
//!
//! Play/pause, the current position and, when the backend knows the
//! length of the video, a scrubber for seeking.

use crate::models::session::Action;
use crate::player::Player;
use crate::util::time::format_clock;

/// Display the timeline. Returns the action the user triggered.
pub fn show(ui: &mut egui::Ui, player: &dyn Player, has_video: bool) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        let play_text = if player.is_playing() { "⏸ Pause" } else { "▶ Play" };
        if ui
            .add_enabled(has_video, egui::Button::new(play_text))
            .on_hover_text("Space")
            .clicked()
        {
            action = Some(Action::TogglePlayback);
        }

        let position = player.position();
        match player.duration() {
            Some(duration) => {
                ui.label(format!("{} / {}", format_clock(position), format_clock(duration)));

                let mut scrub = position;
                ui.spacing_mut().slider_width = (ui.available_width() - 16.0).max(100.0);
                let response = ui.add_enabled(
                    has_video,
                    egui::Slider::new(&mut scrub, 0.0..=duration).show_value(false),
                );
                if response.changed() {
                    action = Some(Action::Seek(scrub));
                }
            }
            None => {
                ui.label(format!("{} ({:.3}s)", format_clock(position), position));
            }
        }
    });

    action
}
