// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback toolbar.
//!
//! Rate selection, frame rate entry, frame stepping and jump-to-time.

use crate::models::session::{Action, PlaybackRate, Session, StepDirection};

/// Display the playback toolbar. Returns the action the user triggered.
pub fn show(ui: &mut egui::Ui, session: &mut Session) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Playback Rate:");
        for rate in PlaybackRate::ALL {
            if ui.selectable_label(session.rate == rate, rate.label()).clicked() {
                action = Some(Action::SetRate(rate));
            }
        }

        ui.separator();

        ui.label("FPS:");
        ui.add(
            egui::DragValue::new(&mut session.fps)
                .speed(0.1)
                .max_decimals(3),
        );
        if ui.button("⏮ Last Frame").clicked() {
            action = Some(Action::StepFrame(StepDirection::Backward));
        }
        if ui.button("⏭ Next Frame").clicked() {
            action = Some(Action::StepFrame(StepDirection::Forward));
        }

        ui.separator();

        ui.label("Jump to (sec):");
        let response = ui.add(
            egui::TextEdit::singleline(&mut session.jump_input).desired_width(80.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Jump").clicked() || submitted {
            action = Some(Action::JumpToTime);
        }
    });

    action
}
