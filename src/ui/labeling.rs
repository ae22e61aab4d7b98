// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Label entry row: label and description fields, start/end buttons and
//! CSV export.

use crate::io::export::ExportFormat;
use crate::models::{
    annotation::format_seconds,
    session::{Action, Session},
};

/// Result of interacting with the labeling row.
pub enum LabelingAction {
    None,
    Session(Action),
    Export(ExportFormat),
}

/// Display the labeling row.
pub fn show(ui: &mut egui::Ui, session: &mut Session) -> LabelingAction {
    let mut action = LabelingAction::None;

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut session.label)
                .hint_text("Label")
                .desired_width(160.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut session.description)
                .hint_text("Description")
                .desired_width(240.0),
        );

        if ui.button("Start").on_hover_text("Mark segment start [").clicked() {
            action = LabelingAction::Session(Action::StartLabel);
        }
        if ui.button("End").on_hover_text("Close segment ]").clicked() {
            action = LabelingAction::Session(Action::EndLabel);
        }

        ui.add_space(10.0);
        if ui.button("Export CSV").on_hover_text("Ctrl+E").clicked() {
            action = LabelingAction::Export(ExportFormat::Csv);
        }

        if let Some(start) = session.pending_start {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("Started at {}s", format_seconds(start)))
                    .color(egui::Color32::LIGHT_GREEN),
            );
        }
    });

    action
}
