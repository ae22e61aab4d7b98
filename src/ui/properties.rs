// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation list panel.
//!
//! Shows every closed record in creation order. Records are read-only;
//! clicking one moves the playhead to its start.

use crate::models::annotation::AnnotationRecord;
use crate::util::time::parse_seconds;

/// Result of interacting with the annotation list.
pub enum PropertiesAction {
    None,
    SeekTo(f64),
}

/// Display the annotation list.
pub fn show(ui: &mut egui::Ui, records: &[AnnotationRecord]) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Annotations");
    ui.label(egui::RichText::new(format!("{} recorded", records.len())).weak());
    ui.separator();

    if records.is_empty() {
        ui.label(
            egui::RichText::new("Mark a start, type a label, then press End")
                .italics()
                .weak(),
        );
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for record in records {
                let response = egui::Frame::group(ui.style())
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new(&record.label).strong());
                            ui.label(format!("({}s - {}s)", record.start, record.end));
                        });
                        if !record.description.is_empty() {
                            ui.label(egui::RichText::new(&record.description).small());
                        }
                    })
                    .response
                    .interact(egui::Sense::click())
                    .on_hover_text(format!("{}\nClick to jump to start", record.video_id));

                if response.clicked() {
                    if let Some(start) = parse_seconds(&record.start) {
                        action = PropertiesAction::SeekTo(start);
                    }
                }
            }
        });

    action
}
