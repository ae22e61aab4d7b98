// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. UI panels report what the user did; the app turns
//! that into session actions, drives the player and handles file dialogs.

use crate::config::AppConfig;
use crate::io::export::{self, ExportFormat};
use crate::io::media::{self, OpenedMedia};
use crate::models::session::{Action, Outcome, Session, StepDirection};
use crate::player::{clock::ClockPlayer, Player};
use crate::ui::{canvas, labeling, properties, timeline, toolbar};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

/// Main application state.
pub struct VidlabelApp {
    config: AppConfig,

    /// Annotation session (video, settings, records)
    session: Session,

    /// Playback backend for the loaded video (idle clock before any load)
    player: Box<dyn Player + Send>,

    /// Texture holding the most recent decoded frame
    frame_texture: Option<egui::TextureHandle>,

    /// Decoded frame dimensions (width, height)
    frame_size: Option<(u32, u32)>,

    /// Receiver for background video opening
    media_loader: Option<Receiver<Result<OpenedMedia, String>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Feedback for the last action, shown in the status line
    status: Option<String>,
}

impl Default for VidlabelApp {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl VidlabelApp {
    /// Create a new application instance with an empty session.
    pub fn new(config: AppConfig) -> Self {
        let session = Session::new(&config);
        let mut player = ClockPlayer::default();
        player.set_rate(session.rate.as_f64());

        Self {
            config,
            session,
            player: Box::new(player),
            frame_texture: None,
            frame_size: None,
            media_loader: None,
            loading_message: None,
            status: None,
        }
    }

    /// Apply a session action. Ignored actions leave the status line alone.
    fn apply(&mut self, action: Action) {
        if let Outcome::Applied = self.session.apply(action, &mut *self.player) {
            self.status = match action {
                Action::EndLabel => self
                    .session
                    .records()
                    .last()
                    .map(|record| format!("Recorded {}", record.summary())),
                _ => None,
            };
        }
    }

    /// Open a video file (asynchronously).
    fn load_video_file(&mut self, path: PathBuf) {
        self.loading_message = Some(format!("Opening {}...", media::video_id_for(&path)));
        self.media_loader = Some(media::spawn_open(path));
    }

    /// Take over a video that finished opening.
    fn finish_loading(&mut self, result: Result<OpenedMedia, String>) {
        match result {
            Ok(OpenedMedia { video, mut player }) => {
                self.session.load_video(video, &mut *player);
                self.player = player;
                self.frame_texture = None;
                self.frame_size = None;
                self.status = None;
            }
            Err(e) => log::error!("{}", e),
        }
    }

    /// Write the current records to `path`.
    fn export_to(&mut self, format: ExportFormat, path: &Path) {
        match export::export(self.session.records(), format, path) {
            Ok(()) => {
                log::info!(
                    "Exported {} annotations to {}",
                    self.session.records().len(),
                    path.display()
                );
                self.status = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export annotations: {:#}", e);
                self.status = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Ask for a destination and export.
    fn export_with_dialog(&mut self, format: ExportFormat) {
        let file_name = export::default_file_name(&self.session.video_id, format);
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(format.filter_name(), &[format.extension()])
            .set_file_name(file_name)
            .save_file()
        {
            self.export_to(format, &path);
        }
    }

    fn open_with_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Videos", self.config.video_extensions.as_slice())
            .add_filter("All files", &["*"])
            .pick_file()
        {
            self.load_video_file(path);
        }
    }

    /// Check for a finished background open.
    fn poll_loader(&mut self) {
        let result = match self.media_loader {
            Some(ref receiver) => match receiver.try_recv() {
                Ok(result) => result,
                Err(std::sync::mpsc::TryRecvError::Empty) => return,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    Err("Video loader stopped unexpectedly".to_string())
                }
            },
            None => return,
        };

        self.media_loader = None;
        self.loading_message = None;
        self.finish_loading(result);
    }

    /// Upload a newly decoded frame, if the backend produced one.
    fn update_frame_texture(&mut self, ctx: &egui::Context) {
        let Some(frame) = self.player.poll_frame() else {
            return;
        };

        let size = [frame.width as usize, frame.height as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, &frame.pixels);
        match self.frame_texture {
            Some(ref mut texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.frame_texture =
                    Some(ctx.load_texture("video_frame", image, egui::TextureOptions::LINEAR));
            }
        }
        self.frame_size = Some((frame.width, frame.height));
    }

    /// Keyboard shortcuts. Skipped while a text field has focus.
    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::E)) {
            self.export_with_dialog(ExportFormat::Csv);
        }

        if ctx.wants_keyboard_input() {
            return;
        }

        let shortcuts = [
            (egui::Key::Space, Action::TogglePlayback),
            (egui::Key::ArrowLeft, Action::StepFrame(StepDirection::Backward)),
            (egui::Key::ArrowRight, Action::StepFrame(StepDirection::Forward)),
            (egui::Key::OpenBracket, Action::StartLabel),
            (egui::Key::CloseBracket, Action::EndLabel),
        ];
        for (key, action) in shortcuts {
            if ctx.input(|i| i.key_pressed(key) && !i.modifiers.command) {
                self.apply(action);
            }
        }
    }
}

impl eframe::App for VidlabelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();
        self.update_frame_texture(ctx);

        // Keep redrawing while the playhead moves or a file is opening
        if self.loading_message.is_some() || self.player.is_playing() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Video...").clicked() {
                        ui.close_menu();
                        self.open_with_dialog();
                    }
                    ui.separator();
                    if ui.button("Export CSV... (Ctrl+E)").clicked() {
                        ui.close_menu();
                        self.export_with_dialog(ExportFormat::Csv);
                    }
                    ui.menu_button("Export Full Records", |ui| {
                        if ui.button("Export as JSON...").clicked() {
                            ui.close_menu();
                            self.export_with_dialog(ExportFormat::Json);
                        }
                        if ui.button("Export as YAML...").clicked() {
                            ui.close_menu();
                            self.export_with_dialog(ExportFormat::Yaml);
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    ui.label("Space: play / pause");
                    ui.label("Left / Right: previous / next frame");
                    ui.label("[ / ]: start / end label");
                    ui.label("Ctrl+E: export CSV");
                });
            });
        });

        // Playback toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, &mut self.session))
            .inner;
        if let Some(action) = toolbar_action {
            self.apply(action);
        }

        // Labeling row and timeline (bottom)
        let labeling_action = egui::TopBottomPanel::bottom("labeling")
            .show(ctx, |ui| labeling::show(ui, &mut self.session))
            .inner;
        match labeling_action {
            labeling::LabelingAction::Session(action) => self.apply(action),
            labeling::LabelingAction::Export(format) => self.export_with_dialog(format),
            labeling::LabelingAction::None => {}
        }

        let has_video = self.session.has_video();
        let timeline_action = egui::TopBottomPanel::bottom("timeline")
            .show(ctx, |ui| timeline::show(ui, &*self.player, has_video))
            .inner;
        if let Some(action) = timeline_action {
            self.apply(action);
        }

        // Annotation list (right side)
        let properties_action = egui::SidePanel::right("annotations")
            .default_width(250.0)
            .show(ctx, |ui| properties::show(ui, self.session.records()))
            .inner;
        if let properties::PropertiesAction::SeekTo(secs) = properties_action {
            self.apply(Action::Seek(secs));
        }

        self.handle_keyboard(ctx);

        // Video area (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref message) = self.loading_message {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(message)
                                .size(16.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                    });
                });
            } else {
                canvas::show(
                    ui,
                    canvas::CanvasView {
                        texture: self.frame_texture.as_ref(),
                        frame_size: self.frame_size,
                        session: &self.session,
                        position: self.player.position(),
                        status: self.status.as_deref(),
                    },
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::LoadedVideo;

    fn open(app: &mut VidlabelApp, id: &str) {
        app.finish_loading(Ok(OpenedMedia {
            video: LoadedVideo {
                id: id.to_string(),
                path: PathBuf::from(id),
            },
            player: Box::new(ClockPlayer::new(Some(60.0))),
        }));
    }

    #[test]
    fn test_label_and_export_round() {
        let mut app = VidlabelApp::default();
        open(&mut app, "clip.mp4");

        app.session.label = "jump".to_string();
        app.session.description = "running jump".to_string();
        app.session.jump_input = "10".to_string();
        app.apply(Action::JumpToTime);
        app.apply(Action::StartLabel);
        app.session.jump_input = "12.5".to_string();
        app.apply(Action::JumpToTime);
        app.apply(Action::EndLabel);
        assert_eq!(app.status.as_deref(), Some("Recorded jump (10.00s - 12.50s)"));

        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir
            .path()
            .join(export::default_file_name(&app.session.video_id, ExportFormat::Csv));
        app.export_to(ExportFormat::Csv, &path);

        assert!(path.ends_with("clip.mp4_annotations.csv"));
        let csv = std::fs::read_to_string(&path).expect("read export");
        assert_eq!(
            csv.lines().collect::<Vec<_>>(),
            ["video_id,label,start_time,end_time", "clip.mp4,jump,10.00,12.50"]
        );
        assert_eq!(app.session.records().len(), 1);
    }

    #[test]
    fn test_ignored_action_is_silent() {
        let mut app = VidlabelApp::default();
        app.apply(Action::StartLabel);
        assert!(app.status.is_none());

        open(&mut app, "clip.mp4");
        app.apply(Action::StartLabel);
        app.apply(Action::EndLabel);
        assert!(app.status.is_none());
        assert!(app.session.records().is_empty());
        assert!(app.session.pending_start.is_some());
    }

    #[test]
    fn test_failed_load_keeps_previous_video() {
        let mut app = VidlabelApp::default();
        open(&mut app, "first.mp4");
        app.finish_loading(Err("Failed to open video: boom".to_string()));

        assert_eq!(app.session.video_id, "first.mp4");
        assert!(app.status.is_none());
    }

    #[test]
    fn test_loaded_player_gets_session_rate() {
        let mut app = VidlabelApp::default();
        app.apply(Action::SetRate(crate::models::session::PlaybackRate::X8));
        open(&mut app, "clip.mp4");
        assert_eq!(app.player.rate(), 8.0);
    }
}
