// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! VIDLABEL - Video Interval Labeling
//!
//! A cross-platform desktop application for labeling temporal segments
//! of videos and exporting them as CSV.

mod app;
mod config;
mod io;
mod models;
mod player;
mod ui;
mod util;

use anyhow::Result;
use app::VidlabelApp;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::default();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "VIDLABEL",
        options,
        Box::new(|_cc| Ok(Box::new(VidlabelApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
