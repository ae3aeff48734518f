mod config;
mod core;
mod logger;
mod ui;

use anyhow::Context;
use crate::core::AudioOutput;
use config::Config;
use eframe::NativeOptions;
use std::process::ExitCode;
use ui::{fonts, ToneButtonApp};

fn main() -> ExitCode {
    logger::init();
    log::info!("🚀 tone-button started");

    match run() {
        Ok(()) => {
            log::info!("window closed, exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_startup_failure(&e);
            ExitCode::FAILURE
        }
    }
}

/// Records a fatal init error in the log and on stderr.
fn report_startup_failure(e: &anyhow::Error) {
    log::error!("startup failed: {:#}", e);
    eprintln!("{:#}", e);
}

fn run() -> anyhow::Result<()> {
    let config = Config::default();
    log::info!("📁 config: font {}, tone {:?}", config.font_path.display(), config.tone);

    let font = fonts::load(&config.font_path)?;

    // No audio device is not fatal; clicks still recolor the window
    let audio = match AudioOutput::open(&config.audio) {
        Ok(audio) => Some(audio),
        Err(e) => {
            log::warn!("audio output unavailable, running silent: {:#}", e);
            None
        }
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([config.window_width, config.window_height])
            .with_resizable(true),
        centered: true,
        vsync: true,
        hardware_acceleration: eframe::HardwareAcceleration::Required,
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            fonts::install(&cc.egui_ctx, font);
            Ok(Box::new(ToneButtonApp::new(config, audio)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
    .context("eframe::run_native failed (window or renderer creation)")
}
