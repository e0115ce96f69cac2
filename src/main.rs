#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use blobilism::{AppError, PaintApp, PaintConfig};

fn load_config() -> PaintConfig {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return PaintConfig::default();
    };
    match PaintConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}; using the default palette", err);
            PaintConfig::default()
        }
    }
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Blobilism")
            .with_inner_size(config.window_size)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Blobilism",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config)))),
    )?;
    Ok(())
}
