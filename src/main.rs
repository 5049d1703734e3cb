#![deny(missing_docs)]

//! Entry point for the Sentiscope desktop client.
use eframe::egui;
use sentiscope::config;
use sentiscope::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use sentiscope::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Sentiscope")
        .with_inner_size([720.0, 520.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let config = config::load_or_default();
    eframe::run_native(
        "Sentiscope",
        native_options,
        Box::new(move |_cc| match config {
            Ok(config) => Ok(Box::new(EguiApp::new(&config))),
            Err(err) => {
                tracing::error!("Failed to load config: {err}");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
