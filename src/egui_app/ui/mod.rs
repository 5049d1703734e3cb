//! egui renderer for the analyzer window.

mod analyzer_panel;
mod result_view;
pub mod style;

use std::time::Duration;

use crate::config::AppConfig;
use crate::egui_app::controller::AnalyzerController;
use eframe::egui::{self, Frame, Margin, RichText};

/// Smallest window size that still fits the text box and example buttons.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(560.0, 420.0);

/// How often to poll for the response while a request is in flight.
const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(50);

/// Renders the analyzer using the shared controller state.
pub struct EguiApp {
    controller: AnalyzerController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_controller(AnalyzerController::from_config(config))
    }

    pub fn with_controller(controller: AnalyzerController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_primary).inner_margin(Margin::symmetric(8, 4)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    Frame::new()
                        .fill(status.badge_color)
                        .inner_margin(Margin::symmetric(6, 1))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&status.badge_label).color(egui::Color32::WHITE));
                        });
                    ui.label(&status.text);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(&self.controller.ui.endpoint_label)
                                .color(palette.text_muted)
                                .small(),
                        );
                    });
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.tick();
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_analyzer(ui);
        });
        if self.controller.ui.analyzer.in_flight() {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        }
    }
}
