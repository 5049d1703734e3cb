use super::EguiApp;
use super::analyzer_panel::AnalyzerAction;
use super::style;
use crate::egui_app::view_model::{self, ResultView, SentimentBadge};
use eframe::egui::{self, Color32, Frame, Margin, RichText};

impl EguiApp {
    /// Render the last outcome, returning a copy request if the button was pressed.
    pub(super) fn render_result(&mut self, ui: &mut egui::Ui) -> Option<AnalyzerAction> {
        match view_model::result_view(self.controller.outcome()) {
            ResultView::Hidden => None,
            ResultView::Error(message) => {
                ui.label(
                    RichText::new(message)
                        .color(style::status_badge_color(style::StatusTone::Error)),
                );
                None
            }
            ResultView::Verdict { badge, confidence } => {
                let mut copy_clicked = false;
                ui.horizontal(|ui| {
                    render_badge(ui, badge);
                    ui.add_space(8.0);
                    ui.label(format!("Confidence: {confidence}"));
                    ui.add_space(8.0);
                    copy_clicked = ui.button("Copy result").clicked();
                });
                copy_clicked.then_some(AnalyzerAction::CopyResult)
            }
        }
    }
}

fn render_badge(ui: &mut egui::Ui, badge: SentimentBadge) {
    Frame::new()
        .fill(style::sentiment_fill(badge == SentimentBadge::Positive))
        .inner_margin(Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(badge.text()).strong().color(Color32::BLACK));
        });
}
