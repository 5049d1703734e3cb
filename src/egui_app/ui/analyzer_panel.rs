use super::EguiApp;
use super::style;
use crate::egui_app::controller::EXAMPLES;
use crate::egui_app::view_model;
use eframe::egui::{self, Frame, Margin, RichText};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AnalyzerAction {
    None,
    Submit,
    SelectExample(usize),
    CopyResult,
}

impl EguiApp {
    /// Render the analyzer card and apply whatever the user triggered.
    pub(super) fn render_analyzer(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let mut action = AnalyzerAction::None;
        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(style::card_border())
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.heading("Sentiment Analysis");
                ui.label(
                    RichText::new("Paste a review or sentence below and press Analyze.")
                        .color(palette.text_muted),
                );
                ui.add_space(8.0);
                action = self.render_input(ui);
                ui.add_space(12.0);
                if let Some(result_action) = self.render_result(ui) {
                    action = result_action;
                }
            });
        self.apply_action(ui.ctx(), action);
    }

    fn render_input(&mut self, ui: &mut egui::Ui) -> AnalyzerAction {
        let palette = style::palette();
        let mut action = AnalyzerAction::None;
        let state = &mut self.controller.ui.analyzer;
        let response = ui.add(
            egui::TextEdit::multiline(&mut state.text)
                .hint_text("Type or paste a review...")
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        if state.focus_input_requested {
            response.request_focus();
            state.focus_input_requested = false;
        }
        let submit_shortcut = response.has_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command);
        if submit_shortcut && state.can_submit() {
            action = AnalyzerAction::Submit;
        }

        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Examples:").color(palette.text_muted));
            for (index, example) in EXAMPLES.iter().enumerate() {
                if ui.small_button(*example).clicked() {
                    action = AnalyzerAction::SelectExample(index);
                }
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let label = view_model::analyze_button_label(state.request);
            if ui
                .add_enabled(state.can_submit(), egui::Button::new(label))
                .clicked()
            {
                action = AnalyzerAction::Submit;
            }
            ui.label(
                RichText::new(view_model::char_count_label(&state.text)).color(palette.text_muted),
            );
        });
        action
    }

    fn apply_action(&mut self, ctx: &egui::Context, action: AnalyzerAction) {
        match action {
            AnalyzerAction::None => {}
            AnalyzerAction::Submit => self.controller.submit(),
            AnalyzerAction::SelectExample(index) => self.controller.select_example(index),
            AnalyzerAction::CopyResult => {
                if let Some(summary) = self.controller.clipboard_summary() {
                    tracing::debug!("Copying result to clipboard: {summary}");
                    ctx.copy_text(summary);
                }
            }
        }
    }
}
