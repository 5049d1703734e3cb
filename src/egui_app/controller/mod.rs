//! Analyzer controller: owns the UI state and runs classifier requests off the UI thread.

mod analyze;
mod background_jobs;
mod clipboard;
mod examples;
pub(crate) mod jobs;

#[cfg(test)]
mod tests;

pub use examples::EXAMPLES;

use std::sync::Arc;

use crate::classifier::{HttpClassifier, SentimentClassifier};
use crate::config::AppConfig;
use crate::egui_app::state::{AnalysisOutcome, RequestState, StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use jobs::ControllerJobs;

/// Maintains analyzer state and bridges the classifier client to the egui UI.
pub struct AnalyzerController {
    pub ui: UiState,
    classifier: Arc<dyn SentimentClassifier>,
    jobs: ControllerJobs,
}

impl AnalyzerController {
    pub fn new(classifier: Arc<dyn SentimentClassifier>) -> Self {
        let mut ui = UiState::default();
        ui.analyzer.focus_input_requested = true;
        Self {
            ui,
            classifier,
            jobs: ControllerJobs::new(),
        }
    }

    /// Build a controller that talks to the configured HTTP endpoint.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut controller = Self::new(Arc::new(HttpClassifier::new(config.api.clone())));
        controller.ui.endpoint_label = config.api.predict_url();
        controller
    }

    pub fn text(&self) -> &str {
        &self.ui.analyzer.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.ui.analyzer.text = text.into();
    }

    pub fn request_state(&self) -> RequestState {
        self.ui.analyzer.request
    }

    pub fn outcome(&self) -> Option<&AnalysisOutcome> {
        self.ui.analyzer.outcome.as_ref()
    }

    /// Per-frame housekeeping; drains finished background work.
    pub fn tick(&mut self) {
        self.poll_background_jobs();
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::new(text, tone);
    }
}
