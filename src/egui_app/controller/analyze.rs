use super::*;
use crate::classifier::{PredictError, Prediction};
use crate::egui_app::view_model;
use super::jobs::PredictionJob;

impl AnalyzerController {
    /// Send the current text to the classifier.
    ///
    /// No-op when the text is blank or a request is already in flight.
    /// Otherwise the previous outcome is cleared and the state is `InFlight`
    /// before this returns.
    pub fn submit(&mut self) {
        if !self.ui.analyzer.can_submit() || self.jobs.prediction_in_progress().is_some() {
            return;
        }
        let request_id = self.jobs.next_request_id();
        let text = self.ui.analyzer.text.clone();
        self.ui.analyzer.outcome = None;
        self.ui.analyzer.request = RequestState::InFlight;
        self.set_status("Analyzing…", StatusTone::Busy);
        tracing::info!(request_id, chars = text.chars().count(), "Submitting text for analysis");
        self.jobs.begin_prediction(
            Arc::clone(&self.classifier),
            PredictionJob { request_id, text },
        );
    }

    pub(super) fn apply_prediction_result(
        &mut self,
        request_id: u64,
        result: Result<Prediction, PredictError>,
    ) {
        if self.jobs.prediction_in_progress() != Some(request_id) {
            tracing::debug!(request_id, "Ignoring result for unknown request");
            return;
        }
        let show = self.jobs.finish_prediction(request_id);
        self.ui.analyzer.request = RequestState::Idle;
        if !show {
            tracing::debug!(request_id, "Discarding stale analysis result");
            self.set_status("Ready", StatusTone::Idle);
            return;
        }
        let outcome = match result {
            Ok(prediction) => {
                let badge = view_model::sentiment_badge(&prediction);
                tracing::info!(request_id, sentiment = badge.text(), "Analysis finished");
                self.set_status(format!("Classified as {}", badge.text()), StatusTone::Info);
                AnalysisOutcome::Success(prediction)
            }
            Err(err) => {
                tracing::warn!(request_id, "Analysis failed: {err}");
                self.set_status(format!("Analysis failed: {err}"), StatusTone::Error);
                AnalysisOutcome::failure(err.to_string())
            }
        };
        self.ui.analyzer.outcome = Some(outcome);
    }
}
