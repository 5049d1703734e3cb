use serde::Serialize;

use crate::classifier::Prediction;

/// Whether a classification request is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

/// Result of the last settled request.
///
/// Serializes to the response body for successes and to `{"error": ...}` for
/// failures.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Success(Prediction),
    Failure {
        #[serde(rename = "error")]
        message: String,
    },
}

impl AnalysisOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
    }
}

/// Transient state of the analyzer component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalyzerState {
    /// Text to classify, edited directly by the text box.
    pub text: String,
    /// Last settled result; cleared when a new request starts.
    pub outcome: Option<AnalysisOutcome>,
    pub request: RequestState,
    /// Whether to focus the text box on the next frame.
    pub focus_input_requested: bool,
}

impl AnalyzerState {
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn in_flight(&self) -> bool {
        self.request == RequestState::InFlight
    }

    /// Mirrors the enabled state of the Analyze button.
    pub fn can_submit(&self) -> bool {
        self.has_text() && !self.in_flight()
    }
}
