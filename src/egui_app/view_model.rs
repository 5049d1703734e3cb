//! Display rules that turn analyzer state into text for the egui renderer.

use serde_json::Value;

use crate::classifier::Prediction;
use crate::egui_app::state::{AnalysisOutcome, RequestState};

/// Binary sentiment shown on the result badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentimentBadge {
    Positive,
    Negative,
}

impl SentimentBadge {
    pub fn text(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }
}

/// What the result area should show.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultView {
    Hidden,
    Error(String),
    Verdict {
        badge: SentimentBadge,
        confidence: String,
    },
}

/// Any label other than exactly 1 renders as negative.
pub fn sentiment_badge(prediction: &Prediction) -> SentimentBadge {
    if prediction.is_positive() {
        SentimentBadge::Positive
    } else {
        SentimentBadge::Negative
    }
}

/// `"87%"` style confidence, `"N/A"` when the probability is missing or zero.
pub fn confidence_text(prediction: &Prediction) -> String {
    match prediction.probability() {
        Some(probability) if probability != 0.0 && !probability.is_nan() => {
            format!("{}%", (probability * 100.0).round() as i64)
        }
        _ => "N/A".to_string(),
    }
}

pub fn result_view(outcome: Option<&AnalysisOutcome>) -> ResultView {
    match outcome {
        None => ResultView::Hidden,
        Some(AnalysisOutcome::Failure { message }) => ResultView::Error(format!("Error: {message}")),
        Some(AnalysisOutcome::Success(prediction)) => ResultView::Verdict {
            badge: sentiment_badge(prediction),
            confidence: confidence_text(prediction),
        },
    }
}

/// Text placed on the clipboard by "Copy result".
///
/// Uses the server's `prediction` display text when present, otherwise the
/// outcome's JSON form.
pub fn clipboard_summary(outcome: &AnalysisOutcome) -> String {
    if let AnalysisOutcome::Success(prediction) = outcome
        && let Some(text) = prediction.prediction_text().filter(|text| !text.is_empty())
    {
        let probability = prediction
            .raw()
            .get("probability")
            .map(display_value)
            .unwrap_or_default();
        return format!("{text} ({probability})");
    }
    outcome.to_json()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub fn analyze_button_label(request: RequestState) -> &'static str {
    match request {
        RequestState::Idle => "Analyze",
        RequestState::InFlight => "Analyzing…",
    }
}

pub fn char_count_label(text: &str) -> String {
    format!("{} chars", text.chars().count())
}
