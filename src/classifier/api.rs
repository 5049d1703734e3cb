//! Wire types and the blocking predict call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiEndpoint;
use crate::http_client;

/// Fixed route appended to the configured base URL.
pub const PREDICT_PATH: &str = "/api/predict";

const MAX_PREDICT_RESPONSE_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

/// A classifier response, kept exactly as the service returned it.
///
/// Only `label`, `probability` and `prediction` are ever inspected, and none of
/// them is required to be present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prediction {
    body: Value,
}

impl Prediction {
    pub fn from_value(body: Value) -> Self {
        Self { body }
    }

    pub fn raw(&self) -> &Value {
        &self.body
    }

    /// The `label` field as received, if any.
    pub fn label(&self) -> Option<&Value> {
        self.body.get("label")
    }

    /// True only when `label` is numerically 1.
    pub fn is_positive(&self) -> bool {
        self.label()
            .and_then(Value::as_f64)
            .is_some_and(|label| label == 1.0)
    }

    /// Numeric `probability`, if present.
    pub fn probability(&self) -> Option<f64> {
        self.body.get("probability").and_then(Value::as_f64)
    }

    /// Server-side display text for the label (`"positive"` / `"negative"`).
    pub fn prediction_text(&self) -> Option<&str> {
        self.body.get("prediction").and_then(Value::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// The service answered with a non-2xx status.
    #[error("{}", status_line(.code, .status_text))]
    Status { code: u16, status_text: String },
    /// The request never produced a complete response.
    #[error("Network error: {0}")]
    Transport(String),
    /// The response body could not be read in full or was not valid JSON.
    #[error("Invalid response body: {0}")]
    Json(String),
    /// The background worker died before reporting a result.
    #[error("Classifier worker failed: {0}")]
    Worker(String),
}

fn status_line(code: &u16, status_text: &str) -> String {
    if status_text.is_empty() {
        code.to_string()
    } else {
        format!("{code} {status_text}")
    }
}

/// POST `text` to the predict route and return the parsed JSON body.
pub fn predict(endpoint: &ApiEndpoint, text: &str) -> Result<Prediction, PredictError> {
    let url = endpoint.predict_url();
    let req = http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match req.send_json(PredictRequest { text }) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            return Err(PredictError::Status {
                code,
                status_text: response.status_text().trim().to_string(),
            });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let bytes = http_client::read_response_bytes(response, MAX_PREDICT_RESPONSE_BYTES)
        .map_err(|err| PredictError::Json(err.to_string()))?;
    parse_prediction(&bytes)
}

pub(crate) fn parse_prediction(bytes: &[u8]) -> Result<Prediction, PredictError> {
    serde_json::from_slice(bytes)
        .map(Prediction::from_value)
        .map_err(|err| PredictError::Json(err.to_string()))
}
