//! Client for the remote sentiment classifier service.

pub mod api;

pub use api::{PredictError, Prediction};

use crate::config::ApiEndpoint;

/// Anything that can turn text into a prediction.
///
/// The controller runs implementations on a worker thread, one call per submit.
pub trait SentimentClassifier: Send + Sync {
    fn predict(&self, text: &str) -> Result<Prediction, PredictError>;
}

/// Classifier backed by `POST <base>/api/predict`.
#[derive(Clone, Debug)]
pub struct HttpClassifier {
    endpoint: ApiEndpoint,
}

impl HttpClassifier {
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self { endpoint }
    }
}

impl SentimentClassifier for HttpClassifier {
    fn predict(&self, text: &str) -> Result<Prediction, PredictError> {
        api::predict(&self.endpoint, text)
    }
}
