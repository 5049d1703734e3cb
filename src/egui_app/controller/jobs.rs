use std::panic::{self, AssertUnwindSafe};
use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender, TryRecvError},
};
use std::thread;

use crate::classifier::{PredictError, Prediction, SentimentClassifier};

pub(crate) enum JobMessage {
    PredictionFinished(PredictionResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) request_id: u64,
    pub(crate) text: String,
}

#[derive(Debug)]
pub(crate) struct PredictionResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<Prediction, PredictError>,
}

/// Background work bookkeeping. At most one prediction runs at a time.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    prediction_in_progress: Option<u64>,
    prediction_stale: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = mpsc::channel();
        Self {
            message_tx,
            message_rx,
            next_request_id: 0,
            prediction_in_progress: None,
            prediction_stale: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn prediction_in_progress(&self) -> Option<u64> {
        self.prediction_in_progress
    }

    pub(super) fn next_request_id(&mut self) -> u64 {
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.next_request_id
    }

    /// Start `job` on a worker thread. Returns `false` if a prediction is already running.
    pub(super) fn begin_prediction(
        &mut self,
        classifier: Arc<dyn SentimentClassifier>,
        job: PredictionJob,
    ) -> bool {
        if self.prediction_in_progress.is_some() {
            return false;
        }
        self.prediction_in_progress = Some(job.request_id);
        self.prediction_stale = false;
        let tx = self.message_tx.clone();
        let request_id = job.request_id;
        let spawned = thread::Builder::new()
            .name("sentiscope-predict".into())
            .spawn(move || {
                let result = run_prediction(classifier.as_ref(), &job.text);
                let _ = tx.send(JobMessage::PredictionFinished(PredictionResult {
                    request_id: job.request_id,
                    result,
                }));
            });
        if let Err(err) = spawned {
            let _ = self
                .message_tx
                .send(JobMessage::PredictionFinished(PredictionResult {
                    request_id,
                    result: Err(PredictError::Worker(err.to_string())),
                }));
        }
        true
    }

    /// Drop the running prediction's outcome when it arrives; it still clears the in-flight flag.
    pub(super) fn mark_prediction_stale(&mut self) {
        if self.prediction_in_progress.is_some() {
            self.prediction_stale = true;
        }
    }

    /// Finish bookkeeping for `request_id`. Returns whether its outcome should be shown.
    pub(super) fn finish_prediction(&mut self, request_id: u64) -> bool {
        if self.prediction_in_progress != Some(request_id) {
            return false;
        }
        self.prediction_in_progress = None;
        !std::mem::take(&mut self.prediction_stale)
    }
}

fn run_prediction(
    classifier: &dyn SentimentClassifier,
    text: &str,
) -> Result<Prediction, PredictError> {
    panic::catch_unwind(AssertUnwindSafe(|| classifier.predict(text))).unwrap_or_else(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panicked".to_string());
        Err(PredictError::Worker(reason))
    })
}
