use super::jobs::JobMessage;
use super::*;
use std::sync::mpsc::TryRecvError;

impl AnalyzerController {
    pub(in crate::egui_app::controller) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::PredictionFinished(message) => {
                    self.apply_prediction_result(message.request_id, message.result);
                }
            }
        }
    }
}
