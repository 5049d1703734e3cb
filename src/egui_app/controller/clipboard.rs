use super::*;
use crate::egui_app::view_model;

impl AnalyzerController {
    /// Text for "Copy result", or `None` when there is no result yet.
    pub fn clipboard_summary(&self) -> Option<String> {
        self.outcome().map(view_model::clipboard_summary)
    }
}
