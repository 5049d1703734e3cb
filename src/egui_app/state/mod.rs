//! Shared state types for the egui UI.

mod analyzer;
mod status;

pub use analyzer::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub analyzer: AnalyzerState,
    pub status: StatusBarState,
    /// Absolute predict URL shown in the footer.
    pub endpoint_label: String,
}
