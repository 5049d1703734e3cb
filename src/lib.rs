//! Desktop client for a remote sentiment classifier.
/// Application directory resolution.
pub mod app_dirs;
/// Classifier service client.
pub mod classifier;
/// Startup configuration.
pub mod config;
/// egui state, controller and renderer.
pub mod egui_app;
/// Shared HTTP agent.
pub(crate) mod http_client;
/// Tracing setup.
pub mod logging;
