//! egui front end: state, controller and renderer for the analyzer window.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
