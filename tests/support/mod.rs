#![allow(dead_code)]

pub mod classifier_stub;
pub mod sentiscope_env;
