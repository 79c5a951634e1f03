//! Terminal widgets

pub mod actions;
pub mod fragment;
pub mod log;
pub mod prompt;
pub mod status;
