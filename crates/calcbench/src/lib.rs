//! calcbench library: application logic for the backend comparison tool.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
