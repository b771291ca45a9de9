//! ChemLab library: application logic for the experiment CLI.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod version;
