//! # chemlab-cli
//!
//! CLI output, result visuals, the HTTP client, and shell completion.

pub mod client;
pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use client::HttpService;
pub use presenter::{CLIResultPresenter, OutputMode, ResultPresenter};
