//! ChemLab: educational chemistry experiments.

use chemlab_cli::{CLIResultPresenter, OutputMode, ResultPresenter};
use chemlab_core::ChemError;
use chemlab_lib::{app, config, errors, logging, version};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(logging::env_filter())
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    tracing::debug!(version = %version::full_version(), "starting");
    if let Err(err) = app::run(&config) {
        let hint = err.downcast_ref::<ChemError>().and_then(errors::hint);
        CLIResultPresenter::new(OutputMode::Panel).present_error(&format!("{err:#}"), hint);
        std::process::exit(errors::exit_code(&err));
    }
}
