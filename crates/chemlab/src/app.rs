//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use chemlab_cli::output::write_to_file;
use chemlab_cli::{CLIResultPresenter, HttpService, OutputMode, ResultPresenter};
use chemlab_core::{
    example_request, validate, ExperimentKind, ExperimentRequest, ExperimentService, LocalService,
};

use crate::config::{AppConfig, Command, ExperimentArgs};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        chemlab_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    match &config.command {
        Some(Command::Run { experiment }) => run_experiment(config, experiment),
        Some(Command::Examples { kind }) => print_examples(*kind),
        None => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

fn run_experiment(config: &AppConfig, args: &ExperimentArgs) -> Result<()> {
    let request = args.to_draft().resolve();
    debug!(experiment = %request.kind(), "resolved request");

    // Bad values never leave the process.
    validate(&request)?;

    let service = select_service(config)?;
    let result = service.run(&request)?;
    debug!(service = service.name(), "experiment complete");

    CLIResultPresenter::new(output_mode(config)).present_result(&result);

    if let Some(ref path) = config.output {
        write_to_file(path, &result).with_context(|| format!("failed to write {path}"))?;
    }
    Ok(())
}

/// Local computation unless a server URL is configured.
fn select_service(config: &AppConfig) -> Result<Box<dyn ExperimentService>> {
    match config.server.as_deref() {
        Some(url) => {
            let timeout = config.timeout_duration()?;
            Ok(Box::new(HttpService::new(url, timeout)?))
        }
        None => Ok(Box::new(LocalService::new())),
    }
}

fn output_mode(config: &AppConfig) -> OutputMode {
    if config.json {
        OutputMode::Json
    } else if config.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Panel
    }
}

fn print_examples(kind: Option<ExperimentKind>) -> Result<()> {
    let json = match kind {
        Some(kind) => serde_json::to_string_pretty(&example_request(kind))?,
        None => {
            let all: Vec<ExperimentRequest> =
                ExperimentKind::ALL.into_iter().map(example_request).collect();
            serde_json::to_string_pretty(&all)?
        }
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("chemlab").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn output_mode_from_flags() {
        assert_eq!(output_mode(&config(&[])), OutputMode::Panel);
        assert_eq!(output_mode(&config(&["-q"])), OutputMode::Quiet);
        assert_eq!(output_mode(&config(&["--json"])), OutputMode::Json);
    }

    #[test]
    fn local_service_without_server() {
        let svc = select_service(&config(&[])).unwrap();
        assert_eq!(svc.name(), "local");
    }

    #[test]
    fn remote_service_with_server() {
        let svc = select_service(&config(&["--server", "http://127.0.0.1:5000"])).unwrap();
        assert_eq!(svc.name(), "http://127.0.0.1:5000/run_experiment");
    }

    #[test]
    fn bad_timeout_fails_service_selection() {
        let err = select_service(&config(&["--server", "http://x", "--timeout", "later"]))
            .err()
            .unwrap();
        assert!(err.downcast_ref::<chemlab_core::ChemError>().is_some());
    }

    #[test]
    fn invalid_value_fails_before_service() {
        // Unroutable server: reaching it would be ServiceUnavailable, not InvalidInput.
        let cfg = config(&["--server", "http://127.0.0.1:1", "run", "gas-law", "--pressure", "0"]);
        let Some(Command::Run { experiment }) = &cfg.command else {
            panic!("expected run");
        };
        let err = run_experiment(&cfg, experiment).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<chemlab_core::ChemError>(),
            Some(chemlab_core::ChemError::InvalidInput(_))
        ));
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        let path_str = path.to_str().unwrap();
        let cfg = config(&["-q", "-o", path_str, "run", "dilution"]);
        run(&cfg).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"experiment\": \"dilution\""));
    }
}
