//! CLI result presenter.

use chemlab_core::ExperimentResult;

use crate::output::{balloon, fill_bar, headline, result_lines, to_json, FILL_BAR_WIDTH};
use crate::ui::{beaker, print_error, print_header, print_hint};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a completed experiment.
    fn present_result(&self, result: &ExperimentResult);

    /// Present an error, with an optional hint on how to recover.
    fn present_error(&self, error: &str, hint: Option<&str>);
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Numeric panel plus a text visual.
    #[default]
    Panel,
    /// Only the headline number.
    Quiet,
    /// The response JSON.
    Json,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    mode: OutputMode,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// The text visual for a result.
    #[must_use]
    pub fn visual(result: &ExperimentResult) -> String {
        match result {
            ExperimentResult::AcidBase(r) => beaker(r.ph),
            ExperimentResult::Dilution(r) => fill_bar(r.fill_percent, FILL_BAR_WIDTH),
            ExperimentResult::GasLaw(r) => balloon(r.scale),
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &ExperimentResult) {
        match self.mode {
            OutputMode::Quiet => println!("{}", headline(result)),
            OutputMode::Json => println!("{}", to_json(result)),
            OutputMode::Panel => {
                print_header(result.kind().title());
                for line in result_lines(result) {
                    println!("  {line}");
                }
                println!();
                println!("  {}", Self::visual(result));
            }
        }
    }

    fn present_error(&self, error: &str, hint: Option<&str>) {
        print_error(error);
        if let Some(hint) = hint {
            print_hint(hint);
        }
    }
}
