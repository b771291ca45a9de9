//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use chemlab_core::{
    Acid, AcidBaseDraft, Base, ChemError, DilutionDraft, ExperimentDraft, ExperimentKind,
    GasLawDraft,
};

/// ChemLab: educational chemistry experiments from the terminal.
#[derive(Parser, Debug)]
#[command(name = "chemlab", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Computation server URL; experiments run locally when unset.
    #[arg(long, env = "CHEMLAB_SERVER", global = true)]
    pub server: Option<String>,

    /// Server request timeout (e.g., "10s", "500ms").
    #[arg(long, default_value = "10s", global = true)]
    pub timeout: String,

    /// Print the response JSON.
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub json: bool,

    /// Quiet mode (only output the headline number).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write the response JSON to a file.
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an experiment. Omitted parameters take their example values.
    Run {
        #[command(subcommand)]
        experiment: ExperimentArgs,
    },
    /// Print example parameters as JSON.
    Examples {
        /// Experiment to show: acid-base, dilution, or gas-law.
        kind: Option<ExperimentKind>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExperimentArgs {
    #[command(about = ExperimentKind::AcidBase.description())]
    AcidBase(AcidBaseArgs),
    #[command(about = ExperimentKind::Dilution.description())]
    Dilution(DilutionArgs),
    #[command(about = ExperimentKind::GasLaw.description())]
    GasLaw(GasLawArgs),
}

#[derive(Args, Debug, Default)]
pub struct AcidBaseArgs {
    /// Acid: HCl, HNO3, or H2SO4.
    #[arg(long)]
    pub acid: Option<Acid>,
    /// Acid concentration (M).
    #[arg(long, allow_negative_numbers = true)]
    pub acid_m: Option<f64>,
    /// Acid volume (mL).
    #[arg(long, allow_negative_numbers = true)]
    pub acid_v: Option<f64>,
    /// Base: NaOH, KOH, or Ca(OH)2.
    #[arg(long)]
    pub base: Option<Base>,
    /// Base concentration (M).
    #[arg(long, allow_negative_numbers = true)]
    pub base_m: Option<f64>,
    /// Base volume (mL).
    #[arg(long, allow_negative_numbers = true)]
    pub base_v: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub struct DilutionArgs {
    /// Solute or solution name.
    #[arg(long)]
    pub solute: Option<String>,
    /// Initial concentration C1 (M).
    #[arg(long, allow_negative_numbers = true)]
    pub c1: Option<f64>,
    /// Initial volume V1 (mL).
    #[arg(long, allow_negative_numbers = true)]
    pub v1: Option<f64>,
    /// Final volume V2 (mL).
    #[arg(long, allow_negative_numbers = true)]
    pub v2: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub struct GasLawArgs {
    /// Pressure P (atm).
    #[arg(long, allow_negative_numbers = true)]
    pub pressure: Option<f64>,
    /// Amount of gas n (mol).
    #[arg(long, allow_negative_numbers = true)]
    pub moles: Option<f64>,
    /// Temperature T (K).
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,
}

impl ExperimentArgs {
    /// The flags as a draft; unset flags stay empty.
    #[must_use]
    pub fn to_draft(&self) -> ExperimentDraft {
        match self {
            ExperimentArgs::AcidBase(a) => ExperimentDraft::AcidBase(AcidBaseDraft {
                acid: a.acid,
                acid_molarity: a.acid_m,
                acid_volume: a.acid_v,
                base: a.base,
                base_molarity: a.base_m,
                base_volume: a.base_v,
            }),
            ExperimentArgs::Dilution(d) => ExperimentDraft::Dilution(DilutionDraft {
                solute: d.solute.clone(),
                c1: d.c1,
                v1: d.v1,
                v2: d.v2,
            }),
            ExperimentArgs::GasLaw(g) => ExperimentDraft::GasLaw(GasLawDraft {
                pressure: g.pressure,
                moles: g.moles,
                temperature: g.temperature,
            }),
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the timeout flag.
    pub fn timeout_duration(&self) -> Result<Duration, ChemError> {
        parse_duration(&self.timeout)
            .ok_or_else(|| ChemError::Config(format!("invalid timeout: {}", self.timeout)))
    }
}

/// Parse a duration string like "10s", "500ms", "1m".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
