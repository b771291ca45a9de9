//! Experiment results, tagged the same way as requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::request::ExperimentKind;
use crate::substance::{Acid, Base};

/// Character of a mixed solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Solution {
    Acidic,
    Basic,
    Neutral,
}

impl Solution {
    /// Classify a pH value against neutral 7.
    #[must_use]
    pub fn from_ph(ph: f64) -> Self {
        if ph < crate::constants::NEUTRAL_PH {
            Solution::Acidic
        } else if ph > crate::constants::NEUTRAL_PH {
            Solution::Basic
        } else {
            Solution::Neutral
        }
    }

    /// One-line summary shown next to the pH.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Solution::Acidic => "Acidic solution (acid in excess).",
            Solution::Basic => "Basic solution (base in excess).",
            Solution::Neutral => "Neutral solution (perfectly neutralized).",
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Solution::Acidic => "acidic",
            Solution::Basic => "basic",
            Solution::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcidBaseResult {
    pub acid: Acid,
    pub base: Base,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub result: Solution,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutionResult {
    pub solute: String,
    pub c1: f64,
    pub v1: f64,
    pub v2: f64,
    /// Final concentration (M).
    pub c2: f64,
    /// Tube fill level for display, in percent.
    pub fill_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasLawResult {
    #[serde(rename = "P")]
    pub pressure: f64,
    #[serde(rename = "n")]
    pub moles: f64,
    #[serde(rename = "T")]
    pub temperature: f64,
    /// Gas volume (L).
    #[serde(rename = "V")]
    pub volume: f64,
    /// Unclamped balloon scale.
    pub scale: f64,
}

/// Result of any experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "experiment", rename_all = "snake_case")]
pub enum ExperimentResult {
    AcidBase(AcidBaseResult),
    Dilution(DilutionResult),
    GasLaw(GasLawResult),
}

impl ExperimentResult {
    /// Which experiment produced this result.
    #[must_use]
    pub fn kind(&self) -> ExperimentKind {
        match self {
            ExperimentResult::AcidBase(_) => ExperimentKind::AcidBase,
            ExperimentResult::Dilution(_) => ExperimentKind::Dilution,
            ExperimentResult::GasLaw(_) => ExperimentKind::GasLaw,
        }
    }
}

impl From<AcidBaseResult> for ExperimentResult {
    fn from(res: AcidBaseResult) -> Self {
        ExperimentResult::AcidBase(res)
    }
}

impl From<DilutionResult> for ExperimentResult {
    fn from(res: DilutionResult) -> Self {
        ExperimentResult::Dilution(res)
    }
}

impl From<GasLawResult> for ExperimentResult {
    fn from(res: GasLawResult) -> Self {
        ExperimentResult::GasLaw(res)
    }
}
