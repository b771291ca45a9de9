//! Experiment requests as they travel over the wire.
//!
//! Requests are internally tagged by `experiment`, so a dilution request
//! reads `{"experiment": "dilution", "solute": "NaCl", "c1": 1.0, ...}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SOLUTE;
use crate::experiment::ChemError;
use crate::substance::{Acid, Base};

/// The three supported experiment types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentKind {
    AcidBase,
    Dilution,
    GasLaw,
}

impl ExperimentKind {
    /// Every experiment kind, in menu order.
    pub const ALL: [ExperimentKind; 3] = [
        ExperimentKind::AcidBase,
        ExperimentKind::Dilution,
        ExperimentKind::GasLaw,
    ];

    /// Wire tag, e.g. `"gas_law"`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            ExperimentKind::AcidBase => "acid_base",
            ExperimentKind::Dilution => "dilution",
            ExperimentKind::GasLaw => "gas_law",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ExperimentKind::AcidBase => "Acid-Base Neutralization",
            ExperimentKind::Dilution => "Solution Dilution",
            ExperimentKind::GasLaw => "Ideal Gas Law (PV = nRT)",
        }
    }

    /// One-sentence introduction for newcomers.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ExperimentKind::AcidBase => {
                "Mix an acid and a base and see if it ends up acidic, basic, or neutral."
            }
            ExperimentKind::Dilution => {
                "Make a weaker solution from a strong one and see the final concentration."
            }
            ExperimentKind::GasLaw => {
                "Warm or squeeze a balloon of gas and watch its volume change."
            }
        }
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ExperimentKind {
    type Err = ChemError;

    /// Accepts the wire tag or its kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ExperimentKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == normalized)
            .ok_or_else(|| ChemError::InvalidInput(format!("unknown experiment: {s}")))
    }
}

/// Mix an acid with a base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcidBaseRequest {
    pub acid: Acid,
    /// Acid concentration (M).
    #[serde(rename = "acidM")]
    pub acid_molarity: f64,
    /// Acid volume (mL).
    #[serde(rename = "acidV")]
    pub acid_volume: f64,
    pub base: Base,
    /// Base concentration (M).
    #[serde(rename = "baseM")]
    pub base_molarity: f64,
    /// Base volume (mL).
    #[serde(rename = "baseV")]
    pub base_volume: f64,
}

/// Dilute a stock solution to a larger volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutionRequest {
    #[serde(default = "default_solute")]
    pub solute: String,
    /// Initial concentration (M).
    pub c1: f64,
    /// Initial volume (mL).
    pub v1: f64,
    /// Final volume (mL).
    pub v2: f64,
}

/// Compute the volume of an ideal gas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasLawRequest {
    /// Pressure (atm).
    #[serde(rename = "P")]
    pub pressure: f64,
    /// Amount of gas (mol).
    #[serde(rename = "n")]
    pub moles: f64,
    /// Temperature (K).
    #[serde(rename = "T")]
    pub temperature: f64,
}

/// A request for any of the supported experiments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "experiment", rename_all = "snake_case")]
pub enum ExperimentRequest {
    AcidBase(AcidBaseRequest),
    Dilution(DilutionRequest),
    GasLaw(GasLawRequest),
}

impl ExperimentRequest {
    /// Which experiment this request runs.
    #[must_use]
    pub fn kind(&self) -> ExperimentKind {
        match self {
            ExperimentRequest::AcidBase(_) => ExperimentKind::AcidBase,
            ExperimentRequest::Dilution(_) => ExperimentKind::Dilution,
            ExperimentRequest::GasLaw(_) => ExperimentKind::GasLaw,
        }
    }

    /// Decode a request from its JSON wire form.
    ///
    /// Malformed JSON, an unknown experiment tag, an unsupported substance,
    /// and missing or non-numeric fields all surface as `InvalidInput`.
    pub fn from_json(body: &str) -> Result<Self, ChemError> {
        serde_json::from_str(body).map_err(|e| ChemError::InvalidInput(e.to_string()))
    }
}

impl From<AcidBaseRequest> for ExperimentRequest {
    fn from(req: AcidBaseRequest) -> Self {
        ExperimentRequest::AcidBase(req)
    }
}

impl From<DilutionRequest> for ExperimentRequest {
    fn from(req: DilutionRequest) -> Self {
        ExperimentRequest::Dilution(req)
    }
}

impl From<GasLawRequest> for ExperimentRequest {
    fn from(req: GasLawRequest) -> Self {
        ExperimentRequest::GasLaw(req)
    }
}

fn default_solute() -> String {
    DEFAULT_SOLUTE.to_string()
}
