//! Acids and bases supported by the neutralization experiment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::experiment::ChemError;

/// Strong acids, identified on the wire by their formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Acid {
    #[serde(rename = "HCl")]
    Hydrochloric,
    #[serde(rename = "HNO3")]
    Nitric,
    #[serde(rename = "H2SO4")]
    Sulfuric,
}

/// Strong bases, identified on the wire by their formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    #[serde(rename = "NaOH")]
    SodiumHydroxide,
    #[serde(rename = "KOH")]
    PotassiumHydroxide,
    #[serde(rename = "Ca(OH)2")]
    CalciumHydroxide,
}

impl Acid {
    /// Every supported acid.
    pub const ALL: [Acid; 3] = [Acid::Hydrochloric, Acid::Nitric, Acid::Sulfuric];

    /// H+ ions released per formula unit.
    #[must_use]
    pub fn valence(self) -> f64 {
        match self {
            Acid::Hydrochloric | Acid::Nitric => 1.0,
            Acid::Sulfuric => 2.0,
        }
    }

    /// Wire formula, e.g. `"H2SO4"`.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            Acid::Hydrochloric => "HCl",
            Acid::Nitric => "HNO3",
            Acid::Sulfuric => "H2SO4",
        }
    }

    /// Common name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Acid::Hydrochloric => "Hydrochloric Acid",
            Acid::Nitric => "Nitric Acid",
            Acid::Sulfuric => "Sulfuric Acid",
        }
    }
}

impl Base {
    /// Every supported base.
    pub const ALL: [Base; 3] = [
        Base::SodiumHydroxide,
        Base::PotassiumHydroxide,
        Base::CalciumHydroxide,
    ];

    /// OH- ions released per formula unit.
    #[must_use]
    pub fn valence(self) -> f64 {
        match self {
            Base::SodiumHydroxide | Base::PotassiumHydroxide => 1.0,
            Base::CalciumHydroxide => 2.0,
        }
    }

    /// Wire formula, e.g. `"Ca(OH)2"`.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            Base::SodiumHydroxide => "NaOH",
            Base::PotassiumHydroxide => "KOH",
            Base::CalciumHydroxide => "Ca(OH)2",
        }
    }

    /// Common name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Base::SodiumHydroxide => "Sodium Hydroxide",
            Base::PotassiumHydroxide => "Potassium Hydroxide",
            Base::CalciumHydroxide => "Calcium Hydroxide",
        }
    }
}

impl fmt::Display for Acid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formula())
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formula())
    }
}

impl FromStr for Acid {
    type Err = ChemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Acid::ALL
            .into_iter()
            .find(|acid| acid.formula().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChemError::InvalidInput(format!("unsupported acid: {s}")))
    }
}

impl FromStr for Base {
    type Err = ChemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Base::ALL
            .into_iter()
            .find(|base| base.formula().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChemError::InvalidInput(format!("unsupported base: {s}")))
    }
}
