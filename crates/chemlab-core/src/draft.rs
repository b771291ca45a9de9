//! Partially filled experiment parameters.
//!
//! A draft holds whatever the user supplied. `resolve` fills only the
//! fields that are absent with the example values from `presets`; a
//! supplied zero or negative value is kept as-is so that `compute`
//! rejects it instead of silently replacing it.

use crate::presets::{acid_base_example, dilution_example, gas_law_example};
use crate::request::{
    AcidBaseRequest, DilutionRequest, ExperimentKind, ExperimentRequest, GasLawRequest,
};
use crate::substance::{Acid, Base};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcidBaseDraft {
    pub acid: Option<Acid>,
    pub acid_molarity: Option<f64>,
    pub acid_volume: Option<f64>,
    pub base: Option<Base>,
    pub base_molarity: Option<f64>,
    pub base_volume: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DilutionDraft {
    pub solute: Option<String>,
    pub c1: Option<f64>,
    pub v1: Option<f64>,
    pub v2: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GasLawDraft {
    pub pressure: Option<f64>,
    pub moles: Option<f64>,
    pub temperature: Option<f64>,
}

/// Draft for any experiment.
#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentDraft {
    AcidBase(AcidBaseDraft),
    Dilution(DilutionDraft),
    GasLaw(GasLawDraft),
}

impl AcidBaseDraft {
    #[must_use]
    pub fn resolve(self) -> AcidBaseRequest {
        let example = acid_base_example();
        AcidBaseRequest {
            acid: self.acid.unwrap_or(example.acid),
            acid_molarity: self.acid_molarity.unwrap_or(example.acid_molarity),
            acid_volume: self.acid_volume.unwrap_or(example.acid_volume),
            base: self.base.unwrap_or(example.base),
            base_molarity: self.base_molarity.unwrap_or(example.base_molarity),
            base_volume: self.base_volume.unwrap_or(example.base_volume),
        }
    }
}

impl DilutionDraft {
    /// A blank solute name counts as missing.
    #[must_use]
    pub fn resolve(self) -> DilutionRequest {
        let example = dilution_example();
        DilutionRequest {
            solute: self
                .solute
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(example.solute),
            c1: self.c1.unwrap_or(example.c1),
            v1: self.v1.unwrap_or(example.v1),
            v2: self.v2.unwrap_or(example.v2),
        }
    }
}

impl GasLawDraft {
    #[must_use]
    pub fn resolve(self) -> GasLawRequest {
        let example = gas_law_example();
        GasLawRequest {
            pressure: self.pressure.unwrap_or(example.pressure),
            moles: self.moles.unwrap_or(example.moles),
            temperature: self.temperature.unwrap_or(example.temperature),
        }
    }
}

impl ExperimentDraft {
    /// An empty draft for `kind`.
    #[must_use]
    pub fn empty(kind: ExperimentKind) -> Self {
        match kind {
            ExperimentKind::AcidBase => ExperimentDraft::AcidBase(AcidBaseDraft::default()),
            ExperimentKind::Dilution => ExperimentDraft::Dilution(DilutionDraft::default()),
            ExperimentKind::GasLaw => ExperimentDraft::GasLaw(GasLawDraft::default()),
        }
    }

    /// Build the immutable request, filling absent fields with examples.
    #[must_use]
    pub fn resolve(self) -> ExperimentRequest {
        match self {
            ExperimentDraft::AcidBase(d) => d.resolve().into(),
            ExperimentDraft::Dilution(d) => d.resolve().into(),
            ExperimentDraft::GasLaw(d) => d.resolve().into(),
        }
    }
}
