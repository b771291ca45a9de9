//! Example parameter sets offered to new users.

use crate::request::{
    AcidBaseRequest, DilutionRequest, ExperimentKind, ExperimentRequest, GasLawRequest,
};
use crate::substance::{Acid, Base};

/// 0.1 M HCl (20 mL) against 0.1 M NaOH (20 mL).
#[must_use]
pub fn acid_base_example() -> AcidBaseRequest {
    AcidBaseRequest {
        acid: Acid::Hydrochloric,
        acid_molarity: 0.1,
        acid_volume: 20.0,
        base: Base::SodiumHydroxide,
        base_molarity: 0.1,
        base_volume: 20.0,
    }
}

/// 10 mL of 1.0 M salt water made up to 100 mL.
#[must_use]
pub fn dilution_example() -> DilutionRequest {
    DilutionRequest {
        solute: "Salt Water".to_string(),
        c1: 1.0,
        v1: 10.0,
        v2: 100.0,
    }
}

/// Half a mole of gas at 1 atm and 298 K.
#[must_use]
pub fn gas_law_example() -> GasLawRequest {
    GasLawRequest {
        pressure: 1.0,
        moles: 0.5,
        temperature: 298.0,
    }
}

/// The example request for `kind`.
#[must_use]
pub fn example_request(kind: ExperimentKind) -> ExperimentRequest {
    match kind {
        ExperimentKind::AcidBase => acid_base_example().into(),
        ExperimentKind::Dilution => dilution_example().into(),
        ExperimentKind::GasLaw => gas_law_example().into(),
    }
}
