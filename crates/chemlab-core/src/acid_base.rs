//! Strong acid / strong base neutralization.
//!
//! Both sides are reduced to equivalents (M × mL × valence, i.e. mmol of
//! H+ or OH-). The excess over the combined volume gives the remaining
//! ion concentration in mol/L.

use crate::constants::{
    EQUIVALENCE_TOLERANCE, NEUTRAL_PH, PH_SCALE_MAX, WATER_ION_CONCENTRATION,
};
use crate::experiment::{require_positive, require_representable, ChemError, Experiment};
use crate::request::{AcidBaseRequest, ExperimentKind};
use crate::result::{AcidBaseResult, Solution};

impl AcidBaseRequest {
    /// Millimoles of H+ the acid can release.
    #[must_use]
    pub fn acid_equivalents(&self) -> f64 {
        self.acid_molarity * self.acid_volume * self.acid.valence()
    }

    /// Millimoles of OH- the base can release.
    #[must_use]
    pub fn base_equivalents(&self) -> f64 {
        self.base_molarity * self.base_volume * self.base.valence()
    }

    /// Combined volume of the mixture (mL).
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.acid_volume + self.base_volume
    }
}

impl Experiment for AcidBaseRequest {
    type Output = AcidBaseResult;
    const KIND: ExperimentKind = ExperimentKind::AcidBase;

    fn validate(&self) -> Result<(), ChemError> {
        require_positive("acidM", self.acid_molarity)?;
        require_positive("acidV", self.acid_volume)?;
        require_positive("baseM", self.base_molarity)?;
        require_positive("baseV", self.base_volume)?;
        require_representable("acid equivalents", self.acid_equivalents())?;
        require_representable("base equivalents", self.base_equivalents())?;
        require_representable("total volume", self.total_volume())?;
        Ok(())
    }

    fn evaluate(&self) -> AcidBaseResult {
        let mixture = Mixture::of(
            self.acid_equivalents(),
            self.base_equivalents(),
            self.total_volume(),
        );
        let ph = mixture.ph();
        let result = Solution::from_ph(ph);
        let message = match mixture {
            Mixture::Trace => TRACE_EXCESS_MESSAGE,
            Mixture::Balanced | Mixture::Excess(_) => result.message(),
        };
        AcidBaseResult {
            acid: self.acid,
            base: self.base,
            ph,
            result,
            message: message.to_string(),
        }
    }
}

/// Summary for a mixture whose leftover ions are below water's own level.
pub const TRACE_EXCESS_MESSAGE: &str = "Neutral solution (excess too small to shift pH).";

/// How the acid and base sides of a mixture compare.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mixture {
    /// Equivalents match within tolerance.
    Balanced,
    /// One side is ahead, but by no more than water autoionization.
    Trace,
    /// pH set by the leftover ion concentration.
    Excess(f64),
}

impl Mixture {
    /// Classify H+ and OH- equivalents (mmol) mixed in `total_volume_ml`.
    fn of(acid_eq: f64, base_eq: f64, total_volume_ml: f64) -> Self {
        let scale = acid_eq.max(base_eq);
        if (acid_eq - base_eq).abs() <= EQUIVALENCE_TOLERANCE * scale {
            return Mixture::Balanced;
        }

        // mmol / mL == mol / L
        let excess = (acid_eq - base_eq).abs() / total_volume_ml;
        if excess <= WATER_ION_CONCENTRATION {
            return Mixture::Trace;
        }

        if acid_eq > base_eq {
            Mixture::Excess(-excess.log10())
        } else {
            Mixture::Excess(PH_SCALE_MAX + excess.log10())
        }
    }

    fn ph(self) -> f64 {
        match self {
            Mixture::Balanced | Mixture::Trace => NEUTRAL_PH,
            Mixture::Excess(ph) => ph,
        }
    }
}
