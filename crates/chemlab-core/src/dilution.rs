//! Dilution by conservation of solute moles (C1V1 = C2V2).

use crate::constants::{DEFAULT_SOLUTE, MAX_FILL_PERCENT, MIN_FILL_PERCENT};
use crate::experiment::{require_positive, require_representable, ChemError, Experiment};
use crate::request::{DilutionRequest, ExperimentKind};
use crate::result::DilutionResult;

impl DilutionRequest {
    /// C2 = C1 × V1 / V2.
    #[must_use]
    pub fn final_concentration(&self) -> f64 {
        self.c1 * (self.v1 / self.v2)
    }
}

impl Experiment for DilutionRequest {
    type Output = DilutionResult;
    const KIND: ExperimentKind = ExperimentKind::Dilution;

    fn validate(&self) -> Result<(), ChemError> {
        require_positive("c1", self.c1)?;
        require_positive("v1", self.v1)?;
        require_positive("v2", self.v2)?;
        require_representable("c2", self.final_concentration())?;
        Ok(())
    }

    fn evaluate(&self) -> DilutionResult {
        let c2 = self.final_concentration();
        let solute = match self.solute.trim() {
            "" => DEFAULT_SOLUTE.to_string(),
            name => name.to_string(),
        };
        DilutionResult {
            solute,
            c1: self.c1,
            v1: self.v1,
            v2: self.v2,
            c2,
            fill_percent: fill_percent(self.c1, c2),
        }
    }
}

/// Tube fill level: the remaining fraction of the stock concentration,
/// floored so a very dilute solution stays visible.
fn fill_percent(c1: f64, c2: f64) -> f64 {
    (c2 / c1 * 100.0).clamp(MIN_FILL_PERCENT, MAX_FILL_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn request(c1: f64, v1: f64, v2: f64) -> DilutionRequest {
        DilutionRequest {
            solute: "NaCl".into(),
            c1,
            v1,
            v2,
        }
    }

    #[test]
    fn tenfold_dilution() {
        let res = request(1.0, 10.0, 100.0).run().unwrap();
        assert_relative_eq!(res.c2, 0.1, epsilon = 1e-12);
        assert_relative_eq!(res.c2 * res.v2, res.c1 * res.v1, epsilon = 1e-12);
        assert_relative_eq!(res.fill_percent, 10.0);
    }

    #[test]
    fn fill_tracks_concentration_ratio() {
        let res = request(2.0, 50.0, 100.0).run().unwrap();
        assert_relative_eq!(res.c2, 1.0);
        assert_relative_eq!(res.fill_percent, 50.0);
    }

    #[test]
    fn fill_is_floored() {
        let res = request(1.0, 1.0, 1000.0).run().unwrap();
        assert_relative_eq!(res.fill_percent, MIN_FILL_PERCENT);
    }

    #[test]
    fn fill_is_capped_when_volume_shrinks() {
        let res = request(1.0, 100.0, 50.0).run().unwrap();
        assert_relative_eq!(res.c2, 2.0);
        assert_relative_eq!(res.fill_percent, MAX_FILL_PERCENT);
    }

    #[test]
    fn blank_solute_falls_back() {
        let req = DilutionRequest {
            solute: "   ".into(),
            c1: 1.0,
            v1: 1.0,
            v2: 2.0,
        };
        assert_eq!(req.run().unwrap().solute, "Solution");
    }

    #[test]
    fn solute_is_trimmed_and_echoed() {
        let req = DilutionRequest {
            solute: " KMnO4 ".into(),
            c1: 1.0,
            v1: 1.0,
            v2: 2.0,
        };
        assert_eq!(req.run().unwrap().solute, "KMnO4");
    }

    #[test]
    fn rejects_zero_final_volume() {
        let err = request(1.0, 10.0, 0.0).run().unwrap_err();
        assert!(matches!(err, ChemError::InvalidInput(_)));
    }

    #[test]
    fn rejects_infinite_concentration() {
        assert!(request(f64::INFINITY, 10.0, 100.0).run().is_err());
    }

    #[test]
    fn rejects_overflowing_final_concentration() {
        let err = request(1e300, 1e300, 1.0).run().unwrap_err();
        assert!(err.to_string().contains("c2"));
    }

    #[test]
    fn rejects_underflowing_final_concentration() {
        let err = request(1e-200, 1e-200, 1e200).run().unwrap_err();
        assert!(err.to_string().contains("c2"), "{err}");
    }

    #[test]
    fn huge_equal_volumes_keep_concentration() {
        let res = request(1e200, 1e200, 1e200).run().unwrap();
        assert_relative_eq!(res.c2, 1e200);
        assert_relative_eq!(res.fill_percent, 100.0);
    }
}
