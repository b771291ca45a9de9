//! Ideal gas law, solved for volume: V = nRT / P.

use crate::constants::{BALLOON_REFERENCE_VOLUME, GAS_CONSTANT_R};
use crate::experiment::{require_positive, require_representable, ChemError, Experiment};
use crate::request::{ExperimentKind, GasLawRequest};
use crate::result::GasLawResult;

impl GasLawRequest {
    /// Gas volume in liters.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.moles * GAS_CONSTANT_R * (self.temperature / self.pressure)
    }
}

impl Experiment for GasLawRequest {
    type Output = GasLawResult;
    const KIND: ExperimentKind = ExperimentKind::GasLaw;

    fn validate(&self) -> Result<(), ChemError> {
        require_positive("P", self.pressure)?;
        require_positive("n", self.moles)?;
        require_positive("T", self.temperature)?;
        let volume = self.volume();
        require_representable("V", volume)?;
        require_representable("scale", volume / BALLOON_REFERENCE_VOLUME)?;
        Ok(())
    }

    fn evaluate(&self) -> GasLawResult {
        let volume = self.volume();
        GasLawResult {
            pressure: self.pressure,
            moles: self.moles,
            temperature: self.temperature,
            volume,
            scale: volume / BALLOON_REFERENCE_VOLUME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn request(p: f64, n: f64, t: f64) -> GasLawRequest {
        GasLawRequest {
            pressure: p,
            moles: n,
            temperature: t,
        }
    }

    #[test]
    fn half_mole_at_room_temperature() {
        let res = request(1.0, 0.5, 298.0).run().unwrap();
        assert_abs_diff_eq!(res.volume, 12.23, epsilon = 0.01);
        assert_abs_diff_eq!(res.scale, res.volume / 10.0, epsilon = 1e-12);
    }

    #[test]
    fn doubling_pressure_halves_volume() {
        let low = request(1.0, 1.0, 300.0).run().unwrap();
        let high = request(2.0, 1.0, 300.0).run().unwrap();
        assert_abs_diff_eq!(low.volume, 2.0 * high.volume, epsilon = 1e-12);
    }

    #[test]
    fn echoes_inputs() {
        let res = request(1.5, 2.0, 350.0).run().unwrap();
        assert_abs_diff_eq!(res.pressure, 1.5);
        assert_abs_diff_eq!(res.moles, 2.0);
        assert_abs_diff_eq!(res.temperature, 350.0);
    }

    #[test]
    fn rejects_absolute_zero() {
        let err = request(1.0, 0.5, 0.0).run().unwrap_err();
        assert!(err.to_string().contains('T'));
    }

    #[test]
    fn rejects_negative_pressure() {
        assert!(request(-1.0, 0.5, 298.0).run().is_err());
    }

    #[test]
    fn rejects_overflowing_volume() {
        let err = request(1e-300, 1e300, 1e10).run().unwrap_err();
        assert!(matches!(err, ChemError::InvalidInput(_)));
    }

    #[test]
    fn rejects_underflowing_volume() {
        let err = request(1.0, 1e-200, 1e-200).run().unwrap_err();
        assert!(err.to_string().contains('V'), "{err}");
        assert!(request(1.0, 1e-200, 2e-200).run().is_err());
    }

    #[test]
    fn large_ratio_that_fits_is_accepted() {
        let res = request(1e200, 1.0, 1e200).run().unwrap();
        assert_abs_diff_eq!(res.volume, GAS_CONSTANT_R, epsilon = 1e-12);
    }
}
