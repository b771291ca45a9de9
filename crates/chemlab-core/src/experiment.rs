//! The `Experiment` trait and the `compute` entry point.
//!
//! Each request type implements `Experiment`. `compute` matches the
//! tagged request exhaustively, validates, then evaluates. Evaluation
//! never runs on unvalidated input.

use tracing::debug;

use crate::request::{ExperimentKind, ExperimentRequest};
use crate::result::ExperimentResult;

/// Error type for experiment computation and delivery.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChemError {
    /// A parameter was missing, non-numeric, non-positive, or unsupported.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The computation service could not be reached.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A single closed-form experiment.
pub trait Experiment {
    /// Result produced by `evaluate`.
    type Output: Into<ExperimentResult>;

    /// Experiment this request belongs to.
    const KIND: ExperimentKind;

    /// Check every parameter before evaluation.
    fn validate(&self) -> Result<(), ChemError>;

    /// Apply the formula. Callers must have validated first.
    fn evaluate(&self) -> Self::Output;

    /// Validate and evaluate.
    fn run(&self) -> Result<Self::Output, ChemError> {
        if let Err(e) = self.validate() {
            debug!(experiment = %Self::KIND, error = %e, "rejected experiment input");
            return Err(e);
        }
        debug!(experiment = %Self::KIND, "computing experiment");
        Ok(self.evaluate())
    }
}

/// Run any experiment request.
///
/// Pure: the same request always yields the same result, and a rejected
/// request yields no partial result.
pub fn compute(request: &ExperimentRequest) -> Result<ExperimentResult, ChemError> {
    let result = match request {
        ExperimentRequest::AcidBase(req) => req.run()?.into(),
        ExperimentRequest::Dilution(req) => req.run()?.into(),
        ExperimentRequest::GasLaw(req) => req.run()?.into(),
    };
    Ok(result)
}

/// Check a request without evaluating it.
pub fn validate(request: &ExperimentRequest) -> Result<(), ChemError> {
    match request {
        ExperimentRequest::AcidBase(req) => req.validate(),
        ExperimentRequest::Dilution(req) => req.validate(),
        ExperimentRequest::GasLaw(req) => req.validate(),
    }
}

/// Require a finite, strictly positive value.
pub(crate) fn require_positive(field: &str, value: f64) -> Result<(), ChemError> {
    if !value.is_finite() {
        return Err(ChemError::InvalidInput(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value <= 0.0 {
        return Err(ChemError::InvalidInput(format!(
            "{field} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}

/// Reject inputs whose derived quantity overflows `f64` or underflows to zero.
pub(crate) fn require_representable(quantity: &str, value: f64) -> Result<(), ChemError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChemError::InvalidInput(format!(
            "{quantity} is out of range for these inputs"
        )))
    }
}
