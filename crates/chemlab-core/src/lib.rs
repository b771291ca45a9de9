//! # chemlab-core
//!
//! Core library for the ChemLab experiment simulator: the request and
//! result model, the acid-base, dilution, and ideal gas law formulas, and
//! the stateless `compute` service.

pub mod acid_base;
pub mod constants;
pub mod dilution;
pub mod draft;
pub mod experiment;
pub mod gas_law;
pub mod presets;
pub mod request;
pub mod result;
pub mod service;
pub mod substance;

// Re-exports
pub use constants::{exit_codes, GAS_CONSTANT_R};
pub use draft::{AcidBaseDraft, DilutionDraft, ExperimentDraft, GasLawDraft};
pub use experiment::{compute, validate, ChemError, Experiment};
pub use presets::example_request;
pub use request::{
    AcidBaseRequest, DilutionRequest, ExperimentKind, ExperimentRequest, GasLawRequest,
};
pub use result::{AcidBaseResult, DilutionResult, ExperimentResult, GasLawResult, Solution};
pub use service::{ExperimentService, LocalService};
pub use substance::{Acid, Base};

/// Run an experiment from its JSON wire form and return the JSON response.
///
/// # Example
/// ```
/// let out = chemlab_core::compute_json(
///     r#"{"experiment":"dilution","c1":1.0,"v1":10,"v2":100}"#,
/// ).unwrap();
/// assert!(out.contains("\"c2\":0.1"));
/// ```
pub fn compute_json(body: &str) -> Result<String, ChemError> {
    let request = ExperimentRequest::from_json(body)?;
    let result = compute(&request)?;
    serde_json::to_string(&result).map_err(|e| ChemError::InvalidInput(e.to_string()))
}
