//! The computation service seam.
//!
//! Callers hold an `ExperimentService` and do not care whether the
//! formulas run in-process or behind an HTTP endpoint.

use crate::experiment::{compute, ChemError};
use crate::request::ExperimentRequest;
use crate::result::ExperimentResult;

/// Something that turns a request into a result.
pub trait ExperimentService: Send + Sync {
    /// Run one experiment. Exactly one result or one error per call.
    fn run(&self, request: &ExperimentRequest) -> Result<ExperimentResult, ChemError>;

    /// Short description used in logs.
    fn name(&self) -> &str;
}

/// Runs `compute` in the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalService;

impl LocalService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExperimentService for LocalService {
    fn run(&self, request: &ExperimentRequest) -> Result<ExperimentResult, ChemError> {
        compute(request)
    }

    fn name(&self) -> &str {
        "local"
    }
}
