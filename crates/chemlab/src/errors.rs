//! Error handling and exit codes.

use chemlab_core::constants::exit_codes;
use chemlab_core::ChemError;

/// Exit code for an experiment error.
#[must_use]
pub fn handle_error(err: &ChemError) -> i32 {
    match err {
        ChemError::InvalidInput(_) => exit_codes::ERROR_INVALID_INPUT,
        ChemError::ServiceUnavailable(_) => exit_codes::ERROR_SERVICE_UNAVAILABLE,
        ChemError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for any application error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ChemError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

/// Recovery hint shown under the error message.
#[must_use]
pub fn hint(err: &ChemError) -> Option<&'static str> {
    match err {
        ChemError::InvalidInput(_) => {
            Some("omit a flag to use its example value (see `chemlab examples`)")
        }
        ChemError::ServiceUnavailable(_) => {
            Some("is chemlab-server running? unset --server to compute locally")
        }
        ChemError::Config(_) => None,
    }
}
