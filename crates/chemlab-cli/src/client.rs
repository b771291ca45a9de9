//! HTTP client for a remote computation service.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use chemlab_core::{validate, ChemError, ExperimentRequest, ExperimentResult, ExperimentService};

/// Path the service accepts experiment requests on.
pub const RUN_EXPERIMENT_PATH: &str = "/run_experiment";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// `ExperimentService` backed by `POST /run_experiment`.
#[derive(Debug, Clone)]
pub struct HttpService {
    endpoint: String,
    client: Client,
}

impl HttpService {
    /// Create a client for the service rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ChemError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChemError::Config(format!("cannot build HTTP client: {e}")))?;
        let endpoint = format!("{}{RUN_EXPERIMENT_PATH}", base_url.trim_end_matches('/'));
        Ok(Self { endpoint, client })
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ExperimentService for HttpService {
    fn run(&self, request: &ExperimentRequest) -> Result<ExperimentResult, ChemError> {
        // Reject locally so bad input never reaches the network.
        validate(request)?;

        debug!(endpoint = %self.endpoint, experiment = %request.kind(), "posting experiment");
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| ChemError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<ExperimentResult>()
                .map_err(|e| ChemError::ServiceUnavailable(format!("malformed response: {e}")));
        }
        if status == StatusCode::BAD_REQUEST {
            let message = response
                .json::<ErrorBody>()
                .map_or_else(|_| "request rejected by server".to_string(), |b| b.error);
            return Err(ChemError::InvalidInput(message));
        }
        Err(ChemError::ServiceUnavailable(format!(
            "server returned {status}"
        )))
    }

    fn name(&self) -> &str {
        &self.endpoint
    }
}
