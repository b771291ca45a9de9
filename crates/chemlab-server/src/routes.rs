//! HTTP handlers and router.

// axum handlers are async even when they never await
#![allow(clippy::unused_async)]

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use chemlab_core::{
    compute, example_request, ChemError, ExperimentKind, ExperimentRequest, ExperimentResult,
};

/// Build the service router.
pub fn router() -> Router {
    Router::new()
        .route("/run_experiment", post(run_experiment))
        .route("/experiments", get(list_experiments))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// `ChemError` rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub ChemError);

impl From<ChemError> for ApiError {
    fn from(err: ChemError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ChemError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ChemError::InvalidInput(_) => {
                warn!(error = %self.0, "rejected experiment request");
                StatusCode::BAD_REQUEST
            }
            ChemError::ServiceUnavailable(_) | ChemError::Config(_) => {
                error!(error = %self.0, "experiment request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

async fn run_experiment(
    payload: Result<Json<ExperimentRequest>, JsonRejection>,
) -> Result<Json<ExperimentResult>, ApiError> {
    let Json(request) = payload?;
    let result = compute(&request)?;
    Ok(Json(result))
}

#[derive(Debug, Serialize)]
struct ExperimentInfo {
    experiment: ExperimentKind,
    title: &'static str,
    description: &'static str,
    example: ExperimentRequest,
}

async fn list_experiments() -> Json<Vec<ExperimentInfo>> {
    let infos = ExperimentKind::ALL
        .into_iter()
        .map(|kind| ExperimentInfo {
            experiment: kind,
            title: kind.title(),
            description: kind.description(),
            example: example_request(kind),
        })
        .collect();
    Json(infos)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
