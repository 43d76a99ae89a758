// src/api/scan.rs

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::api::AppState;
use crate::core::models::ScanTarget;
use crate::core::scanner::run_full_scan;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// The target URL. An absent field behaves like an empty one: both are
    /// rejected by target validation.
    #[serde(default)]
    pub url: String,
}

/// `POST /scan`: validates the submitted URL, runs the full scan, and
/// returns the composed report.
///
/// A missing or non-http(s) URL is a 400 with a fixed message. A body that
/// cannot be read as JSON never reaches validation and surfaces as a 500
/// envelope with the parser's message attached for diagnostics. A valid
/// target always produces a 200: probe failures degrade into fallback
/// sub-scores rather than error responses.
pub async fn perform_scan(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "Scan request body could not be parsed.");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to perform security scan",
                    "details": rejection.body_text(),
                })),
            )
                .into_response();
        }
    };

    let target = match ScanTarget::parse(&request.url) {
        Ok(target) => target,
        Err(message) => {
            warn!(url = %request.url, "Rejecting invalid scan target.");
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response();
        }
    };

    let report = run_full_scan(
        &state.client,
        state.certificates.as_ref(),
        state.threat_intel.as_ref(),
        &target,
    )
    .await;

    (StatusCode::OK, Json(report)).into_response()
}
