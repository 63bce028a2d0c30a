//! API route handlers
//!
//! Every response uses the same envelope: `{status: "success", data|message}`
//! on success, `{status: "error", error, error_type}` on failure. Validation
//! failures (including unparsable request bodies) map to 400
//! `validation_error`; everything else maps to 500 `server_error`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use analytics::forecast::PredictionRequest;
use analytics::AnalyticsError;

use crate::AppState;

const SERVICE_NAME: &str = "job-market-insights";

type ApiResult = (StatusCode, Json<Value>);

fn success(data: impl Serialize) -> ApiResult {
    (
        StatusCode::OK,
        Json(json!({"status": "success", "data": data})),
    )
}

fn validation_failure(message: &str) -> ApiResult {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "status": "error",
            "error": message,
            "error_type": "validation_error",
        })),
    )
}

fn failure(err: &AnalyticsError) -> ApiResult {
    if err.is_validation() {
        return validation_failure(&err.to_string());
    }

    tracing::error!(error = %err, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "status": "error",
            "error": err.to_string(),
            "error_type": "server_error",
        })),
    )
}

/// GET /api/jobs/trends
pub async fn get_trends(State(state): State<AppState>) -> ApiResult {
    match state.service.get_job_trends().await {
        Ok(trends) => success(trends),
        Err(err) => failure(&err),
    }
}

/// POST /api/jobs/predict
///
/// Body shape errors are reported through the serde rejection message, which
/// names missing fields.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return validation_failure(&rejection.body_text()),
    };

    match state.service.predict_job_trends(&request) {
        Ok(forecast) => success(forecast),
        Err(err) => failure(&err),
    }
}

/// GET /api/jobs/statistics
pub async fn get_statistics(State(state): State<AppState>) -> ApiResult {
    match state.service.get_statistics().await {
        Ok(stats) => success(stats),
        Err(err) => failure(&err),
    }
}

/// POST /api/jobs/cache/clear
pub async fn clear_cache(State(state): State<AppState>) -> ApiResult {
    state.service.clear_cache();
    (
        StatusCode::OK,
        Json(json!({"status": "success", "message": "Cache cleared"})),
    )
}

/// GET /api/jobs/health
pub async fn health() -> ApiResult {
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Service is healthy",
            "service": SERVICE_NAME,
        })),
    )
}
