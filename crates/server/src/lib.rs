//! # server
//!
//! REST API for the job market insights service. Exposes trends, statistics,
//! salary prediction, cache management and a health probe under `/api/jobs`.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use jobdata::JobRepository;
use service::JobService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<JobService<JobRepository>>,
}

/// Build the router with middleware around an injected service
pub fn app(service: Arc<JobService<JobRepository>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/jobs/trends", get(routes::get_trends))
        .route("/api/jobs/predict", post(routes::predict))
        .route("/api/jobs/statistics", get(routes::get_statistics))
        .route("/api/jobs/cache/clear", post(routes::clear_cache))
        .route("/api/jobs/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { service })
}
