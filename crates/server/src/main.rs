//! Server entry point
//!
//! Wires configuration, the job service and the router, then serves.

use std::net::SocketAddr;
use std::sync::Arc;

use service::{AppConfig, JobService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,service=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    // Explicit construction at process start; handlers get the service
    // through router state
    let job_service = Arc::new(JobService::from_config(&config));
    let app = server::app(job_service);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid API_HOST:API_PORT configuration");

    tracing::info!(
        "job market insights API v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
