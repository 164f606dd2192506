//! QualiFlow Platform Server
//!
//! Serves the platform REST APIs over a single in-memory store:
//! - Entity APIs under `/api` (branches, sectors, users, documents,
//!   workflows, processes, activities)
//! - Probes: `/health`, `/ready`
//! - OpenAPI document: `/q/openapi`
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QF_CONFIG_PATH` | - | Optional TOML config file |
//! | `QF_API_HOST` | `0.0.0.0` | HTTP bind address |
//! | `QF_API_PORT` / `PORT` | `3000` | HTTP port |
//! | `QF_LOG_LEVEL` | `info` | Log filter when `RUST_LOG` is unset |
//! | `QF_LOG_FORMAT` | `text` | `text` or `json` |
//! | `QF_DEV_MODE` | `false` | Seed development data |
//! | `RUST_LOG` | - | Overrides the log filter |

use anyhow::Result;
use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::OpenApi;

use qf_common::{init_logging, HealthReport, HealthStatus};
use qf_config::PlatformConfig;
use qf_platform::api::{platform_router, PlatformApiDoc};
use qf_platform::seed::DevDataSeeder;
use qf_platform::PlatformStore;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
struct ProbeState {
    started_at: DateTime<Utc>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = PlatformConfig::load()?;

    init_logging(&config.logging.level, config.logging.format)?;

    info!(version = VERSION, "Starting QualiFlow Platform Server");

    let store = PlatformStore::shared();

    if config.dev.seed_data {
        info!("Dev mode enabled, seeding sample data");
        if let Err(e) = DevDataSeeder::new(store.clone()).seed() {
            warn!("Dev data seeding failed: {}", e);
        }
    }

    let probes = Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .with_state(ProbeState { started_at: Utc::now() });

    let app = platform_router(store)
        .merge(probes)
        .route("/q/openapi", get(openapi_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));

    let addr = config.http.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("QualiFlow Platform Server shutdown complete");
    Ok(())
}

async fn health_handler(State(state): State<ProbeState>) -> Json<HealthReport> {
    Json(HealthReport::new(HealthStatus::Up, VERSION, state.started_at))
}

async fn ready_handler(State(state): State<ProbeState>) -> Json<HealthReport> {
    Json(HealthReport::new(HealthStatus::Ready, VERSION, state.started_at))
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(PlatformApiDoc::openapi())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
