use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use utoipa::ToSchema;

// ============================================================================
// Logging
// ============================================================================

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Text,
    /// One JSON object per event, for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = QualiFlowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(QualiFlowError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used as the filter
/// directive (e.g. `info` or `qf_platform=debug,info`).
pub fn init_logging(default_level: &str, format: LogFormat) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            QualiFlowError::Logging(format!("Invalid log level '{}': {}", default_level, e))
        })?,
    };

    let result = match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(false)
            .try_init(),
    };

    result.map_err(|e| QualiFlowError::Logging(e.to_string()))
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Up,
    Ready,
}

/// Body returned by the liveness and readiness probes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: i64,
}

impl HealthReport {
    pub fn new(
        status: HealthStatus,
        version: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let uptime_seconds = (Utc::now() - started_at).num_seconds().max(0);
        Self {
            status,
            version: version.into(),
            started_at,
            uptime_seconds,
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum QualiFlowError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, QualiFlowError>;
