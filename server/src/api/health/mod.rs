//! Health check route
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /health | GET | none |
//!
//! Liveness means the storage engine answers a trivial query.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// ok | error
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    environment: String,
    /// connected | disconnected
    database: &'static str,
}

// Server start time, set on first health probe
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub async fn health(State(state): State<ServerState>) -> (http::StatusCode, Json<HealthResponse>) {
    let db_ok = state.db.query("RETURN 1").await.is_ok();

    let response = HealthResponse {
        status: if db_ok { "ok" } else { "error" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime_seconds(),
        environment: state.config.environment.clone(),
        database: if db_ok { "connected" } else { "disconnected" },
    };

    let status = if db_ok {
        http::StatusCode::OK
    } else {
        http::StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
