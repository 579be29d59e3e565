//! Analytics API module

mod handler;

pub use handler::{AnalyticsResponse, TopItem, compute_analytics};

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/admin/analytics", get(handler::get_analytics))
}
