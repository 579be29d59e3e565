//! Newsletter API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/newsletter", post(handler::subscribe))
        .route("/api/admin/newsletter", get(handler::list))
}
