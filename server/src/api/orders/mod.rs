//! Orders API module

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/orders", public_routes())
        .nest("/api/admin/orders", admin_routes())
}

fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{reference}/tracking", get(handler::tracking))
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", patch(handler::update_status))
        .route("/{id}/message", post(handler::send_message))
}
