//! Blogs API module

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/blogs", get(handler::list))
        .route("/api/blogs/{id}", get(handler::get_by_id))
        .nest("/api/admin/blogs", admin_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", patch(handler::update).delete(handler::delete))
}
