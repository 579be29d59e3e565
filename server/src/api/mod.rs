//! API router module
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - register / login / me
//! - [`menu`] - public menu + admin CRUD
//! - [`orders`] - checkout, tracking, admin order management
//! - [`reservations`] - public form + admin list/delete
//! - [`newsletter`] - public subscribe + admin list
//! - [`enquiries`] - public form + admin list/delete
//! - [`blogs`] - public read + admin CRUD
//! - [`suites`] - public listings
//! - [`analytics`] - admin dashboard aggregates
//! - [`settings`] - admin site settings
//!
//! Every `/api/admin/*` route sits behind the auth middleware's admin gate.

pub mod analytics;
pub mod auth;
pub mod blogs;
pub mod enquiries;
pub mod health;
pub mod menu;
pub mod newsletter;
pub mod orders;
pub mod reservations;
pub mod settings;
pub mod suites;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Assemble the full application router.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(menu::router())
        .merge(orders::router())
        .merge(reservations::router())
        .merge(newsletter::router())
        .merge(enquiries::router())
        .merge(blogs::router())
        .merge(suites::router())
        .merge(analytics::router())
        .merge(settings::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(state)
}
