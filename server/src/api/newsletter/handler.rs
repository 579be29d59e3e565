//! Newsletter API handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::NewsletterLead;
use crate::db::repository::NewsletterRepository;
use crate::notify;
use crate::utils::AppResult;
use crate::utils::validation::validate_request;

#[derive(Debug, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

/// POST /api/newsletter - public subscribe
///
/// Subscribing an already-subscribed email is a 409; the welcome email goes
/// out on a detached task.
pub async fn subscribe(
    State(state): State<ServerState>,
    Json(req): Json<SubscribeRequest>,
) -> AppResult<(StatusCode, Json<NewsletterLead>)> {
    validate_request(&req)?;

    let repo = NewsletterRepository::new(state.get_db());
    let lead = repo.add(&req.email).await?;

    tracing::info!(email = %lead.email, "Newsletter subscription");
    notify::newsletter_subscribed(&state, &lead.email);

    Ok((StatusCode::CREATED, Json(lead)))
}

/// GET /api/admin/newsletter
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<NewsletterLead>>> {
    let repo = NewsletterRepository::new(state.get_db());
    let leads = repo.find_all().await?;
    Ok(Json(leads))
}
