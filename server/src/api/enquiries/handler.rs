//! Enquiry API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Enquiry, EnquiryCreate};
use crate::db::repository::EnquiryRepository;
use crate::notify;
use crate::utils::validation::validate_request;
use crate::utils::{AppError, AppResult};

/// POST /api/enquiries - public contact form
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<EnquiryCreate>,
) -> AppResult<(StatusCode, Json<Enquiry>)> {
    validate_request(&data)?;

    let repo = EnquiryRepository::new(state.get_db());
    let enquiry = repo.create(data).await?;

    tracing::info!(from = %enquiry.email, subject = %enquiry.subject, "Enquiry received");
    notify::enquiry_created(&state, &enquiry);

    Ok((StatusCode::CREATED, Json(enquiry)))
}

/// GET /api/admin/enquiries
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Enquiry>>> {
    let repo = EnquiryRepository::new(state.get_db());
    let enquiries = repo.find_all().await?;
    Ok(Json(enquiries))
}

/// DELETE /api/admin/enquiries/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = EnquiryRepository::new(state.get_db());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Enquiry {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
