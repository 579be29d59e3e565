//! Reservation API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate};
use crate::db::repository::ReservationRepository;
use crate::notify;
use crate::utils::validation::validate_request;
use crate::utils::{AppError, AppResult};

/// POST /api/reservations - public booking form
///
/// Confirmation and admin alert go out on detached tasks; a mail failure
/// never fails the booking.
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<ReservationCreate>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    validate_request(&data)?;

    let repo = ReservationRepository::new(state.get_db());
    let reservation = repo.create(data).await?;

    tracing::info!(
        guest = %reservation.name,
        date = %reservation.date,
        time = %reservation.time,
        "Reservation created"
    );
    notify::reservation_created(&state, &reservation);

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/admin/reservations
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    let repo = ReservationRepository::new(state.get_db());
    let reservations = repo.find_all().await?;
    Ok(Json(reservations))
}

/// DELETE /api/admin/reservations/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = ReservationRepository::new(state.get_db());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Reservation {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
