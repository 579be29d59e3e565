//! Order API handlers
//!
//! Checkout and tracking are public; listing, status changes and the
//! free-text customer message sit behind the admin gate.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{FulfillmentStatus, OrderDetail};
use crate::db::repository::{OrderRepository, UserRepository};
use crate::notify;
use crate::notify::templates;
use crate::orders::{CreateOrderRequest, OrderTracking, normalize_reference, place_order};
use crate::utils::validation::{MAX_TEXT_LEN, require_text};
use crate::utils::{AppError, AppResult};

/// One loyalty point per 100 KSh spent
const LOYALTY_DIVISOR: i64 = 100;

/// POST /api/orders - checkout
///
/// Persists the order, then fires the receipt and admin alert on detached
/// tasks and accrues loyalty points best-effort. Nothing after the
/// persistence step can fail the request.
pub async fn create(
    State(state): State<ServerState>,
    Json(req): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderDetail>)> {
    let detail = place_order(&state.db, req).await?;

    notify::order_placed(&state, &detail);
    accrue_loyalty_points(&state, &detail).await;

    Ok((StatusCode::CREATED, Json(detail)))
}

/// Customers whose username is their email collect points on every order.
async fn accrue_loyalty_points(state: &ServerState, order: &OrderDetail) {
    let points = order.total_amount / LOYALTY_DIVISOR;
    if points == 0 {
        return;
    }
    let repo = UserRepository::new(state.get_db());
    match repo.add_loyalty_points(&order.customer_email, points).await {
        Ok(true) => {
            tracing::info!(email = %order.customer_email, points, "Loyalty points accrued");
        }
        Ok(false) => {}
        Err(e) => {
            tracing::warn!(error = %e, email = %order.customer_email, "Loyalty accrual failed");
        }
    }
}

/// GET /api/orders/{reference}/tracking - public lookup
///
/// Tolerates a leading `#` and any casing; resolves exact id first, then
/// suffix.
pub async fn tracking(
    State(state): State<ServerState>,
    Path(reference): Path<String>,
) -> AppResult<Json<OrderTracking>> {
    let normalized = normalize_reference(&reference);
    let repo = OrderRepository::new(state.get_db());
    let detail = repo
        .find_by_reference(&normalized)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", reference)))?;

    Ok(Json(OrderTracking::from(detail)))
}

/// GET /api/admin/orders - all orders, newest first, items nested
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderDetail>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_all_details().await?;
    Ok(Json(orders))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: FulfillmentStatus,
}

/// PATCH /api/admin/orders/{id} - set the fulfillment status
///
/// The transition fires its notification on a detached task; a failed email
/// never rolls back the status change.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> AppResult<Json<OrderDetail>> {
    let repo = OrderRepository::new(state.get_db());
    let detail = repo.update_status(&id, req.status).await?;

    tracing::info!(order_id = %detail.id, status = ?detail.status, "Order status updated");
    notify::order_status_changed(&state, &detail);

    Ok(Json(detail))
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// POST /api/admin/orders/{id}/message - ad hoc email to the customer
///
/// Unlike the status notifications this send is awaited: the admin asked
/// for exactly this delivery, so a transport failure surfaces as a 500.
pub async fn send_message(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> AppResult<Json<OrderDetail>> {
    let mut issues = Vec::new();
    require_text(&mut issues, &req.message, "message", MAX_TEXT_LEN);
    if !issues.is_empty() {
        return Err(AppError::validation_issues(issues));
    }

    let repo = OrderRepository::new(state.get_db());
    let detail = repo
        .find_detail(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    let (subject, html) = templates::custom_message(&detail, &req.message);
    state
        .mailer
        .send(&detail.customer_email, &subject, &html)
        .await
        .map_err(|e| AppError::internal(format!("Failed to send message: {e}")))?;

    tracing::info!(order_id = %detail.id, email = %detail.customer_email, "Admin message sent");
    Ok(Json(detail))
}
