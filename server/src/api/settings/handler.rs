//! Site settings API handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{SiteSettings, SiteSettingsUpdate};
use crate::db::repository::SiteSettingsRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/admin/settings
pub async fn get_settings(State(state): State<ServerState>) -> AppResult<Json<SiteSettings>> {
    let repo = SiteSettingsRepository::new(state.get_db());
    let settings = repo.get_or_create().await?;
    Ok(Json(settings))
}

/// PUT /api/admin/settings - allow-listed partial update
pub async fn update_settings(
    State(state): State<ServerState>,
    Json(data): Json<SiteSettingsUpdate>,
) -> AppResult<Json<SiteSettings>> {
    if let Some(minimum) = data.minimum_order_amount
        && minimum < 0
    {
        return Err(AppError::validation(
            "minimum_order_amount",
            "must not be negative",
        ));
    }

    let repo = SiteSettingsRepository::new(state.get_db());
    let settings = repo.update(data).await?;

    tracing::info!(
        ordering_enabled = settings.ordering_enabled,
        minimum_order_amount = settings.minimum_order_amount,
        "Site settings updated"
    );
    Ok(Json(settings))
}
