//! Menu API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use savannah_shared::parse_price;

use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::MenuItemRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_TEXT_LEN, require_text};
use crate::utils::{AppError, AppResult, FieldIssue};

/// GET /api/menu - the whole catalog, grouped for the storefront
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_all().await?;
    Ok(Json(items))
}

fn check_price(issues: &mut Vec<FieldIssue>, price: &str, field: &str) {
    if parse_price(price) <= 0 {
        issues.push(FieldIssue::new(
            field,
            "must contain a positive amount, e.g. 'KSh 450'",
        ));
    }
}

fn validate_create(data: &MenuItemCreate) -> Result<(), AppError> {
    let mut issues = Vec::new();
    require_text(&mut issues, &data.name, "name", MAX_NAME_LEN);
    require_text(&mut issues, &data.description, "description", MAX_TEXT_LEN);
    require_text(&mut issues, &data.category, "category", MAX_NAME_LEN);
    check_price(&mut issues, &data.price, "price");
    if let Some(original) = &data.original_price {
        check_price(&mut issues, original, "original_price");
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation_issues(issues))
    }
}

/// POST /api/admin/menu
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    validate_create(&data)?;

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.create(data).await?;

    tracing::info!(item = %item.name, "Menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /api/admin/menu/{id} - allow-listed partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let mut issues = Vec::new();
    if let Some(name) = &data.name {
        require_text(&mut issues, name, "name", MAX_NAME_LEN);
    }
    if let Some(price) = &data.price {
        check_price(&mut issues, price, "price");
    }
    if !issues.is_empty() {
        return Err(AppError::validation_issues(issues));
    }

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.update(&id, data).await?;
    Ok(Json(item))
}

/// DELETE /api/admin/menu/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = MenuItemRepository::new(state.get_db());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Menu item {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
