//! Blog API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Blog, BlogCreate, BlogUpdate};
use crate::db::repository::BlogRepository;
use crate::utils::validation::validate_request;
use crate::utils::{AppError, AppResult};

/// GET /api/blogs
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Blog>>> {
    let repo = BlogRepository::new(state.get_db());
    let blogs = repo.find_all().await?;
    Ok(Json(blogs))
}

/// GET /api/blogs/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Blog>> {
    let repo = BlogRepository::new(state.get_db());
    let blog = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Blog {} not found", id)))?;
    Ok(Json(blog))
}

/// POST /api/admin/blogs
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<BlogCreate>,
) -> AppResult<(StatusCode, Json<Blog>)> {
    validate_request(&data)?;

    let repo = BlogRepository::new(state.get_db());
    let blog = repo.create(data).await?;

    tracing::info!(title = %blog.title, "Blog post created");
    Ok((StatusCode::CREATED, Json(blog)))
}

/// PATCH /api/admin/blogs/{id} - allow-listed partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<BlogUpdate>,
) -> AppResult<Json<Blog>> {
    let repo = BlogRepository::new(state.get_db());
    let blog = repo.update(&id, data).await?;
    Ok(Json(blog))
}

/// DELETE /api/admin/blogs/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = BlogRepository::new(state.get_db());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Blog {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
