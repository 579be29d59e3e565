//! Suite API handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::Suite;
use crate::db::repository::SuiteRepository;
use crate::utils::AppResult;

/// GET /api/suites - the lodging listings, cheapest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Suite>>> {
    let repo = SuiteRepository::new(state.get_db());
    let suites = repo.find_all().await?;
    Ok(Json(suites))
}
