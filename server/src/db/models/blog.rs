//! Blog model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// A blog post. Full CRUD by admin, public read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Create payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogCreate {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub author: String,
    #[validate(length(max = 2048, message = "too long"))]
    pub image: String,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub category: String,
}

/// Allow-listed partial update payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
