//! Reservation model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// A table reservation made through the public form. No lifecycle beyond
/// create and admin delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub requests: Option<String>,
    #[serde(default)]
    pub created_at: i64,
}

/// Public create payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationCreate {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub date: String,
    #[validate(length(min = 1, max = 100, message = "must not be empty"))]
    pub time: String,
    #[validate(range(min = 1, max = 20, message = "party size must be between 1 and 20"))]
    pub guests: i64,
    #[validate(length(max = 2000, message = "too long"))]
    pub requests: Option<String>,
}
