//! Enquiry model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// A contact-form message. Created publicly, deleted by admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enquiry {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Public create payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnquiryCreate {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub subject: String,
    #[validate(length(min = 1, max = 2000, message = "must be between 1 and 2000 characters"))]
    pub message: String,
}
