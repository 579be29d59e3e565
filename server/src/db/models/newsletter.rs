//! Newsletter lead model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// One newsletter subscription. The email column carries a unique index, so
/// subscribing twice is a conflict rather than a duplicate row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterLead {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub email: String,
    #[serde(default)]
    pub created_at: i64,
}
