//! Suite model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// A lodging listing. Read-only to the public; seeded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suite {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
    /// Integer currency units (KSh) per night
    pub price_per_night: i64,
    pub image: String,
    pub amenities: Vec<String>,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}
