//! Site settings model (singleton)

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Singleton settings row the storefront and checkout consult.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub opening_hours: String,
    /// When false, checkout rejects every new order
    pub ordering_enabled: bool,
    /// Minimum order total in integer currency units (KSh)
    pub minimum_order_amount: i64,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: None,
            opening_hours: "Mon-Sun 11:00 - 23:00".to_string(),
            ordering_enabled: true,
            minimum_order_amount: 0,
        }
    }
}

/// Allow-listed partial update payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_order_amount: Option<i64>,
}
