//! Menu item model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub type MenuItemId = RecordId;

/// One purchasable dish on the menu.
///
/// Prices are display strings (`"KSh 1,800"`); amounts only become numbers
/// where arithmetic happens (cart totals, checkout).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<MenuItemId>,
    pub name: String,
    pub price: String,
    pub original_price: Option<String>,
    pub description: String,
    /// Grouping key, e.g. "Signature Main Plates" - not a separate entity
    pub category: String,
    /// Promotional badge, e.g. "Must Try"
    pub tag: Option<String>,
    pub image: String,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: String,
    pub original_price: Option<String>,
    pub description: String,
    pub category: String,
    pub tag: Option<String>,
    pub image: String,
}

/// Allow-listed partial update payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}
