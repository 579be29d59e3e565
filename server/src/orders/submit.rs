//! Order submission
//!
//! Validates a checkout request against the live menu catalog, computes the
//! authoritative total server-side, and persists the order atomically with
//! its item snapshots. Validation reports every offending field at once -
//! the storefront highlights them all in a single round trip.

use std::collections::HashSet;

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{FulfillmentStatus, NewOrder, NewOrderItem, OrderDetail, PaymentMethod};
use crate::db::repository::{MenuItemRepository, OrderRepository, SiteSettingsRepository};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, is_valid_email,
    require_text,
};
use crate::utils::{AppError, AppResult, FieldIssue, now_millis};

/// One submitted line item. `price` is the unit price the customer saw;
/// `item_name` the snapshot name stored with the order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub menu_item_id: String,
    pub quantity: i64,
    pub price: i64,
    pub item_name: String,
}

/// Checkout request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItemInput>,
}

/// Canonical `menu_item:key` form used to compare submitted ids against the
/// catalog.
fn canonical_menu_id(id: &str) -> String {
    let key = id.strip_prefix("menu_item:").unwrap_or(id);
    format!("menu_item:{key}")
}

/// Collect every validation issue in the request. Pure so it can be tested
/// without a store; the caller supplies the set of known catalog ids.
pub fn collect_issues(req: &CreateOrderRequest, catalog: &HashSet<String>) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    require_text(&mut issues, &req.customer_name, "customerName", MAX_NAME_LEN);
    require_text(
        &mut issues,
        &req.customer_phone,
        "customerPhone",
        MAX_SHORT_TEXT_LEN,
    );
    require_text(
        &mut issues,
        &req.delivery_address,
        "deliveryAddress",
        MAX_ADDRESS_LEN,
    );

    if req.customer_email.len() > MAX_EMAIL_LEN || !is_valid_email(&req.customer_email) {
        issues.push(FieldIssue::new(
            "customerEmail",
            "must be a valid email address",
        ));
    }

    if req.items.is_empty() {
        issues.push(FieldIssue::new("items", "order must contain at least one item"));
    }

    for (i, item) in req.items.iter().enumerate() {
        if item.quantity < 1 {
            issues.push(FieldIssue::new(
                format!("items[{i}].quantity"),
                "must be at least 1",
            ));
        }
        if item.price < 0 {
            issues.push(FieldIssue::new(
                format!("items[{i}].price"),
                "must not be negative",
            ));
        }
        if item.item_name.trim().is_empty() {
            issues.push(FieldIssue::new(
                format!("items[{i}].itemName"),
                "must not be empty",
            ));
        }
        if !catalog.contains(&canonical_menu_id(&item.menu_item_id)) {
            issues.push(FieldIssue::new(
                format!("items[{i}].menuItemId"),
                format!("unknown menu item '{}'", item.menu_item_id),
            ));
        }
    }

    issues
}

/// Authoritative total: sum of quantity x unit price over the submitted
/// items. The client-side total is informational only and never trusted.
pub fn compute_total(items: &[OrderItemInput]) -> i64 {
    items.iter().map(|item| item.quantity * item.price).sum()
}

/// Validate and persist a checkout request.
///
/// Notification side effects belong to the caller - this function only
/// decides and writes.
pub async fn place_order(db: &Surreal<Db>, req: CreateOrderRequest) -> AppResult<OrderDetail> {
    let settings = SiteSettingsRepository::new(db.clone()).get_or_create().await?;
    if !settings.ordering_enabled {
        return Err(AppError::business_rule("Online ordering is currently disabled"));
    }

    let submitted_ids: Vec<String> = req
        .items
        .iter()
        .map(|item| item.menu_item_id.clone())
        .collect();
    let catalog = MenuItemRepository::new(db.clone())
        .existing_ids(&submitted_ids)
        .await?;

    let issues = collect_issues(&req, &catalog);
    if !issues.is_empty() {
        return Err(AppError::validation_issues(issues));
    }

    let total = compute_total(&req.items);
    if total < settings.minimum_order_amount {
        return Err(AppError::validation(
            "items",
            format!(
                "order total {} is below the minimum of {}",
                total, settings.minimum_order_amount
            ),
        ));
    }

    let order = NewOrder {
        customer_name: req.customer_name,
        customer_email: req.customer_email,
        customer_phone: req.customer_phone,
        delivery_address: req.delivery_address,
        payment_method: req.payment_method,
        payment_status: req.payment_method.initial_payment_status(),
        status: FulfillmentStatus::Pending,
        total_amount: total,
        created_at: now_millis(),
    };

    let items: Vec<NewOrderItem> = req
        .items
        .iter()
        .map(|item| NewOrderItem {
            name: item.item_name.clone(),
            quantity: item.quantity,
            unit_price: item.price,
            line_total: item.quantity * item.price,
        })
        .collect();

    let detail = OrderRepository::new(db.clone())
        .create_with_items(order, items)
        .await?;

    tracing::info!(
        order_id = %detail.id,
        total = detail.total_amount,
        items = detail.items.len(),
        "Order placed"
    );

    Ok(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(items: Vec<OrderItemInput>) -> CreateOrderRequest {
        CreateOrderRequest {
            customer_name: "Asha Mwangi".into(),
            customer_email: "asha@example.com".into(),
            customer_phone: "+254 700 000000".into(),
            delivery_address: "12 Riverside Drive, Nairobi".into(),
            payment_method: PaymentMethod::Card,
            items,
        }
    }

    fn item(id: &str, quantity: i64, price: i64) -> OrderItemInput {
        OrderItemInput {
            menu_item_id: id.into(),
            quantity,
            price,
            item_name: "Dish".into(),
        }
    }

    fn catalog(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| canonical_menu_id(id)).collect()
    }

    #[test]
    fn valid_request_has_no_issues() {
        let req = request(vec![item("m1", 2, 450), item("menu_item:m2", 3, 300)]);
        assert!(collect_issues(&req, &catalog(&["m1", "m2"])).is_empty());
    }

    #[test]
    fn every_offending_field_is_reported() {
        let mut req = request(vec![item("ghost", 0, -5)]);
        req.customer_email = "not-an-email".into();
        req.customer_name = String::new();

        let issues = collect_issues(&req, &catalog(&[]));
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"customerName"));
        assert!(fields.contains(&"customerEmail"));
        assert!(fields.contains(&"items[0].quantity"));
        assert!(fields.contains(&"items[0].price"));
        assert!(fields.contains(&"items[0].menuItemId"));
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let req = request(vec![]);
        let issues = collect_issues(&req, &catalog(&[]));
        assert!(issues.iter().any(|i| i.field == "items"));
    }

    #[test]
    fn total_is_sum_of_quantity_times_unit_price() {
        let items = vec![item("m1", 2, 450), item("m2", 3, 300)];
        assert_eq!(compute_total(&items), 1800);
    }

    #[test]
    fn prefixed_and_bare_ids_resolve_the_same() {
        assert_eq!(canonical_menu_id("abc"), "menu_item:abc");
        assert_eq!(canonical_menu_id("menu_item:abc"), "menu_item:abc");
    }
}
