//! Public order tracking
//!
//! Customers paste the id from their confirmation email, often with the
//! display `#` prefix or truncated to the last characters. The lookup
//! normalizes the reference and the repository resolves it exact-first,
//! suffix-second.

use serde::Serialize;

use crate::db::models::{FulfillmentStatus, OrderDetail, OrderItemDetail, PaymentStatus};

/// Normalize a customer-supplied order reference: trim, drop a leading `#`,
/// lowercase.
pub fn normalize_reference(reference: &str) -> String {
    reference
        .trim()
        .trim_start_matches('#')
        .to_ascii_lowercase()
}

/// The public tracking projection - what an unauthenticated caller may see.
#[derive(Debug, Clone, Serialize)]
pub struct OrderTracking {
    pub id: String,
    pub status: FulfillmentStatus,
    pub customer_name: String,
    pub created_at: i64,
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderItemDetail>,
}

impl From<OrderDetail> for OrderTracking {
    fn from(detail: OrderDetail) -> Self {
        Self {
            id: detail.id,
            status: detail.status,
            customer_name: detail.customer_name,
            created_at: detail.created_at,
            payment_status: detail.payment_status,
            items: detail.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_hash_and_lowercases() {
        assert_eq!(normalize_reference("#ORDER:ABC123"), "order:abc123");
        assert_eq!(normalize_reference("  #abc123  "), "abc123");
        assert_eq!(normalize_reference("abc123"), "abc123");
    }

    #[test]
    fn tracking_hides_contact_details() {
        let detail = OrderDetail {
            id: "order:abc".into(),
            customer_name: "Asha".into(),
            customer_email: "asha@example.com".into(),
            customer_phone: "+254".into(),
            delivery_address: "12 Riverside".into(),
            payment_method: crate::db::models::PaymentMethod::Cash,
            payment_status: PaymentStatus::Pending,
            status: FulfillmentStatus::Pending,
            total_amount: 450,
            created_at: 1,
            items: vec![],
        };
        let json = serde_json::to_value(OrderTracking::from(detail)).unwrap();
        assert!(json.get("customer_email").is_none());
        assert!(json.get("delivery_address").is_none());
        assert_eq!(json["customer_name"], "Asha");
    }
}
