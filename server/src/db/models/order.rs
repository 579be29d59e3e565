//! Order model
//!
//! An order owns its `order_item` records through `has_item` edges. Items
//! are denormalized snapshots (name, quantity, unit price at checkout time)
//! so later menu edits never rewrite order history.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub type OrderId = RecordId;

// =============================================================================
// Enums
// =============================================================================

/// How the customer pays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    MobileMoney,
}

impl PaymentMethod {
    /// Card and mobile-money settle instantly (simulated gateway); cash is
    /// collected on delivery.
    pub fn initial_payment_status(self) -> PaymentStatus {
        match self {
            PaymentMethod::Cash => PaymentStatus::Pending,
            PaymentMethod::Card | PaymentMethod::MobileMoney => PaymentStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

/// Fulfillment status. Transitions are admin-initiated and deliberately
/// unconstrained - any status may be set at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl FulfillmentStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            FulfillmentStatus::Delivered | FulfillmentStatus::Cancelled
        )
    }

    /// Human label used in status emails and the admin dashboard.
    pub fn label(self) -> &'static str {
        match self {
            FulfillmentStatus::Pending => "Pending",
            FulfillmentStatus::Confirmed => "Confirmed",
            FulfillmentStatus::Preparing => "Preparing",
            FulfillmentStatus::OutForDelivery => "Out for delivery",
            FulfillmentStatus::Delivered => "Delivered",
            FulfillmentStatus::Cancelled => "Cancelled",
        }
    }

    pub const ALL: [FulfillmentStatus; 6] = [
        FulfillmentStatus::Pending,
        FulfillmentStatus::Confirmed,
        FulfillmentStatus::Preparing,
        FulfillmentStatus::OutForDelivery,
        FulfillmentStatus::Delivered,
        FulfillmentStatus::Cancelled,
    ];
}

// =============================================================================
// Entities
// =============================================================================

/// Order header as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: FulfillmentStatus,
    /// Integer currency units (KSh)
    pub total_amount: i64,
    pub created_at: i64,
}

/// Validated order header ready to persist (no id yet).
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: FulfillmentStatus,
    pub total_amount: i64,
    pub created_at: i64,
}

/// Validated line-item snapshot ready to persist.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrderItem {
    pub name: String,
    pub quantity: i64,
    pub unit_price: i64,
    pub line_total: i64,
}

// =============================================================================
// API projections
// =============================================================================

/// Line item inside an [`OrderDetail`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    pub name: String,
    pub quantity: i64,
    pub unit_price: i64,
    pub line_total: i64,
}

/// Full order with nested items, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: FulfillmentStatus,
    pub total_amount: i64,
    pub created_at: i64,
    #[serde(default)]
    pub items: Vec<OrderItemDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_snake_case() {
        let json = serde_json::to_string(&FulfillmentStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out_for_delivery\"");
        let back: FulfillmentStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, FulfillmentStatus::Cancelled);
    }

    #[test]
    fn delivered_and_cancelled_are_terminal() {
        for status in FulfillmentStatus::ALL {
            let terminal = matches!(
                status,
                FulfillmentStatus::Delivered | FulfillmentStatus::Cancelled
            );
            assert_eq!(status.is_terminal(), terminal);
        }
    }

    #[test]
    fn cash_is_the_only_pending_payment() {
        assert_eq!(
            PaymentMethod::Cash.initial_payment_status(),
            PaymentStatus::Pending
        );
        assert_eq!(
            PaymentMethod::Card.initial_payment_status(),
            PaymentStatus::Completed
        );
        assert_eq!(
            PaymentMethod::MobileMoney.initial_payment_status(),
            PaymentStatus::Completed
        );
    }
}
