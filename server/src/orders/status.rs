//! Fulfillment status machine
//!
//! `pending → confirmed → preparing → out_for_delivery → delivered`, with
//! `cancelled` reachable from any non-terminal state. The admin dashboard
//! may set any status at any time - adjacency is deliberately not enforced,
//! matching how the restaurant team actually works the queue. What the
//! machine does pin down is which email a transition fires.

use crate::db::models::FulfillmentStatus;

/// Which email a status transition triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusNotification {
    /// Full order receipt, same content as the checkout confirmation.
    /// Only `confirmed` gets this.
    FullReceipt,
    /// Generic status email carrying the new status label and a tracking
    /// link.
    StatusUpdate(FulfillmentStatus),
}

/// Map a freshly-set status to its outbound email.
pub fn notification_for(status: FulfillmentStatus) -> StatusNotification {
    match status {
        FulfillmentStatus::Confirmed => StatusNotification::FullReceipt,
        other => StatusNotification::StatusUpdate(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_gets_the_full_receipt() {
        assert_eq!(
            notification_for(FulfillmentStatus::Confirmed),
            StatusNotification::FullReceipt
        );
    }

    #[test]
    fn every_other_status_gets_a_generic_update() {
        for status in FulfillmentStatus::ALL {
            if status == FulfillmentStatus::Confirmed {
                continue;
            }
            assert_eq!(
                notification_for(status),
                StatusNotification::StatusUpdate(status)
            );
        }
    }

    #[test]
    fn labels_read_like_emails() {
        assert_eq!(FulfillmentStatus::OutForDelivery.label(), "Out for delivery");
        assert_eq!(FulfillmentStatus::Cancelled.label(), "Cancelled");
    }
}
