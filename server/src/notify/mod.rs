//! Notification dispatch
//!
//! Outbound email is decoupled from the request/response path: every
//! function here builds a message and launches it on a detached task the
//! handler never joins. Delivery is at-most-once and best-effort - a slow
//! or failing transport never delays a response or fails an operation, and
//! there are no retries. The one synchronous exception (the admin free-text
//! message endpoint) calls [`Mailer::send`] directly instead.

pub mod mailer;
pub mod templates;

use std::sync::Arc;

use tokio::task::JoinHandle;

pub use mailer::{MailError, Mailer};

use crate::core::ServerState;
use crate::db::models::{Enquiry, OrderDetail, Reservation};
use crate::orders::{StatusNotification, notification_for};

/// Fire one message on a detached task. Returns the handle for callers that
/// want it (tests); production handlers deliberately drop it.
pub fn dispatch(
    mailer: Arc<Mailer>,
    to: String,
    subject: String,
    html: String,
    context: &'static str,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match mailer.send(&to, &subject, &html).await {
            Ok(()) => tracing::info!(email = %to, context, "notification sent"),
            Err(MailError::NotConfigured) => {
                tracing::warn!(context, "mail transport not configured, skipping notification");
            }
            Err(e) => {
                tracing::error!(error = %e, email = %to, context, "failed to send notification");
            }
        }
    })
}

/// Checkout side effects: customer receipt plus admin alert.
pub fn order_placed(state: &ServerState, order: &OrderDetail) {
    let tracking_url = state.tracking_url(&order.id);

    let (subject, html) = templates::order_receipt(order, &tracking_url);
    let _ = dispatch(
        state.get_mailer(),
        order.customer_email.clone(),
        subject,
        html,
        "order_receipt",
    );

    if let Some(admin) = state.mailer.admin_email() {
        let (subject, html) = templates::admin_new_order(order);
        let _ = dispatch(
            state.get_mailer(),
            admin.to_string(),
            subject,
            html,
            "admin_new_order",
        );
    } else {
        tracing::warn!("ADMIN_EMAIL not set, skipping admin order alert");
    }
}

/// Status-transition side effect. `confirmed` re-sends the full receipt;
/// every other status gets the generic update with the tracking link.
pub fn order_status_changed(state: &ServerState, order: &OrderDetail) {
    let tracking_url = state.tracking_url(&order.id);

    let (subject, html) = match notification_for(order.status) {
        StatusNotification::FullReceipt => templates::order_receipt(order, &tracking_url),
        StatusNotification::StatusUpdate(_) => templates::status_update(order, &tracking_url),
    };

    let _ = dispatch(
        state.get_mailer(),
        order.customer_email.clone(),
        subject,
        html,
        "order_status",
    );
}

/// Reservation side effects: guest confirmation plus admin alert.
pub fn reservation_created(state: &ServerState, reservation: &Reservation) {
    let (subject, html) = templates::reservation_confirmation(reservation);
    let _ = dispatch(
        state.get_mailer(),
        reservation.email.clone(),
        subject,
        html,
        "reservation_confirmation",
    );

    if let Some(admin) = state.mailer.admin_email() {
        let (subject, html) = templates::reservation_admin_alert(reservation);
        let _ = dispatch(
            state.get_mailer(),
            admin.to_string(),
            subject,
            html,
            "reservation_admin_alert",
        );
    }
}

/// Enquiry side effect: admin alert.
pub fn enquiry_created(state: &ServerState, enquiry: &Enquiry) {
    if let Some(admin) = state.mailer.admin_email() {
        let (subject, html) = templates::enquiry_alert(enquiry);
        let _ = dispatch(
            state.get_mailer(),
            admin.to_string(),
            subject,
            html,
            "enquiry_alert",
        );
    }
}

/// Newsletter side effect: welcome email.
pub fn newsletter_subscribed(state: &ServerState, email: &str) {
    let (subject, html) = templates::newsletter_welcome();
    let _ = dispatch(
        state.get_mailer(),
        email.to_string(),
        subject,
        html,
        "newsletter_welcome",
    );
}
