//! Email templates
//!
//! Plain `format!` HTML, one function per message. Each returns
//! `(subject, html)`.

use savannah_shared::format_price;

use crate::db::models::{Enquiry, OrderDetail, Reservation};
use crate::utils::time::format_millis;

/// Short display form of an order id: `#` plus the last six characters of
/// the key, uppercased. The tracking lookup accepts it back.
pub fn short_reference(order_id: &str) -> String {
    let key = order_id.rsplit(':').next().unwrap_or(order_id);
    let tail: String = key
        .chars()
        .rev()
        .take(6)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("#{}", tail.to_ascii_uppercase())
}

fn items_table(order: &OrderDetail) -> String {
    let rows: String = order
        .items
        .iter()
        .map(|item| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                item.name,
                item.quantity,
                format_price(item.unit_price),
                format_price(item.line_total),
            )
        })
        .collect();

    format!(
        r#"<table cellpadding="6" cellspacing="0" border="0" width="100%">
  <tr><th align="left">Item</th><th align="left">Qty</th><th align="left">Unit</th><th align="left">Total</th></tr>
  {rows}
  <tr><td colspan="3"><strong>Total</strong></td><td><strong>{total}</strong></td></tr>
</table>"#,
        total = format_price(order.total_amount),
    )
}

/// Receipt sent on checkout and again when the order is confirmed.
pub fn order_receipt(order: &OrderDetail, tracking_url: &str) -> (String, String) {
    let subject = format!(
        "Your Savannah Restaurant order {}",
        short_reference(&order.id)
    );
    let html = format!(
        r#"<h1>Thank you for your order, {name}!</h1>
<p>Order {reference} placed on {placed}.</p>
{table}
<p>Delivery to: {address}</p>
<p>Payment: {payment:?} ({payment_status:?})</p>
<p>Track your order any time: <a href="{tracking_url}">{tracking_url}</a></p>
<p>Savannah Restaurant — Nairobi, Kenya</p>"#,
        name = order.customer_name,
        reference = short_reference(&order.id),
        placed = format_millis(order.created_at),
        table = items_table(order),
        address = order.delivery_address,
        payment = order.payment_method,
        payment_status = order.payment_status,
    );
    (subject, html)
}

/// Generic status email: label plus tracking link.
pub fn status_update(order: &OrderDetail, tracking_url: &str) -> (String, String) {
    let subject = format!(
        "Order {} update: {}",
        short_reference(&order.id),
        order.status.label()
    );
    let html = format!(
        r#"<h1>Order update</h1>
<p>Hi {name}, your order {reference} is now <strong>{label}</strong>.</p>
<p>Follow it here: <a href="{tracking_url}">{tracking_url}</a></p>
<p>Savannah Restaurant — Nairobi, Kenya</p>"#,
        name = order.customer_name,
        reference = short_reference(&order.id),
        label = order.status.label(),
    );
    (subject, html)
}

/// Alert to the restaurant team about a new order.
pub fn admin_new_order(order: &OrderDetail) -> (String, String) {
    let subject = format!(
        "New order {} — {}",
        short_reference(&order.id),
        format_price(order.total_amount)
    );
    let html = format!(
        r#"<h2>New order {reference}</h2>
<p><strong>Customer:</strong> {name} ({email}, {phone})</p>
<p><strong>Delivery:</strong> {address}</p>
{table}
<p>Payment: {payment:?} ({payment_status:?})</p>"#,
        reference = short_reference(&order.id),
        name = order.customer_name,
        email = order.customer_email,
        phone = order.customer_phone,
        address = order.delivery_address,
        table = items_table(order),
        payment = order.payment_method,
        payment_status = order.payment_status,
    );
    (subject, html)
}

/// Free-text message from the admin dashboard to the customer.
pub fn custom_message(order: &OrderDetail, message: &str) -> (String, String) {
    let subject = format!(
        "About your Savannah Restaurant order {}",
        short_reference(&order.id)
    );
    let html = format!(
        r#"<p>Hi {name},</p>
<p>{body}</p>
<p>— Savannah Restaurant, regarding order {reference}</p>"#,
        name = order.customer_name,
        body = message.replace('\n', "<br>"),
        reference = short_reference(&order.id),
    );
    (subject, html)
}

/// Confirmation to the guest who booked a table.
pub fn reservation_confirmation(reservation: &Reservation) -> (String, String) {
    let subject = "Reservation Confirmation - Savannah Restaurant".to_string();
    let requests = reservation
        .requests
        .as_deref()
        .map(|r| format!("<p><strong>Special requests:</strong> {r}</p>"))
        .unwrap_or_default();
    let html = format!(
        r#"<h1>Reservation confirmed!</h1>
<p>Dear {name}, thank you for choosing Savannah Restaurant.</p>
<p><strong>Date:</strong> {date}<br>
<strong>Time:</strong> {time}<br>
<strong>Guests:</strong> {guests}</p>
{requests}
<ul>
  <li>Please arrive 10 minutes before your reservation time</li>
  <li>We hold your table for 15 minutes past the reservation time</li>
  <li>To cancel or modify, contact us at least 2 hours in advance</li>
</ul>
<p>Savannah Restaurant — Nairobi, Kenya</p>"#,
        name = reservation.name,
        date = reservation.date,
        time = reservation.time,
        guests = reservation.guests,
    );
    (subject, html)
}

/// Alert to the restaurant team about a new reservation.
pub fn reservation_admin_alert(reservation: &Reservation) -> (String, String) {
    let subject = format!(
        "New reservation: {} - {} at {}",
        reservation.name, reservation.date, reservation.time
    );
    let requests = reservation
        .requests
        .as_deref()
        .map(|r| format!("<p><strong>Special requests:</strong> {r}</p>"))
        .unwrap_or_default();
    let html = format!(
        r#"<h2>New reservation</h2>
<p><strong>Guest:</strong> {name} ({email})</p>
<p><strong>Date:</strong> {date} at {time}</p>
<p><strong>Party size:</strong> {guests}</p>
{requests}"#,
        name = reservation.name,
        email = reservation.email,
        date = reservation.date,
        time = reservation.time,
        guests = reservation.guests,
    );
    (subject, html)
}

/// Alert to the restaurant team about a contact-form enquiry.
pub fn enquiry_alert(enquiry: &Enquiry) -> (String, String) {
    let subject = format!("New enquiry: {}", enquiry.subject);
    let html = format!(
        r#"<h2>New customer enquiry</h2>
<p><strong>From:</strong> {name} ({email})</p>
<p><strong>Subject:</strong> {subject}</p>
<p>{message}</p>
<p><em>Reply directly to the customer's address.</em></p>"#,
        name = enquiry.name,
        email = enquiry.email,
        subject = enquiry.subject,
        message = enquiry.message.replace('\n', "<br>"),
    );
    (subject, html)
}

/// Welcome email for a new newsletter subscriber.
pub fn newsletter_welcome() -> (String, String) {
    let subject = "Welcome to the Savannah Restaurant newsletter!".to_string();
    let html = r#"<h1>Welcome to our family!</h1>
<p>Thank you for subscribing to the Savannah Restaurant newsletter.</p>
<ul>
  <li>Exclusive menu previews and seasonal specials</li>
  <li>Subscriber-only offers and promotions</li>
  <li>Events and special dining experiences</li>
</ul>
<p>No spam, just delicious updates. See you soon at Savannah!</p>"#
        .to_string();
    (subject, html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{FulfillmentStatus, PaymentMethod, PaymentStatus};

    fn order() -> OrderDetail {
        OrderDetail {
            id: "order:k3x9qzabcdef".into(),
            customer_name: "Asha".into(),
            customer_email: "asha@example.com".into(),
            customer_phone: "+254".into(),
            delivery_address: "12 Riverside".into(),
            payment_method: PaymentMethod::Card,
            payment_status: PaymentStatus::Completed,
            status: FulfillmentStatus::Confirmed,
            total_amount: 1800,
            created_at: 0,
            items: vec![crate::db::models::OrderItemDetail {
                name: "Nyama Choma".into(),
                quantity: 1,
                unit_price: 1800,
                line_total: 1800,
            }],
        }
    }

    #[test]
    fn short_reference_takes_the_id_tail() {
        assert_eq!(short_reference("order:k3x9qzabcdef"), "#ABCDEF");
        assert_eq!(short_reference("abc"), "#ABC");
    }

    #[test]
    fn receipt_carries_items_and_total() {
        let (subject, html) = order_receipt(&order(), "http://localhost/track/x");
        assert!(subject.contains("#ABCDEF"));
        assert!(html.contains("Nyama Choma"));
        assert!(html.contains("KSh 1,800"));
    }

    #[test]
    fn status_update_carries_label_and_link() {
        let mut o = order();
        o.status = FulfillmentStatus::OutForDelivery;
        let (subject, html) = status_update(&o, "http://localhost/track/x");
        assert!(subject.contains("Out for delivery"));
        assert!(html.contains("http://localhost/track/x"));
    }
}
