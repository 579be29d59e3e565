//! End-to-end order flow against the in-memory storage engine:
//! checkout validation and atomicity, tracking resolution, status changes,
//! analytics aggregation, and the uniqueness constraints.

use std::collections::HashSet;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use savannah_server::api::analytics::compute_analytics;
use savannah_server::db::models::{
    FulfillmentStatus, MenuItemCreate, NewOrder, NewOrderItem, PaymentMethod, PaymentStatus,
    SiteSettingsUpdate,
};
use savannah_server::db::repository::{
    MenuItemRepository, NewsletterRepository, OrderRepository, ReservationRepository,
    SiteSettingsRepository, UserRepository,
};
use savannah_server::db::{DbService, seed};
use savannah_server::orders::{CreateOrderRequest, OrderItemInput, normalize_reference, place_order};
use savannah_server::utils::AppError;

async fn fresh_db() -> Surreal<Db> {
    DbService::new_in_memory().await.expect("in-memory db").db
}

async fn seed_menu_item(db: &Surreal<Db>, name: &str, price: &str) -> String {
    let repo = MenuItemRepository::new(db.clone());
    let item = repo
        .create(MenuItemCreate {
            name: name.to_string(),
            price: price.to_string(),
            original_price: None,
            description: "test dish".to_string(),
            category: "Mains".to_string(),
            tag: None,
            image: "/images/test.png".to_string(),
        })
        .await
        .expect("seed menu item");
    item.id.expect("created id").to_string()
}

fn checkout(items: Vec<OrderItemInput>, payment_method: PaymentMethod) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_name: "Asha Mwangi".into(),
        customer_email: "asha@example.com".into(),
        customer_phone: "+254 700 000000".into(),
        delivery_address: "12 Riverside Drive, Nairobi".into(),
        payment_method,
        items,
    }
}

fn line(menu_item_id: &str, name: &str, quantity: i64, price: i64) -> OrderItemInput {
    OrderItemInput {
        menu_item_id: menu_item_id.to_string(),
        quantity,
        price,
        item_name: name.to_string(),
    }
}

async fn order_row_count(db: &Surreal<Db>) -> i64 {
    let mut result = db
        .query("RETURN count((SELECT VALUE id FROM order))")
        .await
        .unwrap();
    result.take::<Option<i64>>(0).unwrap().unwrap_or(0)
}

async fn order_item_row_count(db: &Surreal<Db>) -> i64 {
    let mut result = db
        .query("RETURN count((SELECT VALUE id FROM order_item))")
        .await
        .unwrap();
    result.take::<Option<i64>>(0).unwrap().unwrap_or(0)
}

// ── Checkout ────────────────────────────────────────────────────────

#[tokio::test]
async fn placing_an_order_persists_header_and_items_atomically() {
    let db = fresh_db().await;
    let samosas = seed_menu_item(&db, "Samosas", "KSh 450").await;
    let biryani = seed_menu_item(&db, "Biryani", "KSh 300").await;

    let detail = place_order(
        &db,
        checkout(
            vec![
                line(&samosas, "Samosas", 2, 450),
                line(&biryani, "Biryani", 3, 300),
            ],
            PaymentMethod::Card,
        ),
    )
    .await
    .expect("order should be accepted");

    assert_eq!(detail.total_amount, 2 * 450 + 3 * 300);
    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.status, FulfillmentStatus::Pending);
    assert_eq!(detail.payment_status, PaymentStatus::Completed);
    assert_eq!(order_item_row_count(&db).await, 2);
}

#[tokio::test]
async fn cash_orders_start_with_pending_payment() {
    let db = fresh_db().await;
    let samosas = seed_menu_item(&db, "Samosas", "KSh 450").await;

    let detail = place_order(
        &db,
        checkout(vec![line(&samosas, "Samosas", 1, 450)], PaymentMethod::Cash),
    )
    .await
    .unwrap();

    assert_eq!(detail.payment_status, PaymentStatus::Pending);
}

#[tokio::test]
async fn unknown_menu_item_rejects_and_persists_nothing() {
    let db = fresh_db().await;
    let samosas = seed_menu_item(&db, "Samosas", "KSh 450").await;

    let err = place_order(
        &db,
        checkout(
            vec![
                line(&samosas, "Samosas", 1, 450),
                line("menu_item:doesnotexist", "Ghost", 1, 100),
            ],
            PaymentMethod::Card,
        ),
    )
    .await
    .expect_err("unknown item must reject");

    match err {
        AppError::Validation(issues) => {
            assert!(issues.iter().any(|i| i.field == "items[1].menuItemId"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    assert_eq!(order_row_count(&db).await, 0);
    assert_eq!(order_item_row_count(&db).await, 0);
}

#[tokio::test]
async fn validation_reports_every_offending_field() {
    let db = fresh_db().await;

    let mut req = checkout(vec![line("ghost", "Ghost", 0, -1)], PaymentMethod::Card);
    req.customer_email = "nope".into();
    req.customer_name = "".into();

    let err = place_order(&db, req).await.expect_err("must reject");
    let AppError::Validation(issues) = err else {
        panic!("expected validation error");
    };

    let fields: HashSet<&str> = issues.iter().map(|i| i.field.as_str()).collect();
    for expected in [
        "customerName",
        "customerEmail",
        "items[0].quantity",
        "items[0].price",
        "items[0].menuItemId",
    ] {
        assert!(fields.contains(expected), "missing issue for {expected}");
    }
}

#[tokio::test]
async fn disabled_ordering_rejects_checkout() {
    let db = fresh_db().await;
    let samosas = seed_menu_item(&db, "Samosas", "KSh 450").await;

    SiteSettingsRepository::new(db.clone())
        .update(SiteSettingsUpdate {
            opening_hours: None,
            ordering_enabled: Some(false),
            minimum_order_amount: None,
        })
        .await
        .unwrap();

    let err = place_order(
        &db,
        checkout(vec![line(&samosas, "Samosas", 1, 450)], PaymentMethod::Card),
    )
    .await
    .expect_err("ordering disabled");

    assert!(matches!(err, AppError::BusinessRule(_)));
    assert_eq!(order_row_count(&db).await, 0);
}

#[tokio::test]
async fn orders_below_the_minimum_are_rejected() {
    let db = fresh_db().await;
    let samosas = seed_menu_item(&db, "Samosas", "KSh 450").await;

    SiteSettingsRepository::new(db.clone())
        .update(SiteSettingsUpdate {
            opening_hours: None,
            ordering_enabled: None,
            minimum_order_amount: Some(1000),
        })
        .await
        .unwrap();

    let err = place_order(
        &db,
        checkout(vec![line(&samosas, "Samosas", 1, 450)], PaymentMethod::Card),
    )
    .await
    .expect_err("below minimum");

    assert!(matches!(err, AppError::Validation(_)));
}

// ── Tracking ────────────────────────────────────────────────────────

#[tokio::test]
async fn tracking_resolves_exact_prefixed_and_suffix_references() {
    let db = fresh_db().await;
    let samosas = seed_menu_item(&db, "Samosas", "KSh 450").await;

    let detail = place_order(
        &db,
        checkout(vec![line(&samosas, "Samosas", 1, 450)], PaymentMethod::Card),
    )
    .await
    .unwrap();

    let repo = OrderRepository::new(db.clone());

    // Exact id
    let found = repo.find_by_reference(&detail.id).await.unwrap();
    assert_eq!(found.unwrap().id, detail.id);

    // Display form: leading '#' and uppercase
    let display = format!("#{}", detail.id.to_uppercase());
    let found = repo
        .find_by_reference(&normalize_reference(&display))
        .await
        .unwrap();
    assert_eq!(found.unwrap().id, detail.id);

    // Truncated suffix, as copied from a confirmation email
    let suffix: String = detail.id.chars().rev().take(6).collect::<Vec<_>>().into_iter().rev().collect();
    let found = repo
        .find_by_reference(&normalize_reference(&suffix))
        .await
        .unwrap();
    assert_eq!(found.unwrap().id, detail.id);
}

#[tokio::test]
async fn tracking_misses_return_none() {
    let db = fresh_db().await;
    let repo = OrderRepository::new(db.clone());
    let found = repo.find_by_reference("order:doesnotexist").await.unwrap();
    assert!(found.is_none());
}

// ── Status machine ──────────────────────────────────────────────────

#[tokio::test]
async fn admin_can_set_any_status_and_last_write_wins() {
    let db = fresh_db().await;
    let samosas = seed_menu_item(&db, "Samosas", "KSh 450").await;
    let detail = place_order(
        &db,
        checkout(vec![line(&samosas, "Samosas", 1, 450)], PaymentMethod::Card),
    )
    .await
    .unwrap();

    let repo = OrderRepository::new(db.clone());

    let updated = repo
        .update_status(&detail.id, FulfillmentStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(updated.status, FulfillmentStatus::Confirmed);

    let updated = repo
        .update_status(&detail.id, FulfillmentStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(updated.status, FulfillmentStatus::Delivered);

    // Transitions are unconstrained: terminal back to pending is allowed
    let updated = repo
        .update_status(&detail.id, FulfillmentStatus::Pending)
        .await
        .unwrap();
    assert_eq!(updated.status, FulfillmentStatus::Pending);

    // Items survive every transition
    assert_eq!(updated.items.len(), 1);
}

#[tokio::test]
async fn updating_a_missing_order_is_not_found() {
    let db = fresh_db().await;
    let repo = OrderRepository::new(db.clone());
    let err = repo
        .update_status("order:doesnotexist", FulfillmentStatus::Confirmed)
        .await
        .expect_err("missing order");
    assert!(err.to_string().contains("not found"));
}

// ── Analytics ───────────────────────────────────────────────────────

#[tokio::test]
async fn analytics_sums_revenue_across_all_statuses() {
    let db = fresh_db().await;
    let order_repo = OrderRepository::new(db.clone());

    let amounts = [1000_i64, 2000, 500];
    let mut ids = Vec::new();
    for (i, amount) in amounts.iter().enumerate() {
        let detail = order_repo
            .create_with_items(
                NewOrder {
                    customer_name: format!("Customer {i}"),
                    customer_email: "guest@example.com".into(),
                    customer_phone: "+254".into(),
                    delivery_address: "Nairobi".into(),
                    payment_method: PaymentMethod::Cash,
                    payment_status: PaymentStatus::Pending,
                    status: FulfillmentStatus::Pending,
                    total_amount: *amount,
                    created_at: 1000 + i as i64,
                },
                vec![NewOrderItem {
                    name: if i == 0 { "Samosas" } else { "Biryani" }.into(),
                    quantity: (i as i64) + 1,
                    unit_price: *amount,
                    line_total: *amount,
                }],
            )
            .await
            .unwrap();
        ids.push(detail.id);
    }

    // Cancel the 500 order: it still counts toward revenue
    order_repo
        .update_status(&ids[2], FulfillmentStatus::Cancelled)
        .await
        .unwrap();

    ReservationRepository::new(db.clone())
        .create(savannah_server::db::models::ReservationCreate {
            name: "Guest".into(),
            email: "guest@example.com".into(),
            date: "2026-08-20".into(),
            time: "19:00".into(),
            guests: 4,
            requests: None,
        })
        .await
        .unwrap();

    let analytics = compute_analytics(&db).await.unwrap();

    assert_eq!(analytics.total_revenue, 3500);
    assert_eq!(analytics.total_orders, 3);
    assert_eq!(analytics.total_reservations, 1);
    assert_eq!(analytics.orders_by_status["pending"], 2);
    assert_eq!(analytics.orders_by_status["cancelled"], 1);
    assert_eq!(analytics.orders_by_status["delivered"], 0);

    // Biryani sold 2 + 3 = 5, Samosas 1
    assert_eq!(analytics.top_items[0].name, "Biryani");
    assert_eq!(analytics.top_items[0].quantity, 5);
    assert_eq!(analytics.top_items[1].name, "Samosas");
    assert_eq!(analytics.top_items[1].quantity, 1);
}

// ── Uniqueness ──────────────────────────────────────────────────────

#[tokio::test]
async fn newsletter_rejects_duplicate_emails_without_a_second_row() {
    let db = fresh_db().await;
    let repo = NewsletterRepository::new(db.clone());

    repo.add("guest@example.com").await.unwrap();
    let err = repo.add("guest@example.com").await.expect_err("duplicate");
    assert!(err.to_string().contains("already subscribed"));

    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn usernames_are_unique_and_points_accrue() {
    let db = fresh_db().await;
    let repo = UserRepository::new(db.clone());

    assert_eq!(repo.count().await.unwrap(), 0);
    repo.create("asha@example.com", "hash", true).await.unwrap();
    let err = repo
        .create("asha@example.com", "hash", false)
        .await
        .expect_err("duplicate username");
    assert!(err.to_string().contains("already exists"));

    // Accrual hits registered users, silently misses everyone else
    assert!(repo.add_loyalty_points("asha@example.com", 18).await.unwrap());
    assert!(!repo.add_loyalty_points("nobody@example.com", 5).await.unwrap());

    let user = repo.find_by_username("asha@example.com").await.unwrap().unwrap();
    assert_eq!(user.loyalty_points, 18);
}

// ── Seed ────────────────────────────────────────────────────────────

#[tokio::test]
async fn seeding_is_idempotent() {
    let db = fresh_db().await;

    seed::seed_if_empty(&db).await.unwrap();
    let menu_count = MenuItemRepository::new(db.clone()).count().await.unwrap();
    assert!(menu_count > 0);

    seed::seed_if_empty(&db).await.unwrap();
    assert_eq!(
        MenuItemRepository::new(db.clone()).count().await.unwrap(),
        menu_count
    );
}
