//! Order repository
//!
//! Orders are created atomically with their items: header row, item rows
//! and `has_item` edges all land in one transaction, so an order without
//! items can never survive a partial failure. Orders are never deleted -
//! the only mutation is an admin status change.

use rand::Rng;
use rand::distributions::Alphanumeric;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{FulfillmentStatus, NewOrder, NewOrderItem, OrderDetail};

const TABLE: &str = "order";

/// Projection shared by every read path: header fields plus nested items
/// pulled through the `has_item` edges.
const DETAIL_FIELDS: &str = r#"
    <string>id AS id,
    customer_name,
    customer_email,
    customer_phone,
    delivery_address,
    payment_method,
    payment_status,
    status,
    total_amount,
    created_at,
    (SELECT name, quantity, unit_price, line_total FROM ->has_item->order_item) AS items
"#;

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist an order with its items in a single transaction.
    ///
    /// The record key is generated here so the caller gets a stable id for
    /// receipts and tracking links before any email goes out.
    pub async fn create_with_items(
        &self,
        order: NewOrder,
        items: Vec<NewOrderItem>,
    ) -> RepoResult<OrderDetail> {
        let key: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(20)
            .map(|c| (c as char).to_ascii_lowercase())
            .collect();
        let order_id = RecordId::from_table_key(TABLE, &key);

        let result = self
            .base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                CREATE $order_id CONTENT $order;
                FOR $item IN $items {
                    LET $row = (CREATE ONLY order_item CONTENT $item).id;
                    RELATE $order_id->has_item->$row;
                };
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("order_id", order_id))
            .bind(("order", order))
            .bind(("items", items))
            .await?;

        // A failed statement rolls the whole transaction back
        result.check()?;

        self.find_detail(&key)
            .await?
            .ok_or_else(|| RepoError::Database("Order vanished after create".to_string()))
    }

    /// Full order with items by bare key or `order:key`.
    pub async fn find_detail(&self, id: &str) -> RepoResult<Option<OrderDetail>> {
        let key = id.strip_prefix("order:").unwrap_or(id);
        let record_id = RecordId::from_table_key(TABLE, key);

        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {DETAIL_FIELDS} FROM order WHERE id = $id"
            ))
            .bind(("id", record_id))
            .await?;

        let details: Vec<OrderDetail> = result.take(0)?;
        Ok(details.into_iter().next())
    }

    /// All orders with nested items, newest first (admin dashboard).
    pub async fn find_all_details(&self) -> RepoResult<Vec<OrderDetail>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {DETAIL_FIELDS} FROM order ORDER BY created_at DESC"
            ))
            .await?;

        let details: Vec<OrderDetail> = result.take(0)?;
        Ok(details)
    }

    /// Resolve a customer-supplied reference: exact id first, then suffix
    /// match against stored ids (confirmation emails show a shortened id).
    ///
    /// When several orders share the suffix, whichever the store yields
    /// first wins - a known limitation, not a guarantee.
    pub async fn find_by_reference(&self, reference: &str) -> RepoResult<Option<OrderDetail>> {
        if reference.is_empty() {
            return Ok(None);
        }

        if let Some(detail) = self.find_detail(reference).await? {
            return Ok(Some(detail));
        }

        let needle = reference.to_string();
        let mut result = self
            .base
            .db()
            .query(format!(
                r#"
                SELECT {DETAIL_FIELDS} FROM order
                WHERE string::ends_with(string::lowercase(<string>id), $needle)
                LIMIT 1
                "#
            ))
            .bind(("needle", needle))
            .await?;

        let details: Vec<OrderDetail> = result.take(0)?;
        Ok(details.into_iter().next())
    }

    /// Set the fulfillment status. Unconstrained by design: the admin may
    /// move an order to any status at any time; last write wins.
    pub async fn update_status(
        &self,
        id: &str,
        status: FulfillmentStatus,
    ) -> RepoResult<OrderDetail> {
        let key = id.strip_prefix("order:").unwrap_or(id);
        self.find_detail(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        let record_id = RecordId::from_table_key(TABLE, key);
        self.base
            .db()
            .query("UPDATE $id SET status = $status")
            .bind(("id", record_id))
            .bind(("status", status))
            .await?
            .check()?;

        self.find_detail(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }
}
