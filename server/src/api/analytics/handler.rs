//! Analytics API handlers
//!
//! Read-only aggregation over the order history. Revenue deliberately sums
//! every order regardless of status or payment state - cancelled orders
//! stay in the number, matching how the dashboard has always reported it.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::ServerState;
use crate::db::models::FulfillmentStatus;
use crate::utils::{AppError, AppResult};

// ============================================================================
// Response types
// ============================================================================

/// One entry of the top-sellers ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopItem {
    pub name: String,
    pub quantity: i64,
}

/// Dashboard aggregates
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_revenue: i64,
    pub total_orders: i64,
    pub total_reservations: i64,
    pub orders_by_status: BTreeMap<String, i64>,
    pub top_items: Vec<TopItem>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/admin/analytics
pub async fn get_analytics(State(state): State<ServerState>) -> AppResult<Json<AnalyticsResponse>> {
    let response = compute_analytics(&state.db).await?;
    Ok(Json(response))
}

/// The aggregation itself, separated from the HTTP layer so tests can run
/// it straight against a store.
pub async fn compute_analytics(db: &Surreal<Db>) -> AppResult<AnalyticsResponse> {
    #[derive(Deserialize)]
    struct Overview {
        revenue: i64,
        orders: i64,
        reservations: i64,
    }

    let mut result = db
        .query(
            r#"
            LET $orders = SELECT status, total_amount FROM order;
            RETURN {
                revenue: math::sum($orders.total_amount) OR 0,
                orders: count($orders),
                reservations: count((SELECT VALUE id FROM reservation))
            }
            "#,
        )
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let overview: Overview = result
        .take::<Option<Overview>>(1)
        .map_err(|e| AppError::database(e.to_string()))?
        .unwrap_or(Overview {
            revenue: 0,
            orders: 0,
            reservations: 0,
        });

    // Count per status, with every status present even at zero
    #[derive(Deserialize)]
    struct StatusCount {
        status: FulfillmentStatus,
        count: i64,
    }

    let mut status_result = db
        .query("SELECT status, count() AS count FROM order GROUP BY status")
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let status_counts: Vec<StatusCount> = status_result
        .take(0)
        .map_err(|e| AppError::database(e.to_string()))?;

    let mut orders_by_status: BTreeMap<String, i64> = FulfillmentStatus::ALL
        .iter()
        .map(|status| (status_key(*status), 0))
        .collect();
    for entry in status_counts {
        orders_by_status.insert(status_key(entry.status), entry.count);
    }

    // Top 5 sellers by total quantity across all orders
    let mut top_result = db
        .query(
            r#"
            SELECT name, math::sum(quantity) AS quantity
            FROM order_item
            GROUP BY name
            ORDER BY quantity DESC
            LIMIT 5
            "#,
        )
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    let top_items: Vec<TopItem> = top_result
        .take(0)
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(AnalyticsResponse {
        total_revenue: overview.revenue,
        total_orders: overview.orders,
        total_reservations: overview.reservations,
        orders_by_status,
        top_items,
    })
}

fn status_key(status: FulfillmentStatus) -> String {
    // serde renders the wire form ("out_for_delivery")
    serde_json::to_value(status)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}
