//! Order service — creation and owner-scoped fetch.
//!
//! DESIGN
//! ======
//! Orders are stored as a row per order with line items serialized as JSONB,
//! matching the checkout wire shape one-to-one. Fetch enforces ownership:
//! an order belonging to another user is `Forbidden`, not `NotFound`, so a
//! shopper can tell their own stale link from someone else's order.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order must have at least one item")]
    EmptyOrder,
    #[error("order not found: {0}")]
    NotFound(Uuid),
    #[error("order {0} belongs to another user")]
    Forbidden(Uuid),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("item serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One line item in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i32,
    pub price: f64,
}

/// Order row as stored in Postgres, plus the computed item total.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub items: Vec<OrderItem>,
    /// Sum of price × quantity, derived from `items` on every read.
    pub total: f64,
}

/// Sum of price × quantity across all items.
#[must_use]
pub fn order_total(items: &[OrderItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum()
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Create an order for the given user. Returns the stored order.
///
/// # Errors
///
/// `EmptyOrder` when no items are supplied, or a database error.
pub async fn create_order(pool: &PgPool, user_id: Uuid, items: Vec<OrderItem>) -> Result<Order, OrderError> {
    if items.is_empty() {
        return Err(OrderError::EmptyOrder);
    }

    let id = Uuid::new_v4();
    let items_json = serde_json::to_value(&items)?;

    sqlx::query("INSERT INTO orders (id, user_id, status, items) VALUES ($1, $2, 'PENDING', $3)")
        .bind(id)
        .bind(user_id)
        .bind(&items_json)
        .execute(pool)
        .await?;

    let total = order_total(&items);
    Ok(Order { id, user_id, status: "PENDING".to_owned(), items, total })
}

/// Fetch an order by id, enforcing ownership.
///
/// # Errors
///
/// `NotFound` for an unknown id, `Forbidden` when the order belongs to a
/// different user, or a database error.
pub async fn get_order(pool: &PgPool, order_id: Uuid, user_id: Uuid) -> Result<Order, OrderError> {
    let row = sqlx::query("SELECT id, user_id, status, items FROM orders WHERE id = $1")
        .bind(order_id)
        .fetch_optional(pool)
        .await?
        .ok_or(OrderError::NotFound(order_id))?;

    let owner: Uuid = row.get("user_id");
    if owner != user_id {
        return Err(OrderError::Forbidden(order_id));
    }

    let items_json: serde_json::Value = row.get("items");
    let items: Vec<OrderItem> = serde_json::from_value(items_json)?;
    let total = order_total(&items);

    Ok(Order {
        id: row.get("id"),
        user_id: owner,
        status: row.get("status"),
        items,
        total,
    })
}

#[cfg(test)]
#[path = "order_test.rs"]
mod tests;
