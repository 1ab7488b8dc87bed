//! Order routes — checkout creation and owner-scoped fetch.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::order::{self, OrderItem};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateOrderBody {
    pub items: Vec<OrderItem>,
}

pub(crate) fn order_error_to_status(err: order::OrderError) -> StatusCode {
    match err {
        order::OrderError::EmptyOrder => StatusCode::BAD_REQUEST,
        order::OrderError::NotFound(_) => StatusCode::NOT_FOUND,
        order::OrderError::Forbidden(_) => StatusCode::FORBIDDEN,
        order::OrderError::Db(_) | order::OrderError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/orders` — create an order for the authenticated user.
pub async fn create_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateOrderBody>,
) -> Result<(StatusCode, Json<serde_json::Value>), StatusCode> {
    let created = order::create_order(&state.pool, auth.user.id, body.items)
        .await
        .map_err(|e| {
            tracing::info!(error = %e, user_id = %auth.user.id, "order creation rejected");
            order_error_to_status(e)
        })?;

    tracing::info!(order_id = %created.id, user_id = %auth.user.id, "order created");
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "order_id": created.id }))))
}

/// `GET /api/orders/{id}` — fetch one of the authenticated user's orders.
pub async fn get_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(order_id): Path<Uuid>,
) -> Result<Json<order::Order>, StatusCode> {
    let found = order::get_order(&state.pool, order_id, auth.user.id)
        .await
        .map_err(order_error_to_status)?;

    Ok(Json(found))
}

#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;
