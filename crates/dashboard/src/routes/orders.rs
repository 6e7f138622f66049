//! Order listing and detail.

use axum::{
    Json,
    extract::{Path, State},
};
use orderflow_core::{OrderDetail, OrderId, OrderListQuery, OrderListing};

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/orders
///
/// Body is an order-list query; an empty object lists everything.
pub async fn list(
    State(state): State<AppState>,
    Json(query): Json<OrderListQuery>,
) -> Result<Json<OrderListing>, AppError> {
    let listing = state.service().list_orders(state.mode(), &query).await?;
    Ok(Json(listing))
}

/// GET /api/orders/{id}
///
/// The order plus its packing `urgency`.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetail>, AppError> {
    let order = state
        .service()
        .get_order(state.mode(), &OrderId::new(id))
        .await?;
    Ok(Json(order.into()))
}
