//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderStatus};
use crate::services::OrderService;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ChangeOrderStatusRequest {
    pub status: OrderStatus,
}

/// GET /api/orders - list all orders
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let service = OrderService::new(state.db.clone());
    let orders = service.list().await?;
    Ok(Json(orders))
}

/// POST /api/orders - place an order on an occupied table
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let service = OrderService::new(state.db.clone());
    let order = service.create(payload).await?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}/status - advance the order status
pub async fn change_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ChangeOrderStatusRequest>,
) -> AppResult<Json<Order>> {
    let service = OrderService::new(state.db.clone());
    let order = service.change_status(&id, payload.status).await?;
    Ok(Json(order))
}
