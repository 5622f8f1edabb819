//! Order Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{OrderTable, OrderTableCreate};
use crate::services::TableService;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ChangeEmptyRequest {
    pub empty: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChangeGuestCountRequest {
    pub number_of_guests: i64,
}

/// GET /api/tables - list all tables
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderTable>>> {
    let service = TableService::new(state.db.clone());
    let tables = service.list().await?;
    Ok(Json(tables))
}

/// POST /api/tables - register a table
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderTableCreate>,
) -> AppResult<Json<OrderTable>> {
    let service = TableService::new(state.db.clone());
    let table = service.create(payload).await?;
    Ok(Json(table))
}

/// PUT /api/tables/{id}/empty - toggle the empty flag
pub async fn change_empty(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ChangeEmptyRequest>,
) -> AppResult<Json<OrderTable>> {
    let service = TableService::new(state.db.clone());
    let table = service.change_empty(&id, payload.empty).await?;
    Ok(Json(table))
}

/// PUT /api/tables/{id}/guests - change the seated guest count
pub async fn change_guest_count(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ChangeGuestCountRequest>,
) -> AppResult<Json<OrderTable>> {
    let service = TableService::new(state.db.clone());
    let table = service
        .change_guest_count(&id, payload.number_of_guests)
        .await?;
    Ok(Json(table))
}
