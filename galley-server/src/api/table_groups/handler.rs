//! Table Group API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::TableGroupWithTables;
use crate::services::TableGroupService;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct CreateTableGroupRequest {
    pub table_ids: Vec<String>,
}

/// POST /api/table-groups - group tables under one shared bill
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateTableGroupRequest>,
) -> AppResult<Json<TableGroupWithTables>> {
    let service = TableGroupService::new(state.db.clone());
    let group = service.create(&payload.table_ids).await?;
    Ok(Json(group))
}

/// DELETE /api/table-groups/{id} - dissolve a group
pub async fn ungroup(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let service = TableGroupService::new(state.db.clone());
    service.ungroup(&id).await?;
    Ok(Json(true))
}
