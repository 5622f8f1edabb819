//! Menu API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{Menu, MenuCreate};
use crate::db::repository::MenuRepository;
use crate::utils::AppResult;

/// GET /api/menus - list the catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Menu>>> {
    let repo = MenuRepository::new(state.db.clone());
    let menus = repo.find_all().await?;
    Ok(Json(menus))
}

/// POST /api/menus - add a menu entry
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCreate>,
) -> AppResult<Json<Menu>> {
    let repo = MenuRepository::new(state.db.clone());
    let menu = repo.create(payload).await?;
    Ok(Json(menu))
}
