//! Menu Repository
//!
//! Minimal catalog access: order creation only needs existence + current
//! name/price for its line-item snapshots.

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Menu, MenuCreate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "menu";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menus
    pub async fn find_all(&self) -> RepoResult<Vec<Menu>> {
        let menus: Vec<Menu> = self
            .base
            .db()
            .query("SELECT * FROM menu ORDER BY name")
            .await?
            .take(0)?;
        Ok(menus)
    }

    /// Find menu by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Menu>> {
        let thing = parse_record_id(id)?;
        let menu: Option<Menu> = self.base.db().select(thing).await?;
        Ok(menu)
    }

    /// Find all menus in an id set; missing ids do not appear in the result
    pub async fn find_by_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<Menu>> {
        let menus: Vec<Menu> = self
            .base
            .db()
            .query("SELECT * FROM menu WHERE id IN $ids")
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;
        Ok(menus)
    }

    /// Create a new menu
    pub async fn create(&self, data: MenuCreate) -> RepoResult<Menu> {
        if data.price < 0.0 {
            return Err(RepoError::Validation("Menu price must not be negative".to_string()));
        }

        let menu = Menu {
            id: None,
            name: data.name,
            price: data.price,
        };

        let created: Option<Menu> = self.base.db().create(TABLE).content(menu).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu".to_string()))
    }
}
