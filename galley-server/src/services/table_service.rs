//! Table lifecycle service
//!
//! Occupancy (empty flag) and guest count mutations. Emptiness of grouped
//! tables is controlled exclusively through the group lifecycle, so any
//! direct toggle on a grouped table is rejected here.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{OrderTable, OrderTableCreate};
use crate::db::repository::{
    OrderRepository, OrderTableRepository, RepoError, RepoResult, parse_record_id,
};

#[derive(Clone)]
pub struct TableService {
    tables: OrderTableRepository,
    orders: OrderRepository,
}

impl TableService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            tables: OrderTableRepository::new(db.clone()),
            orders: OrderRepository::new(db),
        }
    }

    /// Register a new table.
    ///
    /// An empty table cannot carry a guest count; the guests-0-while-empty
    /// invariant is enforced from the moment of creation.
    pub async fn create(&self, data: OrderTableCreate) -> RepoResult<OrderTable> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation(
                "Table name must not be empty".to_string(),
            ));
        }
        if data.number_of_guests < 0 {
            return Err(RepoError::Validation(
                "Number of guests must not be negative".to_string(),
            ));
        }
        if data.empty && data.number_of_guests != 0 {
            return Err(RepoError::Validation(
                "An empty table cannot have seated guests".to_string(),
            ));
        }

        let table = self.tables.create(data).await?;
        tracing::info!(name = %table.name, "Table created");
        Ok(table)
    }

    /// List all tables
    pub async fn list(&self) -> RepoResult<Vec<OrderTable>> {
        self.tables.find_all().await
    }

    /// Toggle the empty flag of an ungrouped table.
    ///
    /// Rejected while the table belongs to a group (ungroup is the only
    /// path) or has an order still in COOKING or MEAL. Marking a table
    /// empty resets its guest count to 0; marking it occupied leaves the
    /// guest count untouched.
    pub async fn change_empty(&self, table_id: &str, empty: bool) -> RepoResult<OrderTable> {
        let thing = parse_record_id(table_id)?;
        let table = self
            .tables
            .find_by_id(table_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", table_id)))?;

        if table.is_grouped() {
            return Err(RepoError::Validation(format!(
                "Table '{}' belongs to a group; dissolve the group instead",
                table.name
            )));
        }
        if self.orders.has_active_on_table(&thing).await? {
            return Err(RepoError::Validation(format!(
                "Table '{}' has an order in progress",
                table.name
            )));
        }

        self.tables.change_empty_guarded(&thing, empty).await
    }

    /// Update the number of seated guests on an occupied table.
    pub async fn change_guest_count(&self, table_id: &str, count: i64) -> RepoResult<OrderTable> {
        if count < 0 {
            return Err(RepoError::Validation(
                "Number of guests must not be negative".to_string(),
            ));
        }

        let thing = parse_record_id(table_id)?;
        let table = self
            .tables
            .find_by_id(table_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", table_id)))?;

        if table.empty {
            return Err(RepoError::Validation(format!(
                "Cannot seat guests at empty table '{}'",
                table.name
            )));
        }

        self.tables.change_guest_count_guarded(&thing, count).await
    }
}
