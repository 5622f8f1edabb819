//! Order Table Repository

use super::{
    BaseRepository, GUARD_CONFLICT, GUARD_NOT_FOUND, RepoError, RepoResult, check_tx,
    parse_record_id,
};
use crate::db::models::{OrderTable, OrderTableCreate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "order_table";

#[derive(Clone)]
pub struct OrderTableRepository {
    base: BaseRepository,
}

impl OrderTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all tables
    pub async fn find_all(&self) -> RepoResult<Vec<OrderTable>> {
        let tables: Vec<OrderTable> = self
            .base
            .db()
            .query("SELECT * FROM order_table ORDER BY name")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderTable>> {
        let thing = parse_record_id(id)?;
        let table: Option<OrderTable> = self.base.db().select(thing).await?;
        Ok(table)
    }

    /// Find all tables in an id set. Missing ids simply do not appear in the
    /// result; callers compare counts.
    pub async fn find_by_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<OrderTable>> {
        let tables: Vec<OrderTable> = self
            .base
            .db()
            .query("SELECT * FROM order_table WHERE id IN $ids")
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find all member tables of a group via back-reference
    pub async fn find_by_group(&self, group: &RecordId) -> RepoResult<Vec<OrderTable>> {
        let tables: Vec<OrderTable> = self
            .base
            .db()
            .query("SELECT * FROM order_table WHERE table_group = $group ORDER BY name")
            .bind(("group", group.clone()))
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by display name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<OrderTable>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order_table WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let tables: Vec<OrderTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Create a new table
    pub async fn create(&self, data: OrderTableCreate) -> RepoResult<OrderTable> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Validation(format!(
                "Table '{}' already exists",
                data.name
            )));
        }

        let table = OrderTable {
            id: None,
            name: data.name,
            number_of_guests: data.number_of_guests,
            empty: data.empty,
            table_group: None,
        };

        let created: Option<OrderTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order table".to_string()))
    }

    /// Toggle the empty flag inside one transaction.
    ///
    /// Guards re-check that the table exists, is not grouped and has no
    /// order still in COOKING or MEAL; emptying a table also zeroes its
    /// guest count so the guests-0-while-empty invariant holds.
    pub async fn change_empty_guarded(
        &self,
        table: &RecordId,
        empty: bool,
    ) -> RepoResult<OrderTable> {
        let guest_clause = if empty { ", number_of_guests = 0" } else { "" };
        let sql = format!(
            "BEGIN TRANSACTION; \
             LET $t = (SELECT * FROM ONLY $table); \
             IF $t = NONE {{ THROW '{GUARD_NOT_FOUND}' }}; \
             IF $t.table_group != NONE {{ THROW '{GUARD_CONFLICT}:grouped' }}; \
             LET $active = (SELECT VALUE id FROM orders WHERE order_table = $table AND status IN ['COOKING', 'MEAL']); \
             IF array::len($active) > 0 {{ THROW '{GUARD_CONFLICT}:active_order' }}; \
             UPDATE $table SET empty = $empty{guest_clause}; \
             COMMIT TRANSACTION;"
        );

        let mut response = self
            .base
            .db()
            .query(sql)
            .bind(("table", table.clone()))
            .bind(("empty", empty))
            .await?;
        check_tx(
            &mut response,
            &format!("Table {} not found", table),
            "table state changed concurrently",
        )?;

        let updated: Option<OrderTable> = self.base.db().select(table.clone()).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Table {} not found", table)))
    }

    /// Set the guest count, guarded on the table still being occupied.
    ///
    /// Returns Conflict if the table was emptied between the caller's
    /// validation read and this write.
    pub async fn change_guest_count_guarded(
        &self,
        table: &RecordId,
        count: i64,
    ) -> RepoResult<OrderTable> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $table SET number_of_guests = $count WHERE empty = false RETURN AFTER")
            .bind(("table", table.clone()))
            .bind(("count", count))
            .await?
            .check()?;
        let updated: Vec<OrderTable> = result.take(0)?;
        updated.into_iter().next().ok_or_else(|| {
            RepoError::Conflict("table state changed concurrently".to_string())
        })
    }
}
