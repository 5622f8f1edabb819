//! Table Group Repository
//!
//! Group creation and dissolution are all-or-nothing: both run as single
//! transactions over the group record and every member table.

use super::{
    BaseRepository, GUARD_CONFLICT, GUARD_NOT_FOUND, RepoResult, check_tx, new_record_id,
    parse_record_id,
};
use crate::db::models::TableGroup;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "table_group";

#[derive(Clone)]
pub struct TableGroupRepository {
    base: BaseRepository,
}

impl TableGroupRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all groups
    pub async fn find_all(&self) -> RepoResult<Vec<TableGroup>> {
        let groups: Vec<TableGroup> = self
            .base
            .db()
            .query("SELECT * FROM table_group ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(groups)
    }

    /// Find group by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<TableGroup>> {
        let thing = parse_record_id(id)?;
        let group: Option<TableGroup> = self.base.db().select(thing).await?;
        Ok(group)
    }

    /// Create a group over `tables` inside one transaction.
    ///
    /// The eligibility guard re-counts members that are still empty and
    /// ungrouped; if any was seated or grouped since the caller's validation
    /// read, the whole transaction is cancelled and surfaces as Conflict.
    /// Every member is flipped to grouped + occupied; no partial grouping is
    /// ever observable.
    pub async fn create_grouped(&self, tables: &[RecordId]) -> RepoResult<RecordId> {
        let group_id = new_record_id(TABLE);
        let sql = format!(
            "BEGIN TRANSACTION; \
             LET $eligible = (SELECT VALUE id FROM order_table \
                 WHERE id IN $tables AND empty = true AND table_group = NONE); \
             IF array::len($eligible) != $expected {{ THROW '{GUARD_CONFLICT}:ineligible_member' }}; \
             CREATE $group CONTENT {{ tables: $tables, created_at: $now }}; \
             UPDATE order_table SET empty = false, table_group = $group WHERE id IN $tables; \
             COMMIT TRANSACTION;"
        );

        let mut response = self
            .base
            .db()
            .query(sql)
            .bind(("tables", tables.to_vec()))
            .bind(("expected", tables.len() as i64))
            .bind(("group", group_id.clone()))
            .bind(("now", chrono::Utc::now().timestamp_millis()))
            .await?;
        check_tx(
            &mut response,
            "table not found",
            "table state changed concurrently",
        )?;

        Ok(group_id)
    }

    /// Dissolve a group inside one transaction.
    ///
    /// Membership is resolved from the group record itself, never from
    /// back-references. The guard re-checks that no member order is still
    /// open (status other than COMPLETION); member tables come back
    /// ungrouped and occupied, and the group record is removed.
    pub async fn ungroup(&self, group: &RecordId) -> RepoResult<()> {
        let sql = format!(
            "BEGIN TRANSACTION; \
             LET $g = (SELECT * FROM ONLY $group); \
             IF $g = NONE {{ THROW '{GUARD_NOT_FOUND}' }}; \
             LET $open = (SELECT VALUE id FROM orders \
                 WHERE order_table IN $g.tables AND status != 'COMPLETION'); \
             IF array::len($open) > 0 {{ THROW '{GUARD_CONFLICT}:open_orders' }}; \
             UPDATE order_table SET empty = false, table_group = NONE WHERE id IN $g.tables; \
             DELETE $group; \
             COMMIT TRANSACTION;"
        );

        let mut response = self
            .base
            .db()
            .query(sql)
            .bind(("group", group.clone()))
            .await?;
        check_tx(
            &mut response,
            &format!("Table group {} not found", group),
            "group state changed concurrently",
        )
    }
}
