//! Table group service
//!
//! Grouping joins ≥2 empty, ungrouped tables under one shared bill;
//! ungrouping dissolves it once every member order reached COMPLETION.
//! Both mutations are atomic across all members.

use std::collections::HashSet;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{OrderStatus, TableGroupWithTables};
use crate::db::repository::{
    OrderRepository, OrderTableRepository, RepoError, RepoResult, TableGroupRepository,
    parse_record_id,
};

#[derive(Clone)]
pub struct TableGroupService {
    groups: TableGroupRepository,
    tables: OrderTableRepository,
    orders: OrderRepository,
}

impl TableGroupService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            groups: TableGroupRepository::new(db.clone()),
            tables: OrderTableRepository::new(db.clone()),
            orders: OrderRepository::new(db),
        }
    }

    /// Group the given tables under a new shared bill.
    ///
    /// Requires at least 2 distinct, existing tables, all currently empty
    /// and ungrouped; any violation is a validation failure. Returns the
    /// group with member tables resolved, every member now grouped and
    /// occupied.
    pub async fn create(&self, table_ids: &[String]) -> RepoResult<TableGroupWithTables> {
        if table_ids.len() < 2 {
            return Err(RepoError::Validation(
                "A table group needs at least 2 tables".to_string(),
            ));
        }

        let mut ids = Vec::with_capacity(table_ids.len());
        for id in table_ids {
            ids.push(parse_record_id(id)?);
        }
        let distinct: HashSet<String> = ids.iter().map(|id| id.to_string()).collect();
        if distinct.len() != ids.len() {
            return Err(RepoError::Validation(
                "Table ids must be distinct".to_string(),
            ));
        }

        let candidates = self.tables.find_by_ids(&ids).await?;
        if candidates.len() != ids.len() {
            return Err(RepoError::Validation(
                "One or more tables do not exist".to_string(),
            ));
        }
        for table in &candidates {
            if !table.empty {
                return Err(RepoError::Validation(format!(
                    "Table '{}' is not empty",
                    table.name
                )));
            }
            if table.is_grouped() {
                return Err(RepoError::Validation(format!(
                    "Table '{}' already belongs to a group",
                    table.name
                )));
            }
        }

        let group_id = self.groups.create_grouped(&ids).await?;
        tracing::info!(group = %group_id, members = ids.len(), "Table group created");

        let group = self
            .groups
            .find_by_id(&group_id.to_string())
            .await?
            .ok_or_else(|| {
                RepoError::Database(format!("Created group {} not readable", group_id))
            })?;
        let members = self.tables.find_by_ids(&group.tables).await?;

        Ok(TableGroupWithTables {
            id: group.id,
            tables: members,
            created_at: group.created_at,
        })
    }

    /// Dissolve a group, returning every member table to an ungrouped,
    /// occupied state.
    ///
    /// Blocked while any member order is still COOKING or MEAL - the bill
    /// is still open. Membership is read from the group record, not from
    /// back-references.
    pub async fn ungroup(&self, group_id: &str) -> RepoResult<()> {
        let thing = parse_record_id(group_id)?;
        let group = self
            .groups
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Table group {} not found", group_id)))?;

        for table in &group.tables {
            let orders = self.orders.find_by_table(table).await?;
            if let Some(open) = orders.iter().find(|o| o.status != OrderStatus::Completion) {
                return Err(RepoError::Validation(format!(
                    "Table {} still has an order in {} status",
                    table,
                    open.status.as_str()
                )));
            }
        }

        self.groups.ungroup(&thing).await?;
        tracing::info!(group = %group_id, "Table group dissolved");
        Ok(())
    }
}
