//! Order Repository

use super::{
    BaseRepository, GUARD_CONFLICT, GUARD_NOT_FOUND, RepoError, RepoResult, check_tx,
    new_record_id, parse_record_id,
};
use crate::db::models::{Order, OrderLineItem, OrderStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders, oldest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing = parse_record_id(id)?;
        let order: Option<Order> = self.base.db().select(thing).await?;
        Ok(order)
    }

    /// Find all orders placed on a table
    pub async fn find_by_table(&self, table: &RecordId) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE order_table = $table")
            .bind(("table", table.clone()))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Whether any order on the table is still in COOKING or MEAL
    pub async fn has_active_on_table(&self, table: &RecordId) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT VALUE id FROM orders WHERE order_table = $table AND status IN ['COOKING', 'MEAL']",
            )
            .bind(("table", table.clone()))
            .await?;
        let active: Vec<RecordId> = result.take(0)?;
        Ok(!active.is_empty())
    }

    /// Insert a new COOKING order inside one transaction.
    ///
    /// The guard re-checks that the target table is still occupied, so an
    /// order can never land on a table emptied concurrently.
    pub async fn create_guarded(
        &self,
        table: &RecordId,
        line_items: Vec<OrderLineItem>,
    ) -> RepoResult<Order> {
        let order_id = new_record_id(TABLE);
        let sql = format!(
            "BEGIN TRANSACTION; \
             LET $t = (SELECT * FROM ONLY $table); \
             IF $t = NONE {{ THROW '{GUARD_NOT_FOUND}' }}; \
             IF $t.empty {{ THROW '{GUARD_CONFLICT}:empty_table' }}; \
             CREATE $order CONTENT {{ \
                 order_table: $table, \
                 status: 'COOKING', \
                 line_items: $items, \
                 created_at: $now \
             }}; \
             COMMIT TRANSACTION;"
        );

        let mut response = self
            .base
            .db()
            .query(sql)
            .bind(("table", table.clone()))
            .bind(("order", order_id.clone()))
            .bind(("items", line_items))
            .bind(("now", chrono::Utc::now().timestamp_millis()))
            .await?;
        check_tx(
            &mut response,
            &format!("Table {} not found", table),
            "table state changed concurrently",
        )?;

        let created: Option<Order> = self.base.db().select(order_id).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Compare-and-swap status update: only succeeds while the order still
    /// carries the status the caller validated against.
    pub async fn change_status_cas(
        &self,
        order: &RecordId,
        from: OrderStatus,
        to: OrderStatus,
    ) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $order SET status = $to WHERE status = $from RETURN AFTER")
            .bind(("order", order.clone()))
            .bind(("from", from))
            .bind(("to", to))
            .await?
            .check()?;
        let updated: Vec<Order> = result.take(0)?;
        updated.into_iter().next().ok_or_else(|| {
            RepoError::Conflict("order status changed concurrently".to_string())
        })
    }
}
