//! Order lifecycle service
//!
//! Order creation snapshots menu name/price into the line items; the
//! snapshot never changes afterwards. Status transitions follow the
//! allow-list on [`OrderStatus`].

use std::collections::HashMap;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{Order, OrderCreate, OrderLineItem, OrderStatus};
use crate::db::repository::{
    MenuRepository, OrderRepository, OrderTableRepository, RepoError, RepoResult, parse_record_id,
};

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    tables: OrderTableRepository,
    menus: MenuRepository,
}

impl OrderService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            tables: OrderTableRepository::new(db.clone()),
            menus: MenuRepository::new(db),
        }
    }

    /// Place a new order on an occupied table. Starts in COOKING.
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        if data.line_items.is_empty() {
            return Err(RepoError::Validation(
                "Order must contain at least one line item".to_string(),
            ));
        }

        let mut menu_ids = Vec::with_capacity(data.line_items.len());
        for item in &data.line_items {
            if item.quantity < 0 {
                return Err(RepoError::Validation(
                    "Line item quantity must not be negative".to_string(),
                ));
            }
            menu_ids.push(parse_record_id(&item.menu_id)?);
        }

        // Snapshot current menu name/price into the line items
        let menus = self.menus.find_by_ids(&menu_ids).await?;
        let by_id: HashMap<String, _> = menus
            .into_iter()
            .filter_map(|m| m.id.clone().map(|id| (id.to_string(), m)))
            .collect();

        let mut line_items = Vec::with_capacity(data.line_items.len());
        for (item, menu_id) in data.line_items.iter().zip(&menu_ids) {
            let menu = by_id.get(&menu_id.to_string()).ok_or_else(|| {
                RepoError::Validation(format!("Menu {} does not exist", item.menu_id))
            })?;
            line_items.push(OrderLineItem {
                menu: menu_id.clone(),
                menu_name: menu.name.clone(),
                price: menu.price,
                quantity: item.quantity,
            });
        }

        let table_thing = parse_record_id(&data.order_table_id)?;
        let table = self
            .tables
            .find_by_id(&data.order_table_id)
            .await?
            .ok_or_else(|| {
                RepoError::NotFound(format!("Table {} not found", data.order_table_id))
            })?;
        if table.empty {
            return Err(RepoError::Validation(format!(
                "Cannot place an order on empty table '{}'",
                table.name
            )));
        }

        let order = self.orders.create_guarded(&table_thing, line_items).await?;
        tracing::info!(table = %table.name, items = order.line_items.len(), "Order created");
        Ok(order)
    }

    /// List all orders
    pub async fn list(&self) -> RepoResult<Vec<Order>> {
        self.orders.find_all().await
    }

    /// Advance an order to `new_status`.
    ///
    /// COMPLETION is terminal; everything else must be on the transition
    /// allow-list. The write is compare-and-swap on the status read here,
    /// so a racing transition surfaces as Conflict rather than a silent
    /// double-apply.
    pub async fn change_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
    ) -> RepoResult<Order> {
        let thing = parse_record_id(order_id)?;
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))?;

        if order.status.is_terminal() {
            return Err(RepoError::Validation(
                "A completed order cannot change status".to_string(),
            ));
        }
        if !order.status.can_transition_to(new_status) {
            return Err(RepoError::Validation(format!(
                "Invalid status transition {} -> {}",
                order.status.as_str(),
                new_status.as_str()
            )));
        }

        self.orders
            .change_status_cas(&thing, order.status, new_status)
            .await
    }
}
