//! Order Model
//!
//! Order lifecycle: COOKING ↔ MEAL, either → COMPLETION, COMPLETION terminal.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order status (订单状态)
///
/// Transition validity is encoded as an explicit allow-list so unknown or
/// out-of-order transitions are rejected rather than silently accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Kitchen is preparing the order
    Cooking,
    /// Dishes are served, guests are eating
    Meal,
    /// Bill settled, no further transitions
    Completion,
}

impl OrderStatus {
    /// Terminal statuses admit no outgoing transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completion)
    }

    /// Transition allow-list: COOKING ↔ MEAL, either → COMPLETION
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Cooking, Meal) | (Cooking, Completion) | (Meal, Cooking) | (Meal, Completion)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Meal => "MEAL",
            OrderStatus::Completion => "COMPLETION",
        }
    }
}

/// Order line item - immutable snapshot taken at order creation
///
/// Menu name and unit price are copied into the order so later catalog
/// changes never alter historical orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Referenced menu, identity fixed at creation
    #[serde(with = "serde_helpers::record_id")]
    pub menu: RecordId,
    /// Menu name snapshot
    pub menu_name: String,
    /// Unit price snapshot
    pub price: f64,
    /// Ordered quantity (>= 0)
    pub quantity: i64,
}

/// Order entity (订单)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// The table this order belongs to
    #[serde(with = "serde_helpers::record_id")]
    pub order_table: RecordId,
    pub status: OrderStatus,
    pub line_items: Vec<OrderLineItem>,
    /// Creation time, epoch millis
    #[serde(default)]
    pub created_at: i64,
}

/// Line item input - for creating orders (menu reference + quantity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItemInput {
    pub menu_id: String,
    pub quantity: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_table_id: String,
    pub line_items: Vec<OrderLineItemInput>,
}
