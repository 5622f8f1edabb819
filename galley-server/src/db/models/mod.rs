//! Database Models
//!
//! Entity structs and create/update payloads for the POS domain tables.

pub mod menu;
pub mod order;
pub mod order_table;
pub mod serde_helpers;
pub mod table_group;

pub use menu::{Menu, MenuCreate};
pub use order::{Order, OrderCreate, OrderLineItem, OrderLineItemInput, OrderStatus};
pub use order_table::{OrderTable, OrderTableCreate};
pub use table_group::{TableGroup, TableGroupWithTables};
