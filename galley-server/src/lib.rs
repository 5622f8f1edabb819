//! Galley - restaurant point-of-sale backend
//!
//! Embedded-database POS server managing menus, orders and physical
//! tables. The core subsystem is the table / order-group lifecycle:
//! grouping tables into a shared bill, ungrouping them, seating and
//! emptying tables, all gated on order-status transitions.

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult, init_logger, init_logger_with_file};
