//! Service Layer - table / order-group lifecycle
//!
//! The services own every cross-entity rule: each operation re-reads
//! current state, validates the full precondition set, then hands the write
//! to a repository transaction whose guards re-check those preconditions.
//! Validation failures abort before any write; a guard tripping after
//! validation passed surfaces as a retryable conflict.
//!
//! # Services
//!
//! - [`TableService`] - table occupancy and guest count
//! - [`TableGroupService`] - grouping tables into a shared bill
//! - [`OrderService`] - order creation and status lifecycle

pub mod order_service;
pub mod table_group_service;
pub mod table_service;

pub use order_service::OrderService;
pub use table_group_service::TableGroupService;
pub use table_service::TableService;
