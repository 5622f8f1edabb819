//! API route modules
//!
//! # Structure
//!
//! - [`tables`] - table occupancy and guest count
//! - [`table_groups`] - shared-bill table groups
//! - [`orders`] - order creation and status lifecycle
//! - [`menus`] - minimal menu catalog (seeding / lookup)

pub mod menus;
pub mod orders;
pub mod table_groups;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
