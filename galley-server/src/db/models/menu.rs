//! Menu Model
//!
//! Minimal catalog entry: orders validate menu existence at creation time
//! and snapshot name/price into their line items.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Menu entity (菜品)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub price: f64,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreate {
    pub name: String,
    pub price: f64,
}
