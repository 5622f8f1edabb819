//! Order Table Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Physical dining table entity (桌台)
///
/// `table_group` is a weak back-reference used for lookup only. Group
/// composition is always resolved from the `table_group` record itself,
/// never inferred from back-references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTable {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Display label, unique across all tables
    pub name: String,
    /// Seated guests; 0 while the table is empty
    #[serde(default)]
    pub number_of_guests: i64,
    /// Whether the table is free to be seated or grouped
    pub empty: bool,
    /// Back-reference to the owning group, if any
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub table_group: Option<RecordId>,
}

impl OrderTable {
    pub fn is_grouped(&self) -> bool {
        self.table_group.is_some()
    }
}

/// Create order table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTableCreate {
    pub name: String,
    #[serde(default)]
    pub number_of_guests: i64,
    #[serde(default = "default_empty")]
    pub empty: bool,
}

fn default_empty() -> bool {
    true
}
