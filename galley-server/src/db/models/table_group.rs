//! Table Group Model

use super::order_table::OrderTable;
use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Table group entity (并台)
///
/// A set of tables sharing one consolidated bill. The `tables` list on the
/// group record is the authoritative membership; the `table_group`
/// back-reference on each member exists for lookup only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGroup {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Member tables, authoritative (>= 2)
    #[serde(with = "serde_helpers::vec_record_id")]
    pub tables: Vec<RecordId>,
    /// Creation time, epoch millis
    #[serde(default)]
    pub created_at: i64,
}

/// Table group with member tables resolved, as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGroupWithTables {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub tables: Vec<OrderTable>,
    #[serde(default)]
    pub created_at: i64,
}
