//! Database schema
//!
//! Schemafull table definitions applied at startup. Statements are
//! idempotent (`OVERWRITE`) so repeated startups converge on the same
//! schema.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const DEFINITIONS: &[&str] = &[
    // Physical tables
    "DEFINE TABLE OVERWRITE order_table SCHEMAFULL",
    "DEFINE FIELD OVERWRITE name ON order_table TYPE string",
    "DEFINE FIELD OVERWRITE number_of_guests ON order_table TYPE int DEFAULT 0",
    "DEFINE FIELD OVERWRITE empty ON order_table TYPE bool DEFAULT true",
    "DEFINE FIELD OVERWRITE table_group ON order_table TYPE option<record<table_group>>",
    // Table groups (shared bill)
    "DEFINE TABLE OVERWRITE table_group SCHEMAFULL",
    "DEFINE FIELD OVERWRITE tables ON table_group TYPE array<record<order_table>>",
    "DEFINE FIELD OVERWRITE created_at ON table_group TYPE int",
    // Orders; line items are immutable snapshots, kept flexible
    "DEFINE TABLE OVERWRITE orders SCHEMAFULL",
    "DEFINE FIELD OVERWRITE order_table ON orders TYPE record<order_table>",
    "DEFINE FIELD OVERWRITE status ON orders TYPE string \
         ASSERT $value IN ['COOKING', 'MEAL', 'COMPLETION']",
    "DEFINE FIELD OVERWRITE line_items ON orders FLEXIBLE TYPE array",
    "DEFINE FIELD OVERWRITE created_at ON orders TYPE int",
    // Menu catalog (existence lookup only)
    "DEFINE TABLE OVERWRITE menu SCHEMAFULL",
    "DEFINE FIELD OVERWRITE name ON menu TYPE string",
    "DEFINE FIELD OVERWRITE price ON menu TYPE number",
];

/// Apply all schema definitions
pub async fn apply(db: &Surreal<Db>) -> Result<(), surrealdb::Error> {
    for definition in DEFINITIONS {
        db.query(*definition).await?.check()?;
    }
    Ok(())
}
