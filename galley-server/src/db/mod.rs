//! Database Module
//!
//! Embedded SurrealDB (RocksDB backend) bootstrap and schema application.

pub mod models;
pub mod repository;
pub mod schema;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "galley";
const DATABASE: &str = "main";

/// Open the embedded database at `path` and apply the schema.
pub async fn connect(path: &Path) -> Result<Surreal<Db>, surrealdb::Error> {
    let db: Surreal<Db> = Surreal::new::<RocksDb>(path).await?;
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;

    schema::apply(&db).await?;
    tracing::info!(path = %path.display(), "Database ready (embedded RocksDB)");

    Ok(db)
}
