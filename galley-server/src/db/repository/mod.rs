//! Repository Module
//!
//! Data access over the embedded SurrealDB instance. Multi-entity mutations
//! (group create, ungroup, guarded table/order writes) run as single
//! `BEGIN TRANSACTION .. COMMIT TRANSACTION` scripts so the read-validate-write
//! cycle is atomic; in-transaction guards re-check preconditions and `THROW`
//! a sentinel, which surfaces to callers as a retryable [`RepoError::Conflict`].

pub mod menu;
pub mod order;
pub mod order_table;
pub mod table_group;

pub use menu::MenuRepository;
pub use order::OrderRepository;
pub use order_table::OrderTableRepository;
pub use table_group::TableGroupRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;
use uuid::Uuid;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Sentinel thrown by transaction guards when a precondition that was
/// validated before the write no longer holds (lost race)
pub(crate) const GUARD_CONFLICT: &str = "tx:conflict";

/// Sentinel thrown when a referenced record vanished before the write
pub(crate) const GUARD_NOT_FOUND: &str = "tx:not_found";

/// Inspect a transaction response and map guard sentinels to domain errors.
///
/// A cancelled transaction reports errors on every statement; the sentinel
/// from the `THROW` is matched across all of them.
pub(crate) fn check_tx(
    response: &mut surrealdb::Response,
    not_found: &str,
    conflict: &str,
) -> RepoResult<()> {
    let errors = response.take_errors();
    if errors.is_empty() {
        return Ok(());
    }
    let combined = errors
        .values()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    if combined.contains(GUARD_NOT_FOUND) {
        Err(RepoError::NotFound(not_found.to_string()))
    } else if combined.contains(GUARD_CONFLICT) {
        Err(RepoError::Conflict(conflict.to_string()))
    } else {
        Err(RepoError::Database(combined))
    }
}

/// Parse a "table:id" string into a RecordId
pub(crate) fn parse_record_id(id: &str) -> RepoResult<RecordId> {
    id.parse()
        .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))
}

/// Allocate a fresh record id for `table`
pub(crate) fn new_record_id(table: &str) -> RecordId {
    RecordId::from_table_key(table, Uuid::new_v4().simple().to_string())
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
