//! Server state
//!
//! Shared handle passed to every handler. Holds the immutable config and
//! the embedded database; services and repositories are constructed per
//! request from a cloned handle, so the state itself carries no mutable
//! domain data.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db;

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
}

impl ServerState {
    /// Initialize state: ensure the working directory exists and open the
    /// embedded database.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let db = db::connect(&config.db_path()).await?;

        Ok(Self {
            config: config.clone(),
            db,
        })
    }
}
