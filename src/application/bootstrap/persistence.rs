use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{StorageBackend, StorageEnvConfig};
use crate::domain::ports::KeyValueStore;
use crate::infrastructure::storage::{
    InMemoryKeyValueStore, JsonFileStore, SqliteDatabase, SqliteKeyValueStore,
};

pub struct StorageBootstrap;

impl StorageBootstrap {
    /// Opens the configured key-value backend.
    pub async fn init(config: &StorageEnvConfig) -> Result<Arc<dyn KeyValueStore>> {
        let store: Arc<dyn KeyValueStore> = match config.backend {
            StorageBackend::File => {
                info!("Using JSON file storage in {:?}", config.data_dir);
                Arc::new(
                    JsonFileStore::new(&config.data_dir)
                        .await
                        .context("Failed to initialize file storage")?,
                )
            }
            StorageBackend::Sqlite => {
                info!("Using SQLite storage at {}", config.database_url);
                let db = SqliteDatabase::new(&config.database_url)
                    .await
                    .context("Failed to initialize SQLite storage")?;
                Arc::new(SqliteKeyValueStore::new(db))
            }
            StorageBackend::Memory => {
                warn!("Using in-memory storage: checklist state will not survive a restart");
                Arc::new(InMemoryKeyValueStore::new())
            }
        };

        Ok(store)
    }
}
