//! Storage configuration parsing from environment variables.
//!
//! Selects the key-value backend that holds the checklist envelope.

use crate::domain::checklist::DEFAULT_STATE_KEY;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Key-value backend for persisted checklist state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "json" => Ok(StorageBackend::File),
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            _ => anyhow::bail!(
                "Invalid LFPM_STORAGE_BACKEND: {}. Must be 'file', 'sqlite', or 'memory'",
                s
            ),
        }
    }
}

/// Storage environment configuration
#[derive(Debug, Clone)]
pub struct StorageEnvConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub state_key: String,
    pub database_url: String,
}

impl StorageEnvConfig {
    pub fn from_env() -> Result<Self> {
        let backend = env::var("LFPM_STORAGE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .parse::<StorageBackend>()?;

        let data_dir = match env::var("LFPM_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => {
                let home = env::var("HOME")
                    .context("Could not find HOME directory (set LFPM_DATA_DIR instead)")?;
                PathBuf::from(home).join(".lfpm")
            }
        };

        let state_key = env::var("LFPM_STATE_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATE_KEY.to_string());

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| format!("sqlite://{}", data_dir.join("lfpm.db").display()));

        Ok(Self {
            backend,
            data_dir,
            state_key,
            database_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parsing() {
        assert_eq!("file".parse::<StorageBackend>().unwrap(), StorageBackend::File);
        assert_eq!("JSON".parse::<StorageBackend>().unwrap(), StorageBackend::File);
        assert_eq!("SQLite".parse::<StorageBackend>().unwrap(), StorageBackend::Sqlite);
        assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert!("redis".parse::<StorageBackend>().is_err());
    }
}
