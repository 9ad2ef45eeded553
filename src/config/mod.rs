//! Configuration module for the LFPM checklist.
//!
//! Structured configuration loaded from environment variables (and `.env`
//! via `dotenvy` in `main`), organized by concern: Storage and UI.

mod storage_config;
mod ui_config;

pub use storage_config::{StorageBackend, StorageEnvConfig};
pub use ui_config::UiEnvConfig;

use anyhow::Result;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageEnvConfig,
    pub ui: UiEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            storage: StorageEnvConfig::from_env()?,
            ui: UiEnvConfig::from_env(),
        })
    }
}
