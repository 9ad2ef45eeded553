pub mod persistence;

pub use persistence::StorageBootstrap;

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::autosave::AutosaveService;
use crate::application::checklist_manager::ChecklistStateManager;
use crate::application::session::ChecklistSession;
use crate::domain::checklist::SETUP_FLAG_COUNT;
use crate::domain::errors::DeserializationFailure;
use crate::domain::ports::KeyValueStore;

/// Performs the single startup load.
///
/// Never fails: an absent entry, an unreadable blob or a store error all
/// leave the manager at its defaults.
pub async fn load_manager(store: &dyn KeyValueStore, key: &str) -> ChecklistStateManager {
    let raw = match store.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("No saved checklist state under '{}', starting fresh", key);
            return ChecklistStateManager::new();
        }
        Err(e) => {
            warn!("Failed to read checklist state: {:#}. Starting fresh.", e);
            return ChecklistStateManager::new();
        }
    };

    match ChecklistStateManager::deserialize(&raw) {
        Ok(state) => {
            info!(
                "Restored checklist state (setup {}/{}, daily {} checks, saved at {})",
                state.setup_checklist.progress(),
                SETUP_FLAG_COUNT,
                state.daily_checklist.completed_count(),
                state.timestamp
            );
            ChecklistStateManager::from_persisted(state)
        }
        Err(DeserializationFailure::Absent) => {
            info!("Saved checklist state is empty, starting fresh");
            ChecklistStateManager::new()
        }
        Err(e) => {
            warn!("{}. Starting fresh.", e);
            ChecklistStateManager::new()
        }
    }
}

/// Loads state and wires the autosave task. Must run inside a tokio runtime.
pub async fn start_session(store: Arc<dyn KeyValueStore>, key: &str) -> ChecklistSession {
    let manager = load_manager(store.as_ref(), key).await;
    let (autosave, _join) = AutosaveService::spawn(store, key);
    ChecklistSession::new(manager, autosave)
}
