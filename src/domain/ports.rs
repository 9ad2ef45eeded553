use anyhow::Result;
use async_trait::async_trait;

/// Asynchronous string key-value store supplied by the host.
///
/// `set` replaces any prior value for the key. `get` returns `None` when the
/// key was never written.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
