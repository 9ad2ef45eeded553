pub mod observability;
pub mod storage;

pub use storage::{InMemoryKeyValueStore, JsonFileStore, SqliteKeyValueStore};
