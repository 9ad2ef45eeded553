//! Key-value store backends for persisted checklist state.

pub mod in_memory;
pub mod json_file;
pub mod sqlite;

pub use in_memory::InMemoryKeyValueStore;
pub use json_file::JsonFileStore;
pub use sqlite::{SqliteDatabase, SqliteKeyValueStore};
