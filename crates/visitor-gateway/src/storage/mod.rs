//! Storage backends implementing [`CounterStore`].
//!
//! - `memory`: process-local table, atomic per record via `DashMap` entry guards.
//! - `sqlite`: file-backed table, atomic via a single upsert statement.

pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use visitor_core::error::Result;
use visitor_core::CounterStore;

use crate::config::{StorageBackend, StorageSection};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Open the backend selected by config. Called once at startup.
pub fn open(cfg: &StorageSection) -> Result<Arc<dyn CounterStore>> {
    match cfg.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StorageBackend::Sqlite => Ok(Arc::new(SqliteStore::open(&cfg.path, &cfg.table_name)?)),
    }
}
