use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::errors::Result;

pub mod memory;
pub mod models;

pub use models::{InsertOutcome, UrlRecord};

/// Storage backend for the mapping table.
///
/// The in-memory backend is the only built-in implementation; the trait
/// is the seam where a durable backend would plug in. Compound
/// operations (`insert_if_absent`, `resolve`) must be atomic with
/// respect to concurrent callers.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read a record without touching its click counter.
    async fn get(&self, code: &str) -> Option<UrlRecord>;

    /// Exact-match lookup by target URL. No normalization: a trailing
    /// slash or different query order is a different URL.
    async fn find_by_target(&self, target: &str) -> Option<UrlRecord>;

    /// Atomic check-and-insert. Never overwrites: an existing target
    /// URL yields `TargetExists`, an existing code yields
    /// `CodeCollision`, and only a fully free record is inserted.
    async fn insert_if_absent(&self, record: UrlRecord) -> Result<InsertOutcome>;

    /// Atomically increment the click counter and return the updated
    /// record, so callers never observe a stale count next to the URL.
    async fn resolve(&self, code: &str) -> Option<UrlRecord>;

    /// All records, most recently created first.
    async fn load_all(&self) -> Vec<UrlRecord>;

    async fn get_backend_name(&self) -> String;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create() -> Result<Arc<dyn Storage>> {
        let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "memory".into());

        let boxed: Box<dyn Storage> = match backend.as_str() {
            "memory" => Box::new(memory::MemoryStorage::new()),
            other => {
                warn!("Unknown storage backend '{}', falling back to memory", other);
                Box::new(memory::MemoryStorage::new())
            }
        };

        Ok(Arc::from(boxed))
    }
}
