//! In-memory storage backend
//!
//! Keeps the authoritative code table, the target-URL index and the
//! insertion order under a single lock, so the compound operations the
//! `Storage` trait promises to be atomic really are.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::errors::Result;
use crate::storages::Storage;
use crate::storages::models::{InsertOutcome, UrlRecord};

#[derive(Default)]
struct StoreInner {
    /// code -> record（权威表）
    records: HashMap<String, UrlRecord>,
    /// target URL -> code, exact string match
    by_target: HashMap<String, String>,
    /// insertion order of codes; records are never removed
    order: Vec<String>,
}

#[derive(Default)]
pub struct MemoryStorage {
    inner: RwLock<StoreInner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, code: &str) -> Option<UrlRecord> {
        self.inner.read().records.get(code).cloned()
    }

    async fn find_by_target(&self, target: &str) -> Option<UrlRecord> {
        let inner = self.inner.read();
        let code = inner.by_target.get(target)?;
        inner.records.get(code).cloned()
    }

    async fn insert_if_absent(&self, record: UrlRecord) -> Result<InsertOutcome> {
        let mut inner = self.inner.write();

        if let Some(code) = inner.by_target.get(&record.target) {
            if let Some(existing) = inner.records.get(code) {
                return Ok(InsertOutcome::TargetExists(existing.clone()));
            }
        }

        if inner.records.contains_key(&record.code) {
            debug!("code collision on '{}'", record.code);
            return Ok(InsertOutcome::CodeCollision);
        }

        inner
            .by_target
            .insert(record.target.clone(), record.code.clone());
        inner.order.push(record.code.clone());
        inner.records.insert(record.code.clone(), record.clone());

        Ok(InsertOutcome::Created(record))
    }

    async fn resolve(&self, code: &str) -> Option<UrlRecord> {
        let mut inner = self.inner.write();
        let record = inner.records.get_mut(code)?;
        record.clicks += 1;
        Some(record.clone())
    }

    async fn load_all(&self) -> Vec<UrlRecord> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .rev()
            .filter_map(|code| inner.records.get(code).cloned())
            .collect()
    }

    async fn get_backend_name(&self) -> String {
        "memory".into()
    }
}
