//! Mapping service
//!
//! Business logic over the storage backend: URL validation, idempotent
//! shortening with a bounded collision-retry loop, click-counted
//! resolution and listing.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::get_config;
use crate::errors::{Result, ShortmapError};
use crate::storages::{InsertOutcome, Storage, UrlRecord};
use crate::utils::CodeGenerator;
use crate::utils::url_validator::validate_url;

/// Result of a shorten call
#[derive(Debug, Clone)]
pub struct ShortenResult {
    /// The record that now owns the target URL
    pub record: UrlRecord,
    /// Whether this call created the record
    pub created: bool,
}

/// Service for mapping operations
///
/// Constructed once per process (or per test) and shared by reference;
/// there is no ambient singleton.
pub struct MappingService {
    storage: Arc<dyn Storage>,
    generator: CodeGenerator,
}

impl MappingService {
    pub fn new(storage: Arc<dyn Storage>, generator: CodeGenerator) -> Self {
        Self { storage, generator }
    }

    /// Shorten a target URL.
    ///
    /// A URL that was already shortened gets its existing record back
    /// with `created = false` and nothing mutated. Otherwise candidate
    /// codes are generated until one is free, capped by
    /// `max_generation_attempts`.
    pub async fn shorten(&self, target: &str) -> Result<ShortenResult> {
        validate_url(target).map_err(|e| ShortmapError::invalid_url(e.to_string()))?;

        // 幂等：同一 URL 永远复用已有短码
        if let Some(existing) = self.storage.find_by_target(target).await {
            debug!("target already shortened as '{}'", existing.code);
            return Ok(ShortenResult {
                record: existing,
                created: false,
            });
        }

        let max_attempts = get_config().max_generation_attempts;
        for attempt in 1..=max_attempts {
            let candidate = UrlRecord::new(self.generator.generate(), target);

            match self.storage.insert_if_absent(candidate).await? {
                InsertOutcome::Created(record) => {
                    info!("created short code '{}' -> {}", record.code, record.target);
                    return Ok(ShortenResult {
                        record,
                        created: true,
                    });
                }
                // 并发提交同一 URL 时只有一个调用者真正创建
                InsertOutcome::TargetExists(existing) => {
                    debug!("lost creation race, reusing '{}'", existing.code);
                    return Ok(ShortenResult {
                        record: existing,
                        created: false,
                    });
                }
                InsertOutcome::CodeCollision => {
                    debug!("code collision, retrying ({}/{})", attempt, max_attempts);
                }
            }
        }

        Err(ShortmapError::generation_exhausted(format!(
            "no free code found after {} attempts",
            max_attempts
        )))
    }

    /// Resolve a code to its target URL, counting the click.
    ///
    /// The increment and the returned URL come from one atomic backend
    /// operation; concurrent resolves never lose a count.
    pub async fn resolve(&self, code: &str) -> Result<String> {
        match self.storage.resolve(code).await {
            Some(record) => {
                debug!("resolved '{}' (clicks: {})", record.code, record.clicks);
                Ok(record.target)
            }
            None => Err(ShortmapError::not_found(format!(
                "short code '{}' does not exist",
                code
            ))),
        }
    }

    /// Read a record for display without counting a click.
    pub async fn get(&self, code: &str) -> Result<UrlRecord> {
        self.storage.get(code).await.ok_or_else(|| {
            ShortmapError::not_found(format!("short code '{}' does not exist", code))
        })
    }

    /// All records, most recently created first.
    pub async fn list(&self) -> Vec<UrlRecord> {
        self.storage.load_all().await
    }
}
