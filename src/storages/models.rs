use serde::{Deserialize, Serialize};

/// 一条短链映射记录
///
/// `code` and `target` are immutable once assigned; `clicks` only ever
/// moves up, bumped by exactly 1 per successful resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlRecord {
    pub code: String,
    pub target: String,
    pub created_at: chrono::DateTime<chrono::Utc>,

    #[serde(default)]
    pub clicks: usize,
}

impl UrlRecord {
    /// Fresh record: created now, zero clicks.
    pub fn new(code: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target: target.into(),
            created_at: chrono::Utc::now(),
            clicks: 0,
        }
    }
}

/// Outcome of an atomic check-and-insert against the store.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The record was inserted.
    Created(UrlRecord),
    /// Another record already owns this target URL; that record is
    /// returned untouched (idempotent insertion).
    TargetExists(UrlRecord),
    /// The candidate code is already taken; the caller regenerates.
    CodeCollision,
}
