use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a completed dataset refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshReport {
    /// Collections in the order they were written
    pub collections: Vec<RefreshedCollection>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub previews_cleared: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshedCollection {
    pub collection: String,
    pub bytes: usize,
}

impl RefreshReport {
    pub fn total_bytes(&self) -> usize {
        self.collections.iter().map(|c| c.bytes).sum()
    }
}
