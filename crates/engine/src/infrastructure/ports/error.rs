//! Error types for port operations.

use super::types::CollectionKind;

/// Dataset cache errors, carrying the collection for actionable messages.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The collection has never been fetched.
    #[error("{collection} cache file not found at {path}")]
    Missing {
        collection: CollectionKind,
        path: String,
    },

    #[error("I/O error on {collection}: {message}")]
    Io {
        collection: CollectionKind,
        message: String,
    },

    /// The file or one of its records does not match the record schema.
    /// `index` is `None` when the file itself is not a JSON array.
    #[error("Malformed {collection} data{}: {message}", record_suffix(.index))]
    Malformed {
        collection: CollectionKind,
        index: Option<usize>,
        message: String,
    },

    /// A record uses a field from an older export format.
    #[error("{collection} record {index} uses field '{field}' from an older export format")]
    SchemaRevision {
        collection: CollectionKind,
        index: usize,
        field: String,
    },
}

fn record_suffix(index: &Option<usize>) -> String {
    index.map(|i| format!(" at record {i}")).unwrap_or_default()
}

impl StoreError {
    pub fn malformed(
        collection: CollectionKind,
        index: Option<usize>,
        message: impl ToString,
    ) -> Self {
        Self::Malformed {
            collection,
            index,
            message: message.to_string(),
        }
    }

    pub fn io(collection: CollectionKind, message: impl ToString) -> Self {
        Self::Io {
            collection,
            message: message.to_string(),
        }
    }

    pub fn collection(&self) -> CollectionKind {
        match self {
            Self::Missing { collection, .. }
            | Self::Io { collection, .. }
            | Self::Malformed { collection, .. }
            | Self::SchemaRevision { collection, .. } => *collection,
        }
    }
}

/// Upstream dump API errors.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request for {collection} failed: {message}")]
    Request {
        collection: CollectionKind,
        message: String,
    },

    #[error("Upstream returned HTTP {status} for {collection}")]
    Status {
        collection: CollectionKind,
        status: u16,
    },
}

/// Preview image cache errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Preview cache I/O failed: {0}")]
    Io(String),
}
