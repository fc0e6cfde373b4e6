//! External service port traits (upstream dump API, preview image cache).

use async_trait::async_trait;
use eordb_domain::MapId;

use super::error::{CacheError, FetchError};
use super::types::CollectionKind;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DumpFetcher: Send + Sync {
    /// Downloads the full JSON dump of one collection.
    async fn fetch(&self, kind: CollectionKind) -> Result<Vec<u8>, FetchError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreviewCache: Send + Sync {
    async fn get(&self, map_id: MapId) -> Result<Option<Vec<u8>>, CacheError>;
    async fn put(&self, map_id: MapId, png: &[u8]) -> Result<(), CacheError>;
    /// Drops every cached preview, returning how many were removed.
    async fn clear(&self) -> Result<usize, CacheError>;
}
