//! Storage port for the collection cache files.

use async_trait::async_trait;

use super::error::StoreError;
use super::types::CollectionKind;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Raw JSON of a collection. A collection that was never written is
    /// `StoreError::Missing`.
    async fn read(&self, kind: CollectionKind) -> Result<Vec<u8>, StoreError>;

    /// Replaces the collection's cached JSON wholesale.
    async fn write(&self, kind: CollectionKind, bytes: &[u8]) -> Result<(), StoreError>;
}
