//! Re-download every collection from the upstream API.
//!
//! Collections are fetched and written one at a time. Each collection's
//! in-memory snapshot is dropped right after its file is replaced, so a
//! failure part way leaves the earlier collections updated. Map previews
//! are dropped as soon as the maps file is replaced.

use std::sync::Arc;

use eordb_shared::{RefreshReport, RefreshedCollection};

use crate::infrastructure::ports::{
    CacheError, ClockPort, CollectionKind, DatasetSource, DumpFetcher, FetchError, PreviewCache,
    StoreError,
};
use crate::stores::DatasetStore;

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Refresh denied")]
    Denied,
    #[error("Fetching {collection} failed: {source}")]
    Fetch {
        collection: CollectionKind,
        source: FetchError,
    },
    #[error("Writing {collection} failed: {source}")]
    Store {
        collection: CollectionKind,
        source: StoreError,
    },
    #[error("Clearing map previews failed: {0}")]
    Cache(#[from] CacheError),
}

/// Who may refresh, and what else a refresh invalidates.
#[derive(Debug, Clone, Default)]
pub struct RefreshPolicy {
    /// Shared secret. `None` denies every attempt.
    pub key: Option<String>,
    pub clear_previews: bool,
}

pub struct Refresh {
    fetcher: Arc<dyn DumpFetcher>,
    source: Arc<dyn DatasetSource>,
    store: Arc<DatasetStore>,
    previews: Arc<dyn PreviewCache>,
    clock: Arc<dyn ClockPort>,
    policy: RefreshPolicy,
}

impl Refresh {
    pub fn new(
        fetcher: Arc<dyn DumpFetcher>,
        source: Arc<dyn DatasetSource>,
        store: Arc<DatasetStore>,
        previews: Arc<dyn PreviewCache>,
        clock: Arc<dyn ClockPort>,
        policy: RefreshPolicy,
    ) -> Self {
        Self {
            fetcher,
            source,
            store,
            previews,
            clock,
            policy,
        }
    }

    pub async fn execute(&self, key: Option<&str>) -> Result<RefreshReport, RefreshError> {
        if !self.authorized(key) {
            tracing::warn!(key_provided = key.is_some(), "Refresh denied");
            return Err(RefreshError::Denied);
        }

        let started_at = self.clock.now();
        let mut collections = Vec::with_capacity(CollectionKind::REFRESH_ORDER.len());

        for kind in CollectionKind::REFRESH_ORDER {
            let bytes = self
                .fetcher
                .fetch(kind)
                .await
                .map_err(|source| RefreshError::Fetch {
                    collection: kind,
                    source,
                })?;
            self.source
                .write(kind, &bytes)
                .await
                .map_err(|source| RefreshError::Store {
                    collection: kind,
                    source,
                })?;
            self.store.reset(kind).await;

            tracing::info!(collection = %kind, bytes = bytes.len(), "Refreshed collection");
            collections.push(RefreshedCollection {
                collection: kind.as_str().to_string(),
                bytes: bytes.len(),
            });

            if kind == CollectionKind::Maps && self.policy.clear_previews {
                let removed = self.previews.clear().await?;
                tracing::info!(removed, "Cleared map previews");
            }
        }

        Ok(RefreshReport {
            collections,
            started_at,
            finished_at: self.clock.now(),
            previews_cleared: self.policy.clear_previews,
        })
    }

    fn authorized(&self, key: Option<&str>) -> bool {
        match (&self.policy.key, key) {
            (Some(expected), Some(given)) => constant_time_eq(expected.as_bytes(), given.as_bytes()),
            _ => false,
        }
    }
}

/// Compares without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockDumpFetcher, MockPreviewCache};
    use crate::test_fixtures::{aeven_dataset, fixed_clock, store_over, MemoryDataset};

    struct Harness {
        source: Arc<MemoryDataset>,
        store: Arc<DatasetStore>,
    }

    fn harness() -> Harness {
        let source = aeven_dataset();
        Harness {
            store: store_over(source.clone()),
            source,
        }
    }

    fn refresh(
        harness: &Harness,
        fetcher: MockDumpFetcher,
        previews: MockPreviewCache,
        clear_previews: bool,
    ) -> Refresh {
        Refresh::new(
            Arc::new(fetcher),
            harness.source.clone(),
            harness.store.clone(),
            Arc::new(previews),
            Arc::new(fixed_clock()),
            RefreshPolicy {
                key: Some("s3cret".into()),
                clear_previews,
            },
        )
    }

    #[test]
    fn constant_time_eq_matches_exact_bytes() {
        assert!(constant_time_eq(b"s3cret", b"s3cret"));
        assert!(!constant_time_eq(b"s3cret", b"s3creT"));
        assert!(!constant_time_eq(b"s3cret", b"s3cre"));
    }

    #[tokio::test]
    async fn wrong_or_missing_key_is_denied() {
        let harness = harness();
        let mut fetcher = MockDumpFetcher::new();
        fetcher.expect_fetch().times(0);
        let refresh = refresh(&harness, fetcher, MockPreviewCache::new(), true);

        assert!(matches!(refresh.execute(None).await, Err(RefreshError::Denied)));
        assert!(matches!(
            refresh.execute(Some("guess")).await,
            Err(RefreshError::Denied)
        ));
    }

    #[tokio::test]
    async fn unconfigured_key_denies_everything() {
        let harness = harness();
        let mut fetcher = MockDumpFetcher::new();
        fetcher.expect_fetch().times(0);
        let refresh = Refresh::new(
            Arc::new(fetcher),
            harness.source.clone(),
            harness.store.clone(),
            Arc::new(MockPreviewCache::new()),
            Arc::new(fixed_clock()),
            RefreshPolicy::default(),
        );

        assert!(matches!(refresh.execute(Some("")).await, Err(RefreshError::Denied)));
    }

    #[tokio::test]
    async fn refresh_rewrites_every_collection_and_drops_snapshots() {
        let harness = harness();
        assert_eq!(harness.store.items().await.unwrap().len(), 5);

        let mut fetcher = MockDumpFetcher::new();
        fetcher.expect_fetch().times(7).returning(|_| Ok(b"[]".to_vec()));
        let mut previews = MockPreviewCache::new();
        previews.expect_clear().times(1).returning(|| Ok(3));

        let report = refresh(&harness, fetcher, previews, true)
            .execute(Some("s3cret"))
            .await
            .unwrap();

        let order: Vec<_> = report.collections.iter().map(|c| c.collection.as_str()).collect();
        assert_eq!(
            order,
            vec!["classes", "items", "maps", "npcs", "spells", "quests", "shops"]
        );
        assert_eq!(report.total_bytes(), 14);
        assert!(report.previews_cleared);
        assert_eq!(report.started_at, fixed_clock().0);

        assert!(harness.store.items().await.unwrap().is_empty());
        assert_eq!(harness.source.raw(CollectionKind::Shops), Some(b"[]".to_vec()));
    }

    #[tokio::test]
    async fn failure_stops_the_batch_without_rollback() {
        let harness = harness();
        let mut fetcher = MockDumpFetcher::new();
        fetcher.expect_fetch().returning(|kind| match kind {
            CollectionKind::Maps => Err(FetchError::Status {
                collection: kind,
                status: 502,
            }),
            _ => Ok(b"[]".to_vec()),
        });
        let mut previews = MockPreviewCache::new();
        previews.expect_clear().times(0);

        let err = refresh(&harness, fetcher, previews, true)
            .execute(Some("s3cret"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RefreshError::Fetch {
                collection: CollectionKind::Maps,
                ..
            }
        ));
        assert_eq!(harness.source.raw(CollectionKind::Items), Some(b"[]".to_vec()));
        assert_ne!(harness.source.raw(CollectionKind::Maps), Some(b"[]".to_vec()));
        assert_eq!(harness.store.maps().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn previews_are_cleared_once_maps_are_replaced_even_if_later_steps_fail() {
        let harness = harness();
        let mut fetcher = MockDumpFetcher::new();
        fetcher.expect_fetch().returning(|kind| match kind {
            CollectionKind::Shops => Err(FetchError::Status {
                collection: kind,
                status: 500,
            }),
            _ => Ok(b"[]".to_vec()),
        });
        let mut previews = MockPreviewCache::new();
        previews.expect_clear().times(1).returning(|| Ok(2));

        let err = refresh(&harness, fetcher, previews, true)
            .execute(Some("s3cret"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RefreshError::Fetch {
                collection: CollectionKind::Shops,
                ..
            }
        ));
        assert_eq!(harness.source.raw(CollectionKind::Maps), Some(b"[]".to_vec()));
        assert!(harness.store.maps().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn previews_survive_when_clearing_is_off() {
        let harness = harness();
        let mut fetcher = MockDumpFetcher::new();
        fetcher.expect_fetch().returning(|_| Ok(b"[]".to_vec()));
        let mut previews = MockPreviewCache::new();
        previews.expect_clear().times(0);

        let report = refresh(&harness, fetcher, previews, false)
            .execute(Some("s3cret"))
            .await
            .unwrap();
        assert!(!report.previews_cleared);
    }
}
