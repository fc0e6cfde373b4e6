//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::dataset_files::FileDatasetSource;
use crate::infrastructure::dump_client::HttpDumpFetcher;
use crate::infrastructure::ports::{ClockPort, DatasetSource, DumpFetcher, PreviewCache};
use crate::infrastructure::preview_files::FilePreviewCache;
use crate::stores::DatasetStore;
use crate::use_cases::{
    Catalog, ItemLookup, Listing, MapLookup, MapPreview, NpcLookup, QuestLookup, Refresh,
    RefreshPolicy, UseCases,
};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Adapters behind the ports, swappable in tests.
pub struct Adapters {
    pub source: Arc<dyn DatasetSource>,
    pub fetcher: Arc<dyn DumpFetcher>,
    pub previews: Arc<dyn PreviewCache>,
    pub clock: Arc<dyn ClockPort>,
}

impl Adapters {
    /// Files under the configured directories and the upstream HTTP API.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            source: Arc::new(FileDatasetSource::new(&config.data_dir)),
            fetcher: Arc::new(HttpDumpFetcher::new(&config.api_base_url)),
            previews: Arc::new(FilePreviewCache::new(&config.preview_dir)),
            clock: Arc::new(SystemClock::new()),
        }
    }
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(config: &AppConfig, adapters: Adapters) -> Self {
        let Adapters {
            source,
            fetcher,
            previews,
            clock,
        } = adapters;

        let store = Arc::new(DatasetStore::new(source.clone(), clock.clone()));

        let use_cases = UseCases {
            items: ItemLookup::new(store.clone()),
            npcs: NpcLookup::new(store.clone()),
            maps: MapLookup::new(store.clone()),
            quests: QuestLookup::new(store.clone()),
            listing: Listing::new(store.clone(), config.page_size),
            catalog: Catalog::new(store.clone()),
            preview: MapPreview::new(store.clone(), previews.clone()),
            refresh: Refresh::new(
                fetcher,
                source,
                store,
                previews,
                clock,
                RefreshPolicy {
                    key: config.refresh_key.clone(),
                    clear_previews: config.clear_previews_on_refresh,
                },
            ),
        };

        Self { use_cases }
    }
}
