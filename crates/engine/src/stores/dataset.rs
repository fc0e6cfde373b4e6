//! Lazily loaded, memoized collection snapshots.
//!
//! Each collection has one slot holding the current snapshot. The first
//! access reads and parses the cache file; later accesses hand out the same
//! `Arc` until the slot is reset. Callers keep whatever snapshot they were
//! given, so a refresh never changes data under a running request.

use std::sync::Arc;

use tokio::sync::RwLock;

use eordb_domain::{Class, Item, Map, Npc, Quest, Shop, Spell};

use crate::infrastructure::ports::{ClockPort, CollectionKind, DatasetSource, StoreError};

use super::collection::{Collection, Record};

type Slot<T> = RwLock<Option<Arc<Collection<T>>>>;

/// Record types with a slot in the [`DatasetStore`]
pub trait Stored: Record {
    fn slot(store: &DatasetStore) -> &Slot<Self>;
}

macro_rules! stored {
    ($record:ty, $field:ident) => {
        impl Stored for $record {
            fn slot(store: &DatasetStore) -> &Slot<Self> {
                &store.$field
            }
        }
    };
}

stored!(Class, classes);
stored!(Item, items);
stored!(Map, maps);
stored!(Npc, npcs);
stored!(Quest, quests);
stored!(Shop, shops);
stored!(Spell, spells);

pub struct DatasetStore {
    source: Arc<dyn DatasetSource>,
    clock: Arc<dyn ClockPort>,
    classes: Slot<Class>,
    items: Slot<Item>,
    maps: Slot<Map>,
    npcs: Slot<Npc>,
    quests: Slot<Quest>,
    shops: Slot<Shop>,
    spells: Slot<Spell>,
}

impl DatasetStore {
    pub fn new(source: Arc<dyn DatasetSource>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            source,
            clock,
            classes: RwLock::new(None),
            items: RwLock::new(None),
            maps: RwLock::new(None),
            npcs: RwLock::new(None),
            quests: RwLock::new(None),
            shops: RwLock::new(None),
            spells: RwLock::new(None),
        }
    }

    /// Current snapshot of a collection, reading it from the source on first use.
    pub async fn load<T: Stored>(&self) -> Result<Arc<Collection<T>>, StoreError> {
        let slot = T::slot(self);
        if let Some(collection) = slot.read().await.as_ref() {
            return Ok(Arc::clone(collection));
        }

        let mut guard = slot.write().await;
        // Another caller may have loaded it while we waited for the lock.
        if let Some(collection) = guard.as_ref() {
            return Ok(Arc::clone(collection));
        }

        let bytes = self.source.read(T::KIND).await?;
        let collection = Arc::new(Collection::<T>::parse(&bytes, self.clock.now())?);
        tracing::info!(
            collection = %T::KIND,
            records = collection.len(),
            bytes = bytes.len(),
            "Loaded collection"
        );
        *guard = Some(Arc::clone(&collection));
        Ok(collection)
    }

    pub async fn classes(&self) -> Result<Arc<Collection<Class>>, StoreError> {
        self.load().await
    }

    pub async fn items(&self) -> Result<Arc<Collection<Item>>, StoreError> {
        self.load().await
    }

    pub async fn maps(&self) -> Result<Arc<Collection<Map>>, StoreError> {
        self.load().await
    }

    pub async fn npcs(&self) -> Result<Arc<Collection<Npc>>, StoreError> {
        self.load().await
    }

    pub async fn quests(&self) -> Result<Arc<Collection<Quest>>, StoreError> {
        self.load().await
    }

    pub async fn shops(&self) -> Result<Arc<Collection<Shop>>, StoreError> {
        self.load().await
    }

    pub async fn spells(&self) -> Result<Arc<Collection<Spell>>, StoreError> {
        self.load().await
    }

    /// Drops the memoized snapshot so the next access re-reads the source.
    pub async fn reset(&self, kind: CollectionKind) {
        match kind {
            CollectionKind::Classes => self.clear::<Class>().await,
            CollectionKind::Items => self.clear::<Item>().await,
            CollectionKind::Maps => self.clear::<Map>().await,
            CollectionKind::Npcs => self.clear::<Npc>().await,
            CollectionKind::Quests => self.clear::<Quest>().await,
            CollectionKind::Shops => self.clear::<Shop>().await,
            CollectionKind::Spells => self.clear::<Spell>().await,
        }
        tracing::debug!(collection = %kind, "Reset collection");
    }

    pub async fn reset_all(&self) {
        for kind in CollectionKind::REFRESH_ORDER {
            self.reset(kind).await;
        }
    }

    async fn clear<T: Stored>(&self) {
        T::slot(self).write().await.take();
    }
}
