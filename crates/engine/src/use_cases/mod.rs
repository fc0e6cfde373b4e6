//! Use cases - one module per question the browser answers.
//!
//! Relationship modules (`items`, `npcs`, `maps`, `quests`) expose their
//! joins as plain functions over loaded collections, wrapped by a lookup
//! struct that fetches the snapshots it needs from the store.

pub mod catalog;
pub mod items;
pub mod listing;
pub mod maps;
pub mod npcs;
pub mod preview;
pub mod quests;
pub mod refresh;
pub mod resolve;

pub use catalog::{Catalog, SpellDetails};
pub use items::{ItemDetails, ItemLookup};
pub use listing::{ListError, Listing};
pub use maps::{MapDetails, MapLookup};
pub use npcs::{NpcDetails, NpcLookup};
pub use preview::{MapPreview, PreviewError};
pub use quests::{QuestDetails, QuestLookup};
pub use refresh::{Refresh, RefreshError, RefreshPolicy};
pub use resolve::ResolveError;

/// Container for all use cases.
pub struct UseCases {
    pub items: ItemLookup,
    pub npcs: NpcLookup,
    pub maps: MapLookup,
    pub quests: QuestLookup,
    pub listing: Listing,
    pub catalog: Catalog,
    pub preview: MapPreview,
    pub refresh: Refresh,
}
