//! eordb Shared - Wire types returned by the engine
//!
//! Pure data: cross-reference rows, listing pages and refresh reports. Ids
//! are raw `u32` values, never the domain newtypes.

pub mod listing;
pub mod refresh;
pub mod relations;

pub use listing::{ItemListEntry, ListPage, ListQuery, SpeedSample};
pub use refresh::{RefreshReport, RefreshedCollection};
pub use relations::{
    ChestSlot, ClassRef, Craftable, CraftableIngredient, CraftableNpc, EntityRef, ItemChestSpawn,
    ItemDrop, ItemGatherSpot, ItemQuestReward, ItemRef, ItemSoldBy, MapChest, MapGatherSpot,
    MapNpcSpawn, MapRef, MapSign, MapWarp, NpcBuyItem, NpcCraft, NpcDrop, NpcRef, NpcSpawn,
    QuestReward,
};
