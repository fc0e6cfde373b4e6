//! Record types, ids and code tables for the Endless Online Recharged
//! dataset dumps.

#![recursion_limit = "256"]

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_support;

pub use entities::{
    Class, CraftIngredient, CraftRecipe, Item, ItemDropSource, ItemReward, Map, MapGather,
    MapItem, MapNpc, Npc, NpcDropEntry, NpcSharedDropEntry, Quest, SharedDropSource, Shop,
    ShopBuy, ShopNpc, Sign, Spell, SpellEffect, WarpTile,
};
pub use error::DomainError;
pub use ids::{ClassId, ItemId, MapId, NpcId, QuestId, SpellId};
pub use types::{
    ItemSubType, ItemType, ItemUniqueness, LightMode, MapTileSpec, NpcBehavior, NpcSpeed,
    SpellTarget, SpellTargetRestrict, SpellType, WeatherType,
};
