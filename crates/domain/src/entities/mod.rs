//! Records of the seven dataset collections, as stored in the dump files

mod class;
mod item;
mod item_meta;
mod map;
mod npc;
mod quest;
mod shop;
mod spell;

pub use class::{Class, LEGACY_CLASS_FIELDS, LEGACY_CLASS_PREFIX};
pub use item::{
    CraftIngredient, CraftRecipe, Item, ItemDropSource, ItemRequirements, ItemStats,
    QuestRewardRef, SharedDropSource, SoldByRef, RESOURCE_SUFFIX,
};
pub use map::{
    LayerTile, Map, MapGather, MapItem, MapLayer, MapLayerDetails, MapNpc, Sign, SignMessage,
    SpecTile, WarpTile, OBJECT_LAYER,
};
pub use npc::{Npc, NpcAnimation, NpcCombat, NpcDropEntry, NpcSharedDropEntry, NpcSounds};
pub use quest::{ItemReward, Quest, QuestState, QuestStateNpc};
pub use shop::{Shop, ShopBuy, ShopCraft, ShopNpc};
pub use spell::{Spell, SpellEffect, LEGACY_SPELL_FIELDS};
