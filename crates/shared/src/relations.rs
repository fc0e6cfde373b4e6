//! Cross-reference rows
//!
//! Every list the resolver produces is made of these rows. Ids are the raw
//! integers from the dumps so the front end can build links without knowing
//! the domain newtypes.

use serde::{Deserialize, Serialize};

/// Id and display name of any record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: u32,
    pub name: String,
}

pub type ItemRef = EntityRef;
pub type NpcRef = EntityRef;
pub type MapRef = EntityRef;
pub type ClassRef = EntityRef;

// =============================================================================
// Item relations
// =============================================================================

/// NPC that drops an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDrop {
    pub npc_id: u32,
    pub npc_name: String,
    pub percent: f64,
}

/// A recipe producing the item, with the shop staff able to craft it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Craftable {
    pub shop_name: String,
    pub npcs: Vec<CraftableNpc>,
    pub eons: i32,
    pub gold: i32,
    pub ingredients: Vec<CraftableIngredient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftableNpc {
    pub id: u32,
    pub name: String,
    pub graphic: i32,
    pub map_id: u32,
    pub map_name: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftableIngredient {
    pub item_id: u32,
    pub item_name: String,
    pub quantity: i32,
}

/// One NPC location selling the item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSoldBy {
    pub npc_id: u32,
    pub npc_name: String,
    pub price: i32,
    pub map_id: u32,
    pub map_name: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuestReward {
    pub quest_id: u32,
    pub quest_name: String,
    pub npc_id: u32,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGatherSpot {
    pub item_id: u32,
    pub map_id: u32,
    pub map_name: String,
    pub x: i32,
    pub y: i32,
    pub amount: i32,
    pub graphic_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemChestSpawn {
    pub item_id: u32,
    pub map_id: u32,
    pub map_name: String,
    pub x: i32,
    pub y: i32,
    pub amount: i32,
    pub slot: i32,
    pub time: i32,
    pub key: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphic_id: Option<i32>,
}

// =============================================================================
// NPC relations
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcDrop {
    pub item_id: u32,
    pub item_name: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcSpawn {
    pub map_id: u32,
    pub map_name: String,
    pub x: i32,
    pub y: i32,
    pub amount: i32,
    pub speed: i32,
    pub time: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcBuyItem {
    pub item_id: u32,
    pub item_name: String,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcCraft {
    pub item_id: u32,
    pub item_name: String,
    pub eons: i32,
    pub gold: i32,
    pub ingredients: Vec<CraftableIngredient>,
}

// =============================================================================
// Map relations
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapNpcSpawn {
    pub id: u32,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub amount: i32,
    pub speed: i32,
    pub time: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapGatherSpot {
    pub item_id: u32,
    pub item_name: String,
    pub x: i32,
    pub y: i32,
    pub amount: i32,
    pub graphic_id: i32,
}

/// Chest tile with every item slot placed on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapChest {
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphic_id: Option<i32>,
    pub spawns: Vec<ChestSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestSlot {
    pub item_id: u32,
    pub item_name: String,
    pub amount: i32,
    pub slot: i32,
    pub time: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSign {
    pub x: i32,
    pub y: i32,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphic_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapWarp {
    pub x: i32,
    pub y: i32,
    pub map_id: u32,
    pub map_name: String,
    pub destination_x: i32,
    pub destination_y: i32,
}

// =============================================================================
// Quest relations
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestReward {
    pub item_id: u32,
    pub item_name: String,
    pub amount: i32,
}
