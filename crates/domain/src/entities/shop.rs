//! Shop record from the shops dump
//!
//! Shops are keyed by name. Their staff list names NPCs rather than
//! referencing them by id, so joining a shop to an NPC goes through the
//! NPC's lowercased name.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, MapId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    pub npcs: Vec<ShopNpc>,
    pub buys: Vec<ShopBuy>,
    pub crafts: Vec<ShopCraft>,
}

/// Where an NPC staffing the shop stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopNpc {
    pub map_id: MapId,
    pub x: i32,
    pub y: i32,
    pub npc_name: String,
    pub map_name: String,
}

/// Item the shop sells, at `price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopBuy {
    pub item_id: ItemId,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopCraft {
    pub item_id: ItemId,
}

impl Shop {
    pub fn price_of(&self, item_id: ItemId) -> Option<i32> {
        self.buys
            .iter()
            .find(|b| b.item_id == item_id)
            .map(|b| b.price)
    }
}
