//! NPC relationships: drops, spawn locations and shop offerings.

use std::sync::Arc;

use serde::Serialize;

use eordb_domain::{Item, Map, Npc, NpcId, Shop};
use eordb_shared::{NpcBuyItem, NpcCraft, NpcDrop, NpcSpawn};

use crate::stores::{Collection, DatasetStore};

use super::items::ingredients;
use super::resolve::{follow, ResolveError};

#[derive(Debug, Clone, Serialize)]
pub struct NpcDetails {
    pub npc: Npc,
    pub behavior: String,
    pub speed: String,
    pub drops: Vec<NpcDrop>,
    pub spawns: Vec<NpcSpawn>,
    /// Shop this NPC staffs, if any
    pub shop_name: Option<String>,
    pub buys: Vec<NpcBuyItem>,
    pub crafts: Vec<NpcCraft>,
}

pub fn drops(npc: &Npc, items: &Collection<Item>) -> Vec<NpcDrop> {
    let primary = npc.drops.iter().map(|d| (d.item_id, d.drop_percent));
    let shared = npc.shared.iter().map(|d| (d.item_id, d.drop_percent));
    primary
        .chain(shared)
        .filter_map(|(item_id, percent)| {
            let item = follow(items.get(&item_id), "npc drop item", item_id)?;
            Some(NpcDrop {
                item_id: item.id.get(),
                item_name: item.name.clone(),
                percent,
            })
        })
        .collect()
}

/// Spawn speed in effect: the spawn's override, or the NPC default when 0.
pub fn effective_speed(spawn_speed: i32, npc: &Npc) -> i32 {
    if spawn_speed != 0 {
        spawn_speed
    } else {
        npc.npc_default_speed
    }
}

/// Respawn seconds in effect: the spawn's override when positive.
pub fn effective_respawn(spawn_time: i32, npc: &Npc) -> i32 {
    if spawn_time > 0 {
        spawn_time
    } else {
        npc.npc_respawn_secs
    }
}

pub fn spawns(npc: &Npc, maps: &Collection<Map>) -> Vec<NpcSpawn> {
    maps.with_spawn(npc.id)
        .flat_map(|map| {
            map.npcs
                .iter()
                .filter(|spawn| spawn.id == npc.id)
                .map(move |spawn| NpcSpawn {
                    map_id: map.id.get(),
                    map_name: map.name.clone(),
                    x: spawn.x,
                    y: spawn.y,
                    amount: spawn.amount,
                    speed: effective_speed(spawn.speed, npc),
                    time: effective_respawn(spawn.time, npc),
                })
        })
        .collect()
}

pub fn buys(shop: &Shop, items: &Collection<Item>) -> Vec<NpcBuyItem> {
    shop.buys
        .iter()
        .filter_map(|buy| {
            let item = follow(items.get(&buy.item_id), "shop buy item", buy.item_id)?;
            Some(NpcBuyItem {
                item_id: item.id.get(),
                item_name: item.name.clone(),
                price: buy.price,
            })
        })
        .collect()
}

/// Crafts offered by the shop. Each needs a recipe on the crafted item
/// naming this shop; crafts without one are omitted.
pub fn crafts(shop: &Shop, items: &Collection<Item>) -> Vec<NpcCraft> {
    shop.crafts
        .iter()
        .filter_map(|craft| {
            let item = follow(items.get(&craft.item_id), "shop craft item", craft.item_id)?;
            let recipe = follow(
                item.craftables.iter().find(|r| r.shop_name == shop.name),
                "shop craft recipe",
                item.id,
            )?;
            Some(NpcCraft {
                item_id: item.id.get(),
                item_name: item.name.clone(),
                eons: recipe.craft_eon,
                gold: recipe.craft_gold,
                ingredients: ingredients(recipe.craft_ingredients.iter(), items),
            })
        })
        .collect()
}

pub struct NpcLookup {
    store: Arc<DatasetStore>,
}

impl NpcLookup {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: NpcId) -> Result<Option<NpcDetails>, ResolveError> {
        let npcs = self.store.npcs().await?;
        let Some(npc) = npcs.get(&id) else {
            return Ok(None);
        };
        let items = self.store.items().await?;
        let maps = self.store.maps().await?;
        let shops = self.store.shops().await?;
        let shop = shops.staffed_by(&npc.name);

        Ok(Some(NpcDetails {
            behavior: npc.behavior().label().to_string(),
            speed: npc.default_speed().to_string(),
            drops: drops(npc, &items),
            spawns: spawns(npc, &maps),
            shop_name: shop.map(|s| s.name.clone()),
            buys: shop.map(|s| buys(s, &items)).unwrap_or_default(),
            crafts: shop.map(|s| crafts(s, &items)).unwrap_or_default(),
            npc: npc.clone(),
        }))
    }
}
