//! Map contents resolved against the NPC, item and map collections.

use std::sync::Arc;

use serde::Serialize;

use eordb_domain::{Item, Map, MapId, Npc};
use eordb_shared::{ChestSlot, MapChest, MapGatherSpot, MapNpcSpawn, MapSign, MapWarp};

use crate::stores::{Collection, DatasetStore};

use super::items::GATHER_GRAPHIC_OFFSET;
use super::npcs::{effective_respawn, effective_speed};
use super::resolve::{follow, ResolveError};

#[derive(Debug, Clone, Serialize)]
pub struct MapDetails {
    pub map: Map,
    pub light_mode: String,
    pub weather: String,
    pub npc_spawns: Vec<MapNpcSpawn>,
    pub gather_spots: Vec<MapGatherSpot>,
    pub chests: Vec<MapChest>,
    pub signs: Vec<MapSign>,
    pub warps: Vec<MapWarp>,
}

pub fn npc_spawns(map: &Map, npcs: &Collection<Npc>) -> Vec<MapNpcSpawn> {
    map.npcs
        .iter()
        .filter_map(|spawn| {
            let npc = follow(npcs.get(&spawn.id), "map spawn npc", spawn.id)?;
            Some(MapNpcSpawn {
                id: npc.id.get(),
                name: npc.name.clone(),
                x: spawn.x,
                y: spawn.y,
                amount: spawn.amount,
                speed: effective_speed(spawn.speed, npc),
                time: effective_respawn(spawn.time, npc),
            })
        })
        .collect()
}

pub fn gather_spots(map: &Map, items: &Collection<Item>) -> Vec<MapGatherSpot> {
    map.map_gathers
        .iter()
        .filter_map(|gather| {
            let item = follow(items.get(&gather.item_id), "gather item", gather.item_id)?;
            Some(MapGatherSpot {
                item_id: item.id.get(),
                item_name: item.name.clone(),
                x: gather.x,
                y: gather.y,
                amount: gather.max_amount,
                graphic_id: gather.graphic_id + GATHER_GRAPHIC_OFFSET,
            })
        })
        .collect()
}

/// Chest tiles with their slots, grouped by coordinate in first-seen order.
pub fn chests(map: &Map, items: &Collection<Item>) -> Vec<MapChest> {
    let mut chests: Vec<MapChest> = Vec::new();
    for slot in map.items.iter().filter(|i| map.has_chest_at(i.x, i.y)) {
        let Some(item) = follow(items.get(&slot.item_id), "chest item", slot.item_id) else {
            continue;
        };
        let content = ChestSlot {
            item_id: item.id.get(),
            item_name: item.name.clone(),
            amount: slot.amount,
            slot: slot.slot,
            time: slot.time,
        };
        match chests.iter_mut().find(|c| c.x == slot.x && c.y == slot.y) {
            Some(chest) => chest.spawns.push(content),
            None => chests.push(MapChest {
                x: slot.x,
                y: slot.y,
                graphic_id: map.object_graphic_at(slot.x, slot.y),
                spawns: vec![content],
            }),
        }
    }
    chests
}

pub fn signs(map: &Map) -> Vec<MapSign> {
    map.signs
        .iter()
        .map(|sign| MapSign {
            x: sign.x,
            y: sign.y,
            title: sign.msg.title.clone(),
            message: sign.msg.message.clone(),
            graphic_id: map.object_graphic_at(sign.x, sign.y),
        })
        .collect()
}

/// Warps leaving the map. Warps back onto the same map are omitted.
pub fn warps(map: &Map, maps: &Collection<Map>) -> Vec<MapWarp> {
    map.warp_tiles
        .iter()
        .filter(|warp| warp.destination_id != map.id)
        .filter_map(|warp| {
            let destination = follow(
                maps.get(&warp.destination_id),
                "warp destination",
                warp.destination_id,
            )?;
            Some(MapWarp {
                x: warp.x,
                y: warp.y,
                map_id: destination.id.get(),
                map_name: destination.name.clone(),
                destination_x: warp.destination_x,
                destination_y: warp.destination_y,
            })
        })
        .collect()
}

pub struct MapLookup {
    store: Arc<DatasetStore>,
}

impl MapLookup {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: MapId) -> Result<Option<MapDetails>, ResolveError> {
        let maps = self.store.maps().await?;
        let Some(map) = maps.get(&id) else {
            return Ok(None);
        };
        let npcs = self.store.npcs().await?;
        let items = self.store.items().await?;

        Ok(Some(MapDetails {
            light_mode: map.light_mode().to_string(),
            weather: map.weather().to_string(),
            npc_spawns: npc_spawns(map, &npcs),
            gather_spots: gather_spots(map, &items),
            chests: chests(map, &items),
            signs: signs(map),
            warps: warps(map, &maps),
            map: map.clone(),
        }))
    }
}
