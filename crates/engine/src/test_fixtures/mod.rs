//! Test fixtures: an in-memory dataset source and a small, fully
//! cross-referenced world used by the resolver, listing and API tests.
//!
//! # The Aeven world
//!
//! | id | item | notes |
//! |---|---|---|
//! | 1 | Eons | currency, no relationships at all |
//! | 2 | Raven Feather | dropped, sold, quest reward, chest slot |
//! | 3 | Feather Cap | hat crafted at "Aeven Smith" from feathers |
//! | 4 | Cursed Quill | recipe names a shop that does not exist |
//! | 5 | Copper Ore | gathered on two maps, chest on Aeven |
//! | 6 | Ore-res | placeholder, dropped at load |
//!
//! NPCs: 10 Raven Lord, 11 Raven, 20 Smith, 21 Wise Man, 30 Village Elder
//! (quest giver for vendor id 40). Maps: 1 Aeven (10x8), 2 Aeven Mine (6x6).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use eordb_domain::test_support::{
    class_json, item_json, map_json, npc_json, quest_json, shop_json, spell_json,
};

use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::ports::{CollectionKind, DatasetSource, StoreError};
use crate::stores::DatasetStore;

// =============================================================================
// In-memory source
// =============================================================================

/// Dataset source backed by a map of serialized collections.
///
/// Collections never written read as `StoreError::Missing`, like absent
/// cache files.
#[derive(Default)]
pub struct MemoryDataset {
    files: Mutex<HashMap<CollectionKind, Vec<u8>>>,
}

impl MemoryDataset {
    pub fn put(&self, kind: CollectionKind, records: Vec<Value>) {
        let bytes = serde_json::to_vec(&Value::Array(records)).unwrap();
        self.files.lock().unwrap().insert(kind, bytes);
    }

    pub fn raw(&self, kind: CollectionKind) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(&kind).cloned()
    }
}

#[async_trait]
impl DatasetSource for MemoryDataset {
    async fn read(&self, kind: CollectionKind) -> Result<Vec<u8>, StoreError> {
        self.raw(kind).ok_or_else(|| StoreError::Missing {
            collection: kind,
            path: format!("memory://{kind}"),
        })
    }

    async fn write(&self, kind: CollectionKind, bytes: &[u8]) -> Result<(), StoreError> {
        self.files.lock().unwrap().insert(kind, bytes.to_vec());
        Ok(())
    }
}

pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
}

/// A store over `source` with a fixed clock.
pub fn store_over(source: Arc<MemoryDataset>) -> Arc<DatasetStore> {
    Arc::new(DatasetStore::new(source, Arc::new(fixed_clock())))
}

/// A source with every collection present and empty.
pub fn empty_dataset() -> Arc<MemoryDataset> {
    let source = MemoryDataset::default();
    for kind in CollectionKind::REFRESH_ORDER {
        source.put(kind, vec![]);
    }
    Arc::new(source)
}

// =============================================================================
// The Aeven world
// =============================================================================

pub fn aeven_dataset() -> Arc<MemoryDataset> {
    let source = MemoryDataset::default();
    source.put(CollectionKind::Items, aeven_items());
    source.put(CollectionKind::Npcs, aeven_npcs());
    source.put(CollectionKind::Maps, aeven_maps());
    source.put(CollectionKind::Quests, aeven_quests());
    source.put(CollectionKind::Shops, aeven_shops());
    source.put(
        CollectionKind::Classes,
        vec![class_json(1, "Warrior"), class_json(2, "Wizard")],
    );
    source.put(CollectionKind::Spells, aeven_spells());
    Arc::new(source)
}

pub fn aeven_store() -> Arc<DatasetStore> {
    store_over(aeven_dataset())
}

fn item(id: u32, name: &str, patch: Value) -> Value {
    let mut value = item_json(id, name);
    merge(&mut value, patch);
    value
}

fn npc(id: u32, name: &str, patch: Value) -> Value {
    let mut value = npc_json(id, name);
    merge(&mut value, patch);
    value
}

fn merge(target: &mut Value, patch: Value) {
    if let (Some(target), Value::Object(patch)) = (target.as_object_mut(), patch) {
        target.extend(patch);
    }
}

fn item_url(id: u32) -> String {
    format!("https://api.example.com/items/{id}")
}

fn npc_url(id: u32) -> String {
    format!("https://api.example.com/npcs/{id}")
}

fn aeven_items() -> Vec<Value> {
    vec![
        item(1, "Eons", json!({ "item_type": 2 })),
        item(
            2,
            "Raven Feather",
            json!({
                "item_type": 1,
                "sell_price": 4,
                "drops": [{ "npc_id": 10, "drop_percent": 12.5, "npc_url": npc_url(10) }],
                "shared": [
                    { "npc_id": 11, "drop_percent": 3.0 },
                    { "npc_id": 99, "drop_percent": 1.0 }
                ],
                "ingredientFor": [3, 999],
                "soldBy": [{ "soldByName": "Aeven General" }, { "soldByName": "Ghost Shop" }],
                "questRewards": [
                    { "questName": "Feathers" },
                    { "questName": "Feathers" },
                    { "questName": "Lost Letter" },
                    { "questName": "No Such Quest" }
                ]
            }),
        ),
        item(
            3,
            "Feather Cap",
            json!({
                "item_type": 13,
                "armor": 2,
                "required_level": 5,
                "required_class": 2,
                "craftables": [{
                    "shopName": "Aeven Smith",
                    "craftEon": 0,
                    "craftGold": 100,
                    "craftIngredients": [
                        { "itemID": 2, "quantity": 5, "item_url": item_url(2) },
                        { "itemID": 888, "quantity": 1, "item_url": item_url(888) }
                    ]
                }]
            }),
        ),
        item(
            4,
            "Cursed Quill",
            json!({
                "craftables": [{
                    "shopName": "Nowhere",
                    "craftEon": 1,
                    "craftGold": 0,
                    "craftIngredients": []
                }]
            }),
        ),
        item(5, "Copper Ore", json!({ "item_type": 1, "required_class": 7 })),
        item(6, "Ore-res", json!({})),
    ]
}

fn aeven_npcs() -> Vec<Value> {
    vec![
        npc(
            10,
            "Raven Lord",
            json!({
                "behavior": 2,
                "npc_default_speed": 9,
                "npc_respawn_secs": 60,
                "drops": [
                    { "itemID": 2, "drop_percent": 12.5, "item_url": item_url(2) },
                    { "itemID": 777, "drop_percent": 1.0, "item_url": item_url(777) }
                ],
                "shared": [{ "itemID": 5, "drop_percent": 0.5 }]
            }),
        ),
        npc(11, "Raven", json!({ "behavior": 2, "npc_default_speed": 7 })),
        npc(20, "Smith", json!({ "behavior": 5 })),
        npc(21, "Wise Man", json!({ "behavior": 6, "graphic": 44 })),
        npc(
            30,
            "Village Elder",
            json!({ "behavior": 15, "vendor_id": 40 }),
        ),
    ]
}

fn spawn(x: i32, y: i32, id: u32, speed: i32, time: i32, amount: i32) -> Value {
    json!({
        "x": x, "y": y, "id": id, "interaction_id": 0, "boundary_x": 0, "boundary_y": 0,
        "courage": 0, "speed": speed, "time": time, "amount": amount
    })
}

fn ground_item(x: i32, y: i32, item_id: u32, slot: i32, amount: i32, key: i32) -> Value {
    json!({
        "x": x, "y": y, "key": key, "slot": slot, "item_id": item_id, "time": 300,
        "amount": amount
    })
}

fn gather(x: i32, y: i32, item_id: u32, max_amount: i32, graphic_id: i32) -> Value {
    json!({
        "x": x, "y": y, "type": 1, "hit_count": 3, "item_id": item_id,
        "max_amount": max_amount, "graphic_id": graphic_id
    })
}

fn aeven_maps() -> Vec<Value> {
    let mut aeven = map_json(1, "Aeven", 10, 8);
    merge(
        &mut aeven,
        json!({
            "npcs": [
                spawn(2, 3, 10, 0, 0, 2),
                spawn(4, 4, 10, 3, 120, 1),
                spawn(5, 5, 30, 0, -1, 1),
                spawn(6, 6, 77, 0, 0, 1),
                spawn(7, 1, 21, 15, 0, 1)
            ],
            "items": [
                ground_item(2, 2, 5, 0, 3, 0),
                ground_item(2, 2, 2, 1, 1, 1),
                ground_item(7, 7, 5, 0, 1, 0),
                ground_item(8, 2, 404, 0, 1, 0)
            ],
            "spec_tiles": [
                { "x": 2, "y": 2, "spec": 9 },
                { "x": 8, "y": 2, "spec": 9 },
                { "x": 0, "y": 1, "spec": 0 }
            ],
            "map_layers": [
                { "details": { "name": "Ground", "rows": 8 }, "tiles": [{ "x": 2, "y": 2, "tile": 1 }] },
                { "details": { "name": "Object", "rows": 8 }, "tiles": [
                    { "x": 2, "y": 2, "tile": 55 },
                    { "x": 3, "y": 3, "tile": 61 }
                ] }
            ],
            "map_gathers": [gather(1, 1, 5, 4, 3)],
            "warp_tiles": [
                { "x": 0, "y": 0, "destination_id": 2, "destination_x": 5, "destination_y": 5 },
                { "x": 1, "y": 0, "destination_id": 1, "destination_x": 3, "destination_y": 3 },
                { "x": 9, "y": 0, "destination_id": 404, "destination_x": 1, "destination_y": 1 }
            ],
            "signs": [
                { "x": 3, "y": 3, "msg": { "title": "Welcome", "message": "To Aeven" } },
                { "x": 4, "y": 0, "msg": { "title": "North", "message": "Road" } }
            ]
        }),
    );

    let mut mine = map_json(2, "Aeven Mine", 6, 6);
    merge(
        &mut mine,
        json!({
            "npcs": [spawn(1, 1, 11, 0, 0, 4), spawn(2, 2, 10, 0, 0, 1)],
            "map_gathers": [gather(3, 3, 5, 2, 4), gather(4, 4, 5, 6, 4)]
        }),
    );

    vec![aeven, mine]
}

fn aeven_quests() -> Vec<Value> {
    let mut feathers = quest_json(50, "Feathers", &[40]);
    merge(
        &mut feathers,
        json!({
            "item_rewards_1": [{ "item_id": 2, "amount": 3 }],
            "item_rewards_2": [{ "item_id": 1, "amount": 500 }, { "item_id": 2, "amount": 1 }]
        }),
    );
    let mut lost = quest_json(51, "Lost Letter", &[41]);
    merge(
        &mut lost,
        json!({ "item_rewards_1": [{ "item_id": 2, "amount": 9 }] }),
    );
    vec![feathers, lost]
}

fn aeven_shops() -> Vec<Value> {
    let mut general = shop_json("Aeven General");
    merge(
        &mut general,
        json!({
            "npcs": [
                { "map_id": 1, "x": 7, "y": 1, "npc_name": "wise man", "map_name": "Aeven" },
                { "map_id": 2, "x": 1, "y": 2, "npc_name": "Wise Man", "map_name": "Aeven Mine" },
                { "map_id": 1, "x": 0, "y": 0, "npc_name": "Nobody", "map_name": "Aeven" }
            ],
            "buys": [{ "item_id": 2, "price": 25 }, { "item_id": 999, "price": 1 }]
        }),
    );
    let mut smith = shop_json("Aeven Smith");
    merge(
        &mut smith,
        json!({
            "npcs": [{ "map_id": 1, "x": 5, "y": 6, "npc_name": "Smith", "map_name": "Aeven" }],
            "crafts": [{ "item_id": 3 }, { "item_id": 2 }]
        }),
    );
    vec![general, smith]
}

fn aeven_spells() -> Vec<Value> {
    let mut fireball = spell_json(1, "Fireball");
    merge(
        &mut fireball,
        json!({ "spell_type": 1, "min_damage": 10, "max_damage": 20 }),
    );
    vec![fireball, spell_json(2, "Heal")]
}
