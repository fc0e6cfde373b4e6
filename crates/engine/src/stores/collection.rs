//! Immutable, indexed snapshot of one dataset collection.
//!
//! A snapshot is parsed from the raw dump bytes in one pass. Records keep
//! their source order; an id map and a per-collection secondary index are
//! built once so that every lookup after load is a hash probe.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use eordb_domain::{
    Class, ClassId, DomainError, Item, ItemId, Map, MapId, Npc, NpcId, Quest, QuestId, Shop,
    Spell, SpellId,
};

use crate::infrastructure::ports::{CollectionKind, StoreError};

/// A record type stored in one of the seven collections.
pub trait Record: DeserializeOwned + Send + Sync + 'static {
    type Key: Eq + Hash + Clone + Send + Sync;
    type Index: Default + Send + Sync;

    const KIND: CollectionKind;

    fn key(&self) -> Self::Key;

    /// Records failing this are dropped after validation.
    fn is_retained(&self) -> bool {
        true
    }

    fn validate(&self) -> Result<(), DomainError> {
        Ok(())
    }

    /// Field names belonging to a superseded export revision.
    fn is_legacy_field(_field: &str) -> bool {
        false
    }

    fn build_index(_records: &[Self]) -> Self::Index {
        Self::Index::default()
    }
}

pub struct Collection<T: Record> {
    records: Vec<T>,
    ids: HashMap<T::Key, usize>,
    index: T::Index,
    loaded_at: DateTime<Utc>,
}

impl<T: Record> Collection<T> {
    pub fn from_records(records: Vec<T>, loaded_at: DateTime<Utc>) -> Self {
        let mut ids = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            // First occurrence of a duplicated key wins.
            ids.entry(record.key()).or_insert(position);
        }
        let index = T::build_index(&records);
        Self {
            records,
            ids,
            index,
            loaded_at,
        }
    }

    /// Parses a dump file. Any malformed record fails the whole collection.
    pub fn parse(bytes: &[u8], loaded_at: DateTime<Utc>) -> Result<Self, StoreError> {
        let kind = T::KIND;
        let raw: Value = serde_json::from_slice(bytes)
            .map_err(|e| StoreError::malformed(kind, None, e.to_string()))?;
        let Value::Array(values) = raw else {
            return Err(StoreError::malformed(kind, None, "expected a JSON array"));
        };

        let mut records = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            if let Some(fields) = value.as_object() {
                if let Some(field) = fields.keys().find(|f| T::is_legacy_field(f)) {
                    return Err(StoreError::SchemaRevision {
                        collection: kind,
                        index,
                        field: field.clone(),
                    });
                }
            }
            let record: T = serde_json::from_value(value)
                .map_err(|e| StoreError::malformed(kind, Some(index), e.to_string()))?;
            record
                .validate()
                .map_err(|e| StoreError::malformed(kind, Some(index), e.to_string()))?;
            if record.is_retained() {
                records.push(record);
            }
        }

        Ok(Self::from_records(records, loaded_at))
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids.get(key).map(|&position| &self.records[position])
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    fn at<'a>(&'a self, positions: &'a [usize]) -> impl Iterator<Item = &'a T> + 'a {
        positions.iter().map(move |&position| &self.records[position])
    }
}

impl<T: Record> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("kind", &T::KIND)
            .field("records", &self.records.len())
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

fn push_unique(positions: &mut Vec<usize>, position: usize) {
    if positions.last() != Some(&position) {
        positions.push(position);
    }
}

// =============================================================================
// Classes, items, spells
// =============================================================================

impl Record for Class {
    type Key = ClassId;
    type Index = ();
    const KIND: CollectionKind = CollectionKind::Classes;

    fn key(&self) -> ClassId {
        self.id
    }

    fn is_legacy_field(field: &str) -> bool {
        Class::is_legacy_field(field)
    }
}

impl Record for Item {
    type Key = ItemId;
    type Index = ();
    const KIND: CollectionKind = CollectionKind::Items;

    fn key(&self) -> ItemId {
        self.id
    }

    fn is_retained(&self) -> bool {
        !self.is_resource_placeholder()
    }

    fn validate(&self) -> Result<(), DomainError> {
        Item::validate(self)
    }
}

impl Record for Spell {
    type Key = SpellId;
    type Index = ();
    const KIND: CollectionKind = CollectionKind::Spells;

    fn key(&self) -> SpellId {
        self.id
    }

    fn validate(&self) -> Result<(), DomainError> {
        Spell::validate(self)
    }

    fn is_legacy_field(field: &str) -> bool {
        Spell::is_legacy_field(field)
    }
}

// =============================================================================
// NPCs
// =============================================================================

#[derive(Debug, Default)]
pub struct NpcIndex {
    by_name: HashMap<String, usize>,
    quest_givers: HashMap<i32, usize>,
}

impl Record for Npc {
    type Key = NpcId;
    type Index = NpcIndex;
    const KIND: CollectionKind = CollectionKind::Npcs;

    fn key(&self) -> NpcId {
        self.id
    }

    fn validate(&self) -> Result<(), DomainError> {
        Npc::validate(self)
    }

    fn build_index(records: &[Self]) -> NpcIndex {
        let mut index = NpcIndex::default();
        for (position, npc) in records.iter().enumerate() {
            index
                .by_name
                .entry(npc.name.to_lowercase())
                .or_insert(position);
            if npc.is_quest_giver() {
                index.quest_givers.entry(npc.vendor_id).or_insert(position);
            }
        }
        index
    }
}

impl Collection<Npc> {
    /// Case-insensitive exact name match.
    pub fn by_name(&self, name: &str) -> Option<&Npc> {
        self.index
            .by_name
            .get(&name.to_lowercase())
            .map(|&position| &self.records[position])
    }

    /// Quest-behavior NPC fronting the given quest vendor id.
    pub fn quest_giver(&self, vendor_id: i32) -> Option<&Npc> {
        self.index
            .quest_givers
            .get(&vendor_id)
            .map(|&position| &self.records[position])
    }
}

// =============================================================================
// Maps
// =============================================================================

/// Reverse references from item and NPC ids to the maps mentioning them
#[derive(Debug, Default)]
pub struct MapIndex {
    gathers: HashMap<ItemId, Vec<usize>>,
    ground_items: HashMap<ItemId, Vec<usize>>,
    spawns: HashMap<NpcId, Vec<usize>>,
}

impl Record for Map {
    type Key = MapId;
    type Index = MapIndex;
    const KIND: CollectionKind = CollectionKind::Maps;

    fn key(&self) -> MapId {
        self.id
    }

    fn validate(&self) -> Result<(), DomainError> {
        Map::validate(self)
    }

    fn build_index(records: &[Self]) -> MapIndex {
        let mut index = MapIndex::default();
        for (position, map) in records.iter().enumerate() {
            for gather in &map.map_gathers {
                push_unique(index.gathers.entry(gather.item_id).or_default(), position);
            }
            for item in &map.items {
                push_unique(
                    index.ground_items.entry(item.item_id).or_default(),
                    position,
                );
            }
            for spawn in &map.npcs {
                push_unique(index.spawns.entry(spawn.id).or_default(), position);
            }
        }
        index
    }
}

impl Collection<Map> {
    /// Maps with a resource node yielding the item, in source order.
    pub fn with_gather(&self, item_id: ItemId) -> impl Iterator<Item = &Map> + '_ {
        self.at(self.index.gathers.get(&item_id).map_or(&[][..], Vec::as_slice))
    }

    /// Maps with a ground item or chest slot holding the item.
    pub fn with_ground_item(&self, item_id: ItemId) -> impl Iterator<Item = &Map> + '_ {
        self.at(
            self.index
                .ground_items
                .get(&item_id)
                .map_or(&[][..], Vec::as_slice),
        )
    }

    pub fn with_spawn(&self, npc_id: NpcId) -> impl Iterator<Item = &Map> + '_ {
        self.at(self.index.spawns.get(&npc_id).map_or(&[][..], Vec::as_slice))
    }
}

// =============================================================================
// Quests and shops
// =============================================================================

#[derive(Debug, Default)]
pub struct QuestIndex {
    by_title: HashMap<String, usize>,
}

impl Record for Quest {
    type Key = QuestId;
    type Index = QuestIndex;
    const KIND: CollectionKind = CollectionKind::Quests;

    fn key(&self) -> QuestId {
        self.id
    }

    fn build_index(records: &[Self]) -> QuestIndex {
        let mut index = QuestIndex::default();
        for (position, quest) in records.iter().enumerate() {
            index.by_title.entry(quest.title.clone()).or_insert(position);
        }
        index
    }
}

impl Collection<Quest> {
    pub fn by_title(&self, title: &str) -> Option<&Quest> {
        self.index
            .by_title
            .get(title)
            .map(|&position| &self.records[position])
    }
}

#[derive(Debug, Default)]
pub struct ShopIndex {
    staffed_by: HashMap<String, usize>,
}

impl Record for Shop {
    type Key = String;
    type Index = ShopIndex;
    const KIND: CollectionKind = CollectionKind::Shops;

    fn key(&self) -> String {
        self.name.clone()
    }

    fn build_index(records: &[Self]) -> ShopIndex {
        let mut index = ShopIndex::default();
        for (position, shop) in records.iter().enumerate() {
            for npc in &shop.npcs {
                index
                    .staffed_by
                    .entry(npc.npc_name.to_lowercase())
                    .or_insert(position);
            }
        }
        index
    }
}

impl Collection<Shop> {
    /// First shop listing the NPC among its staff, by case-insensitive name.
    pub fn staffed_by(&self, npc_name: &str) -> Option<&Shop> {
        self.index
            .staffed_by
            .get(&npc_name.to_lowercase())
            .map(|&position| &self.records[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eordb_domain::test_support::{class_json, item_json, map_json, npc_json, shop_json};
    use serde_json::json;

    fn bytes(values: Vec<Value>) -> Vec<u8> {
        serde_json::to_vec(&Value::Array(values)).unwrap()
    }

    #[test]
    fn resource_placeholders_are_dropped() {
        let data = bytes(vec![item_json(1, "Eons"), item_json(2, "Tree-res")]);
        let items = Collection::<Item>::parse(&data, Utc::now()).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items.get(&ItemId::new(2)).is_none());
        assert_eq!(items.get(&ItemId::new(1)).unwrap().name, "Eons");
    }

    #[test]
    fn one_bad_record_fails_the_collection() {
        let mut bad = item_json(2, "Sword");
        bad["graphic_url"] = json!("items/2.png");
        let data = bytes(vec![item_json(1, "Eons"), bad]);
        let err = Collection::<Item>::parse(&data, Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Malformed {
                collection: CollectionKind::Items,
                index: Some(1),
                ..
            }
        ));
    }

    #[test]
    fn missing_name_is_malformed() {
        let mut bad = npc_json(3, "Goat");
        bad.as_object_mut().unwrap().remove("name");
        let err = Collection::<Npc>::parse(&bytes(vec![bad]), Utc::now()).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { index: Some(0), .. }));
    }

    #[test]
    fn non_array_is_malformed() {
        let err = Collection::<Item>::parse(br#"{"id": 1}"#, Utc::now()).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { index: None, .. }));
    }

    #[test]
    fn legacy_class_export_is_rejected() {
        let mut legacy = class_json(1, "Warrior");
        legacy["class_group"] = json!(2);
        let err = Collection::<Class>::parse(&bytes(vec![legacy]), Utc::now()).unwrap_err();
        match err {
            StoreError::SchemaRevision { index, field, .. } => {
                assert_eq!(index, 0);
                assert_eq!(field, "class_group");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn npc_name_and_quest_giver_lookups() {
        let mut elder = npc_json(2, "Village Elder");
        elder["behavior"] = json!(15);
        elder["vendor_id"] = json!(40);
        let mut vendor = npc_json(3, "Shopkeeper");
        vendor["vendor_id"] = json!(40);
        let npcs =
            Collection::<Npc>::parse(&bytes(vec![vendor, elder]), Utc::now()).unwrap();

        assert_eq!(npcs.by_name("village ELDER").unwrap().id, NpcId::new(2));
        assert_eq!(npcs.quest_giver(40).unwrap().id, NpcId::new(2));
        assert!(npcs.quest_giver(41).is_none());
    }

    #[test]
    fn map_index_is_deduplicated_and_ordered() {
        let mut first = map_json(1, "Aeven", 4, 4);
        first["items"] = json!([
            { "x": 1, "y": 1, "key": 0, "slot": 0, "item_id": 5, "time": 0, "amount": 1 },
            { "x": 2, "y": 1, "key": 0, "slot": 1, "item_id": 5, "time": 0, "amount": 1 }
        ]);
        let plain = map_json(2, "Road", 4, 4);
        let mut third = map_json(3, "Cave", 4, 4);
        third["items"] = first["items"].clone();

        let maps =
            Collection::<Map>::parse(&bytes(vec![first, plain, third]), Utc::now()).unwrap();
        let ids: Vec<MapId> = maps.with_ground_item(ItemId::new(5)).map(|m| m.id).collect();
        assert_eq!(ids, vec![MapId::new(1), MapId::new(3)]);
        assert_eq!(maps.with_gather(ItemId::new(5)).count(), 0);
    }

    #[test]
    fn shops_by_name_and_staff() {
        let mut shop = shop_json("Aeven Smith");
        shop["npcs"] = json!([{ "map_id": 1, "x": 1, "y": 1, "npc_name": "Smith", "map_name": "Aeven" }]);
        let shops = Collection::<Shop>::parse(&bytes(vec![shop]), Utc::now()).unwrap();

        assert!(shops.get("Aeven Smith").is_some());
        assert!(shops.get("aeven smith").is_none());
        assert_eq!(shops.staffed_by("SMITH").unwrap().name, "Aeven Smith");
    }

    #[test]
    fn duplicate_ids_keep_the_first_record() {
        let data = bytes(vec![item_json(1, "Eons"), item_json(1, "Copy")]);
        let items = Collection::<Item>::parse(&data, Utc::now()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.get(&ItemId::new(1)).unwrap().name, "Eons");
    }
}
