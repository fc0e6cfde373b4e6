//! Item record from the items dump
//!
//! Besides its own stats, every item carries optional back-references that
//! the upstream exporter precomputes: which NPCs drop it, which shops craft
//! or sell it, and which quests reward it. Those references are by id or by
//! name and are resolved against the other collections at query time.

use serde::{Deserialize, Serialize};

use crate::common::require_absolute_url;
use crate::error::DomainError;
use crate::ids::{ItemId, NpcId};
use crate::types::{ItemSubType, ItemType, ItemUniqueness};

/// Name suffix marking server-side resource placeholders that never appear
/// in game.
pub const RESOURCE_SUFFIX: &str = "-res";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub graphic: i32,
    pub item_type: i32,
    /// Secondary flag code. The dump still names this field `pierce`.
    #[serde(rename(serialize = "item_sub_type", deserialize = "pierce"))]
    #[serde(alias = "item_sub_type")]
    pub item_sub_type: i32,
    pub item_unique: i32,
    #[serde(flatten)]
    pub stats: ItemStats,
    pub spec1: i32,
    pub spec2: i32,
    pub spec3: i32,
    #[serde(flatten)]
    pub requirements: ItemRequirements,
    pub weight: i32,
    #[serde(default)]
    pub target_area: Option<i32>,
    pub aoe_flag: i32,
    pub size: i32,
    pub sell_price: i32,
    #[serde(default)]
    pub drops: Vec<ItemDropSource>,
    #[serde(default)]
    pub shared: Vec<SharedDropSource>,
    #[serde(default)]
    pub craftables: Vec<CraftRecipe>,
    #[serde(default, rename = "ingredientFor")]
    pub ingredient_for: Vec<ItemId>,
    #[serde(default, rename = "soldBy")]
    pub sold_by: Vec<SoldByRef>,
    #[serde(default, rename = "questRewards")]
    pub quest_rewards: Vec<QuestRewardRef>,
    #[serde(default, rename = "gatherableMaps")]
    pub gatherable_maps: Option<bool>,
    #[serde(default, rename = "gatherableSpots")]
    pub gatherable_spots: Option<bool>,
    #[serde(default, rename = "chestSpawnChests")]
    pub chest_spawn_chests: Option<bool>,
    pub graphic_url: String,
}

/// Combat and vital bonuses granted while the item is equipped or used
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStats {
    pub hp: i32,
    pub tp: i32,
    pub sp: i32,
    pub min_damage: i32,
    pub max_damage: i32,
    pub hit_rate: i32,
    pub evasion: i32,
    pub armor: i32,
    pub critical_chance: i32,
    pub power: i32,
    pub accuracy: i32,
    pub defense: i32,
    pub dexterity: i32,
    pub vitality: i32,
    pub aura: i32,
    pub light: i32,
    pub dark: i32,
    pub earth: i32,
    pub air: i32,
    pub water: i32,
    pub fire: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequirements {
    pub required_level: i32,
    pub required_class: i32,
    pub required_power: i32,
    pub required_accuracy: i32,
    pub required_dexterity: i32,
    pub required_defense: i32,
    pub required_vitality: i32,
    pub required_aura: i32,
}

impl ItemRequirements {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// NPC that drops the item on death
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDropSource {
    pub npc_id: NpcId,
    pub drop_percent: f64,
    pub npc_url: String,
}

/// NPC whose shared (party) loot table includes the item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedDropSource {
    pub npc_id: NpcId,
    pub drop_percent: f64,
}

/// One way of crafting the item at a named shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftRecipe {
    #[serde(rename = "shopName")]
    pub shop_name: String,
    #[serde(rename = "craftEon")]
    pub craft_eon: i32,
    #[serde(rename = "craftGold")]
    pub craft_gold: i32,
    #[serde(rename = "craftIngredients")]
    pub craft_ingredients: Vec<CraftIngredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftIngredient {
    #[serde(rename = "itemID")]
    pub item_id: ItemId,
    pub quantity: i32,
    pub item_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldByRef {
    #[serde(rename = "soldByName")]
    pub sold_by_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRewardRef {
    #[serde(rename = "questName")]
    pub quest_name: String,
}

impl Item {
    pub fn item_type(&self) -> ItemType {
        ItemType::from_code(self.item_type)
    }

    pub fn sub_type(&self) -> ItemSubType {
        ItemSubType::from_code(self.item_sub_type)
    }

    pub fn uniqueness(&self) -> ItemUniqueness {
        ItemUniqueness::from_raw(self.item_unique)
    }

    /// Server-side resource placeholder, excluded from every query.
    pub fn is_resource_placeholder(&self) -> bool {
        self.name.ends_with(RESOURCE_SUFFIX)
    }

    /// Checks the URL-shaped fields of the record and its nested references.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_absolute_url("graphic_url", &self.graphic_url)?;
        for drop in &self.drops {
            require_absolute_url("drops.npc_url", &drop.npc_url)?;
        }
        for recipe in &self.craftables {
            for ingredient in &recipe.craft_ingredients {
                require_absolute_url("craftables.craftIngredients.item_url", &ingredient.item_url)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item_json;
    use serde_json::json;

    #[test]
    fn parses_dump_shape_with_pierce_as_sub_type() {
        let mut raw = item_json(7, "Copper Pickaxe");
        raw["item_type"] = json!(10);
        raw["pierce"] = json!(14);
        let item: Item = serde_json::from_value(raw).unwrap();

        assert_eq!(item.id, ItemId::new(7));
        assert_eq!(item.item_type(), ItemType::Weapon);
        assert_eq!(item.sub_type(), ItemSubType::Mining);
        assert!(item.drops.is_empty());
        assert!(item.validate().is_ok());
    }

    #[test]
    fn relationship_arrays_use_exporter_names() {
        let mut raw = item_json(3, "Raven Feather");
        raw["drops"] = json!([{ "npc_id": 4, "drop_percent": 12.5, "npc_url": "https://api.example.com/npcs/4" }]);
        raw["craftables"] = json!([{
            "shopName": "Aeven Smith",
            "craftEon": 10,
            "craftGold": 0,
            "craftIngredients": [{ "itemID": 2, "quantity": 3, "item_url": "https://api.example.com/items/2" }]
        }]);
        raw["soldBy"] = json!([{ "soldByName": "Aeven General" }]);
        raw["questRewards"] = json!([{ "questName": "Feathers" }]);
        raw["ingredientFor"] = json!([9, 10]);
        let item: Item = serde_json::from_value(raw).unwrap();

        assert_eq!(item.drops[0].npc_id, NpcId::new(4));
        assert_eq!(item.craftables[0].craft_ingredients[0].item_id, ItemId::new(2));
        assert_eq!(item.sold_by[0].sold_by_name, "Aeven General");
        assert_eq!(item.quest_rewards[0].quest_name, "Feathers");
        assert_eq!(item.ingredient_for, vec![ItemId::new(9), ItemId::new(10)]);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut raw = item_json(3, "Broken");
        raw.as_object_mut().unwrap().remove("sell_price");
        assert!(serde_json::from_value::<Item>(raw).is_err());
    }

    #[test]
    fn relative_drop_url_fails_validation() {
        let mut raw = item_json(3, "Raven Feather");
        raw["drops"] = json!([{ "npc_id": 4, "drop_percent": 1, "npc_url": "npcs/4" }]);
        let item: Item = serde_json::from_value(raw).unwrap();

        assert!(matches!(
            item.validate(),
            Err(DomainError::InvalidUrl { field: "drops.npc_url", .. })
        ));
    }

    #[test]
    fn resource_placeholders_are_detected_by_suffix() {
        let item: Item = serde_json::from_value(item_json(5, "Tree-res")).unwrap();
        assert!(item.is_resource_placeholder());
        let item: Item = serde_json::from_value(item_json(6, "Tree")).unwrap();
        assert!(!item.is_resource_placeholder());
    }
}
