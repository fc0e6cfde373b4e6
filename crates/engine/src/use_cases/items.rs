//! Item relationships: who drops, crafts, sells or rewards an item and
//! where it can be gathered or found in chests.

use std::sync::Arc;

use serde::Serialize;

use eordb_domain::{Class, ClassId, Item, ItemId, Map, Npc, Quest, Shop};
use eordb_shared::{
    Craftable, CraftableIngredient, CraftableNpc, ItemChestSpawn, ItemDrop, ItemGatherSpot,
    ClassRef, ItemQuestReward, ItemRef, ItemSoldBy,
};

use crate::stores::{Collection, DatasetStore};

use super::quests::start_npc;
use super::resolve::{first_seen, follow, ResolveError};

/// Fixed offset between a resource node's graphic id and its artwork.
pub const GATHER_GRAPHIC_OFFSET: i32 = 100;

/// An item with every relationship resolved
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetails {
    pub item: Item,
    pub meta: Vec<String>,
    pub required_class: Option<ClassRef>,
    pub drops: Vec<ItemDrop>,
    pub ingredient_for: Vec<ItemRef>,
    pub craftables: Vec<Craftable>,
    pub sold_by: Vec<ItemSoldBy>,
    pub quest_rewards: Vec<ItemQuestReward>,
    pub gather_spots: Vec<ItemGatherSpot>,
    pub chest_spawns: Vec<ItemChestSpawn>,
}

/// Primary and shared drop tables, in that order.
pub fn drops(item: &Item, npcs: &Collection<Npc>) -> Vec<ItemDrop> {
    let primary = item.drops.iter().map(|d| (d.npc_id, d.drop_percent));
    let shared = item.shared.iter().map(|d| (d.npc_id, d.drop_percent));
    primary
        .chain(shared)
        .filter_map(|(npc_id, percent)| {
            let npc = follow(npcs.get(&npc_id), "item drop npc", npc_id)?;
            Some(ItemDrop {
                npc_id: npc.id.get(),
                npc_name: npc.name.clone(),
                percent,
            })
        })
        .collect()
}

pub fn ingredient_for(item: &Item, items: &Collection<Item>) -> Vec<ItemRef> {
    item.ingredient_for
        .iter()
        .filter_map(|id| {
            let product = follow(items.get(id), "ingredient for", id)?;
            Some(ItemRef {
                id: product.id.get(),
                name: product.name.clone(),
            })
        })
        .collect()
}

/// Class the item is restricted to. Code 0 means any class.
pub fn required_class(item: &Item, classes: &Collection<Class>) -> Option<ClassRef> {
    let code = u32::try_from(item.requirements.required_class).ok().filter(|&c| c != 0)?;
    let class = follow(classes.get(&ClassId::new(code)), "required class", code)?;
    Some(ClassRef {
        id: class.id.get(),
        name: class.name.clone(),
    })
}

/// Recipes producing the item. A recipe naming an unknown shop fails the
/// whole call.
pub fn craftables(
    item: &Item,
    items: &Collection<Item>,
    shops: &Collection<Shop>,
    npcs: &Collection<Npc>,
) -> Result<Vec<Craftable>, ResolveError> {
    item.craftables
        .iter()
        .map(|recipe| -> Result<Craftable, ResolveError> {
            let shop = shops
                .get(recipe.shop_name.as_str())
                .ok_or_else(|| ResolveError::ShopNotFound {
                    shop_name: recipe.shop_name.clone(),
                    item_id: item.id,
                })?;

            let staff = shop
                .npcs
                .iter()
                .filter_map(|staff| {
                    let npc = follow(npcs.by_name(&staff.npc_name), "craft npc", &staff.npc_name)?;
                    Some(CraftableNpc {
                        id: npc.id.get(),
                        name: npc.name.clone(),
                        graphic: npc.graphic,
                        map_id: staff.map_id.get(),
                        map_name: staff.map_name.clone(),
                        x: staff.x,
                        y: staff.y,
                    })
                })
                .collect();

            Ok(Craftable {
                shop_name: recipe.shop_name.clone(),
                npcs: staff,
                eons: recipe.craft_eon,
                gold: recipe.craft_gold,
                ingredients: ingredients(recipe.craft_ingredients.iter(), items),
            })
        })
        .collect()
}

pub(crate) fn ingredients<'a>(
    wanted: impl Iterator<Item = &'a eordb_domain::CraftIngredient>,
    items: &Collection<Item>,
) -> Vec<CraftableIngredient> {
    wanted
        .filter_map(|ingredient| {
            let item = follow(
                items.get(&ingredient.item_id),
                "craft ingredient",
                ingredient.item_id,
            )?;
            Some(CraftableIngredient {
                item_id: item.id.get(),
                item_name: item.name.clone(),
                quantity: ingredient.quantity,
            })
        })
        .collect()
}

/// One row per staffed location of every shop selling the item.
pub fn sold_by(item: &Item, shops: &Collection<Shop>, npcs: &Collection<Npc>) -> Vec<ItemSoldBy> {
    let mut rows = Vec::new();
    for reference in &item.sold_by {
        let Some(shop) = follow(
            shops.get(reference.sold_by_name.as_str()),
            "sold by shop",
            &reference.sold_by_name,
        ) else {
            continue;
        };
        let Some(price) = shop.price_of(item.id) else {
            tracing::debug!(shop = %shop.name, item_id = %item.id, "Shop has no price for item");
            continue;
        };
        for staff in &shop.npcs {
            let Some(npc) = follow(npcs.by_name(&staff.npc_name), "shop npc", &staff.npc_name)
            else {
                continue;
            };
            rows.push(ItemSoldBy {
                npc_id: npc.id.get(),
                npc_name: npc.name.clone(),
                price,
                map_id: staff.map_id.get(),
                map_name: staff.map_name.clone(),
                x: staff.x,
                y: staff.y,
            });
        }
    }
    rows
}

/// Quests rewarding the item, one row per matching reward entry.
pub fn quest_rewards(
    item: &Item,
    quests: &Collection<Quest>,
    npcs: &Collection<Npc>,
) -> Vec<ItemQuestReward> {
    let titles = first_seen(item.quest_rewards.iter(), |r| r.quest_name.clone());

    let mut rows = Vec::new();
    for reference in titles {
        let Some(quest) = follow(
            quests.by_title(&reference.quest_name),
            "reward quest",
            &reference.quest_name,
        ) else {
            continue;
        };
        let Some(giver) = start_npc(quest, npcs) else {
            continue;
        };
        rows.extend(
            quest
                .rewards()
                .filter(|reward| reward.item_id == item.id)
                .map(|reward| ItemQuestReward {
                    quest_id: quest.id.get(),
                    quest_name: quest.title.clone(),
                    npc_id: giver.id.get(),
                    amount: reward.amount,
                }),
        );
    }
    rows
}

pub fn gather_spots(item: &Item, maps: &Collection<Map>) -> Vec<ItemGatherSpot> {
    maps.with_gather(item.id)
        .flat_map(|map| {
            map.map_gathers
                .iter()
                .filter(|g| g.item_id == item.id)
                .map(move |g| ItemGatherSpot {
                    item_id: item.id.get(),
                    map_id: map.id.get(),
                    map_name: map.name.clone(),
                    x: g.x,
                    y: g.y,
                    amount: g.max_amount,
                    graphic_id: g.graphic_id + GATHER_GRAPHIC_OFFSET,
                })
        })
        .collect()
}

/// Ground items holding this item on tiles marked as chests.
pub fn chest_spawns(item: &Item, maps: &Collection<Map>) -> Vec<ItemChestSpawn> {
    maps.with_ground_item(item.id)
        .flat_map(|map| {
            map.items
                .iter()
                .filter(|slot| slot.item_id == item.id && map.has_chest_at(slot.x, slot.y))
                .map(move |slot| ItemChestSpawn {
                    item_id: item.id.get(),
                    map_id: map.id.get(),
                    map_name: map.name.clone(),
                    x: slot.x,
                    y: slot.y,
                    amount: slot.amount,
                    slot: slot.slot,
                    time: slot.time,
                    key: slot.key,
                    graphic_id: map.object_graphic_at(slot.x, slot.y),
                })
        })
        .collect()
}

pub struct ItemLookup {
    store: Arc<DatasetStore>,
}

impl ItemLookup {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: ItemId) -> Result<Option<ItemDetails>, ResolveError> {
        let items = self.store.items().await?;
        let Some(item) = items.get(&id) else {
            return Ok(None);
        };
        let npcs = self.store.npcs().await?;
        let shops = self.store.shops().await?;
        let quests = self.store.quests().await?;
        let maps = self.store.maps().await?;
        let classes = self.store.classes().await?;

        Ok(Some(ItemDetails {
            meta: item.meta_lines(),
            required_class: required_class(item, &classes),
            drops: drops(item, &npcs),
            ingredient_for: ingredient_for(item, &items),
            craftables: craftables(item, &items, &shops, &npcs)?,
            sold_by: sold_by(item, &shops, &npcs),
            quest_rewards: quest_rewards(item, &quests, &npcs),
            gather_spots: gather_spots(item, &maps),
            chest_spawns: chest_spawns(item, &maps),
            item: item.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::aeven_store;

    async fn details(id: u32) -> Result<Option<ItemDetails>, ResolveError> {
        ItemLookup::new(aeven_store()).execute(ItemId::new(id)).await
    }

    #[tokio::test]
    async fn drops_union_both_tables_and_skip_dangling_npcs() {
        let feather = details(2).await.unwrap().unwrap();
        assert_eq!(
            feather.drops,
            vec![
                ItemDrop { npc_id: 10, npc_name: "Raven Lord".into(), percent: 12.5 },
                ItemDrop { npc_id: 11, npc_name: "Raven".into(), percent: 3.0 },
            ]
        );
    }

    #[tokio::test]
    async fn required_class_resolves_by_id_or_is_omitted() {
        let cap = details(3).await.unwrap().unwrap();
        assert_eq!(cap.required_class, Some(ClassRef { id: 2, name: "Wizard".into() }));

        // Class 7 does not exist; class 0 means unrestricted.
        let ore = details(5).await.unwrap().unwrap();
        assert_eq!(ore.required_class, None);
        let feather = details(2).await.unwrap().unwrap();
        assert_eq!(feather.required_class, None);
    }

    #[tokio::test]
    async fn ingredient_for_skips_unknown_items() {
        let feather = details(2).await.unwrap().unwrap();
        assert_eq!(
            feather.ingredient_for,
            vec![ItemRef { id: 3, name: "Feather Cap".into() }]
        );
    }

    #[tokio::test]
    async fn craftables_resolve_shop_staff_and_ingredients() {
        let cap = details(3).await.unwrap().unwrap();
        assert_eq!(cap.craftables.len(), 1);
        let recipe = &cap.craftables[0];
        assert_eq!(recipe.shop_name, "Aeven Smith");
        assert_eq!(recipe.gold, 100);
        assert_eq!(
            recipe.ingredients,
            vec![CraftableIngredient { item_id: 2, item_name: "Raven Feather".into(), quantity: 5 }]
        );
        assert_eq!(recipe.npcs.len(), 1);
        assert_eq!(recipe.npcs[0].id, 20);
        assert_eq!((recipe.npcs[0].x, recipe.npcs[0].y), (5, 6));
    }

    #[tokio::test]
    async fn craftable_with_unknown_shop_is_a_hard_error() {
        let err = details(4).await.unwrap_err();
        match err {
            ResolveError::ShopNotFound { shop_name, item_id } => {
                assert_eq!(shop_name, "Nowhere");
                assert_eq!(item_id, ItemId::new(4));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn sold_by_fans_out_over_shop_staff() {
        let feather = details(2).await.unwrap().unwrap();
        let rows: Vec<_> = feather
            .sold_by
            .iter()
            .map(|r| (r.npc_id, r.map_id, r.price))
            .collect();
        // "Nobody" has no NPC record and "Ghost Shop" does not exist.
        assert_eq!(rows, vec![(21, 1, 25), (21, 2, 25)]);
        assert_eq!(feather.sold_by[0].npc_name, "Wise Man");
    }

    #[tokio::test]
    async fn quest_rewards_dedupe_titles_and_need_a_start_npc() {
        let feather = details(2).await.unwrap().unwrap();
        assert_eq!(
            feather.quest_rewards,
            vec![
                ItemQuestReward { quest_id: 50, quest_name: "Feathers".into(), npc_id: 30, amount: 3 },
                ItemQuestReward { quest_id: 50, quest_name: "Feathers".into(), npc_id: 30, amount: 1 },
            ]
        );
    }

    #[tokio::test]
    async fn gather_spots_span_maps_with_graphic_offset() {
        let ore = details(5).await.unwrap().unwrap();
        let spots: Vec<_> = ore
            .gather_spots
            .iter()
            .map(|s| (s.map_id, s.x, s.y, s.amount, s.graphic_id))
            .collect();
        assert_eq!(spots, vec![(1, 1, 1, 4, 103), (2, 3, 3, 2, 104), (2, 4, 4, 6, 104)]);
    }

    #[tokio::test]
    async fn chest_spawns_require_a_chest_tile() {
        let ore = details(5).await.unwrap().unwrap();
        assert_eq!(ore.chest_spawns.len(), 1);
        let chest = &ore.chest_spawns[0];
        assert_eq!((chest.map_id, chest.x, chest.y), (1, 2, 2));
        assert_eq!(chest.amount, 3);
        assert_eq!(chest.graphic_id, Some(55));

        let feather = details(2).await.unwrap().unwrap();
        assert_eq!(feather.chest_spawns[0].key, 1);
    }

    #[tokio::test]
    async fn currency_without_relationships_resolves_to_empty_lists() {
        let eons = details(1).await.unwrap().unwrap();
        assert!(eons.drops.is_empty());
        assert!(eons.ingredient_for.is_empty());
        assert!(eons.craftables.is_empty());
        assert!(eons.sold_by.is_empty());
        assert!(eons.quest_rewards.is_empty());
        assert!(eons.gather_spots.is_empty());
        assert!(eons.chest_spawns.is_empty());
        assert_eq!(eons.meta, vec!["currency".to_string()]);
    }

    #[tokio::test]
    async fn unknown_and_placeholder_items_are_absent() {
        assert!(details(404).await.unwrap().is_none());
        assert!(details(6).await.unwrap().is_none());
    }
}
