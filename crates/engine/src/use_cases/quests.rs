//! Quest rewards and the start NPC / start map chain.

use std::sync::Arc;

use serde::Serialize;

use eordb_domain::{Item, Map, Npc, Quest, QuestId};
use eordb_shared::{MapRef, NpcRef, QuestReward};

use crate::stores::{Collection, DatasetStore};

use super::resolve::{follow, ResolveError};

#[derive(Debug, Clone, Serialize)]
pub struct QuestDetails {
    pub quest: Quest,
    pub rewards: Vec<QuestReward>,
    pub start_npc: Option<NpcRef>,
    pub start_map: Option<MapRef>,
}

pub fn rewards(quest: &Quest, items: &Collection<Item>) -> Vec<QuestReward> {
    quest
        .rewards()
        .filter_map(|reward| {
            let item = follow(items.get(&reward.item_id), "quest reward item", reward.item_id)?;
            Some(QuestReward {
                item_id: item.id.get(),
                item_name: item.name.clone(),
                amount: reward.amount,
            })
        })
        .collect()
}

/// Quest-behavior NPC for the quest's first start entry.
pub(crate) fn start_npc<'a>(quest: &Quest, npcs: &'a Collection<Npc>) -> Option<&'a Npc> {
    let vendor_id = quest.start_vendor_id()?;
    follow(npcs.quest_giver(vendor_id), "quest start npc", vendor_id)
}

/// Map of the start NPC's first spawn. The quest's own `start_map` code
/// is not a map id and is ignored.
pub fn start_map<'a>(npc: &Npc, maps: &'a Collection<Map>) -> Option<&'a Map> {
    maps.with_spawn(npc.id).next()
}

pub struct QuestLookup {
    store: Arc<DatasetStore>,
}

impl QuestLookup {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: QuestId) -> Result<Option<QuestDetails>, ResolveError> {
        let quests = self.store.quests().await?;
        let Some(quest) = quests.get(&id) else {
            return Ok(None);
        };
        let items = self.store.items().await?;
        let npcs = self.store.npcs().await?;
        let maps = self.store.maps().await?;

        let npc = start_npc(quest, &npcs);
        let map = npc.and_then(|npc| start_map(npc, &maps));

        Ok(Some(QuestDetails {
            rewards: rewards(quest, &items),
            start_npc: npc.map(|n| NpcRef {
                id: n.id.get(),
                name: n.name.clone(),
            }),
            start_map: map.map(|m| MapRef {
                id: m.id.get(),
                name: m.name.clone(),
            }),
            quest: quest.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::aeven_store;

    async fn details(id: u32) -> QuestDetails {
        QuestLookup::new(aeven_store())
            .execute(QuestId::new(id))
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn rewards_concatenate_both_tables() {
        let quest = details(50).await;
        let rows: Vec<_> = quest.rewards.iter().map(|r| (r.item_id, r.amount)).collect();
        assert_eq!(rows, vec![(2, 3), (1, 500), (2, 1)]);
    }

    #[tokio::test]
    async fn start_map_comes_from_the_start_npc_spawn() {
        let quest = details(50).await;
        assert_eq!(
            quest.start_npc,
            Some(NpcRef { id: 30, name: "Village Elder".into() })
        );
        assert_eq!(quest.start_map, Some(MapRef { id: 1, name: "Aeven".into() }));
    }

    #[tokio::test]
    async fn quest_without_giver_has_no_start() {
        let quest = details(51).await;
        assert!(quest.start_npc.is_none());
        assert!(quest.start_map.is_none());
        assert_eq!(quest.rewards.len(), 1);
    }

    #[tokio::test]
    async fn unknown_quest_is_none() {
        let found = QuestLookup::new(aeven_store())
            .execute(QuestId::new(9))
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
