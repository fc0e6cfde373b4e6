//! Quest record from the quests dump

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, QuestId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub title: String,
    pub id: QuestId,
    pub quest_type: i32,
    pub no_abort: i32,
    pub required_quest: i32,
    /// Quest-giver `vendor_id`s. Only the first one is used to find the
    /// starting NPC.
    pub start_npcs: Vec<i32>,
    pub start_map: i32,
    pub min_level: i32,
    pub max_level: i32,
    pub repeatable: i32,
    pub reward_exp: i32,
    pub additional_exp: i32,
    pub item_rewards_1: Vec<ItemReward>,
    pub item_rewards_2: Vec<ItemReward>,
    pub state_count: i32,
    pub states: Vec<QuestState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReward {
    pub item_id: ItemId,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestState {
    pub state_id: i32,
    pub npcs: Vec<QuestStateNpc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestStateNpc {
    pub npc_type: i32,
    pub npc_id: i32,
}

impl Quest {
    pub fn start_vendor_id(&self) -> Option<i32> {
        self.start_npcs.first().copied()
    }

    /// Both reward tables in order, first table first.
    pub fn rewards(&self) -> impl Iterator<Item = &ItemReward> {
        self.item_rewards_1.iter().chain(self.item_rewards_2.iter())
    }
}
