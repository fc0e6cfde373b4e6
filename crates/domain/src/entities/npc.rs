//! NPC record from the npcs dump

use serde::{Deserialize, Serialize};

use crate::common::require_absolute_url;
use crate::error::DomainError;
use crate::ids::{ItemId, NpcId};
use crate::types::{NpcBehavior, NpcSpeed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    pub default_boundary: i32,
    pub graphic: i32,
    pub race: i32,
    pub boss: i32,
    pub child: i32,
    pub behavior: i32,
    /// Quest or shop id this NPC fronts, interpreted according to `behavior`.
    pub vendor_id: i32,
    #[serde(flatten)]
    pub sounds: NpcSounds,
    pub npc_respawn_secs: i32,
    pub npc_spawn_time: i32,
    pub npc_default_speed: i32,
    #[serde(flatten)]
    pub animation: NpcAnimation,
    pub idle_aura: i32,
    pub role: i32,
    pub range: i32,
    #[serde(flatten)]
    pub combat: NpcCombat,
    #[serde(default)]
    pub drops: Vec<NpcDropEntry>,
    #[serde(default)]
    pub shared: Vec<NpcSharedDropEntry>,
    #[serde(default, rename = "spawnMaps")]
    pub spawn_maps: Option<i32>,
    #[serde(default)]
    pub spawns: Option<i32>,
    #[serde(default)]
    pub respawn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcSounds {
    pub greeting_sfx_id: i32,
    pub agro_sfx_id: i32,
    pub idle_sfx_id: i32,
    pub attack_sfx_id: i32,
    pub walk_sfx_id: i32,
    pub alert_sfx_id: i32,
    pub death_sfx_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcAnimation {
    pub max_loaded_frames_flag: i32,
    pub max_loaded_frames: i32,
    pub alpha_normal_frames: i32,
    pub alpha_attack_frames: i32,
    pub move_flag: i32,
    pub move_blocked: i32,
    pub move_conveyor: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcCombat {
    pub hp: i32,
    pub tp: i32,
    pub min_damage: i32,
    pub max_damage: i32,
    pub accuracy: i32,
    pub evasion: i32,
    pub armor: i32,
    pub critical_chance: i32,
    pub level: i32,
    pub experience: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcDropEntry {
    #[serde(rename = "itemID")]
    pub item_id: ItemId,
    pub drop_percent: f64,
    pub item_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcSharedDropEntry {
    #[serde(rename = "itemID")]
    pub item_id: ItemId,
    pub drop_percent: f64,
}

impl Npc {
    pub fn behavior(&self) -> NpcBehavior {
        NpcBehavior::from_code(self.behavior)
    }

    pub fn default_speed(&self) -> NpcSpeed {
        NpcSpeed::from_code(self.npc_default_speed)
    }

    pub fn is_quest_giver(&self) -> bool {
        self.behavior == NpcBehavior::QUEST_CODE
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for drop in &self.drops {
            require_absolute_url("drops.item_url", &drop.item_url)?;
        }
        Ok(())
    }
}
