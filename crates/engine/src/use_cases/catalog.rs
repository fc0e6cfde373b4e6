//! Plain record reads and the small catalog summaries: shop names and NPC
//! speed samples.

use std::sync::Arc;

use serde::Serialize;

use eordb_domain::{Class, ClassId, Item, Map, Npc, NpcSpeed, Spell, SpellEffect, SpellId};
use eordb_shared::SpeedSample;

use crate::infrastructure::ports::StoreError;
use crate::stores::{Collection, DatasetStore};

use super::npcs::effective_speed;
use super::resolve::{first_seen, follow};

#[derive(Debug, Clone, Serialize)]
pub struct SpellDetails {
    pub spell: Spell,
    pub spell_type: String,
    pub target: String,
    pub target_restrict: String,
    pub effect: EffectSummary,
}

/// Serializable form of [`SpellEffect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectSummary {
    Damage { min: i32, max: i32, accuracy: i32 },
    Heal { hp: i32 },
    Utility,
}

impl From<SpellEffect> for EffectSummary {
    fn from(effect: SpellEffect) -> Self {
        match effect {
            SpellEffect::Damage { min, max, accuracy } => Self::Damage { min, max, accuracy },
            SpellEffect::Heal { hp } => Self::Heal { hp },
            SpellEffect::Utility => Self::Utility,
        }
    }
}

/// Every shop name an item mentions, recipes before sellers, in first-seen
/// order.
pub fn shop_names(items: &Collection<Item>) -> Vec<String> {
    let mentions = items.all().iter().flat_map(|item| {
        let crafted = item.craftables.iter().map(|r| r.shop_name.clone());
        let sold = item.sold_by.iter().map(|s| s.sold_by_name.clone());
        crafted.chain(sold)
    });
    first_seen(mentions, |name| name.clone())
}

/// One sample NPC per distinct effective spawn speed, walking maps and
/// their spawns in source order.
pub fn speed_samples(maps: &Collection<Map>, npcs: &Collection<Npc>) -> Vec<SpeedSample> {
    let spawns = maps.all().iter().flat_map(|map| map.npcs.iter());
    let samples = spawns.filter_map(|spawn| {
        let npc = follow(npcs.get(&spawn.id), "map spawn npc", spawn.id)?;
        let speed = effective_speed(spawn.speed, npc);
        Some(SpeedSample {
            speed,
            label: NpcSpeed::from_code(speed).label().to_string(),
            npc_id: npc.id.get(),
            npc_name: npc.name.clone(),
        })
    });
    first_seen(samples, |sample| sample.speed)
}

pub struct Catalog {
    store: Arc<DatasetStore>,
}

impl Catalog {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }

    pub async fn class(&self, id: ClassId) -> Result<Option<Class>, StoreError> {
        let classes = self.store.classes().await?;
        Ok(classes.get(&id).cloned())
    }

    pub async fn spell(&self, id: SpellId) -> Result<Option<SpellDetails>, StoreError> {
        let spells = self.store.spells().await?;
        Ok(spells.get(&id).map(|spell| SpellDetails {
            spell_type: spell.spell_type().to_string(),
            target: spell.target().to_string(),
            target_restrict: spell.target_restrict().to_string(),
            effect: spell.effect().into(),
            spell: spell.clone(),
        }))
    }

    pub async fn shops(&self) -> Result<Vec<String>, StoreError> {
        let items = self.store.items().await?;
        Ok(shop_names(&items))
    }

    pub async fn speeds(&self) -> Result<Vec<SpeedSample>, StoreError> {
        let maps = self.store.maps().await?;
        let npcs = self.store.npcs().await?;
        Ok(speed_samples(&maps, &npcs))
    }
}
