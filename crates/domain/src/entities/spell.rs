//! Spell record from the spells dump

use serde::{Deserialize, Serialize};

use crate::common::require_absolute_url;
use crate::error::DomainError;
use crate::ids::SpellId;
use crate::types::{SpellTarget, SpellTargetRestrict, SpellType};

/// Fields that only exist in the older spell export.
pub const LEGACY_SPELL_FIELDS: &[&str] = &["direct_effect", "direct-low", "direct-high"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    pub shout: String,
    pub icon: i32,
    pub graphic: i32,
    pub tp_cost: i32,
    pub sp_cost: i32,
    pub cast_time: i32,
    pub spell_type: i32,
    pub element: i32,
    pub element_power: i32,
    pub target_restrict: i32,
    pub target_type: i32,
    pub min_damage: i32,
    pub max_damage: i32,
    pub accuracy: i32,
    pub hp: i32,
    pub icon_url: String,
    pub graphic_url: String,
}

/// What a cast does, selected by `spell_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellEffect {
    Damage { min: i32, max: i32, accuracy: i32 },
    Heal { hp: i32 },
    Utility,
}

impl Spell {
    pub fn spell_type(&self) -> SpellType {
        SpellType::from_code(self.spell_type)
    }

    pub fn target(&self) -> SpellTarget {
        SpellTarget::from_code(self.target_type)
    }

    pub fn target_restrict(&self) -> SpellTargetRestrict {
        SpellTargetRestrict::from_code(self.target_restrict)
    }

    pub fn effect(&self) -> SpellEffect {
        match self.spell_type() {
            SpellType::Attack => SpellEffect::Damage {
                min: self.min_damage,
                max: self.max_damage,
                accuracy: self.accuracy,
            },
            SpellType::Heal => SpellEffect::Heal { hp: self.hp },
            _ => SpellEffect::Utility,
        }
    }

    pub fn is_legacy_field(field: &str) -> bool {
        LEGACY_SPELL_FIELDS.contains(&field)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_absolute_url("icon_url", &self.icon_url)?;
        require_absolute_url("graphic_url", &self.graphic_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spell_json;
    use serde_json::json;

    #[test]
    fn effect_follows_spell_type() {
        let mut raw = spell_json(1, "Fireball");
        raw["spell_type"] = json!(1);
        raw["min_damage"] = json!(10);
        raw["max_damage"] = json!(20);
        raw["accuracy"] = json!(5);
        let spell: Spell = serde_json::from_value(raw).unwrap();
        assert_eq!(
            spell.effect(),
            SpellEffect::Damage { min: 10, max: 20, accuracy: 5 }
        );

        let mut raw = spell_json(2, "Mend");
        raw["hp"] = json!(40);
        let spell: Spell = serde_json::from_value(raw).unwrap();
        assert_eq!(spell.effect(), SpellEffect::Heal { hp: 40 });
    }

    #[test]
    fn icon_url_must_be_absolute() {
        let mut raw = spell_json(1, "Fireball");
        raw["icon_url"] = json!("icons/1.png");
        let spell: Spell = serde_json::from_value(raw).unwrap();
        assert!(spell.validate().is_err());
    }

    #[test]
    fn legacy_fields() {
        assert!(Spell::is_legacy_field("direct-low"));
        assert!(!Spell::is_legacy_field("min_damage"));
    }
}
