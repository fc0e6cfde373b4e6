//! Item type and sub-type codes
//!
//! The dump stores both as plain integers. Codes outside the known tables map
//! to `Unknown` so newer upstream data still loads.

use std::fmt;

/// Primary item category (`item_type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Static,
    General,
    Currency,
    Potion,
    Teleport,
    Transformation,
    ExpReward,
    SkillBook,
    Reserved,
    Key,
    Weapon,
    Shield,
    Clothing,
    Hat,
    Boots,
    Gloves,
    Accessory,
    Belt,
    Necklace,
    Ring,
    Bracelet,
    Bracer,
    Costume,
    CostumeHat,
    Wings,
    ShoulderBuddy,
    GroundBuddy,
    Torch,
    Beverage,
    Effect,
    HairDye,
    HairTool,
    Cure,
    Title,
    VisualDocument,
    AudioDocument,
    TransportTicket,
    Fireworks,
    Explosive,
    Buff,
    Debuff,
    Unknown(i32),
}

impl ItemType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Static,
            1 => Self::General,
            2 => Self::Currency,
            3 => Self::Potion,
            4 => Self::Teleport,
            5 => Self::Transformation,
            6 => Self::ExpReward,
            7 => Self::SkillBook,
            8 => Self::Reserved,
            9 => Self::Key,
            10 => Self::Weapon,
            11 => Self::Shield,
            12 => Self::Clothing,
            13 => Self::Hat,
            14 => Self::Boots,
            15 => Self::Gloves,
            16 => Self::Accessory,
            17 => Self::Belt,
            18 => Self::Necklace,
            19 => Self::Ring,
            20 => Self::Bracelet,
            21 => Self::Bracer,
            22 => Self::Costume,
            23 => Self::CostumeHat,
            24 => Self::Wings,
            25 => Self::ShoulderBuddy,
            26 => Self::GroundBuddy,
            27 => Self::Torch,
            28 => Self::Beverage,
            29 => Self::Effect,
            30 => Self::HairDye,
            31 => Self::HairTool,
            32 => Self::Cure,
            33 => Self::Title,
            34 => Self::VisualDocument,
            35 => Self::AudioDocument,
            36 => Self::TransportTicket,
            37 => Self::Fireworks,
            38 => Self::Explosive,
            39 => Self::Buff,
            40 => Self::Debuff,
            other => Self::Unknown(other),
        }
    }

    /// Equippable types carry combat stats and requirement lines.
    pub fn is_equipment(self) -> bool {
        matches!(
            self,
            Self::Weapon
                | Self::Shield
                | Self::Clothing
                | Self::Hat
                | Self::Boots
                | Self::Gloves
                | Self::Accessory
                | Self::Belt
                | Self::Necklace
                | Self::Ring
                | Self::Bracelet
                | Self::Bracer
                | Self::Costume
                | Self::CostumeHat
                | Self::Wings
                | Self::ShoulderBuddy
                | Self::GroundBuddy
                | Self::Torch
        )
    }

    /// Clothing slots that come in gendered variants.
    pub fn is_gendered(self) -> bool {
        matches!(self, Self::Clothing | Self::Costume)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::General => "General",
            Self::Currency => "Money",
            Self::Potion => "Potion",
            Self::Teleport => "Teleport",
            Self::Transformation => "Transformation",
            Self::ExpReward => "EXP Reward",
            Self::SkillBook => "Skill Book",
            Self::Reserved => "Reserved",
            Self::Key => "Key",
            Self::Weapon => "Weapon",
            Self::Shield => "Shield",
            Self::Clothing => "Clothing",
            Self::Hat => "Hat",
            Self::Boots => "Boots",
            Self::Gloves => "Gloves",
            Self::Accessory => "Accessory",
            Self::Belt => "Belt",
            Self::Necklace => "Necklace",
            Self::Ring => "Ring",
            Self::Bracelet => "Bracelet",
            Self::Bracer => "Bracer",
            Self::Costume => "Costume",
            Self::CostumeHat => "Costume Hat",
            Self::Wings => "Wings",
            Self::ShoulderBuddy => "Shoulder Buddy",
            Self::GroundBuddy => "Ground Buddy",
            Self::Torch => "Torch",
            Self::Beverage => "Beverage",
            Self::Effect => "Effect",
            Self::HairDye => "Hair Dye",
            Self::HairTool => "Hair Tool",
            Self::Cure => "Cure",
            Self::Title => "Title",
            Self::VisualDocument => "Visual Document",
            Self::AudioDocument => "Audio Document",
            Self::TransportTicket => "Transport Ticket",
            Self::Fireworks => "Fireworks",
            Self::Explosive => "Explosive",
            Self::Buff => "Buff",
            Self::Debuff => "Debuff",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Secondary behaviour flag (`pierce` in the dump)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSubType {
    Playable,
    Wedding,
    Mining,
    Logging,
    Farming,
    Fishing,
    Antidote,
    Unboxing,
    Craft,
    Quest,
    Fillable,
    Warmth,
    StealTheShow,
    Deprecated,
    Other(i32),
}

impl ItemSubType {
    pub fn from_code(code: i32) -> Self {
        match code {
            3 => Self::Playable,
            10 => Self::Wedding,
            14 => Self::Mining,
            15 => Self::Logging,
            16 => Self::Farming,
            17 => Self::Fishing,
            22 => Self::Antidote,
            23 => Self::Unboxing,
            24 => Self::Craft,
            25 => Self::Quest,
            26 => Self::Fillable,
            27 => Self::Warmth,
            30 => Self::StealTheShow,
            31 => Self::Deprecated,
            other => Self::Other(other),
        }
    }
}

/// Binding and durability modifier derived from `item_unique / 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemUniqueness {
    Normal,
    Lore,
    Bound,
    Forever,
    Volatile,
    Cursed,
    Expiring,
}

impl ItemUniqueness {
    pub fn from_raw(item_unique: i32) -> Self {
        match item_unique / 20 {
            1 => Self::Lore,
            2 => Self::Bound,
            3 => Self::Forever,
            4 => Self::Volatile,
            5 => Self::Cursed,
            n if n >= 6 => Self::Expiring,
            _ => Self::Normal,
        }
    }

    /// Suffix appended to the item's type line, if any.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Lore => Some("lore"),
            Self::Bound => Some("bound"),
            Self::Forever => Some("forever"),
            Self::Volatile => Some("volatile"),
            Self::Expiring => Some("expiring"),
            Self::Normal | Self::Cursed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_codes_round_trip_to_labels() {
        assert_eq!(ItemType::from_code(2).label(), "Money");
        assert_eq!(ItemType::from_code(10), ItemType::Weapon);
        assert_eq!(ItemType::from_code(27), ItemType::Torch);
        assert_eq!(ItemType::from_code(40), ItemType::Debuff);
        assert_eq!(ItemType::from_code(99), ItemType::Unknown(99));
    }

    #[test]
    fn equipment_range_is_weapon_through_torch() {
        let equipment: Vec<i32> = (0..=40)
            .filter(|code| ItemType::from_code(*code).is_equipment())
            .collect();
        assert_eq!(equipment, (10..=27).collect::<Vec<_>>());
    }

    #[test]
    fn uniqueness_uses_twenty_step_buckets() {
        assert_eq!(ItemUniqueness::from_raw(0), ItemUniqueness::Normal);
        assert_eq!(ItemUniqueness::from_raw(19), ItemUniqueness::Normal);
        assert_eq!(ItemUniqueness::from_raw(20), ItemUniqueness::Lore);
        assert_eq!(ItemUniqueness::from_raw(100), ItemUniqueness::Cursed);
        assert_eq!(ItemUniqueness::from_raw(140), ItemUniqueness::Expiring);
        assert_eq!(ItemUniqueness::Cursed.suffix(), None);
    }
}
