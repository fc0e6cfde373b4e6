//! Character class record from the classes dump

use serde::{Deserialize, Serialize};

use crate::ids::ClassId;

/// Fields that only exist in the older class export.
pub const LEGACY_CLASS_FIELDS: &[&str] = &["class_group"];

/// Prefix shared by the older export's equipment preview fields
/// (`preview_weapon_item_id` and friends).
pub const LEGACY_CLASS_PREFIX: &str = "preview_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
    pub base: i32,
    pub class_type: i32,
    pub classpicker_equip_1: i32,
    pub classpicker_equip_2: i32,
    pub classpicker_equip_3: i32,
    pub classpicker_equip_4: i32,
    pub classpicker_equip_5: i32,
    pub power: i32,
    pub accuracy: i32,
    pub defense: i32,
    pub dexterity: i32,
    pub vitality: i32,
    pub aura: i32,
}

impl Class {
    /// Graphics shown on the class picker, in slot order.
    pub fn picker_equipment(&self) -> [i32; 5] {
        [
            self.classpicker_equip_1,
            self.classpicker_equip_2,
            self.classpicker_equip_3,
            self.classpicker_equip_4,
            self.classpicker_equip_5,
        ]
    }

    pub fn is_legacy_field(field: &str) -> bool {
        LEGACY_CLASS_FIELDS.contains(&field)
            || (field.starts_with(LEGACY_CLASS_PREFIX) && field.ends_with("_item_id"))
    }
}
