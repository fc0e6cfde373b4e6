//! Short descriptive lines shown next to an item in listings
//!
//! The first line always names the kind of item. Equipment then gets one
//! line per non-zero stat group, followed by requirement and sell lines.

use super::item::Item;
use crate::types::{ItemSubType, ItemType, ItemUniqueness};

impl Item {
    /// Builds the summary lines for list views, e.g.
    /// `["normal weapon (bound)", "damage: 4 - 9", "req: 10LVL", "sell: 120"]`.
    pub fn meta_lines(&self) -> Vec<String> {
        let mut lines = vec![self.type_line()];
        lines.extend(self.flag_lines());

        if self.item_type().is_equipment() {
            lines.extend(self.stat_lines());
        }

        if let Some(req) = self.requirement_line() {
            lines.push(req);
        }

        if self.sell_price != 0 {
            lines.push(format!("sell: {}", self.sell_price));
        }

        lines
    }

    /// Static (code 0) and general (code 1) items get their own labels
    /// here rather than falling through to the generic "normal" wording
    /// used for unlabelled codes on the listing pages.
    fn type_line(&self) -> String {
        let item_type = self.item_type();
        let mut line = match item_type {
            ItemType::Static => "static".to_string(),
            ItemType::General => {
                let mut line = String::from("general");
                match self.sub_type() {
                    ItemSubType::Craft => line.push_str(" craft"),
                    ItemSubType::Quest => line.push_str(" quest"),
                    ItemSubType::Fillable => line.push_str(" fillable"),
                    ItemSubType::Deprecated => line.push_str(" deprecated"),
                    _ => {}
                }
                line.push_str(" item");
                line
            }
            ItemType::Currency => "currency".to_string(),
            ItemType::Potion => {
                let mut line = String::from("potion");
                if self.stats.hp != 0 {
                    line.push_str(&format!(" + {}hp", self.stats.hp));
                }
                if self.stats.tp != 0 {
                    line.push_str(&format!(" + {}mp", self.stats.tp));
                }
                line
            }
            ItemType::Title if self.spec1 == 1 => "title".to_string(),
            ItemType::Title => "announcement".to_string(),
            ItemType::HairDye => "hairdye".to_string(),
            ItemType::HairTool => "hairtool".to_string(),
            ItemType::Unknown(_) => "unknown".to_string(),
            equipment if equipment.is_equipment() => self.equipment_line(equipment),
            other => other.label().to_lowercase(),
        };

        if let Some(suffix) = self.uniqueness().suffix() {
            line.push_str(&format!(" ({suffix})"));
        }
        line
    }

    fn equipment_line(&self, item_type: ItemType) -> String {
        let mut line = if self.uniqueness() == ItemUniqueness::Cursed {
            String::from("cursed")
        } else {
            String::from("normal")
        };

        if self.target_area.unwrap_or(0) != 0 {
            line.push_str(" area");
        }

        if item_type.is_gendered() {
            line.push_str(if self.spec2 == 1 { " male" } else { " female" });
        }

        let slot = match item_type {
            ItemType::CostumeHat => "coshat",
            ItemType::ShoulderBuddy | ItemType::GroundBuddy => "buddy",
            other => return format!("{line} {}", other.label().to_lowercase()),
        };
        format!("{line} {slot}")
    }

    fn flag_lines(&self) -> Vec<String> {
        let item_type = self.item_type();
        let is_weapon = item_type == ItemType::Weapon;
        let mut lines = Vec::new();

        match self.sub_type() {
            ItemSubType::Wedding => lines.push("+wedding".to_string()),
            ItemSubType::Warmth => lines.push("+warmth".to_string()),
            ItemSubType::Playable if is_weapon || item_type == ItemType::Shield => {
                lines.push("+playable".to_string())
            }
            ItemSubType::Mining if is_weapon => lines.push("+minerable mining".to_string()),
            ItemSubType::Logging if is_weapon => lines.push("+wood logging".to_string()),
            ItemSubType::Farming if is_weapon => lines.push("+farming".to_string()),
            ItemSubType::Fishing if is_weapon => lines.push("+fishing".to_string()),
            ItemSubType::Antidote if is_weapon => lines.push("+antidote".to_string()),
            ItemSubType::Unboxing if is_weapon => lines.push("+unboxing".to_string()),
            ItemSubType::StealTheShow => lines.push(".. steal the show".to_string()),
            _ => {}
        }

        lines
    }

    fn stat_lines(&self) -> Vec<String> {
        let s = &self.stats;
        let mut lines = Vec::new();

        if s.min_damage != 0 || s.max_damage != 0 {
            let label = if self.aoe_flag != 0 { "aoe" } else { "damage" };
            let mut line = format!("{label}: {} - {}", s.min_damage, s.max_damage);
            if let Some(area) = self.target_area.filter(|a| *a != 0) {
                line.push_str(&format!(" +{area}r"));
            }
            lines.push(line);
        }

        if let Some(line) = joined("add+", &[(s.hp, "hp"), (s.tp, "mp"), (s.sp, "sp")]) {
            lines.push(line);
        }

        if let Some(line) = joined(
            "def+",
            &[(s.defense, "def"), (s.evasion, "eva"), (s.armor, "arm")],
        ) {
            lines.push(line);
        }

        if s.critical_chance != 0 && s.hit_rate != 0 {
            lines.push(format!("plus+ {}hit {}crit", s.hit_rate, s.critical_chance));
        } else if s.critical_chance != 0 {
            lines.push(format!("crit+ {}", s.critical_chance));
        }

        if let Some(line) = joined(
            "stat+",
            &[
                (s.power, "pow"),
                (s.accuracy, "acc"),
                (s.dexterity, "dex"),
                (s.defense, "def"),
                (s.vitality, "vit"),
                (s.aura, "aur"),
            ],
        ) {
            lines.push(line);
        }

        lines
    }

    fn requirement_line(&self) -> Option<String> {
        let r = &self.requirements;
        if r.is_empty() {
            return None;
        }

        let mut line = String::from("req:");
        if r.required_level != 0 {
            line.push_str(&format!(" {}LVL", r.required_level));
        }
        if r.required_class != 0 {
            line.push_str(&format!(" Class {}", r.required_class));
        }
        for (value, unit) in [
            (r.required_power, "pow"),
            (r.required_accuracy, "acc"),
            (r.required_dexterity, "dex"),
            (r.required_defense, "def"),
            (r.required_vitality, "vit"),
            (r.required_aura, "aur"),
        ] {
            if value != 0 {
                line.push_str(&format!(" {value}{unit}"));
            }
        }
        Some(line)
    }
}

/// `prefix` followed by every non-zero `(value, unit)` pair, or `None` when
/// all values are zero.
fn joined(prefix: &str, parts: &[(i32, &str)]) -> Option<String> {
    if parts.iter().all(|(value, _)| *value == 0) {
        return None;
    }
    let mut line = prefix.to_string();
    for (value, unit) in parts.iter().filter(|(value, _)| *value != 0) {
        line.push_str(&format!(" {value}{unit}"));
    }
    Some(line)
}
