//! JSON builders producing complete dump records with zeroed fields.

use serde_json::{json, Value};

pub fn item_json(id: u32, name: &str) -> Value {
    json!({
        "id": id, "name": name, "graphic": 1, "item_type": 0, "pierce": 0, "item_unique": 0,
        "hp": 0, "tp": 0, "sp": 0, "min_damage": 0, "max_damage": 0, "hit_rate": 0,
        "evasion": 0, "armor": 0, "critical_chance": 0, "power": 0, "accuracy": 0,
        "defense": 0, "dexterity": 0, "vitality": 0, "aura": 0, "light": 0, "dark": 0,
        "earth": 0, "air": 0, "water": 0, "fire": 0, "spec1": 0, "spec2": 0, "spec3": 0,
        "required_level": 0, "required_class": 0, "required_power": 0,
        "required_accuracy": 0, "required_dexterity": 0, "required_defense": 0,
        "required_vitality": 0, "required_aura": 0, "weight": 0, "aoe_flag": 0, "size": 0,
        "sell_price": 0, "graphic_url": format!("https://cdn.example.com/items/{id}.png")
    })
}

pub fn npc_json(id: u32, name: &str) -> Value {
    json!({
        "id": id, "name": name, "default_boundary": 0, "graphic": 1, "race": 0, "boss": 0,
        "child": 0, "behavior": 0, "vendor_id": 0, "greeting_sfx_id": 0, "agro_sfx_id": 0,
        "idle_sfx_id": 0, "attack_sfx_id": 0, "walk_sfx_id": 0, "alert_sfx_id": 0,
        "death_sfx_id": 0, "npc_respawn_secs": 60, "npc_spawn_time": 0,
        "npc_default_speed": 9, "max_loaded_frames_flag": 0, "max_loaded_frames": 0,
        "alpha_normal_frames": 0, "alpha_attack_frames": 0, "move_flag": 0,
        "move_blocked": 0, "move_conveyor": 0, "idle_aura": 0, "role": 0, "range": 0,
        "hp": 10, "tp": 0, "min_damage": 0, "max_damage": 0, "accuracy": 0, "evasion": 0,
        "armor": 0, "critical_chance": 0, "level": 1, "experience": 0
    })
}

pub fn map_json(id: u32, name: &str, width: i32, height: i32) -> Value {
    json!({
        "id": id, "rid1": 0, "rid2": 0, "version": 1, "subversion": 0,
        "width": width, "height": height, "name": name, "scroll_allow": 0,
        "minimap_allow": 1, "channel_busy": 0, "channel_full": 0, "daymode": 0,
        "daymode_override": 0, "weather_type": 0, "respawn_x": 0, "respawn_y": 0,
        "wayfarer_id": 0, "wayfarer_x": 0, "wayfarer_y": 0, "npcs": [], "items": [],
        "map_gathers": [], "warp_tiles": [], "map_layers": [], "spec_tiles": [], "signs": []
    })
}

pub fn quest_json(id: u32, title: &str, start_npcs: &[i32]) -> Value {
    json!({
        "title": title, "id": id, "quest_type": 0, "no_abort": 0, "required_quest": 0,
        "start_npcs": start_npcs, "start_map": 0, "min_level": 1, "max_level": 99,
        "repeatable": 0, "reward_exp": 0, "additional_exp": 0, "item_rewards_1": [],
        "item_rewards_2": [], "state_count": 0, "states": []
    })
}

pub fn shop_json(name: &str) -> Value {
    json!({ "name": name, "npcs": [], "buys": [], "crafts": [] })
}

pub fn spell_json(id: u32, name: &str) -> Value {
    json!({
        "id": id, "name": name, "shout": "", "icon": 1, "graphic": 1, "tp_cost": 0,
        "sp_cost": 0, "cast_time": 0, "spell_type": 0, "element": 0, "element_power": 0,
        "target_restrict": 0, "target_type": 0, "min_damage": 0, "max_damage": 0,
        "accuracy": 0, "hp": 0,
        "icon_url": format!("https://cdn.example.com/spells/{id}-icon.png"),
        "graphic_url": format!("https://cdn.example.com/spells/{id}.png")
    })
}

pub fn class_json(id: u32, name: &str) -> Value {
    json!({
        "id": id, "name": name, "base": 0, "class_type": 0, "classpicker_equip_1": 0,
        "classpicker_equip_2": 0, "classpicker_equip_3": 0, "classpicker_equip_4": 0,
        "classpicker_equip_5": 0, "power": 0, "accuracy": 0, "defense": 0, "dexterity": 0,
        "vitality": 0, "aura": 0
    })
}
