//! Map record from the maps dump
//!
//! Everything placed on a map is stored sparsely as coordinate lists. The
//! lookup helpers below return the first entry at a coordinate, which is the
//! one the game client honours when the export contains duplicates.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, MapId, NpcId};
use crate::types::{LightMode, MapTileSpec, WeatherType};

/// Layer whose tile graphics give chests and signs their artwork.
pub const OBJECT_LAYER: &str = "Object";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    pub id: MapId,
    pub rid1: i32,
    pub rid2: i32,
    pub version: i32,
    pub subversion: i32,
    pub width: i32,
    pub height: i32,
    pub name: String,
    pub scroll_allow: i32,
    pub minimap_allow: i32,
    pub channel_busy: i32,
    pub channel_full: i32,
    pub daymode: i32,
    pub daymode_override: i32,
    pub weather_type: i32,
    pub respawn_x: i32,
    pub respawn_y: i32,
    pub wayfarer_id: i32,
    pub wayfarer_x: i32,
    pub wayfarer_y: i32,
    pub npcs: Vec<MapNpc>,
    pub items: Vec<MapItem>,
    #[serde(default)]
    pub map_gathers: Vec<MapGather>,
    pub warp_tiles: Vec<WarpTile>,
    pub map_layers: Vec<MapLayer>,
    pub spec_tiles: Vec<SpecTile>,
    pub signs: Vec<Sign>,
}

/// NPC spawn point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapNpc {
    pub x: i32,
    pub y: i32,
    pub id: NpcId,
    pub interaction_id: i32,
    pub boundary_x: i32,
    pub boundary_y: i32,
    pub courage: i32,
    /// Speed override; 0 falls back to the NPC's default.
    pub speed: i32,
    /// Respawn override in seconds; non-positive falls back to the NPC's default.
    pub time: i32,
    pub amount: i32,
}

/// Ground item or chest slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapItem {
    pub x: i32,
    pub y: i32,
    pub key: i32,
    pub slot: i32,
    pub item_id: ItemId,
    pub time: i32,
    pub amount: i32,
}

/// Resource node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapGather {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub gather_type: i32,
    pub hit_count: i32,
    pub item_id: ItemId,
    pub max_amount: i32,
    pub graphic_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarpTile {
    pub x: i32,
    pub y: i32,
    pub destination_id: MapId,
    pub destination_x: i32,
    pub destination_y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLayer {
    pub details: MapLayerDetails,
    #[serde(default)]
    pub tiles: Vec<LayerTile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLayerDetails {
    pub name: String,
    pub rows: i32,
    #[serde(default)]
    pub columns: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerTile {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub tile: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecTile {
    pub x: i32,
    pub y: i32,
    pub spec: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sign {
    pub x: i32,
    pub y: i32,
    pub msg: SignMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignMessage {
    pub title: String,
    pub message: String,
}

impl Map {
    pub fn light_mode(&self) -> LightMode {
        LightMode::from_code(self.daymode)
    }

    pub fn weather(&self) -> WeatherType {
        WeatherType::from_code(self.weather_type)
    }

    pub fn spec_at(&self, x: i32, y: i32) -> Option<MapTileSpec> {
        self.spec_tiles
            .iter()
            .find(|t| t.x == x && t.y == y)
            .map(|t| MapTileSpec::from_code(t.spec))
    }

    pub fn has_chest_at(&self, x: i32, y: i32) -> bool {
        self.spec_at(x, y) == Some(MapTileSpec::Chest)
    }

    pub fn layer(&self, name: &str) -> Option<&MapLayer> {
        self.map_layers.iter().find(|l| l.details.name == name)
    }

    /// Graphic of the `Object` layer tile at a coordinate.
    pub fn object_graphic_at(&self, x: i32, y: i32) -> Option<i32> {
        self.layer(OBJECT_LAYER)?
            .tiles
            .iter()
            .find(|t| t.x == x && t.y == y)
            .and_then(|t| t.tile)
    }

    pub fn has_npc_spawn_at(&self, x: i32, y: i32) -> bool {
        self.npcs.iter().any(|n| n.x == x && n.y == y)
    }

    pub fn has_warp_at(&self, x: i32, y: i32) -> bool {
        self.warp_tiles.iter().any(|w| w.x == x && w.y == y)
    }

    pub fn validate(&self) -> Result<(), crate::error::DomainError> {
        if self.width < 0 || self.height < 0 {
            return Err(crate::error::DomainError::validation(format!(
                "map {} has negative dimensions {}x{}",
                self.id, self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::map_json;
    use serde_json::json;

    fn sample() -> Map {
        let mut raw = map_json(5, "Aeven", 10, 8);
        raw["spec_tiles"] = json!([
            { "x": 2, "y": 3, "spec": 9 },
            { "x": 2, "y": 3, "spec": 0 },
            { "x": 4, "y": 4, "spec": 18 }
        ]);
        raw["map_layers"] = json!([
            { "details": { "name": "Ground", "rows": 8 }, "tiles": [{ "x": 2, "y": 3, "tile": 1 }] },
            { "details": { "name": "Object", "rows": 8, "columns": 10 }, "tiles": [
                { "x": 2, "y": 3, "tile": 77 },
                { "x": 1, "y": 1 }
            ] }
        ]);
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn first_spec_tile_at_coordinate_wins() {
        let map = sample();
        assert_eq!(map.spec_at(2, 3), Some(MapTileSpec::Chest));
        assert!(map.has_chest_at(2, 3));
        assert!(!map.has_chest_at(4, 4));
        assert_eq!(map.spec_at(0, 0), None);
    }

    #[test]
    fn object_graphic_comes_from_object_layer_only() {
        let map = sample();
        assert_eq!(map.object_graphic_at(2, 3), Some(77));
        assert_eq!(map.object_graphic_at(1, 1), None);
        assert_eq!(map.object_graphic_at(9, 9), None);
    }

    #[test]
    fn gathers_are_optional() {
        let mut raw = map_json(6, "", 1, 1);
        raw.as_object_mut().unwrap().remove("map_gathers");
        let map: Map = serde_json::from_value(raw).unwrap();
        assert!(map.map_gathers.is_empty());
        assert!(map.validate().is_ok());
    }

    #[test]
    fn environment_codes() {
        let mut raw = map_json(7, "Snowfield", 1, 1);
        raw["daymode"] = json!(4);
        raw["weather_type"] = json!(8);
        let map: Map = serde_json::from_value(raw).unwrap();
        assert_eq!(map.light_mode(), LightMode::Outdoors);
        assert_eq!(map.weather(), WeatherType::HeavySnow);
    }
}
