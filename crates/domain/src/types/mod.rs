//! Code tables for the integer enumerations stored in the dataset dumps
//!
//! Every table maps unlisted codes to an `Unknown`/`Reserved` variant
//! instead of failing, since the upstream game adds codes without notice.

mod environment;
pub use environment::{LightMode, WeatherType};

mod item_type;
pub use item_type::{ItemSubType, ItemType, ItemUniqueness};

mod npc;
pub use npc::{NpcBehavior, NpcSpeed};

mod spell;
pub use spell::{SpellTarget, SpellTargetRestrict, SpellType};

mod tile_spec;
pub use tile_spec::MapTileSpec;
