//! In-memory dataset storage.
//!
//! - `Collection` - immutable, indexed snapshot of one collection
//! - `DatasetStore` - one memoized snapshot slot per collection

pub mod collection;
pub mod dataset;

pub use collection::{Collection, MapIndex, NpcIndex, QuestIndex, Record, ShopIndex};
pub use dataset::{DatasetStore, Stored};
