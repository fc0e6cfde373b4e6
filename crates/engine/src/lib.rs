//! eordb Engine library.
//!
//! Server-side code for browsing the Endless Online Recharged datasets.
//!
//! ## Structure
//!
//! - `stores/` - Memoized, validated snapshots of the seven collections
//! - `use_cases/` - Relationship resolution, listings, previews and refresh
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// In-memory dataset and the shared test world.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
