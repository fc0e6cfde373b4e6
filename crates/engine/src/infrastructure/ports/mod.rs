//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Reading and writing the collection cache files
//! - Fetching collection dumps from the upstream API
//! - Storing rendered map previews
//! - Clock (for testing)

mod dataset;
mod error;
mod external;
mod testing;
pub mod types;

pub use dataset::DatasetSource;
pub use error::{CacheError, FetchError, StoreError};
pub use external::{DumpFetcher, PreviewCache};
pub use testing::ClockPort;
pub use types::CollectionKind;

#[cfg(test)]
pub use dataset::MockDatasetSource;
#[cfg(test)]
pub use external::{MockDumpFetcher, MockPreviewCache};
#[cfg(test)]
pub use testing::MockClockPort;
