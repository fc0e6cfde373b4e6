//! Small pure helpers shared by the record types.

pub mod url;

pub use self::url::require_absolute_url;
