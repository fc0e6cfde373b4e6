//! API layer - thin JSON and PNG HTTP entry points.

pub mod http;
