//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod dataset_files;
pub mod dump_client;
pub mod ports;
pub mod preview_files;
