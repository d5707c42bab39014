//! Data models for cache-benchmark results.

pub mod config;
pub mod record;

pub use config::CachetConfig;
pub use record::Record;
