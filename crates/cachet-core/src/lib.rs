//! Core library for cache-benchmark log parsing.
//!
//! This crate provides:
//! - A tolerant line-oriented extractor for benchmark result logs
//!   (`<size field>, <stride field>, <time field>` per line)
//! - The `Record` data model and JSON configuration
//! - A strict error taxonomy: any malformed line aborts the scan

pub mod error;
pub mod extract;
pub mod models;

pub use error::{CachetError, ExtractionError, Result};
pub use extract::{extract_records, RecordExtractor, ResultsParser};
pub use models::{CachetConfig, Record};
