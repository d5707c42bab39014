//! Record extraction from cache-benchmark result logs.

mod records;
pub mod tokens;

pub use records::RecordExtractor;

use std::path::Path;

use crate::error::Result;
use crate::models::Record;

/// Trait for benchmark-log parsers.
pub trait ResultsParser {
    /// Parse records from raw log text.
    fn parse(&self, text: &str) -> Result<Vec<Record>>;
}

/// Extract records from a results file on disk.
pub fn extract_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    RecordExtractor::new().extract_path(path.as_ref())
}
