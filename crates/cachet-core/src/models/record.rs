//! The parsed benchmark record.

use serde::{Deserialize, Serialize};

/// One parsed line of a cache-benchmark result log.
///
/// A `Record` is only ever built from a line with at least three
/// comma-delimited fields, each yielding its numeric token. It is immutable
/// once produced; records carry no relationship to each other beyond their
/// position in the output sequence, which preserves input line order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Block size, from the first field.
    pub size: u64,
    /// Access stride, from the second field.
    pub stride: u64,
    /// Elapsed time, from the third field.
    pub time: f64,
}

impl Record {
    pub fn new(size: u64, stride: u64, time: f64) -> Self {
        Self { size, stride, time }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.size, self.stride, self.time)
    }
}
