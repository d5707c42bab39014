//! The line-oriented record extractor.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ExtractionError, Result};
use crate::models::Record;

use super::tokens::{digit_token, float_token};
use super::ResultsParser;

/// Extracts [`Record`]s from cache-benchmark result logs.
///
/// Each non-empty line must carry at least three comma-delimited fields:
/// size, stride and time, in that order. Tokenization is tolerant (words
/// around the numbers are ignored), failure is not: any malformed line
/// aborts the whole scan.
pub struct RecordExtractor;

impl RecordExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Parse one non-empty input line into a record.
    ///
    /// `line_no` is the 1-based input line number, used for error context.
    pub fn extract_line(
        &self,
        line: &str,
        line_no: usize,
    ) -> std::result::Result<Record, ExtractionError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            return Err(ExtractionError::MalformedLine {
                line: line_no,
                fields: fields.len(),
            });
        }

        // Fields past the third are ignored.
        let size = digit_token(fields[0]).ok_or(ExtractionError::MissingNumericToken {
            line: line_no,
            field: "size",
        })?;
        let stride = digit_token(fields[1]).ok_or(ExtractionError::MissingNumericToken {
            line: line_no,
            field: "stride",
        })?;
        let time = float_token(fields[2])
            .ok_or(ExtractionError::NoParseableTime { line: line_no })?;

        Ok(Record { size, stride, time })
    }

    /// Extract records from raw log text, preserving input line order.
    ///
    /// Blank lines are skipped; every other line must yield a record.
    pub fn extract_text(&self, text: &str) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            records.push(self.extract_line(line, idx + 1)?);
        }

        debug!("Extracted {} records", records.len());
        Ok(records)
    }

    /// Extract records from a line stream.
    pub fn extract_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(self.extract_line(&line, idx + 1)?);
        }

        debug!("Extracted {} records", records.len());
        Ok(records)
    }

    /// Extract records from a results file.
    ///
    /// The file handle lives for the duration of the scan and is released
    /// unconditionally, on success or failure.
    pub fn extract_path(&self, path: &Path) -> Result<Vec<Record>> {
        info!("Scanning results file {}", path.display());
        let file = File::open(path)?;
        self.extract_reader(BufReader::new(file))
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsParser for RecordExtractor {
    fn parse(&self, text: &str) -> Result<Vec<Record>> {
        self.extract_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CachetError;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn extract_err(text: &str) -> ExtractionError {
        match RecordExtractor::new().extract_text(text) {
            Err(CachetError::Extraction(e)) => e,
            other => panic!("expected extraction error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_basic_line() {
        let record = RecordExtractor::new()
            .extract_line("120 B , 4 , 3.5 ms", 1)
            .unwrap();
        assert_eq!(record, Record::new(120, 4, 3.5));
    }

    #[test]
    fn test_time_first_parseable_token_wins() {
        let record = RecordExtractor::new()
            .extract_line("64, 2, abc def 2.75", 1)
            .unwrap();
        assert_eq!(record.time, 2.75);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let record = RecordExtractor::new()
            .extract_line("64 bytes, stride 2, 1.23 ms, iteration 7", 1)
            .unwrap();
        assert_eq!(record, Record::new(64, 2, 1.23));
    }

    #[test]
    fn test_two_fields_is_malformed() {
        let err = extract_err("64 bytes, 1.23 ms");
        assert_eq!(err, ExtractionError::MalformedLine { line: 1, fields: 2 });
    }

    #[test]
    fn test_missing_size_token() {
        let err = extract_err("size unknown, stride 2, 1.23 ms");
        assert_eq!(
            err,
            ExtractionError::MissingNumericToken { line: 1, field: "size" }
        );
    }

    #[test]
    fn test_missing_stride_token() {
        let err = extract_err("64 bytes, stride ?, 1.23 ms");
        assert_eq!(
            err,
            ExtractionError::MissingNumericToken { line: 1, field: "stride" }
        );
    }

    #[test]
    fn test_no_parseable_time_fails_fast() {
        // The first line already fails instead of reusing stale state.
        let err = extract_err("64 bytes, stride 2, slow");
        assert_eq!(err, ExtractionError::NoParseableTime { line: 1 });
    }

    #[test]
    fn test_error_reports_offending_line() {
        let text = "64 bytes, stride 2, 1.23 ms\n128 bytes, stride 4, no time here\n";
        let err = extract_err(text);
        assert_eq!(err, ExtractionError::NoParseableTime { line: 2 });
    }

    #[test]
    fn test_two_line_sample_in_order() {
        let text = "64 bytes, stride 2, 1.23 ms\n128 bytes, stride 4, 2.46 ms\n";
        let records = RecordExtractor::new().extract_text(text).unwrap();
        assert_eq!(
            records,
            vec![Record::new(64, 2, 1.23), Record::new(128, 4, 2.46)]
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "\n64, 2, 1.0\n   \n128, 4, 2.0\n\n";
        let records = RecordExtractor::new().extract_text(text).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_extract_path_round() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "64 bytes, stride 2, 1.23 ms").unwrap();
        writeln!(file, "128 bytes, stride 4, 2.46 ms").unwrap();

        let extractor = RecordExtractor::new();
        let first = extractor.extract_path(file.path()).unwrap();
        let second = extractor.extract_path(file.path()).unwrap();

        // Extraction is a pure scan: re-running yields the same sequence.
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![Record::new(64, 2, 1.23), Record::new(128, 4, 2.46)]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RecordExtractor::new()
            .extract_path(Path::new("no_such_results.txt"))
            .unwrap_err();
        assert!(matches!(err, CachetError::Io(_)));
    }
}
