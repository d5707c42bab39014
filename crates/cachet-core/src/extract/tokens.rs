//! Token scanners for loosely formatted benchmark fields.
//!
//! A field is one comma-delimited segment of an input line; a token is one
//! of its whitespace-delimited words. Surrounding words like `bytes` or
//! `ms` are permitted and ignored.

/// First whitespace token composed entirely of ASCII decimal digits,
/// parsed as an integer.
pub fn digit_token(field: &str) -> Option<u64> {
    field
        .split_whitespace()
        .filter(|t| t.bytes().all(|b| b.is_ascii_digit()))
        .find_map(|t| t.parse().ok())
}

/// First whitespace token that parses as a float. Tokens that fail to
/// parse are skipped, not an error.
pub fn float_token(field: &str) -> Option<f64> {
    field.split_whitespace().find_map(|t| t.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digit_token_skips_words() {
        assert_eq!(digit_token("block size 64 bytes"), Some(64));
        assert_eq!(digit_token(" 120 B "), Some(120));
    }

    #[test]
    fn test_digit_token_first_wins() {
        assert_eq!(digit_token("8 of 16"), Some(8));
    }

    #[test]
    fn test_digit_token_rejects_mixed_tokens() {
        // "4KB" and "-3" are not digit-only tokens
        assert_eq!(digit_token("4KB cache"), None);
        assert_eq!(digit_token("-3"), None);
        assert_eq!(digit_token("size unknown"), None);
    }

    #[test]
    fn test_float_token_skips_unparseable() {
        assert_eq!(float_token("abc def 2.75"), Some(2.75));
        assert_eq!(float_token(" 3.5 ms"), Some(3.5));
    }

    #[test]
    fn test_float_token_none_when_no_number() {
        assert_eq!(float_token("took a while"), None);
        assert_eq!(float_token(""), None);
    }
}
