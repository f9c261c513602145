//! Query string access with lenient numeric parsing

use axum::extract::Query;
use axum::http::Uri;

/// Decoded query string pairs in their original order
#[derive(Debug, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode the query string of a URI; undecodable strings read as empty
    pub fn from_uri(uri: &Uri) -> Self {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Self { pairs }
    }

    /// First value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Best-effort integer for `key`, `None` when absent or unparseable
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(parse_int)
    }
}

/// Parse a leading integer the forgiving way
///
/// Leading whitespace and a single sign are accepted, and parsing stops at the
/// first non-digit, so `"12abc"` reads as 12 and `"2.9"` as 2. No digits, or a
/// value outside `i64`, yields `None`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_plain() {
        assert_eq!(parse_int("50"), Some(50));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("  12"), Some(12));
    }

    #[test]
    fn test_parse_int_trailing_garbage() {
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("2.9"), Some(2));
    }

    #[test]
    fn test_parse_int_rejects() {
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("99999999999999999999"), None);
    }

    #[test]
    fn test_query_params_first_value_wins() {
        let uri: Uri = "/agents?limit=2&limit=9&q=a%20b".parse().unwrap();
        let params = QueryParams::from_uri(&uri);
        assert_eq!(params.get("limit"), Some("2"));
        assert_eq!(params.int("limit"), Some(2));
        assert_eq!(params.get("q"), Some("a b"));
        assert_eq!(params.get("offset"), None);
    }

    #[test]
    fn test_query_params_without_query() {
        let uri: Uri = "/agents".parse().unwrap();
        let params = QueryParams::from_uri(&uri);
        assert_eq!(params.get("limit"), None);
        assert_eq!(params.int("limit"), None);
    }
}
