/// Query-Parameter Parsing
///
/// Tolerant `key=value` parsing for the raw query string captured by the
/// grammar. A malformed parameter string (one whose keys or values do not
/// survive strict percent-decoding) yields `None`; callers fall back to
/// their permissive defaults (SSL enabled, no database-name fallback) and
/// no error surfaces.
use crate::grammar;

/// Parses a raw query string into ordered key/value pairs.
///
/// Pairs are split on `&`; a pair without `=` becomes a key with an empty
/// value; empty pairs are skipped. Keys and values are strictly
/// percent-decoded; any invalid escape sequence marks the whole string
/// malformed and returns `None`.
pub fn parse_query_params(raw: &str) -> Option<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        pairs.push((grammar::decode_strict(key)?, grammar::decode_strict(value)?));
    }

    Some(pairs)
}

/// Returns the first value for `key`, preserving input order for duplicates.
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.as_str())
}
