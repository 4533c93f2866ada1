/// Grammar-Based Extractor
///
/// This module decomposes a connection string into named components using a
/// single fixed grammar, anchored start-to-end:
///
/// ```text
/// dialect "://" [ username [ ":" password ] "@" ] host [ ":" port ]
///         [ "/" database ] [ "?" params ] [ "#" fragment ]
/// ```
///
/// The extraction here is purely structural: captures are returned raw, with
/// no decoding and no interpretation. `dialect.rs` and `credentials.rs`
/// derive their views independently from the same grammar, so the two always
/// agree on token and host boundaries.
use once_cell::sync::Lazy;
use regex::Regex;

// Host additionally excludes `?` and `#` so the query and fragment tails
// stay separable; it may be empty, so malformed input still matches and
// host-emptiness surfaces as data rather than a parse failure.
static CONNECTION_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<dialect>[\w:]+)://(?:(?P<username>[^:@]*)(?::(?P<password>[^@]*))?@)?(?P<host>\[[^\]]*\]|[^:/?#]*)(?::(?P<port>\d+))?(?:/(?P<database>[\w.-]*))?(?:\?(?P<params>[^#]*))?(?:#.*)?$",
    )
    .unwrap()
});

/// Raw structural components of a connection URI.
///
/// All fields are verbatim captures from the grammar match. Absent optional
/// components are `None`; an empty capture (e.g. `postgres://@host`) is
/// `Some("")` for optional fields and `""` for `host`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedComponents {
    /// Dialect token, possibly compound (`jdbc:clickhouse`)
    pub dialect: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Bracketed literal (IPv6) or a bare host; may be empty
    pub host: String,
    /// Raw digit run; numeric conversion happens during extraction
    pub port: Option<String>,
    pub database: Option<String>,
    /// Raw query-parameter string, fragment excluded
    pub params: Option<String>,
}

/// Matches a connection string against the grammar.
///
/// Returns `None` if the input does not conform at all; callers must treat
/// that as a hard failure, not as a default value.
pub fn parse_components(uri: &str) -> Option<ParsedComponents> {
    let caps = CONNECTION_URI.captures(uri)?;

    let capture = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

    Some(ParsedComponents {
        dialect: caps["dialect"].to_string(),
        username: capture("username"),
        password: capture("password"),
        host: caps["host"].to_string(),
        port: capture("port"),
        database: capture("database"),
        params: capture("params"),
    })
}

/// Percent-decodes a component, falling back to the raw value when the
/// decoded bytes are not valid UTF-8. Decode failures never fail the parse.
pub fn decode_component(raw: &str) -> String {
    match percent_encoding::percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Strict variant of [`decode_component`]: `None` on invalid UTF-8.
/// Query-parameter parsing uses this to detect malformed parameter strings.
pub(crate) fn decode_strict(raw: &str) -> Option<String> {
    percent_encoding::percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
