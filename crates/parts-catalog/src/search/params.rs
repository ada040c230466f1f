//! Navigation parameters (URL query strings).
//!
//! The list page keeps its state in `?page=N&search=TEXT` so reloading or
//! sharing a URL reproduces the view. Malformed values are never errors:
//! they degrade to defaults and are clamped later.

use crate::ids::ProductId;

/// Query-string key for the page number.
pub const PAGE_PARAM: &str = "page";
/// Query-string key for the search text.
pub const SEARCH_PARAM: &str = "search";
/// Query-string key for the product id on the detail page.
pub const ID_PARAM: &str = "id";

/// Split a query string into decoded key/value pairs.
///
/// A leading `?` or `#` is ignored; keys without `=` get an empty value.
pub fn parse_query_string(qs: &str) -> Vec<(String, String)> {
    let qs = qs.trim_start_matches(['?', '#']);

    qs.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// First value for `name` in a query string.
pub fn get_param(qs: &str, name: &str) -> Option<String> {
    parse_query_string(qs)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// Parse a page parameter the way a lenient integer parser would.
///
/// Leading whitespace, an optional sign and leading digits are honoured
/// (`"3abc"` is 3). Missing, empty, zero or non-numeric input yields 1.
/// Negative values are returned as-is so the caller can clamp them.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };

    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = &digits[..digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len())];
    if digits.is_empty() {
        return 1;
    }

    let magnitude = digits
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));

    match (negative, magnitude) {
        (_, 0) => 1,
        (true, m) => -m,
        (false, m) => m,
    }
}

/// Percent-encode a query-string component (`+` for spaces).
pub fn encode_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char)
            }
            b' ' => result.push('+'),
            _ => result.push_str(&format!("%{:02X}", byte)),
        }
    }
    result
}

/// Decode a percent-encoded query-string component.
///
/// Invalid escapes are kept literally; invalid UTF-8 is replaced.
pub fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() && is_hex_pair(&bytes[i + 1..i + 3]) => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap_or("00");
                out.push(u8::from_str_radix(hex, 16).unwrap_or(0));
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn is_hex_pair(pair: &[u8]) -> bool {
    pair.len() == 2 && pair.iter().all(u8::is_ascii_hexdigit)
}

/// Parameters of the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailParams {
    pub id: Option<ProductId>,
}

impl DetailParams {
    /// Read the product id from the query string, falling back to the
    /// fragment (`#id=...`).
    pub fn from_location(query: &str, fragment: &str) -> Self {
        let id = get_param(query, ID_PARAM)
            .filter(|id| !id.is_empty())
            .or_else(|| get_param(fragment, ID_PARAM).filter(|id| !id.is_empty()))
            .map(ProductId::from);

        Self { id }
    }

    /// Split a full URL (or path) into query and fragment and read the id.
    pub fn from_url(url: &str) -> Self {
        let (before_fragment, fragment) = url.split_once('#').unwrap_or((url, ""));
        let query = before_fragment
            .split_once('?')
            .map(|(_, q)| q)
            .unwrap_or("");
        Self::from_location(query, fragment)
    }

    /// Query string linking to `id`'s detail page.
    pub fn link(id: &ProductId) -> String {
        format!("{}={}", ID_PARAM, encode_component(id.as_str()))
    }
}
