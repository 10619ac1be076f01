//! Response header access.

use std::str::FromStr;

use reqwest::header::HeaderMap;

/// Folds a header name to the form used for lookups.
pub fn fold_header_name(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Returns a response header's value, or an empty string when it is absent
/// or not valid visible ASCII.
///
/// ## Examples
///
/// ```
/// use reqwest::header::{HeaderMap, HeaderValue};
/// use restgen_runtime::header_value;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("etag", HeaderValue::from_static("\"v1\""));
/// assert_eq!(header_value(&headers, "ETag"), "\"v1\"");
/// assert_eq!(header_value(&headers, "Missing"), "");
/// ```
pub fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(fold_header_name(name).as_str())
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Parses a response header into `T`, falling back to `T::default()` when
/// the header is absent or does not parse.
pub fn parse_header_value<T>(headers: &HeaderMap, name: &str) -> T
where
    T: FromStr + Default,
{
    header_value(headers, name).parse().unwrap_or_default()
}
