use std::borrow::Cow;
use std::collections::HashMap;

/// Return the raw query text of a URI, without the leading `?` and without any
/// fragment. `None` when the URI has no `?`.
pub fn query_component(uri: &str) -> Option<&str> {
    let without_fragment = match uri.find('#') {
        Some(idx) => &uri[..idx],
        None => uri,
    };
    without_fragment
        .find('?')
        .map(|idx| &without_fragment[idx + 1..])
}

/// Parse query parameters from a URI string
///
/// Keys and values are form-decoded (`+` is a space, then percent-decoding).
/// When a key repeats, the first occurrence wins.
///
/// # Example
/// ```
/// use typed_params::core::query_params::parse_query_params;
///
/// let params = parse_query_params("/path?user=john&page=2&page=3");
/// assert_eq!(params.get("user"), Some(&"john".to_string()));
/// assert_eq!(params.get("page"), Some(&"2".to_string()));
/// ```
pub fn parse_query_params(uri: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    let Some(query) = query_component(uri) else {
        return params;
    };

    for param in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match param.find('=') {
            Some(eq_idx) => (&param[..eq_idx], &param[eq_idx + 1..]),
            // Flag parameter without value
            None => (param, ""),
        };
        params
            .entry(decode_component(key))
            .or_insert_with(|| decode_component(value));
    }

    params
}

fn decode_component(encoded: &str) -> String {
    let spaced: Cow<str> = if encoded.contains('+') {
        Cow::Owned(encoded.replace('+', " "))
    } else {
        Cow::Borrowed(encoded)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}
