use crate::types::RouteParams;
use memchr::memchr;

/// A location split into its path and raw query string. Any `#fragment` is
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
}

pub fn split_location(location: &str) -> Location<'_> {
    let without_fragment = match memchr(b'#', location.as_bytes()) {
        Some(idx) => &location[..idx],
        None => location,
    };

    match memchr(b'?', without_fragment.as_bytes()) {
        Some(idx) => Location {
            path: &without_fragment[..idx],
            query: Some(&without_fragment[idx + 1..]),
        },
        None => Location {
            path: without_fragment,
            query: None,
        },
    }
}

/// Parses `key=value` pairs separated by `&`. Later duplicates overwrite
/// earlier ones; a bare key maps to the empty string.
#[tracing::instrument(level = "trace", skip(query), fields(query_len = query.len() as u64))]
pub fn parse_query(query: &str) -> RouteParams {
    let mut params = RouteParams::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = match memchr(b'=', pair.as_bytes()) {
            Some(idx) => (&pair[..idx], &pair[idx + 1..]),
            None => (pair, ""),
        };
        if key.is_empty() {
            continue;
        }
        params.insert(decode_component(key), decode_component(value));
    }
    params
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_path_query_and_fragment() {
        let location = split_location("/items/5?tab=info#top");
        assert_eq!(location.path, "/items/5");
        assert_eq!(location.query, Some("tab=info"));

        let bare = split_location("/items#top");
        assert_eq!(bare.path, "/items");
        assert_eq!(bare.query, None);
    }

    #[test]
    fn parses_pairs_with_decoding() {
        let params = parse_query("q=hello+world&name=caf%C3%A9&flag&=skipped");
        assert_eq!(params.get("q").map(String::as_str), Some("hello world"));
        assert_eq!(params.get("name").map(String::as_str), Some("café"));
        assert_eq!(params.get("flag").map(String::as_str), Some(""));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn later_duplicate_keys_win() {
        let params = parse_query("a=1&a=2");
        assert_eq!(params.get("a").map(String::as_str), Some("2"));
    }
}
