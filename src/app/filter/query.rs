//! Filter state to query string codec.
//!
//! The address carries two optional parameters:
//!
//! - `search`: the title search text, percent-encoded.
//! - `tags`: active tags joined with `,`.
//!
//! A tag is escaped (`%` and `,`) before joining and the joined list is
//! percent-encoded again as a query value, so a tag that itself contains a comma
//! still decodes to a single tag. Plain tags keep readable links such as
//! `?search=tuner&tags=sql,performance`.

use super::state::FilterState;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

pub const SEARCH_PARAM: &str = "search";
pub const TAGS_PARAM: &str = "tags";
pub const TAG_SEPARATOR: char = ',';

/// Characters escaped in a query value.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Like [`QUERY_VALUE`] but keeps the tag separator readable.
const TAG_LIST_VALUE: &AsciiSet = &QUERY_VALUE.remove(b',');

/// Escapes applied to a single tag before joining.
const TAG_ESCAPES: &AsciiSet = &CONTROLS.add(b'%').add(b',');

/// Serialise `state` into a query string without the leading `?`.
///
/// Empty search text and an empty tag list are omitted, so the default state
/// encodes to `""`.
pub fn encode(state: &FilterState) -> String {
    let mut pairs = Vec::with_capacity(2);

    if !state.search_text.is_empty() {
        pairs.push(format!(
            "{}={}",
            SEARCH_PARAM,
            utf8_percent_encode(&state.search_text, QUERY_VALUE)
        ));
    }

    if !state.active_tags().is_empty() {
        let separator = TAG_SEPARATOR.to_string();
        let joined = state
            .active_tags()
            .iter()
            .map(|tag| utf8_percent_encode(tag, TAG_ESCAPES).to_string())
            .collect::<Vec<_>>()
            .join(separator.as_str());
        pairs.push(format!(
            "{}={}",
            TAGS_PARAM,
            utf8_percent_encode(&joined, TAG_LIST_VALUE)
        ));
    }

    pairs.join("&")
}

/// Parse a query string (with or without the leading `?`) into a filter state.
///
/// Unknown parameters are ignored and only the first `search`/`tags` occurrence
/// counts. Malformed input never fails: empty tag segments are dropped, invalid
/// escapes decode lossily, and tags are lower-cased and de-duplicated.
pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut search: Option<String> = None;
    let mut tags: Option<String> = None;

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            SEARCH_PARAM if search.is_none() => search = Some(value.into_owned()),
            TAGS_PARAM if tags.is_none() => tags = Some(value.into_owned()),
            _ => {}
        }
    }

    let tags = tags.unwrap_or_default();
    let decoded_tags = tags
        .split(TAG_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned());

    FilterState::new(search.unwrap_or_default(), decoded_tags)
}

/// Extract the query portion from whatever the user pasted as an address.
///
/// Accepts a full URL (`https://host/prompts?search=x#top`), a path with a
/// query (`/prompts?search=x`), a bare `?search=x`, or just `search=x`.
pub fn query_from_address(address: &str) -> String {
    let address = address.trim();

    if let Ok(url) = url::Url::parse(address) {
        if url.has_host() || url.query().is_some() {
            return url.query().unwrap_or_default().to_string();
        }
    }

    let without_fragment = address.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((_, query)) => query.to_string(),
        None if without_fragment.contains('=') => without_fragment.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_state_encodes_to_empty_query() {
        assert_eq!(encode(&FilterState::default()), "");
    }

    #[test]
    fn test_search_only() {
        let state = FilterState::new("sql tuner", Vec::<String>::new());
        assert_eq!(encode(&state), "search=sql%20tuner");
    }

    #[test]
    fn test_tags_only_keep_readable_separator() {
        let state = FilterState::new("", ["refactor", "js"]);
        assert_eq!(encode(&state), "tags=refactor,js");
    }

    #[test]
    fn test_search_and_tags() {
        let state = FilterState::new("helper", ["code review"]);
        assert_eq!(encode(&state), "search=helper&tags=code%20review");
    }

    #[test]
    fn test_comma_inside_tag_is_escaped() {
        let state = FilterState::new("", ["a,b", "c"]);
        let query = encode(&state);
        assert_eq!(query, "tags=a%252Cb,c");
        assert_eq!(decode(&query).active_tags(), ["a,b", "c"]);
    }

    #[test]
    fn test_decode_accepts_leading_question_mark() {
        let state = decode("?search=tuner&tags=sql");
        assert_eq!(state.search_text, "tuner");
        assert_eq!(state.active_tags(), ["sql"]);
    }

    #[test]
    fn test_decode_plus_as_space() {
        assert_eq!(decode("search=sql+tuner").search_text, "sql tuner");
    }

    #[test]
    fn test_decode_tolerates_malformed_tags() {
        let state = decode("tags=,,SQL,,sql,%ZZ");
        assert_eq!(state.active_tags(), ["sql", "%zz"]);
    }

    #[test]
    fn test_decode_ignores_unknown_and_repeated_params() {
        let state = decode("page=2&search=first&search=second");
        assert_eq!(state.search_text, "first");
        assert!(state.active_tags().is_empty());
    }

    #[test]
    fn test_decode_literal_comma_separated_tags() {
        let state = decode("tags=refactor%2Cjs");
        assert_eq!(state.active_tags(), ["refactor", "js"]);
    }

    #[test]
    fn test_query_from_address_variants() {
        assert_eq!(
            query_from_address("https://example.com/prompts?search=x&tags=a#top"),
            "search=x&tags=a"
        );
        assert_eq!(query_from_address("https://example.com/prompts"), "");
        assert_eq!(query_from_address("/prompts?tags=sql"), "tags=sql");
        assert_eq!(query_from_address("  ?search=y  "), "search=y");
        assert_eq!(query_from_address("search=z"), "search=z");
        assert_eq!(query_from_address("garbage"), "");
    }
}
