//! Plain-text extraction from HTML fragments

use crate::types::JsonValue;
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

/// Non-greedy angle-bracket tag matcher
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

/// Concatenate every text node of an HTML fragment
///
/// Tags are dropped without inserting separators, so `<p>a</p><p>b</p>`
/// yields `"ab"`. Entities are decoded.
pub fn html_to_plain_text(html: &str) -> String {
    Html::parse_fragment(html).root_element().text().collect()
}

/// Text nodes with surrounding whitespace trimmed, blanks removed, joined by one space
fn stripped_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the note of the first evaluation as plain text
///
/// `evaluations` is the raw field from a candidate record. Anything other
/// than a non-empty array yields `None`; a first entry without a string
/// `content` is treated as empty content.
pub fn extract_evaluation_message(evaluations: &JsonValue) -> Option<String> {
    let first = evaluations.as_array()?.first()?;
    let content = first
        .get("content")
        .and_then(JsonValue::as_str)
        .unwrap_or_default();
    Some(stripped_text(content))
}

/// Remove anything that looks like a tag, leaving the rest untouched
///
/// Unlike [`html_to_plain_text`] no entity decoding happens here.
pub fn strip_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").into_owned()
}

/// Decode HTML character references (`&amp;`, `&#7877;`, ...)
///
/// Only references are touched; anything resembling markup is kept as text.
pub fn unescape_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
