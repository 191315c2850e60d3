//! Tag list extraction.

use super::FieldMap;
use regex::Regex;
use std::sync::LazyLock;

/// Field holding the page's tags.
pub const TAGS_KEY: &str = "tags";

static RE_HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Split the `tags` field into trimmed items with any HTML stripped.
///
/// Returns an empty list when the field is missing.
pub fn extract_tags(fields: &FieldMap, separator: &str) -> Vec<String> {
    let Some(value) = fields.get(TAGS_KEY) else {
        return Vec::new();
    };

    value
        .split(separator)
        .map(|tag| RE_HTML_TAG.replace_all(tag, "").trim().to_owned())
        .filter(|tag| !tag.is_empty())
        .collect()
}
