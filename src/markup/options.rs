//! Tolerant ("dirty") JSON options of tool and extension calls.
//!
//! Options may be written like `{title: 'Hello', limit: 5}`: keys don't need
//! quotes and strings may use single quotes.

use crate::debug;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Options passed to a tool or extension.
///
/// Never holds an empty string value; `false`, `0` and `"0"` are kept.
pub type OptionsMap = serde_json::Map<String, Value>;

/// A bare key right after `{` or `,`.
static RE_BARE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([{,])\s*(\w+)\s*:").unwrap());

/// Decode an options payload.
///
/// Steps, in order: single quotes become double quotes, bare keys get quoted,
/// the result is decoded as strict JSON. A payload that still isn't a JSON
/// object yields empty options.
pub fn parse_options(raw: &str) -> OptionsMap {
    if raw.trim().is_empty() {
        return OptionsMap::new();
    }

    let quoted = raw.replace('\'', "\"");
    let json = RE_BARE_KEY.replace_all(&quoted, r#"${1}"${2}":"#);

    match serde_json::from_str::<Value>(&json) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .filter(|(_, value)| value.as_str() != Some(""))
            .collect(),
        Ok(other) => {
            debug!("options"; "expected an object, got `{other}`");
            OptionsMap::new()
        }
        Err(err) => {
            debug!("options"; "cannot decode `{raw}`: {err}");
            OptionsMap::new()
        }
    }
}

/// Escape a value for use inside a double-quoted options string.
///
/// Quotes get a backslash; line breaks become spaces.
pub fn json_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_options_dirty() {
        let options = parse_options("{key: 'v', n: 0, flag: false, empty: ''}");

        assert_eq!(options.len(), 3);
        assert_eq!(options.get("key"), Some(&json!("v")));
        assert_eq!(options.get("n"), Some(&json!(0)));
        assert_eq!(options.get("flag"), Some(&json!(false)));
        assert!(!options.contains_key("empty"));
    }

    #[test]
    fn test_parse_options_keeps_string_zero() {
        let options = parse_options(r#"{a: "0", b: null}"#);
        assert_eq!(options.get("a"), Some(&json!("0")));
        assert_eq!(options.get("b"), Some(&Value::Null));
    }

    #[test]
    fn test_parse_options_strict_json() {
        let options = parse_options(r#"{"title": "Hello", "limit": 5}"#);
        assert_eq!(options.get("title"), Some(&json!("Hello")));
        assert_eq!(options.get("limit"), Some(&json!(5)));
    }

    #[test]
    fn test_parse_options_spaces_around_keys() {
        let options = parse_options("{ width : 300 ,height:200 }");
        assert_eq!(options.get("width"), Some(&json!(300)));
        assert_eq!(options.get("height"), Some(&json!(200)));
    }

    #[test]
    fn test_parse_options_url_value() {
        let options = parse_options("{link: 'https://example.com/a'}");
        assert_eq!(options.get("link"), Some(&json!("https://example.com/a")));
    }

    #[test]
    fn test_parse_options_malformed() {
        assert!(parse_options("{key: 'unterminated}").is_empty());
        assert!(parse_options("not json at all").is_empty());
        assert!(parse_options("{a: 1,}").is_empty());
    }

    #[test]
    fn test_parse_options_not_an_object() {
        assert!(parse_options("[1, 2]").is_empty());
        assert!(parse_options("'text'").is_empty());
    }

    #[test]
    fn test_parse_options_empty() {
        assert!(parse_options("").is_empty());
        assert!(parse_options("  ").is_empty());
        assert!(parse_options("{}").is_empty());
    }

    #[test]
    fn test_json_escape() {
        assert_eq!(json_escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(json_escape("it's"), r"it\'s");
        assert_eq!(json_escape("two\r\nlines"), "two  lines");
        assert_eq!(json_escape("plain"), "plain");
    }

    #[test]
    fn test_escaped_value_survives_decoding() {
        let value = format!("\"{}\"", json_escape("it's \"quoted\"\nhere"));
        let options = parse_options(&format!("{{title: {value}}}"));
        assert_eq!(options.get("title"), Some(&json!("it\"s \"quoted\" here")));
    }
}
