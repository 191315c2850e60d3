//! Markdown rendering of multi-line fields.

use super::{FieldMap, ParseError, parse_text_file};
use crate::config::ParseConfig;
use pulldown_cmark::{Options, Parser, html};
use std::path::Path;

/// Render every multi-line value as HTML.
///
/// Single-line values (titles, dates, slugs) pass through untouched so they
/// never get wrapped in `<p>`.
pub fn render_fields(fields: FieldMap) -> FieldMap {
    fields.map_values(|value| {
        if value.contains('\n') {
            markdown_to_html(&value)
        } else {
            value
        }
    })
}

/// Load a content file, then render its multi-line fields.
pub fn markdown_file(path: &Path, config: &ParseConfig) -> Result<FieldMap, ParseError> {
    let fields = parse_text_file(path, config)?;
    Ok(if config.markdown {
        render_fields(fields)
    } else {
        fields
    })
}

fn markdown_to_html(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_HEADING_ATTRIBUTES;

    let mut output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut output, Parser::new_ext(text, options));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_single_line_untouched() {
        let fields: FieldMap = [("title", "*Not* emphasised"), ("url", "/blog")]
            .into_iter()
            .collect();
        let rendered = render_fields(fields.clone());
        assert_eq!(rendered, fields);
    }

    #[test]
    fn test_multiline_rendered() {
        let fields: FieldMap = [("text", "# Heading\nSome *text*.")].into_iter().collect();
        let rendered = render_fields(fields);
        assert_eq!(
            rendered.get("text"),
            Some("<h1>Heading</h1>\n<p>Some <em>text</em>.</p>\n")
        );
    }

    #[test]
    fn test_multiline_with_surrounding_whitespace() {
        let fields: FieldMap = [("text", "\n one\ntwo\n")].into_iter().collect();
        let rendered = render_fields(fields);
        assert_eq!(rendered.get("text"), Some("<p>one\ntwo</p>\n"));
    }

    #[test]
    fn test_render_keeps_order() {
        let fields: FieldMap = [("z", "a\nb"), ("a", "single")].into_iter().collect();
        let rendered = render_fields(fields);
        assert_eq!(rendered.keys().collect::<Vec<_>>(), ["z", "a"]);
    }

    #[test]
    fn test_markdown_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.txt");
        fs::write(&path, "title: Hi\n-\ntext: line one\n\nline two").unwrap();

        let fields = markdown_file(&path, &ParseConfig::default()).unwrap();
        assert_eq!(fields.get("title"), Some("Hi"));
        assert_eq!(fields.get("text"), Some("<p>line one</p>\n<p>line two</p>\n"));

        let config = ParseConfig {
            markdown: false,
            ..ParseConfig::default()
        };
        let fields = markdown_file(&path, &config).unwrap();
        assert_eq!(fields.get("text"), Some("line one\n\nline two"));
    }
}
