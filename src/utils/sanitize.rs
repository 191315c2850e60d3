//! Safe identifier derivation.
//!
//! Turns arbitrary text into something usable as a URL segment, directory or
//! file name.

use regex::Regex;
use std::sync::LazyLock;

/// Standalone articles dropped from the text.
static RE_ARTICLES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:a|an|the)\b").unwrap());

/// Symbols spelled out before everything else becomes `_`.
const REPLACEMENTS: &[(char, &str)] = &[
    ('&', "and"),
    ('/', "-"),
    ('*', "x"),
    ('+', "and"),
    ('@', "_at_"),
];

/// Sanitize text into `[a-z0-9_.-]` (or `[a-z0-9_-]` with `remove_dots`).
///
/// Steps, in order:
/// 1. transliterate to ASCII and lowercase
/// 2. drop the words "a", "an" and "the"
/// 3. spell out `&`, `/`, `*`, `+` and `@`
/// 4. replace every other unsafe character with `_`
/// 5. strip leading dots, so the result is never a hidden file
/// 6. trim and merge runs of `_` or `-`
///
/// Keeping dots by default makes the result usable as a file name with its
/// extension. The result may be empty.
///
/// # Examples
///
/// | Input | `remove_dots` | Output |
/// |-------|---------------|--------|
/// | `The Quick & Brown/Fox` | false | `quick_and_brown-fox` |
/// | `Résumé.PDF` | false | `resume.pdf` |
/// | `Résumé.PDF` | true | `resume_pdf` |
pub fn sanitize(text: &str, remove_dots: bool) -> String {
    let ascii = deunicode::deunicode(text.trim()).to_lowercase();
    let stripped = RE_ARTICLES.replace_all(&ascii, "");

    let mut spelled = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match REPLACEMENTS.iter().find(|(symbol, _)| *symbol == c) {
            Some((_, word)) => spelled.push_str(word),
            None => spelled.push(c),
        }
    }

    let safe: String = spelled
        .chars()
        .map(|c| if is_safe_char(c, remove_dots) { c } else { '_' })
        .collect();

    let trimmed = safe
        .trim_start_matches('.')
        .trim_matches(|c: char| c == '_' || c == '-');

    merge_separator_runs(trimmed)
}

#[inline]
fn is_safe_char(c: char, remove_dots: bool) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || (c == '.' && !remove_dots)
}

/// Collapse `__` to `_` and `--` to `-`. Mixed runs like `_-` are kept.
fn merge_separator_runs(text: &str) -> String {
    let mut merged = String::with_capacity(text.len());
    let mut previous = None;
    for c in text.chars() {
        if matches!(c, '_' | '-') && previous == Some(c) {
            continue;
        }
        merged.push(c);
        previous = Some(c);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize("The Quick & Brown/Fox", false), "quick_and_brown-fox");
    }

    #[test]
    fn test_sanitize_transliterates() {
        assert_eq!(sanitize("Ünïcödé Tëxt", false), "unicode_text");
        assert_eq!(sanitize("Résumé.PDF", false), "resume.pdf");
    }

    #[test]
    fn test_sanitize_remove_dots() {
        assert_eq!(sanitize("Résumé.PDF", true), "resume_pdf");
        assert_eq!(sanitize("file.name.jpg", true), "file_name_jpg");
    }

    #[test]
    fn test_sanitize_keeps_dots() {
        assert_eq!(sanitize("file.name.jpg", false), "file.name.jpg");
    }

    #[test]
    fn test_sanitize_strips_leading_dots() {
        assert_eq!(sanitize("...hidden", false), "hidden");
        assert_eq!(sanitize(".htaccess", false), "htaccess");
    }

    #[test]
    fn test_sanitize_removes_articles() {
        assert_eq!(sanitize("An Apple a Day", false), "apple_day");
        // Only standalone words
        assert_eq!(sanitize("Theme Analysis", false), "theme_analysis");
    }

    #[test]
    fn test_sanitize_symbols() {
        assert_eq!(sanitize("C++ & C#", false), "candand_and_c");
        assert_eq!(sanitize("me@example.com", false), "me_at_example.com");
        assert_eq!(sanitize("2*3", false), "2x3");
    }

    #[test]
    fn test_sanitize_merges_runs() {
        assert_eq!(sanitize("Hello   World", false), "hello_world");
        assert_eq!(sanitize("one -- two", false), "one_-_two");
        assert_eq!(sanitize("x--y__z", false), "x-y_z");
    }

    #[test]
    fn test_sanitize_trims_separators() {
        assert_eq!(sanitize("  -_hello_-  ", false), "hello");
    }

    #[test]
    fn test_sanitize_degenerate_input() {
        assert_eq!(sanitize("", false), "");
        assert_eq!(sanitize("The", false), "");
        assert_eq!(sanitize("!!!", true), "");
    }
}
