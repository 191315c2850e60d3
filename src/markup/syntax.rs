//! Placeholder scanning.
//!
//! A template is split into literal text and placeholders of the form
//! `{open}{keyword}:{body}{close}`:
//!
//! | Placeholder | Token |
//! |-------------|-------|
//! | `{{site:sitename}}` | `SiteVar("sitename")` |
//! | `{{page:title}}` | `PageVar("title")` |
//! | `{{tool:Nav {depth: 2}}}` | `ToolCall { name: "Nav", options: Some("{depth: 2}") }` |
//! | `{{ext:Gallery}}` | `ExtensionCall { name: "Gallery", options: None }` |
//! | `{{include:elements/nav.html}}` | `Include("elements/nav.html")` |
//!
//! Options are brace-balanced, so they may embed variable placeholders:
//! `{{tool:Img {file: {{page:image}}}}}`. Anything that doesn't form a complete
//! placeholder stays literal text.

use crate::config::MarkupConfig;
use regex::Regex;

/// A placeholder found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderToken<'a> {
    SiteVar(&'a str),
    PageVar(&'a str),
    ToolCall {
        name: &'a str,
        options: Option<&'a str>,
    },
    ExtensionCall {
        name: &'a str,
        options: Option<&'a str>,
    },
    Include(&'a str),
}

impl PlaceholderToken<'_> {
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::SiteVar(_) | Self::PageVar(_))
    }
}

/// A piece of a scanned template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Placeholder {
        token: PlaceholderToken<'a>,
        /// The placeholder as written, delimiters included.
        raw: &'a str,
    },
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Site,
    Page,
    Tool,
    Extension,
    Include,
}

/// Placeholder syntax compiled from `[markup]`.
#[derive(Debug, Clone)]
pub struct MarkupSyntax {
    close: String,
    keywords: [(String, Kind); 5],
    /// `{open}(kw|kw|...):`
    start: Regex,
}

impl MarkupSyntax {
    pub fn new(config: &MarkupConfig) -> Self {
        let keywords = [
            (config.site.clone(), Kind::Site),
            (config.page.clone(), Kind::Page),
            (config.tool.clone(), Kind::Tool),
            (config.extension.clone(), Kind::Extension),
            (config.include.clone(), Kind::Include),
        ];
        let alternatives = keywords
            .iter()
            .map(|(keyword, _)| regex::escape(keyword))
            .collect::<Vec<_>>()
            .join("|");
        let start = Regex::new(&format!(
            "{}({alternatives}):",
            regex::escape(&config.open)
        ))
        .unwrap();

        Self {
            close: config.close.clone(),
            keywords,
            start,
        }
    }

    /// Split `input` into text and placeholders, left to right.
    pub fn scan<'a>(&self, input: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut text_start = 0;
        let mut search = 0;

        while let Some(caps) = self.start.captures_at(input, search) {
            let (Some(whole), Some(keyword)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            let Some(kind) = self.kind_of(keyword.as_str()) else {
                search = whole.end();
                continue;
            };

            match self.parse_body(kind, input, whole.end()) {
                Some((token, end)) => {
                    if whole.start() > text_start {
                        segments.push(Segment::Text(&input[text_start..whole.start()]));
                    }
                    segments.push(Segment::Placeholder {
                        token,
                        raw: &input[whole.start()..end],
                    });
                    text_start = end;
                    search = end;
                }
                None => search = whole.end(),
            }
        }

        if text_start < input.len() {
            segments.push(Segment::Text(&input[text_start..]));
        }
        segments
    }

    /// Rebuild `input`, replacing the placeholders `f` resolves.
    ///
    /// Placeholders `f` answers `None` for are kept as written.
    pub fn substitute<E>(
        &self,
        input: &str,
        mut f: impl FnMut(&PlaceholderToken<'_>) -> Result<Option<String>, E>,
    ) -> Result<String, E> {
        let mut output = String::with_capacity(input.len());
        for segment in self.scan(input) {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Placeholder { token, raw } => match f(&token)? {
                    Some(replacement) => output.push_str(&replacement),
                    None => output.push_str(raw),
                },
            }
        }
        Ok(output)
    }

    fn kind_of(&self, keyword: &str) -> Option<Kind> {
        self.keywords
            .iter()
            .find(|(candidate, _)| candidate == keyword)
            .map(|(_, kind)| *kind)
    }

    /// Parse the body starting at `pos`, returning the token and the end of
    /// the closing delimiter.
    fn parse_body<'a>(
        &self,
        kind: Kind,
        input: &'a str,
        pos: usize,
    ) -> Option<(PlaceholderToken<'a>, usize)> {
        match kind {
            Kind::Site | Kind::Page => {
                let name_end = take_name(input, pos)?;
                let end = self.expect_close(input, name_end)?;
                let name = &input[pos..name_end];
                let token = match kind {
                    Kind::Site => PlaceholderToken::SiteVar(name),
                    _ => PlaceholderToken::PageVar(name),
                };
                Some((token, end))
            }
            Kind::Tool | Kind::Extension => {
                let name_end = take_name(input, pos)?;
                let name = &input[pos..name_end];

                let mut cursor = skip_whitespace(input, name_end);
                let mut options = None;
                if input[cursor..].starts_with('{') {
                    let options_end = take_braced(input, cursor)?;
                    options = Some(&input[cursor..options_end]);
                    cursor = skip_whitespace(input, options_end);
                }
                let end = self.expect_close(input, cursor)?;

                let token = match kind {
                    Kind::Tool => PlaceholderToken::ToolCall { name, options },
                    _ => PlaceholderToken::ExtensionCall { name, options },
                };
                Some((token, end))
            }
            Kind::Include => {
                let len = input[pos..].find(&self.close)?;
                let path = input[pos..pos + len].trim();
                if path.is_empty() || path.contains('\n') {
                    return None;
                }
                Some((PlaceholderToken::Include(path), pos + len + self.close.len()))
            }
        }
    }

    fn expect_close(&self, input: &str, pos: usize) -> Option<usize> {
        input[pos..]
            .starts_with(&self.close)
            .then(|| pos + self.close.len())
    }
}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// End of a non-empty `[\w.-]+` run starting at `pos`.
fn take_name(input: &str, pos: usize) -> Option<usize> {
    let len = input[pos..]
        .find(|c: char| !is_name_char(c))
        .unwrap_or(input.len() - pos);
    (len > 0).then_some(pos + len)
}

fn skip_whitespace(input: &str, pos: usize) -> usize {
    let len = input[pos..]
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(input.len() - pos);
    pos + len
}

/// End (exclusive) of the balanced `{...}` starting at `pos`.
///
/// Braces inside quoted strings don't count.
fn take_braced(input: &str, pos: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote = None;
    let mut escaped = false;

    for (offset, c) in input[pos..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}
