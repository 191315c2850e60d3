//! Text file parser.
//!
//! A content file is a list of `key: value` blocks separated by lines made of
//! the block separator only:
//!
//! ```text
//! title: Hello
//! ----
//! text: First paragraph.
//!
//! Second paragraph.
//! ----
//! tags: rust, web
//! ```
//!
//! A separator line only splits when the next non-blank line starts with a key
//! directly followed by the pair separator, so a value may contain lines like
//! `---` of its own.

use super::{FieldMap, ParseError};
use crate::config::ParseConfig;
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

/// Longest excerpt of an offending block quoted in a `ParseError`.
const SNIPPET_LEN: usize = 40;

/// Compiled separator patterns for one `ParseConfig`.
pub struct TextFileParser {
    pair_separator: String,
    /// A line made of one or more block separators and trailing whitespace.
    separator_line: Regex,
    /// A line starting a new field.
    key_line: Regex,
}

/// A whole field key.
static RE_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w.\-]+$").unwrap());

impl TextFileParser {
    pub fn new(config: &ParseConfig) -> Self {
        let block = regex::escape(&config.block_separator);
        let pair = regex::escape(&config.pair_separator);

        Self {
            pair_separator: config.pair_separator.clone(),
            separator_line: Regex::new(&format!(r"^(?:{block})+\s*$")).unwrap(),
            key_line: Regex::new(&format!(r"^[\w.\-]+{pair}")).unwrap(),
        }
    }

    /// Parse raw content into fields.
    ///
    /// Keys are made of word characters, `.` and `-`. A later occurrence of a
    /// key overwrites the earlier value.
    pub fn parse(&self, content: &str) -> Result<FieldMap, ParseError> {
        let content = normalize_line_breaks(content);
        if content.trim().is_empty() {
            return Ok(FieldMap::new());
        }

        let mut fields = FieldMap::new();
        for (index, block) in self.split_blocks(&content).iter().enumerate() {
            let (key, value) = block.split_once(&self.pair_separator).ok_or_else(|| {
                ParseError::Format {
                    block: index + 1,
                    snippet: snippet(block),
                }
            })?;

            let key = key.trim();
            if !RE_KEY.is_match(key) {
                return Err(ParseError::InvalidKey {
                    block: index + 1,
                    key: key.to_owned(),
                });
            }
            fields.insert(key, value.trim());
        }

        Ok(fields)
    }

    /// Split normalized content into raw `key: value` blocks.
    fn split_blocks(&self, content: &str) -> Vec<String> {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut blocks = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            // The first line can't close a block
            if i > 0 && self.separator_line.is_match(lines[i]) {
                let next = (i + 1..lines.len()).find(|&j| !lines[j].trim().is_empty());
                if let Some(j) = next
                    && self.key_line.is_match(lines[j])
                {
                    blocks.push(current.join("\n"));
                    current.clear();
                    i = j;
                    continue;
                }
            }
            current.push(lines[i]);
            i += 1;
        }
        blocks.push(current.join("\n"));

        blocks
    }
}

/// Load a content file and parse it into fields.
pub fn parse_text_file(path: &Path, config: &ParseConfig) -> Result<FieldMap, ParseError> {
    let content =
        fs::read_to_string(path).map_err(|err| ParseError::Io(path.to_path_buf(), err))?;
    TextFileParser::new(config).parse(&content)
}

/// Convert `\r\n` and lone `\r` to `\n`.
fn normalize_line_breaks(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

fn snippet(block: &str) -> String {
    let line = block.trim().lines().next().unwrap_or_default();
    line.chars().take(SNIPPET_LEN).collect()
}
