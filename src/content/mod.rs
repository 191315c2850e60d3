//! Content files: parsing, markdown rendering and field helpers.
//!
//! # Pipeline
//!
//! ```text
//! page.txt ──► TextFileParser ──► FieldMap ──► render_fields() ──► Page / Site data
//!                                    │
//!                                    └──► extract_tags()
//! ```

mod error;
mod fields;
mod markdown;
mod parser;
mod tags;

pub use error::ParseError;
pub use fields::FieldMap;
pub use markdown::{markdown_file, render_fields};
pub use parser::{TextFileParser, parse_text_file};
pub use tags::{TAGS_KEY, extract_tags};
