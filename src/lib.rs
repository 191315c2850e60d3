//! Tabula - content parser and template markup engine for flat-file sites.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`content`] | `key: value` content files, markdown fields, tags |
//! | [`markup`] | Placeholder scanning and rendering, tools, extensions, includes |
//! | [`data`] | Site and page data handed to templates |
//! | [`config`] | `tabula.toml` loading and validation |
//! | [`utils`] | Name sanitizing and file name detection |

pub mod cli;
pub mod config;
pub mod content;
pub mod data;
pub mod logger;
pub mod markup;
pub mod utils;
