//! Template markup: placeholders, options, tools, extensions and includes.
//!
//! # Architecture
//!
//! ```text
//!                       ┌──────────── Registry ────────────┐
//!                       │  tools            extensions     │
//!                       └────────▲──────────────▲──────────┘
//!                                │              │
//! template ─► MarkupSyntax::scan ─► Engine passes ─► Rendered { output, assets }
//!                                │
//!                  parse_options (dirty JSON)
//! ```

mod assets;
mod context;
mod engine;
mod error;
mod options;
mod registry;
mod syntax;

pub use assets::HeaderAssetSet;
pub use context::{PageProvider, SiteProvider, TemplateContext};
pub use engine::{Engine, Rendered};
pub use error::RenderError;
pub use options::{OptionsMap, json_escape, parse_options};
pub use registry::{Extension, Registry, Tool};
pub use syntax::{MarkupSyntax, PlaceholderToken, Segment};
