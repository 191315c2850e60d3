//! `[render]` and `[files]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[render]` section in tabula.toml - template rendering.
///
/// # Example
/// ```toml
/// [render]
/// max_include_depth = 8
/// debug = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Deepest chain of nested includes before rendering is aborted.
    #[serde(default = "defaults::render::max_include_depth")]
    #[educe(Default = defaults::render::max_include_depth())]
    pub max_include_depth: usize,

    /// Log matched tools, extensions and includes.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub debug: bool,
}

/// `[files]` section in tabula.toml - file name detection.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    /// Extensions treated as file names, joined by `[parse].list_separator`.
    #[serde(default = "defaults::files::allowed_types")]
    #[educe(Default = defaults::files::allowed_types())]
    pub allowed_types: String,
}
