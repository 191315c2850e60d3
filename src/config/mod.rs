//! Site configuration management for `tabula.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[site]`    | Site settings file, themes directory, fallbacks  |
//! | `[parse]`   | Content file separators, markdown rendering      |
//! | `[markup]`  | Placeholder delimiters and keywords              |
//! | `[render]`  | Include depth bound, debug logging               |
//! | `[files]`   | Extensions recognized as file names              |
//!
//! # Example
//!
//! ```toml
//! [site]
//! settings = "shared/site.txt"
//!
//! [parse]
//! block_separator = "-"
//! pair_separator = ":"
//!
//! [markup]
//! open = "{{"
//! close = "}}"
//!
//! [render]
//! max_include_depth = 16
//! ```

pub mod defaults;
mod error;
mod markup;
mod parse;
mod render;
mod site;

pub use error::ConfigError;
pub use markup::MarkupConfig;
pub use parse::ParseConfig;
pub use render::{FilesConfig, RenderConfig};
pub use site::SiteSection;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing tabula.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (set from CLI `--root`)
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Site-wide data sources
    #[serde(default)]
    pub site: SiteSection,

    /// Content file format
    #[serde(default)]
    pub parse: ParseConfig,

    /// Placeholder syntax
    #[serde(default)]
    pub markup: MarkupConfig,

    /// Rendering limits
    #[serde(default)]
    pub render: RenderConfig,

    /// File name detection
    #[serde(default)]
    pub files: FilesConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        Self::parse(content, None)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse(&content, Some(path))
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Self> {
        let config = toml::from_str(content).map_err(|err| ConfigError::toml(path, content, err))?;
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        let root = Self::normalize_path(&root);
        self.set_root(&root);
        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.site.settings = Self::normalize_path(&root.join(&self.site.settings));
        self.site.themes = Self::normalize_path(&root.join(&self.site.themes));

        if cli.verbose {
            self.render.debug = true;
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate separators and placeholder syntax
    pub fn validate(&self) -> Result<()> {
        let parse = &self.parse;
        Self::check_not_empty("[parse.block_separator]", &parse.block_separator)?;
        Self::check_not_empty("[parse.pair_separator]", &parse.pair_separator)?;
        Self::check_not_empty("[parse.list_separator]", &parse.list_separator)?;

        if parse.block_separator.chars().count() != 1 {
            bail!(ConfigError::invalid(
                "[parse.block_separator]",
                "must be a single character"
            ));
        }
        if parse.pair_separator.contains(&parse.block_separator) {
            bail!(ConfigError::invalid(
                "[parse.pair_separator]",
                "must not contain [parse.block_separator]"
            ));
        }

        let markup = &self.markup;
        Self::check_not_empty("[markup.open]", &markup.open)?;
        Self::check_not_empty("[markup.close]", &markup.close)?;
        if markup.open == markup.close {
            bail!(ConfigError::invalid("[markup.close]", "must differ from [markup.open]"));
        }

        let keywords = markup.keywords();
        for (i, (name, keyword)) in keywords.iter().enumerate() {
            let field = format!("[markup.{name}]");
            if keyword.is_empty() || !keyword.chars().all(|c| c.is_alphanumeric() || c == '_') {
                bail!(ConfigError::invalid(field, "must be a non-empty word"));
            }
            if let Some((other, _)) = keywords[..i].iter().find(|(_, k)| k == keyword) {
                bail!(ConfigError::invalid(
                    field,
                    format!("`{keyword}` is already used by [markup.{other}]")
                ));
            }
        }

        if self.render.max_include_depth == 0 {
            bail!(ConfigError::invalid("[render.max_include_depth]", "must be at least 1"));
        }

        Ok(())
    }

    fn check_not_empty(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            bail!(ConfigError::invalid(field, "must not be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
