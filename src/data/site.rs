//! Site-wide data.

use crate::{
    config::SiteConfig,
    content::{FieldMap, ParseError, markdown_file},
    debug,
    markup::SiteProvider,
};
use std::{fs, path::Path};

/// Key of the site name.
pub const SITENAME_KEY: &str = "sitename";
/// Key of the active theme.
pub const THEME_KEY: &str = "theme";

/// Site-wide fields shared by every page.
#[derive(Debug, Clone, Default)]
pub struct Site {
    fields: FieldMap,
}

impl Site {
    pub fn new(fields: FieldMap) -> Self {
        Self { fields }
    }

    /// Load the settings file over the defaults.
    ///
    /// Defaults are `sitename` from `[site].name` and `theme` as the first
    /// theme directory. A missing settings file leaves just the defaults.
    pub fn load(config: &SiteConfig) -> Result<Self, ParseError> {
        let mut defaults = FieldMap::new();
        defaults.insert(SITENAME_KEY, config.site.name.as_str());
        if let Some(theme) = first_theme(&config.site.themes) {
            defaults.insert(THEME_KEY, theme);
        }

        let settings = &config.site.settings;
        let fields = if settings.is_file() {
            defaults.merge(markdown_file(settings, &config.parse)?)
        } else {
            debug!("site"; "no settings file at {}", settings.display());
            defaults
        };

        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }
}

impl SiteProvider for Site {
    fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

/// Name of the alphabetically first directory in `themes`.
fn first_theme(themes: &Path) -> Option<String> {
    let mut names: Vec<String> = fs::read_dir(themes)
        .ok()?
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names.into_iter().next()
}
