//! `[site]` section configuration.
//!
//! Locates the site-wide settings file and the fallbacks merged under it.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[site]` section in tabula.toml - site-wide data sources.
///
/// # Example
/// ```toml
/// [site]
/// settings = "shared/site.txt"
/// themes = "themes"
/// name = "example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Content file holding the site-wide fields.
    #[serde(default = "defaults::site::settings")]
    #[educe(Default = defaults::site::settings())]
    pub settings: PathBuf,

    /// Directory whose first subdirectory is the default theme.
    #[serde(default = "defaults::site::themes")]
    #[educe(Default = defaults::site::themes())]
    pub themes: PathBuf,

    /// Site name used when the settings file doesn't define `sitename`.
    #[serde(default = "defaults::site::name")]
    #[educe(Default = defaults::site::name())]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_site_section_full() {
        let config = r#"
            [site]
            settings = "data/site.txt"
            themes = "look"
            name = "example.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.settings, PathBuf::from("data/site.txt"));
        assert_eq!(config.site.themes, PathBuf::from("look"));
        assert_eq!(config.site.name, "example.com");
    }

    #[test]
    fn test_site_section_defaults() {
        let config: SiteConfig = toml::from_str("[site]").unwrap();

        assert_eq!(config.site.settings, PathBuf::from("shared/site.txt"));
        assert_eq!(config.site.themes, PathBuf::from("themes"));
        assert_eq!(config.site.name, "localhost");
    }
}
