//! `[markup]` section configuration.
//!
//! Delimiters and keywords of the placeholder syntax. A placeholder reads
//! `{open}{keyword}:{body}{close}`, e.g. `{{site:sitename}}`.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[markup]` section in tabula.toml - placeholder syntax.
///
/// # Example
/// ```toml
/// [markup]
/// open = "{{"
/// close = "}}"
/// site = "site"          # {{site:sitename}}
/// page = "page"          # {{page:title}}
/// tool = "tool"          # {{tool:Date {format: 'Y'}}}
/// extension = "ext"      # {{ext:Gallery}}
/// include = "include"    # {{include:elements/header.html}}
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct MarkupConfig {
    /// Opening delimiter of every placeholder.
    #[serde(default = "defaults::markup::open")]
    #[educe(Default = defaults::markup::open())]
    pub open: String,

    /// Closing delimiter of every placeholder.
    #[serde(default = "defaults::markup::close")]
    #[educe(Default = defaults::markup::close())]
    pub close: String,

    /// Keyword of site variables.
    #[serde(default = "defaults::markup::site")]
    #[educe(Default = defaults::markup::site())]
    pub site: String,

    /// Keyword of page variables.
    #[serde(default = "defaults::markup::page")]
    #[educe(Default = defaults::markup::page())]
    pub page: String,

    /// Keyword of tool calls.
    #[serde(default = "defaults::markup::tool")]
    #[educe(Default = defaults::markup::tool())]
    pub tool: String,

    /// Keyword of extension calls.
    #[serde(default = "defaults::markup::extension")]
    #[educe(Default = defaults::markup::extension())]
    pub extension: String,

    /// Keyword of nested includes.
    #[serde(default = "defaults::markup::include")]
    #[educe(Default = defaults::markup::include())]
    pub include: String,
}

impl MarkupConfig {
    /// Keywords with the name of the field setting each.
    pub fn keywords(&self) -> [(&'static str, &str); 5] {
        [
            ("site", &self.site),
            ("page", &self.page),
            ("tool", &self.tool),
            ("extension", &self.extension),
            ("include", &self.include),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_markup_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.markup.open, "{{");
        assert_eq!(config.markup.close, "}}");
        assert_eq!(
            config.markup.keywords().map(|(_, keyword)| keyword),
            ["site", "page", "tool", "ext", "include"]
        );
    }

    #[test]
    fn test_markup_config_custom() {
        let config = r#"
            [markup]
            open = "<@"
            close = "@>"
            extension = "x"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.markup.open, "<@");
        assert_eq!(config.markup.close, "@>");
        assert_eq!(config.markup.extension, "x");
        assert_eq!(config.markup.tool, "tool");
    }
}
