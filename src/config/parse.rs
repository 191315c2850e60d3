//! `[parse]` section configuration.
//!
//! Separators of the content file format.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[parse]` section in tabula.toml - content file format.
///
/// # Example
/// ```toml
/// [parse]
/// block_separator = "-"   # Line of one or more `-` between fields
/// pair_separator = ":"    # `key: value`
/// list_separator = ","    # `tags: rust, web`
/// markdown = true         # Render multi-line fields as HTML
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ParseConfig {
    /// Character repeated on a line of its own between two fields.
    #[serde(default = "defaults::parse::block_separator")]
    #[educe(Default = defaults::parse::block_separator())]
    pub block_separator: String,

    /// Separator between a key and its value.
    #[serde(default = "defaults::parse::pair_separator")]
    #[educe(Default = defaults::parse::pair_separator())]
    pub pair_separator: String,

    /// Separator between the items of list fields like `tags`.
    #[serde(default = "defaults::parse::list_separator")]
    #[educe(Default = defaults::parse::list_separator())]
    pub list_separator: String,

    /// Render multi-line field values as markdown.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub markdown: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_parse_config() {
        let config = r#"
            [parse]
            block_separator = "="
            pair_separator = "=>"
            markdown = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.parse.block_separator, "=");
        assert_eq!(config.parse.pair_separator, "=>");
        assert_eq!(config.parse.list_separator, ",");
        assert!(!config.parse.markdown);
    }

    #[test]
    fn test_parse_config_rejects_unknown_field() {
        let config = r#"
            [parse]
            separator = "-"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
