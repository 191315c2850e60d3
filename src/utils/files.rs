//! File name detection.

use crate::config::SiteConfig;
use std::path::Path;

/// Extensions treated as files, lowercased and trimmed.
pub fn allowed_file_types(config: &SiteConfig) -> Vec<String> {
    config
        .files
        .allowed_types
        .split(config.parse.list_separator.as_str())
        .map(|ext| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Whether `value` names a file with an allowed extension.
///
/// A query string is ignored, so `/img/logo.png?v=2` is a file name while
/// `/blog/post` and `/blog/post.draft` are not.
pub fn is_file_name(value: &str, config: &SiteConfig) -> bool {
    let path = value.split('?').next().unwrap_or_default();
    let basename = path.rsplit('/').next().unwrap_or_default();

    let Some(extension) = Path::new(basename).extension() else {
        return false;
    };
    let extension = extension.to_string_lossy().to_ascii_lowercase();

    allowed_file_types(config).contains(&extension)
}
