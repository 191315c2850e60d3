//! Data of a single page.

use crate::{
    config::ParseConfig,
    content::{FieldMap, ParseError, extract_tags, markdown_file},
    markup::PageProvider,
};
use std::path::{Path, PathBuf};

/// Fields of one content file and the directory it lives in.
#[derive(Debug, Clone, Default)]
pub struct Page {
    fields: FieldMap,
    base_path: PathBuf,
}

impl Page {
    pub fn new(fields: FieldMap, base_path: impl Into<PathBuf>) -> Self {
        Self {
            fields,
            base_path: base_path.into(),
        }
    }

    /// A page without fields, resolving includes against `base_path`.
    pub fn empty(base_path: impl Into<PathBuf>) -> Self {
        Self::new(FieldMap::new(), base_path)
    }

    /// Load a content file, rendering multi-line fields if configured.
    pub fn load(path: &Path, config: &ParseConfig) -> Result<Self, ParseError> {
        let fields = markdown_file(path, config)?;
        let base_path = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        Ok(Self { fields, base_path })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }

    /// Items of the `tags` field.
    pub fn tags(&self, separator: &str) -> Vec<String> {
        extract_tags(&self.fields, separator)
    }
}

impl PageProvider for Page {
    fn fields(&self) -> &FieldMap {
        &self.fields
    }

    fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_page() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blog/post.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "title: Post\n-\ntags: rust, <b>cms</b>").unwrap();

        let page = Page::load(&path, &ParseConfig::default()).unwrap();
        assert_eq!(page.get("title"), Some("Post"));
        assert_eq!(page.base_path(), dir.path().join("blog"));
        assert_eq!(page.tags(","), ["rust", "cms"]);
    }

    #[test]
    fn test_empty_page() {
        let page = Page::empty("/tmp");
        assert!(page.fields().is_empty());
        assert_eq!(page.base_path(), Path::new("/tmp"));
        assert!(page.tags(",").is_empty());
    }
}
