//! Header assets collected while rendering.

use indexmap::IndexSet;

/// CSS and JS URLs required by the extensions of one render pass.
///
/// Unique, in the order the extensions were first matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderAssetSet(IndexSet<String>);

impl HeaderAssetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset, returning false if it was already present.
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        self.0.insert(url.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// `<link>` and `<script>` elements for the collected assets.
    ///
    /// Stylesheets come first. URLs that are neither `.css` nor `.js` are
    /// skipped.
    pub fn to_html(&self) -> String {
        let mut css = String::new();
        let mut js = String::new();

        for url in self.iter() {
            let path = url.split(['?', '#']).next().unwrap_or_default();
            let extension = path.rsplit('.').next().unwrap_or_default();
            if extension.eq_ignore_ascii_case("css") {
                css.push_str(&format!(r#"<link type="text/css" rel="stylesheet" href="{url}" />"#));
                css.push('\n');
            } else if extension.eq_ignore_ascii_case("js") {
                js.push_str(&format!(r#"<script type="text/javascript" src="{url}"></script>"#));
                js.push('\n');
            }
        }

        css + &js
    }

    /// Insert the asset elements right before `</head>`.
    ///
    /// Returns `html` unchanged when it has no `</head>` or there are no assets.
    pub fn inject_into_head(&self, html: &str) -> String {
        let elements = self.to_html();
        match html.find("</head>") {
            Some(pos) if !elements.is_empty() => {
                format!("{}{elements}{}", &html[..pos], &html[pos..])
            }
            _ => html.to_owned(),
        }
    }
}

impl<'a> IntoIterator for &'a HeaderAssetSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets(urls: &[&str]) -> HeaderAssetSet {
        let mut set = HeaderAssetSet::new();
        for url in urls {
            set.insert(*url);
        }
        set
    }

    #[test]
    fn test_insert_is_unique_and_ordered() {
        let mut set = HeaderAssetSet::new();
        assert!(set.insert("/b.js"));
        assert!(set.insert("/a.css"));
        assert!(!set.insert("/b.js"));

        assert_eq!(set.iter().collect::<Vec<_>>(), ["/b.js", "/a.css"]);
    }

    #[test]
    fn test_to_html() {
        let set = assets(&["/ext/slider.js", "/ext/slider.css?v=2", "/ext/readme.txt"]);
        assert_eq!(
            set.to_html(),
            concat!(
                r#"<link type="text/css" rel="stylesheet" href="/ext/slider.css?v=2" />"#,
                "\n",
                r#"<script type="text/javascript" src="/ext/slider.js"></script>"#,
                "\n",
            )
        );
    }

    #[test]
    fn test_inject_into_head() {
        let set = assets(&["/a.css"]);
        let html = "<html><head><title>x</title></head><body></body></html>";
        let injected = set.inject_into_head(html);

        assert!(injected.starts_with("<html><head><title>x</title><link"));
        assert!(injected.ends_with("/>\n</head><body></body></html>"));
    }

    #[test]
    fn test_inject_without_head_or_assets() {
        assert_eq!(assets(&["/a.css"]).inject_into_head("<p>x</p>"), "<p>x</p>");
        assert_eq!(HeaderAssetSet::new().inject_into_head("<head></head>"), "<head></head>");
    }
}
