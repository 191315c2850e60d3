//! Ordered key/value fields of a content file.

use indexmap::IndexMap;
use serde::Serialize;

/// Fields of a content file, in the order they were written.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// the key at its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldMap(IndexMap<String, String>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the replaced value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of `self`; keys of `other` win.
    pub fn merge(mut self, other: FieldMap) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Apply `f` to every value, keeping keys and order.
    pub fn map_values(self, mut f: impl FnMut(String) -> String) -> Self {
        Self(self.0.into_iter().map(|(k, v)| (k, f(v))).collect())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut fields = FieldMap::new();
        fields.insert("title", "One");
        fields.insert("date", "2024");
        assert_eq!(fields.insert("title", "Two"), Some("One".into()));

        assert_eq!(fields.keys().collect::<Vec<_>>(), ["title", "date"]);
        assert_eq!(fields.get("title"), Some("Two"));
    }

    #[test]
    fn test_merge_overlays() {
        let defaults: FieldMap = [("sitename", "localhost"), ("theme", "standard")]
            .into_iter()
            .collect();
        let file: FieldMap = [("sitename", "Acme")].into_iter().collect();

        let merged = defaults.merge(file);
        assert_eq!(merged.get("sitename"), Some("Acme"));
        assert_eq!(merged.get("theme"), Some("standard"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_serialize_in_order() {
        let fields: FieldMap = [("b", "2"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }
}
