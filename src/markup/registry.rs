//! Tools and extensions callable from templates.
//!
//! Both are looked up by name. A name nobody registered renders as nothing.

use super::OptionsMap;
use std::collections::HashMap;

/// A function callable as `{{tool:Name {options}}}`.
pub trait Tool {
    fn invoke(&self, options: &OptionsMap) -> String;
}

impl<F> Tool for F
where
    F: Fn(&OptionsMap) -> String,
{
    fn invoke(&self, options: &OptionsMap) -> String {
        self(options)
    }
}

/// A component callable as `{{ext:Name {options}}}`.
///
/// Its header assets are added to the page whenever its placeholder appears
/// in a template, whether or not the call produces output.
pub trait Extension {
    fn invoke(&self, options: &OptionsMap) -> String;

    /// CSS and JS URLs the extension needs in `<head>`.
    fn header_assets(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Named tools and extensions.
#[derive(Default)]
pub struct Registry {
    tools: HashMap<String, Box<dyn Tool>>,
    extensions: HashMap<String, Box<dyn Extension>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_tool(&mut self, name: impl Into<String>, tool: impl Tool + 'static) -> &mut Self {
        self.tools.insert(name.into(), Box::new(tool));
        self
    }

    pub fn register_extension(
        &mut self,
        name: impl Into<String>,
        extension: impl Extension + 'static,
    ) -> &mut Self {
        self.extensions.insert(name.into(), Box::new(extension));
        self
    }

    pub fn tool(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(Box::as_ref)
    }

    pub fn extension(&self, name: &str) -> Option<&dyn Extension> {
        self.extensions.get(name).map(Box::as_ref)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tools: Vec<_> = self.tools.keys().collect();
        let mut extensions: Vec<_> = self.extensions.keys().collect();
        tools.sort();
        extensions.sort();
        f.debug_struct("Registry")
            .field("tools", &tools)
            .field("extensions", &extensions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    struct Badge;

    impl Extension for Badge {
        fn invoke(&self, options: &OptionsMap) -> String {
            let label = options.get("label").and_then(Value::as_str).unwrap_or("new");
            format!("<span>{label}</span>")
        }

        fn header_assets(&self) -> Vec<String> {
            vec!["/ext/badge.css".into()]
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        registry
            .register_tool("Year", |_: &OptionsMap| "2024".to_string())
            .register_extension("Badge", Badge);

        let options = OptionsMap::new();
        assert_eq!(registry.tool("Year").unwrap().invoke(&options), "2024");
        assert_eq!(registry.extension("Badge").unwrap().invoke(&options), "<span>new</span>");
        assert_eq!(
            registry.extension("Badge").unwrap().header_assets(),
            ["/ext/badge.css"]
        );
        assert!(registry.tool("Badge").is_none());
        assert!(registry.extension("Missing").is_none());
    }

    #[test]
    fn test_debug_lists_names() {
        let mut registry = Registry::new();
        registry.register_tool("B", |_: &OptionsMap| String::new());
        registry.register_tool("A", |_: &OptionsMap| String::new());
        assert_eq!(
            format!("{registry:?}"),
            r#"Registry { tools: ["A", "B"], extensions: [] }"#
        );
    }
}
