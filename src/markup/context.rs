//! Data visible to a template.

use crate::content::FieldMap;
use std::path::Path;

/// Supplies the site-wide fields.
pub trait SiteProvider {
    fn fields(&self) -> &FieldMap;
}

/// Supplies the fields of the page being rendered.
pub trait PageProvider {
    fn fields(&self) -> &FieldMap;

    /// Directory includes of an inline template are resolved against.
    fn base_path(&self) -> &Path;
}

/// Fields a placeholder is resolved against, for a single render call.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub site: &'a FieldMap,
    pub page: &'a FieldMap,
    /// Quote and escape variable values so they fit in an options payload.
    pub json_safe: bool,
}

impl<'a> TemplateContext<'a> {
    pub fn new(site: &'a dyn SiteProvider, page: &'a dyn PageProvider) -> Self {
        Self {
            site: site.fields(),
            page: page.fields(),
            json_safe: false,
        }
    }

    /// The same fields, in json-safe mode.
    pub const fn json_safe(self) -> Self {
        Self {
            json_safe: true,
            ..self
        }
    }
}
