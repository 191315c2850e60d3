//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    use std::path::PathBuf;

    pub fn settings() -> PathBuf {
        "shared/site.txt".into()
    }

    pub fn themes() -> PathBuf {
        "themes".into()
    }

    pub fn name() -> String {
        "localhost".into()
    }
}

// ============================================================================
// [parse] Section Defaults
// ============================================================================

pub mod parse {
    pub fn block_separator() -> String {
        "-".into()
    }

    pub fn pair_separator() -> String {
        ":".into()
    }

    pub fn list_separator() -> String {
        ",".into()
    }
}

// ============================================================================
// [markup] Section Defaults
// ============================================================================

pub mod markup {
    pub fn open() -> String {
        "{{".into()
    }

    pub fn close() -> String {
        "}}".into()
    }

    pub fn site() -> String {
        "site".into()
    }

    pub fn page() -> String {
        "page".into()
    }

    pub fn tool() -> String {
        "tool".into()
    }

    pub fn extension() -> String {
        "ext".into()
    }

    pub fn include() -> String {
        "include".into()
    }
}

// ============================================================================
// [render] Section Defaults
// ============================================================================

pub mod render {
    pub fn max_include_depth() -> usize {
        16
    }
}

// ============================================================================
// [files] Section Defaults
// ============================================================================

pub mod files {
    pub fn allowed_types() -> String {
        "css, jpg, jpeg, gif, png, svg, js, pdf, zip".into()
    }
}
