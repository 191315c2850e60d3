//! Errors raised while loading `tabula.toml`.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// The file isn't valid TOML or doesn't match the known sections.
    #[error("cannot parse {}: {message}", location(.path.as_deref(), .line.as_ref()))]
    Toml {
        /// `None` when parsed from a string.
        path: Option<PathBuf>,
        line: Option<usize>,
        message: String,
    },

    /// A value that parses but can't be used, e.g. an empty delimiter.
    #[error("{field} {reason}")]
    Validation { field: String, reason: String },
}

impl ConfigError {
    /// Wrap a TOML error, locating it by line in `content`.
    pub fn toml(path: Option<&Path>, content: &str, err: toml::de::Error) -> Self {
        let line = err
            .span()
            .map(|span| content[..span.start.min(content.len())].matches('\n').count() + 1);
        Self::Toml {
            path: path.map(Path::to_path_buf),
            line,
            message: err.message().trim().to_owned(),
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

fn location(path: Option<&Path>, line: Option<&usize>) -> String {
    let source = match path {
        Some(path) => format!("`{}`", path.display()),
        None => "config".to_owned(),
    };
    match line {
        Some(line) => format!("{source} at line {line}"),
        None => source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("tabula.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(err.to_string(), "cannot read config `tabula.toml`");
    }

    #[test]
    fn test_toml_error_has_line() {
        let content = "[site]\nname = \"a\"\n[markup";
        let toml_err = toml::from_str::<toml::Table>(content).unwrap_err();
        let err = ConfigError::toml(Some(Path::new("site/tabula.toml")), content, toml_err);

        match &err {
            ConfigError::Toml { path, line, .. } => {
                assert_eq!(path.as_deref(), Some(Path::new("site/tabula.toml")));
                assert_eq!(*line, Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("cannot parse `site/tabula.toml` at line 3: "));
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = ConfigError::invalid("[markup.open]", "must not be empty");
        assert_eq!(err.to_string(), "[markup.open] must not be empty");
    }

    #[test]
    fn test_location() {
        assert_eq!(location(None, None), "config");
        assert_eq!(location(None, Some(&2)), "config at line 2");
        assert_eq!(location(Some(Path::new("a.toml")), None), "`a.toml`");
    }
}
