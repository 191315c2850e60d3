//! Content parsing error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a content file into fields.
///
/// A malformed file is never partially interpreted.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("block {block} has no key/value separator: `{snippet}`")]
    Format { block: usize, snippet: String },

    #[error("block {block} has an invalid key `{key}`")]
    InvalidKey { block: usize, key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::Format {
            block: 2,
            snippet: "orphan line".into(),
        };
        let display = format!("{err}");
        assert!(display.contains("block 2"));
        assert!(display.contains("orphan line"));

        let err = ParseError::InvalidKey {
            block: 1,
            key: "my title".into(),
        };
        assert_eq!(err.to_string(), "block 1 has an invalid key `my title`");
    }
}
