//! Rendering error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a render pass.
///
/// Broken placeholders never end up here: bad options, unknown tools and
/// missing include files all render as nothing.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error when reading template `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("circular include of `{}` (via {})", .path.display(), format_stack(.stack))]
    CircularInclude { path: PathBuf, stack: Vec<PathBuf> },

    #[error("include of `{}` exceeds the maximum depth of {depth}", .path.display())]
    IncludeTooDeep { path: PathBuf, depth: usize },
}

fn format_stack(stack: &[PathBuf]) -> String {
    stack
        .iter()
        .map(|path| format!("`{}`", path.display()))
        .collect::<Vec<_>>()
        .join(" -> ")
}
