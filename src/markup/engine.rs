//! Placeholder rendering.
//!
//! # Passes
//!
//! Every template buffer, the top-level one and each included file, goes
//! through the same passes in a fixed order:
//!
//! ```text
//! buffer ─► 1. header scan ─► 2. calls ─► 3. variables and includes ─► output
//!           (extension       (tools and   (site/page fields, each
//!            assets)          extensions   included file runs all
//!                             together)    passes again)
//! ```
//!
//! - Tools and extensions share one left-to-right pass, so a call sees the
//!   side effects of every call before it, whatever its kind.
//! - Call options get their variables substituted in json-safe mode before
//!   they're decoded.
//! - Variables run after calls, so placeholders a call returns get resolved.
//! - Variables and includes share one scan and replacement text is never
//!   rescanned: a field value is data, and included output is final.
//! - Include paths are relative to the including file. Absolute ones render
//!   as nothing.
//!
//! The header assets and the include stack live in a `RenderState` owned by
//! one `render` call.

use super::{
    HeaderAssetSet, MarkupSyntax, OptionsMap, PageProvider, PlaceholderToken, Registry,
    RenderError, SiteProvider, TemplateContext, json_escape, parse_options, syntax::Segment,
};
use crate::{
    config::{MarkupConfig, RenderConfig, SiteConfig},
    debug, log,
};
use std::{
    convert::Infallible,
    fs,
    path::{Component, Path, PathBuf},
};

/// Result of a render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub output: String,
    /// Assets of every extension matched in the template and its includes.
    pub assets: HeaderAssetSet,
}

/// Mutable state of one render call.
#[derive(Debug, Default)]
struct RenderState {
    assets: HeaderAssetSet,
    /// Canonical paths of the files being rendered, outermost first.
    stack: Vec<PathBuf>,
    /// Number of includes being expanded.
    depth: usize,
}

/// Renders templates against site and page fields.
#[derive(Debug)]
pub struct Engine {
    syntax: MarkupSyntax,
    registry: Registry,
    max_include_depth: usize,
}

impl Engine {
    pub fn new(markup: &MarkupConfig, render: &RenderConfig, registry: Registry) -> Self {
        Self {
            syntax: MarkupSyntax::new(markup),
            registry,
            max_include_depth: render.max_include_depth,
        }
    }

    pub fn from_config(config: &SiteConfig, registry: Registry) -> Self {
        Self::new(&config.markup, &config.render, registry)
    }

    /// Render an inline template. Includes resolve against the page's base path.
    pub fn render(
        &self,
        template: &str,
        site: &dyn SiteProvider,
        page: &dyn PageProvider,
    ) -> Result<Rendered, RenderError> {
        let ctx = TemplateContext::new(site, page);
        let mut state = RenderState::default();

        let output = self.render_buffer(template, page.base_path(), ctx, &mut state)?;
        Ok(Rendered {
            output,
            assets: state.assets,
        })
    }

    /// Load and render a template file. Includes resolve against its directory.
    pub fn render_file(
        &self,
        path: &Path,
        site: &dyn SiteProvider,
        page: &dyn PageProvider,
    ) -> Result<Rendered, RenderError> {
        let template =
            fs::read_to_string(path).map_err(|err| RenderError::Io(path.to_path_buf(), err))?;
        let ctx = TemplateContext::new(site, page);
        let mut state = RenderState::default();
        state.stack.push(canonical(path));

        let output = self.render_buffer(&template, parent_dir(path), ctx, &mut state)?;
        Ok(Rendered {
            output,
            assets: state.assets,
        })
    }

    /// Run all passes over one buffer.
    fn render_buffer(
        &self,
        buffer: &str,
        base_dir: &Path,
        ctx: TemplateContext<'_>,
        state: &mut RenderState,
    ) -> Result<String, RenderError> {
        self.collect_header_assets(buffer, &mut state.assets);
        let called = self.resolve_calls(buffer, ctx);
        self.resolve_fields_and_includes(&called, base_dir, ctx, state)
    }

    /// Pass 1: add the assets of every registered extension in `buffer`.
    fn collect_header_assets(&self, buffer: &str, assets: &mut HeaderAssetSet) {
        for segment in self.syntax.scan(buffer) {
            if let Segment::Placeholder {
                token: PlaceholderToken::ExtensionCall { name, .. },
                ..
            } = segment
                && let Some(extension) = self.registry.extension(name)
            {
                for url in extension.header_assets() {
                    assets.insert(url);
                }
            }
        }
    }

    /// Pass 2: replace tool and extension calls with their output.
    fn resolve_calls(&self, buffer: &str, ctx: TemplateContext<'_>) -> String {
        let result = self.syntax.substitute::<Infallible>(buffer, |token| {
            Ok(match *token {
                PlaceholderToken::ToolCall { name, options } => {
                    let options = self.call_options(options, ctx);
                    Some(match self.registry.tool(name) {
                        Some(tool) => {
                            debug!("tool"; "{name} {}", serde_json::Value::from(options.clone()));
                            tool.invoke(&options)
                        }
                        None => {
                            debug!("tool"; "no tool named `{name}`");
                            String::new()
                        }
                    })
                }
                PlaceholderToken::ExtensionCall { name, options } => {
                    let options = self.call_options(options, ctx);
                    Some(match self.registry.extension(name) {
                        Some(extension) => {
                            debug!("extension"; "{name} {}", serde_json::Value::from(options.clone()));
                            extension.invoke(&options)
                        }
                        None => {
                            debug!("extension"; "no extension named `{name}`");
                            String::new()
                        }
                    })
                }
                _ => None,
            })
        });
        let Ok(output) = result;
        output
    }

    /// Substitute json-safe variables into a raw payload, then decode it.
    fn call_options(&self, raw: Option<&str>, ctx: TemplateContext<'_>) -> OptionsMap {
        match raw {
            Some(raw) => parse_options(&self.resolve_variables(raw, ctx.json_safe())),
            None => OptionsMap::new(),
        }
    }

    /// Replace site and page variables with their values.
    fn resolve_variables(&self, buffer: &str, ctx: TemplateContext<'_>) -> String {
        let result = self.syntax.substitute::<Infallible>(buffer, |token| {
            Ok(token.is_variable().then(|| variable_value(token, ctx)))
        });
        let Ok(output) = result;
        output
    }

    /// Pass 3: replace variables with their values and includes with their
    /// rendered content.
    fn resolve_fields_and_includes(
        &self,
        buffer: &str,
        base_dir: &Path,
        ctx: TemplateContext<'_>,
        state: &mut RenderState,
    ) -> Result<String, RenderError> {
        self.syntax.substitute(buffer, |token| match *token {
            PlaceholderToken::SiteVar(_) | PlaceholderToken::PageVar(_) => {
                Ok(Some(variable_value(token, ctx)))
            }
            PlaceholderToken::Include(relative) => {
                if !is_relative_include(relative) {
                    debug!("include"; "skipped absolute path {relative}");
                    return Ok(Some(String::new()));
                }
                self.include(&base_dir.join(relative), ctx, state).map(Some)
            }
            _ => Ok(None),
        })
    }

    /// Render an included file with its own directory as base.
    ///
    /// A missing or unreadable file renders as nothing.
    fn include(
        &self,
        file: &Path,
        ctx: TemplateContext<'_>,
        state: &mut RenderState,
    ) -> Result<String, RenderError> {
        if !file.is_file() {
            debug!("include"; "skipped missing {}", file.display());
            return Ok(String::new());
        }

        let path = canonical(file);
        if state.stack.contains(&path) {
            return Err(RenderError::CircularInclude {
                path,
                stack: state.stack.clone(),
            });
        }
        if state.depth >= self.max_include_depth {
            return Err(RenderError::IncludeTooDeep {
                path,
                depth: self.max_include_depth,
            });
        }

        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                log!("include"; "cannot read {}: {err}", file.display());
                return Ok(String::new());
            }
        };
        debug!("include"; "{}", file.display());

        state.stack.push(path);
        state.depth += 1;
        let output = self.render_buffer(&content, parent_dir(file), ctx, state);
        state.depth -= 1;
        state.stack.pop();

        output
    }
}

/// Value of a site or page variable.
///
/// In json-safe mode the value is escaped and quoted, and a missing key gives
/// `""`; otherwise a missing key gives an empty string.
fn variable_value(token: &PlaceholderToken<'_>, ctx: TemplateContext<'_>) -> String {
    let value = match *token {
        PlaceholderToken::SiteVar(key) => ctx.site.get(key),
        PlaceholderToken::PageVar(key) => ctx.page.get(key),
        _ => None,
    };

    match (value, ctx.json_safe) {
        (Some(value), true) => format!("\"{}\"", json_escape(value)),
        (Some(value), false) => value.to_owned(),
        (None, true) => "\"\"".to_owned(),
        (None, false) => String::new(),
    }
}

/// Whether an include path has neither a root nor a drive prefix.
fn is_relative_include(path: &str) -> bool {
    !Path::new(path)
        .components()
        .any(|component| matches!(component, Component::RootDir | Component::Prefix(_)))
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or(Path::new("."))
}
