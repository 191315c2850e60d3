//! Tabula - content parser and template markup engine for flat-file sites.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tabula::{
    cli::{Cli, Commands},
    config::SiteConfig,
    content::{extract_tags, markdown_file, parse_text_file},
    data::{Page, Site},
    debug, log, logger,
    markup::{Engine, Registry},
    utils::{files::is_file_name, sanitize::sanitize},
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);

    // Sanitizing needs no site at all
    if let Commands::Sanitize { text, remove_dots } = &cli.command {
        println!("{}", sanitize(text, *remove_dots));
        return Ok(());
    }

    let config = load_config(&cli)?;
    logger::set_verbose(config.render.debug);

    match &cli.command {
        Commands::Parse { file, raw } => parse_file(&config, file, *raw),
        Commands::Render {
            template,
            page,
            inject,
        } => render_template(&config, template, page.as_deref(), *inject),
        Commands::Sanitize { .. } => Ok(()),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file leaves every setting at its default.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    if !config.config_path.exists() {
        debug!("config"; "no {}, using defaults", cli.config.display());
    }
    Ok(config)
}

/// Print the fields of a content file as JSON.
fn parse_file(config: &SiteConfig, file: &Path, raw: bool) -> Result<()> {
    let path = config.get_root().join(file);
    let fields = if raw {
        parse_text_file(&path, &config.parse)?
    } else {
        markdown_file(&path, &config.parse)?
    };

    let tags = extract_tags(&fields, &config.parse.list_separator);
    if !tags.is_empty() {
        log!("parse"; "tags: {}", tags.join(", "));
    }
    for (key, value) in fields.iter() {
        if is_file_name(value, config) {
            debug!("parse"; "`{key}` names a file");
        }
    }

    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}

/// Render a template file and print the output.
fn render_template(
    config: &SiteConfig,
    template: &Path,
    page: Option<&Path>,
    inject: bool,
) -> Result<()> {
    let root = config.get_root();
    let site = Site::load(config).context("Failed to load site settings")?;
    let page = match page {
        Some(path) => Page::load(&root.join(path), &config.parse)
            .with_context(|| format!("Failed to load page {}", path.display()))?,
        None => Page::empty(root),
    };

    let engine = Engine::from_config(config, Registry::new());
    let rendered = engine.render_file(&root.join(template), &site, &page)?;

    if inject {
        println!("{}", rendered.assets.inject_into_head(&rendered.output));
    } else {
        for url in rendered.assets.iter() {
            log!("assets"; "{url}");
        }
        println!("{}", rendered.output);
    }
    Ok(())
}
