//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tabula flat-file content engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Root directory path
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: tabula.toml)
    #[arg(short = 'C', long, default_value = "tabula.toml")]
    pub config: PathBuf,

    /// Print debug messages (matched tools, includes, skipped placeholders)
    #[arg(short, long)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Parse a content file and print its fields as JSON
    Parse {
        /// Content file, relative to `root`
        file: PathBuf,

        /// Skip markdown rendering of multi-line fields
        #[arg(long)]
        raw: bool,
    },

    /// Render a template with the site data and an optional page
    Render {
        /// Template file, relative to `root`
        template: PathBuf,

        /// Content file providing the page variables
        #[arg(short, long)]
        page: Option<PathBuf>,

        /// Insert the collected header assets before `</head>`
        #[arg(short, long)]
        inject: bool,
    },

    /// Turn a string into a safe file or directory name
    Sanitize {
        /// Text to sanitize
        text: String,

        /// Replace dots as well
        #[arg(short = 'd', long)]
        remove_dots: bool,
    },
}
