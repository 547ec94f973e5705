//! Command-line interface definitions for staticle

use crate::content_renderer::EscapeMode;
use crate::site_config::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the staticle application
#[derive(Parser)]
#[command(name = "staticle")]
#[command(version)]
#[command(about = "Static blog article page generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for staticle
#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a starter blog.toml and article.json
    Init {
        /// Directory to initialize (defaults to current directory)
        path: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Article title written into the starter files
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Build the article page to a standalone HTML file
    Build {
        /// Input directory containing blog.toml and article.json
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Output HTML file path
        #[arg(short, long, default_value = "article.html")]
        output: PathBuf,

        /// Escaping policy for article section content
        #[arg(long, value_enum, default_value = "trust-content")]
        escape_mode: EscapeMode,

        /// Theme override; remembered for later builds
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        /// JSON file of comment submissions to run through the board
        #[arg(long)]
        comments: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check the content document and comment submissions without
    /// writing output
    Validate {
        /// Input directory containing blog.toml and article.json
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// JSON file of comment submissions to check
        #[arg(long)]
        comments: Option<PathBuf>,

        /// Show detailed validation results
        #[arg(short, long)]
        verbose: bool,
    },
}
