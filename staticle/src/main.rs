//! staticle - static blog article page generator
//!
//! A CLI tool for building a blog article page from a JSON content
//! document, a blog.toml site configuration, and optional comment
//! submissions.

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use staticle::cli::{Cli, Commands};
use staticle::content_renderer::EscapeMode;
use staticle::dates;
use staticle::pipeline::{self, ARTICLE_FILE, CONFIG_FILE};
use staticle::site_config::Theme;
use std::path::PathBuf;

/// Main entry point for the staticle CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force, title } => {
            init_logging(false);
            handle_init_command(path, force, title)?;
        }

        Commands::Build {
            input,
            output,
            escape_mode,
            theme,
            comments,
            verbose,
        } => {
            init_logging(verbose);
            handle_build_command(input, output, escape_mode, theme, comments, verbose)?;
        }

        Commands::Validate {
            input,
            comments,
            verbose,
        } => {
            init_logging(verbose);
            handle_validate_command(input, comments, verbose)?;
        }
    }

    Ok(())
}

/// Initialize logging; degraded-path warnings stay visible by default
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Handle the init command
fn handle_init_command(path: Option<PathBuf>, force: bool, title: Option<String>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_path.exists() {
        std::fs::create_dir_all(&target_path)
            .with_context(|| format!("Failed to create directory {}", target_path.display()))?;
    }

    let config_path = target_path.join(CONFIG_FILE);
    let article_path = target_path.join(ARTICLE_FILE);
    if !force && (config_path.exists() || article_path.exists()) {
        anyhow::bail!(
            "{} or {} already exists in {}. Use --force to overwrite",
            CONFIG_FILE,
            ARTICLE_FILE,
            target_path.display()
        );
    }

    let title_text = title.as_deref().unwrap_or("My First Article");

    std::fs::write(&config_path, STARTER_CONFIG.replace("{{TITLE}}", title_text))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    std::fs::write(
        &article_path,
        STARTER_ARTICLE.replace("{{TITLE}}", title_text),
    )
    .with_context(|| format!("Failed to write {}", article_path.display()))?;

    println!("Initialized blog article in {}", target_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} to configure your site", CONFIG_FILE);
    println!("  2. Fill in the sections in {}", ARTICLE_FILE);
    println!("  3. Run 'staticle build' to generate the page");

    Ok(())
}

/// Handle the build command
fn handle_build_command(
    input: PathBuf,
    output: PathBuf,
    escape_mode: EscapeMode,
    theme: Option<Theme>,
    comments: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("Building article page...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    // Stage 1: load all sources
    println!("\n[Stage 1/3] Loading sources...");
    let bundle = pipeline::load_sources(&input, comments.as_deref())
        .with_context(|| format!("Failed to load sources from {}", input.display()))?;

    match &bundle.article {
        Some(article) => {
            println!("\u{2713} Parsed {} sections", article.sections.len());
            if article.skipped_sections > 0 {
                println!(
                    "\u{26A0} Skipped {} unrecognized section(s)",
                    article.skipped_sections
                );
            }
            if verbose {
                println!("  - {} words", article.word_count());
                println!("  - {} min read", article.reading_time_minutes());
            }
        }
        None => println!("\u{26A0} Article content unavailable, rendering fallback notice"),
    }

    if !bundle.rejected.is_empty() {
        println!(
            "\u{26A0} Rejected {} comment submission(s)",
            bundle.rejected.len()
        );
    }
    println!("\u{2713} Accepted {} comment(s)", bundle.board.len());
    if verbose {
        let now = Utc::now();
        for comment in bundle.board.comments() {
            println!(
                "  - {} ({})",
                comment.name,
                dates::format_relative_time(comment.timestamp, now)
            );
        }
    }

    // Stage 2: assemble the page model
    println!("\n[Stage 2/3] Assembling page...");
    let page = pipeline::assemble(bundle, theme);
    println!("\u{2713} Theme: {}", page.theme.as_str());

    // Stage 3: export to HTML
    println!("\n[Stage 3/3] Exporting HTML...");
    pipeline::export(&page, &output, escape_mode)
        .with_context(|| format!("Failed to export HTML to {}", output.display()))?;
    println!("\u{2713} Successfully wrote: {}", output.display());

    println!("\n\u{2713} Build completed successfully!");

    Ok(())
}

/// Handle the validate command
fn handle_validate_command(
    input: PathBuf,
    comments: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("Validating article sources...");
    println!("Input: {}", input.display());

    let bundle = pipeline::load_sources(&input, comments.as_deref())
        .with_context(|| format!("Failed to load sources from {}", input.display()))?;

    match &bundle.article {
        Some(article) => {
            println!(
                "\u{2713} {} parsed: {} sections, {} words",
                ARTICLE_FILE,
                article.sections.len(),
                article.word_count()
            );
            if article.skipped_sections > 0 {
                println!(
                    "\u{26A0} Skipped {} unrecognized section(s)",
                    article.skipped_sections
                );
            }
        }
        None => println!(
            "\u{2717} {} could not be parsed; a build would render the fallback page",
            ARTICLE_FILE
        ),
    }

    if comments.is_some() {
        println!("\u{2713} Accepted {} comment submission(s)", bundle.board.len());
        for (index, error) in &bundle.rejected {
            println!("\u{2717} Comment {}: {}", index + 1, error);
        }
    }

    if verbose {
        if let Some(article) = &bundle.article {
            println!("\nSection summary:");
            for (index, section) in article.sections.iter().enumerate() {
                println!("  {:>2}. {:?} ({} words)", index + 1, kind(section), section.word_count());
            }
        }
    }

    Ok(())
}

/// Short display label for a section
fn kind(section: &staticle::article_model::Section) -> &'static str {
    use staticle::article_model::Section;
    match section {
        Section::Heading { .. } => "heading",
        Section::Paragraph { .. } => "paragraph",
        Section::List { .. } => "list",
        Section::Code { .. } => "code",
        Section::Quote { .. } => "quote",
        Section::InfoBox { .. } => "info-box",
        Section::Example { .. } => "example",
    }
}

/// Starter site configuration written by `staticle init`
const STARTER_CONFIG: &str = r#"site_title = "{{TITLE}}"
tagline = "A new blog"
description = "Describe your article for search engines and share cards"
base_url = "https://example.com/articles/my-first-article"
default_theme = "light"

[author]
name = "Your Name"
email = "you@example.com"
"#;

/// Starter content document written by `staticle init`
const STARTER_ARTICLE: &str = r#"{
  "title": "{{TITLE}}",
  "description": "Describe your article for search engines and share cards",
  "sections": [
    { "type": "heading", "level": 2, "content": "Introduction" },
    { "type": "paragraph", "content": "Welcome to your new article." },
    {
      "type": "info-box",
      "title": "Tip",
      "content": "Sections render in order; unknown section types are skipped."
    }
  ]
}
"#;
