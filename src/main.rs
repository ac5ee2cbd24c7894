use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use projgen::config::Config;
use projgen::input::SourceDump;
use projgen::parser::parse_project_files;
use projgen::record::{convert_to_database_format, ProjectOverrides};

/// Generate a portfolio project record from backend/frontend source dumps.
#[derive(Parser, Debug)]
#[command(name = "projgen", version, about)]
struct Cli {
    /// Backend source dump (txt/md/json)
    backend: PathBuf,

    /// Frontend source dump (txt/md/json)
    frontend: PathBuf,

    /// Emit the database row shape instead of the raw parse
    #[arg(long)]
    db: bool,

    /// Write JSON to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Project category, e.g. personal or hackathon
    #[arg(long)]
    category: Option<String>,

    /// Role held on the project, for team entries
    #[arg(long)]
    position: Option<String>,

    /// Cover image URL
    #[arg(long)]
    image: Option<String>,

    #[arg(long)]
    github: Option<String>,

    #[arg(long)]
    demo: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_create()?;
    if !config.display.color_output {
        colored::control::set_override(false);
    }

    let backend = SourceDump::load(&cli.backend)?;
    let frontend = SourceDump::load(&cli.frontend)?;

    let parsed = parse_project_files(&backend, &frontend);

    eprintln!("{} {}", "Parsed project:".green().bold(), parsed.title);
    eprintln!(
        "  {} tags, {} features{}",
        parsed.tags.len().to_string().blue(),
        parsed.features.len().to_string().blue(),
        if parsed.github.is_empty() {
            String::new()
        } else {
            format!(", repo {}", parsed.github.blue())
        }
    );

    let json = if cli.db {
        let overrides = ProjectOverrides {
            title: cli.title,
            description: cli.description,
            category: cli
                .category
                .or_else(|| Some(config.generator.default_category.clone())),
            position: cli.position,
            image: cli.image,
            github: cli.github,
            demo: cli.demo,
            ..Default::default()
        };
        let record = convert_to_database_format(&parsed, &overrides);
        to_json(&record, config.display.pretty_json)?
    } else {
        to_json(&parsed, config.display.pretty_json)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
