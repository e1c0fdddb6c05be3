use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use commit_graph::graph::{ColorMode, CommitFilter, GraphBuilder};
use commit_graph::models::{CommitRecord, RawCommitRecord};
use commit_graph::state::GraphConfig;

#[derive(Parser)]
#[command(name = "commit-graph")]
#[command(about = "Lay out a commit history as a drawable graph", long_about = None)]
struct Cli {
    /// JSON file with an array of commit records, or `-` for stdin
    input: PathBuf,
    /// Only show commits on branches containing this text
    #[arg(long)]
    branch: Option<String>,
    /// Only show commits whose author name or email contains this text
    #[arg(long)]
    author: Option<String>,
    /// Use dark mode colors
    #[arg(long)]
    dark: bool,
    /// Config file to use instead of the user config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read commits from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read commits from {}", input.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GraphConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GraphConfig::load(),
    };

    let raw: Vec<RawCommitRecord> =
        serde_json::from_str(&read_input(&cli.input)?).context("Input is not a commit array")?;
    let commits = raw
        .into_iter()
        .map(CommitRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = GraphBuilder::from_config(&config);
    if cli.branch.is_some() || cli.author.is_some() {
        builder = builder.filter(CommitFilter {
            branch: cli.branch,
            author: cli.author,
        });
    }
    if cli.dark {
        builder = builder.mode(ColorMode::Dark);
    }

    let snapshot = builder.build(&commits)?.snapshot();
    let output = if cli.compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{}", output);

    Ok(())
}
