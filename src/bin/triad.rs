use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

use triad::metrics::{self, timed};
use triad::{AnyTree, EngineKind, WordIndex};

#[derive(Parser)]
#[command(name = "triad")]
#[command(about = "Build a word index and query it by prefix", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the words starting with a prefix
    Search {
        /// Word list, one word per line
        words: PathBuf,

        /// Engine: trie, ternary, radix (or 1, 2, 3)
        #[arg(short, long, default_value = "radix")]
        engine: String,

        /// Prefix to complete (empty lists every word)
        #[arg(short, long, default_value = "")]
        prefix: String,
    },
    /// Export the subtree under a prefix for rendering
    Export {
        /// Word list, one word per line
        words: PathBuf,

        /// Engine: trie, ternary, radix (or 1, 2, 3)
        #[arg(short, long, default_value = "radix")]
        engine: String,

        /// Prefix the export is rooted at
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Build every engine and report sizes and timings as JSON
    Compare {
        /// Word list, one word per line
        words: PathBuf,

        /// Prefix to query
        #[arg(short, long, default_value = "")]
        prefix: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Dot,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { words, engine, prefix } => {
            let tree = build(&words, &engine)?;
            let search = timed(|| tree.prefix_search(&prefix));
            for word in &search.value.words {
                println!("{word}");
            }
            eprintln!(
                "{} matches, {} nodes traversed, {:?}",
                search.value.len(),
                search.value.traversed,
                search.elapsed
            );
        }
        Commands::Export {
            words,
            engine,
            prefix,
            format,
        } => {
            let tree = build(&words, &engine)?;
            let export = tree
                .export(&prefix)
                .with_context(|| format!("prefix `{prefix}` is not in the tree"))?;
            match format {
                Format::Json => println!("{}", export.to_json()?),
                Format::Dot => print!("{}", export.to_dot()),
            }
        }
        Commands::Compare { words, prefix } => {
            let words = read_words(&words)?;
            let reports = metrics::compare(&words, &prefix);
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}

fn build(path: &Path, engine: &str) -> Result<AnyTree> {
    let kind = parse_engine(engine)?;
    let words = read_words(path)?;
    let mut tree = AnyTree::from(kind);
    let inserted = timed(|| tree.extend_words(&words));
    eprintln!(
        "{kind}: {} words, {} nodes, built in {:?}",
        inserted.value,
        tree.node_count(),
        inserted.elapsed
    );
    Ok(tree)
}

fn parse_engine(engine: &str) -> Result<EngineKind> {
    let kind = match engine.trim().parse::<u8>() {
        Ok(selector) => EngineKind::try_from(selector)?,
        Err(_) => engine.parse()?,
    };
    Ok(kind)
}

fn read_words(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}
