// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use std::env;
use std::path::PathBuf;
use tracing::warn;

use crate::config::{Config, discover_config, load_config};
use crate::core::engine::Engine;
use crate::models::Algorithm;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory of text files to analyze (defaults to ./Books)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Algorithm used to split the work
    #[arg(short, long, value_parser = PossibleValuesParser::new(Algorithm::NAMES))]
    pub algorithm: Option<String>,

    /// Number of threads for multithreaded algorithms (at least 2)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Also read files in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Glob patterns to exclude (comma-separated, e.g. "*.md,drafts")
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Config file to use instead of the nearest wordstat.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List the available algorithms and exit
    #[arg(short, long)]
    pub list_algorithms: bool,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Layers the command-line flags over `config`.
    #[must_use]
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(directory) = &self.directory {
            config.directory = Some(directory.clone());
        }
        if let Some(algorithm) = &self.algorithm {
            config.algorithm = Some(algorithm.clone());
        }
        if let Some(threads) = self.threads {
            config.threads = Some(threads);
        }
        if self.recursive {
            config.recursive = Some(true);
        }
        if let Some(exclude) = &self.exclude {
            config.exclude.extend(
                exclude
                    .split(',')
                    .map(str::trim)
                    .filter(|pattern| !pattern.is_empty())
                    .map(str::to_owned),
            );
        }
        config
    }
}

/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * An exclude pattern is not a valid glob
/// * A worker thread cannot be spawned or panics
pub fn run(args: Args) -> Result<()> {
    if args.list_algorithms {
        print_algorithms();
        return Ok(());
    }

    let file_config = match &args.config {
        Some(path) => load_config(path)?,
        None => discover_config(&env::current_dir()?)?,
    };
    let config = args.apply_to(file_config);

    let engine = Engine::from_config(&config).context("Invalid corpus settings")?;
    if engine.algorithm().is_multithreaded() {
        println!(
            "Running {} with {} threads...",
            engine.algorithm_name(),
            engine.thread_count()
        );
    } else {
        println!("Running {}...", engine.algorithm_name());
    }

    let stats = engine.run().with_context(|| {
        format!(
            "Failed to analyze directory: {}",
            engine.corpus().options().directory.display()
        )
    })?;
    if stats.files_processed == 0 {
        warn!("no readable files were found");
    }
    println!("{stats}");
    Ok(())
}

pub fn print_algorithms() {
    for algorithm in Algorithm::ALL {
        println!("{:<16}{}", algorithm.name(), algorithm.description());
    }
    println!(
        "Multithreaded algorithms use between 2 and {} threads.",
        Engine::max_threads()
    );
}
