use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use thematic_recommender::{Catalog, ItemId, Recommender, RecommenderConfig, Result};

/// Recommend catalog items similar to one that is no longer available
#[derive(Debug, Parser)]
#[command(name = "thematic-recommender", version, about)]
struct Cli {
    /// JSON catalog (array of items)
    #[arg(long, short = 'c')]
    catalog: PathBuf,

    /// id of the unavailable item
    #[arg(long, short = 'q')]
    query: ItemId,

    /// number of recommendations (overrides the config file)
    #[arg(long, short = 'n')]
    top: Option<usize>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// vectorize candidates in parallel
    #[arg(long)]
    parallel: bool,

    /// print recommendations as JSON
    #[arg(long)]
    json: bool,

    /// more logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// only warnings and errors
    #[arg(long)]
    quiet: bool,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("RECOMMENDER_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => RecommenderConfig::load(path)?,
        None => RecommenderConfig::default(),
    };
    if let Some(top) = cli.top {
        config.top_n = top;
    }
    config.parallel |= cli.parallel;
    let recommender = Recommender::new(config)?;

    let catalog = Catalog::load(&cli.catalog)?;
    let query = catalog.require(cli.query)?;
    info!(query = query.id, title = %query.title, items = catalog.len(), "ranking catalog");

    let start = Instant::now();
    let picks = recommender.recommend(query, catalog.items());
    info!(
        results = picks.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "done"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&picks)?);
    } else {
        for pick in &picks {
            println!("{:.6}\t{}\t{}", pick.score, pick.item.title, pick.reason);
        }
    }
    Ok(())
}
