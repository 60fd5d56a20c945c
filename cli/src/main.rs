//! Curconv
//!
//! Finds the rate between any two currencies in a list of known pair rates.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curconv_fx::{CsvPairReader, PairSource, PathStrategy, RateEngine, RateEngineConfig};

mod config;
mod error;
mod output;

use config::{CliConfig, Query};
use error::CliError;
use output::OutputFormat;

/// Curconv CLI
#[derive(Parser, Debug)]
#[command(name = "curconv")]
#[command(about = "A currency converter that can find the rate between any two currencies in your pair list")]
struct Args {
    /// Currency to convert from
    from: Option<String>,

    /// Currency to convert to
    to: Option<String>,

    /// Path to CSV file containing comma-delimited currency pairs, or - for stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print every conversion step
    #[arg(short, long)]
    verbose: bool,

    /// Path selection: dfs or shortest
    #[arg(long)]
    strategy: Option<PathStrategy>,

    /// Output format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    /// Layer command-line values over the environment configuration.
    fn apply(self, mut config: CliConfig) -> CliConfig {
        config.from = self.from.or(config.from);
        config.to = self.to.or(config.to);
        config.pairs_file = self.file.or(config.pairs_file);
        config.strategy = self.strategy.unwrap_or(config.strategy);
        config.format = self.format.unwrap_or(config.format);
        config.verbose |= self.verbose;
        config.log_json |= self.log_json;
        config
    }
}

fn init_tracing(config: &CliConfig) {
    let default_level = if config.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

/// Load pairs, resolve the query and render the result.
fn convert(
    query: &Query,
    config: &CliConfig,
    source: &mut dyn PairSource,
) -> Result<String, CliError> {
    let engine = RateEngine::from_source(
        source,
        RateEngineConfig {
            strategy: config.strategy,
        },
    )?;
    debug!(stats = ?engine.stats(), "Rate engine ready");

    let resolution = engine.resolve(&query.from, &query.to, config.verbose)?;
    output::render(&resolution, config.format)
}

fn run(config: &CliConfig) -> Result<String, CliError> {
    let query = config.query()?;
    info!(
        from = %query.from,
        to = %query.to,
        file = %query.pairs_file.display(),
        "Converting"
    );

    if query.reads_stdin() {
        let mut source = CsvPairReader::new("stdin", io::stdin().lock());
        convert(&query, config, &mut source)
    } else {
        let mut source =
            CsvPairReader::open(&query.pairs_file).map_err(|source| CliError::Open {
                path: query.pairs_file.display().to_string(),
                source,
            })?;
        convert(&query, config, &mut source)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.apply(CliConfig::from_env()?);

    init_tracing(&config);

    let output = run(&config)?;
    print!("{}", output);

    Ok(())
}
