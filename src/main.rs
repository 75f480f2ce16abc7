//! # Health News Digest
//!
//! A small batch job that pulls Arabic health headlines from NewsAPI and
//! writes them, together with a daily health tip, to a JSON file that a
//! static site or dashboard can pick up.
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... health_news_digest
//! ```
//!
//! ## Flow
//!
//! 1. **Fetch**: ask NewsAPI for the top health headlines (skipped when no
//!    key is configured)
//! 2. **Fallback**: any missing key, upstream error or transport failure
//!    yields a fixed two-article digest instead
//! 3. **Output**: write `data/daily_news.json`, overwriting the previous run
//!
//! Filesystem errors are the only failures that end the run with a non-zero
//! exit status.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod clock;
mod error;
mod fallback;
mod fetcher;
mod models;
mod outputs;
mod utils;
mod wire;

use cli::Cli;
use clock::{Clock, SystemClock};
use fetcher::{FetcherConfig, NewsFetcher};
use models::NewsBundle;
use outputs::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; real deployments inject the key directly.
    dotenvy::dotenv().ok();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("health_news_digest starting up");

    let args = Cli::parse();
    debug!(
        output = %args.output,
        endpoint = %args.endpoint,
        has_key = args.api_key.is_some(),
        "Parsed CLI arguments"
    );

    let config = FetcherConfig::from_cli(&args)?;
    let output = Path::new(&args.output);
    run(config, SystemClock, output).await?;

    println!("Successfully updated {}", args.output);

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// One fetch-write cycle.
#[instrument(level = "info", skip_all, fields(output = %output.display()))]
async fn run<C: Clock>(
    config: FetcherConfig,
    clock: C,
    output: &Path,
) -> Result<NewsBundle, Box<dyn Error>> {
    let fetcher = NewsFetcher::with_http(config, clock);
    let bundle = fetcher.fetch_health_news().await;
    json::write_bundle(&bundle, output).await?;
    Ok(bundle)
}
