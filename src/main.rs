//! Fresh Cache command line
//!
//! Caches the output of an expensive command in a JSON record file and
//! reuses it while it is younger than the freshness window.
//!
//! ```text
//! fresh-cache [--window-ms N] [--store PATH] [--timeout-secs N] <KEY> -- <COMMAND> [ARGS...]
//! ```

mod command;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::AsyncWriteExt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fresh_cache::cache::with_timeout;
use fresh_cache::{BoundCache, Config, FileStorage, TracingLogger};

use command::CommandFetch;

/// Command line arguments. Unset options fall back to `Config::from_env`.
#[derive(Parser, Debug)]
#[command(name = "fresh-cache", version, about = "Cache a command's output for a freshness window")]
struct Cli {
    /// Maximum age in milliseconds at which the cached output is reused
    #[arg(long, allow_negative_numbers = true)]
    window_ms: Option<i64>,

    /// JSON file holding cached records
    #[arg(long)]
    store: Option<PathBuf>,

    /// Seconds the command may run before the fetch is abandoned
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Cache key identifying the command's output
    key: String,

    /// Command to run on a miss, given after `--`
    #[arg(last = true, required = true)]
    command: Vec<String>,
}

/// Main entry point for the fresh-cache CLI.
///
/// # Sequence
/// 1. Initialize tracing subscriber (stderr, so stdout carries only the payload)
/// 2. Load configuration from environment variables, then apply flags
/// 3. Bind the cache to the record file and the tracing logger
/// 4. Serve the cached payload or run the command, then print the payload
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fresh_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let store_path = cli.store.unwrap_or(config.store_path);
    let window_ms = cli.window_ms.unwrap_or(config.freshness_window_ms);
    let timeout = Duration::from_secs(cli.timeout_secs.unwrap_or(config.fetch_timeout_secs));
    info!(
        "Configuration loaded: store={}, window_ms={}, timeout={:?}",
        store_path.display(),
        window_ms,
        timeout
    );

    let cache = BoundCache::new(
        Arc::new(FileStorage::new(store_path)),
        Arc::new(TracingLogger::new()),
    );
    let fetch = with_timeout(CommandFetch::new(cli.command)?, timeout);

    let value = cache
        .get_fresh_value(Some(cli.key.as_str()), Some(&fetch), Some(window_ms))
        .await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(value.payload.as_bytes()).await?;
    stdout.flush().await?;

    Ok(())
}
