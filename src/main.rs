//! Memo Cache - A bounded in-process key/value cache
//!
//! Console front end: reads commands from stdin and writes one JSON object
//! per command to stdout.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memo_cache::{CacheConfig, Session};

/// Main entry point for the cache console.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create a session owning a cache with that configuration
/// 4. Answer stdin commands until EOF
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memo_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = CacheConfig::from_env().context("failed to load cache configuration")?;
    info!(
        "Configuration loaded: max_size={}, ttl_ms={}, max_value_size={:?}",
        config.max_size, config.ttl_ms, config.max_value_size
    );

    let mut session = Session::from_config(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let answered = session
        .run(stdin.lock(), stdout.lock())
        .context("console I/O failed")?;

    let stats = session.cache().stats();
    info!(
        "Session finished: commands={}, size={}, evictions={}, rejections={}, expired={}",
        answered, stats.size, stats.evictions, stats.rejections, stats.expired
    );

    Ok(())
}
